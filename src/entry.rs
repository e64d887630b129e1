//! Manual pole/zero entry lists.

use num_complex::Complex64;

use crate::error::{PolezeroError, Result};

/// Number of blank rows offered below the current roots.
const BLANK_ROWS: usize = 3;

/// One editable `[Real, Imaginary]` row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRow {
    /// Real part as typed.
    pub re: String,
    /// Imaginary part as typed.
    pub im: String,
}

impl EntryRow {
    fn is_blank(&self) -> bool {
        self.re.trim().is_empty() && self.im.trim().is_empty()
    }
}

/// Which half of a row the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    /// Real part.
    #[default]
    Real,
    /// Imaginary part.
    Imaginary,
}

/// Editable list of complex roots.
#[derive(Debug)]
pub struct EntryList {
    title: &'static str,
    rows: Vec<EntryRow>,
    cursor: usize,
    field: EntryField,
    editing: bool,
    buffer: String,
}

impl EntryList {
    /// Create an empty list.
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: vec![EntryRow::default(); BLANK_ROWS],
            cursor: 0,
            field: EntryField::Real,
            editing: false,
            buffer: String::new(),
        }
    }

    /// Replace all rows with the given roots plus blank rows.
    pub fn load(&mut self, roots: &[Complex64]) {
        self.rows = roots
            .iter()
            .map(|r| EntryRow {
                re: format!("{:.6}", r.re),
                im: format!("{:.6}", r.im),
            })
            .chain(std::iter::repeat(EntryRow::default()).take(BLANK_ROWS))
            .collect();
        self.cursor = self.cursor.min(self.rows.len() - 1);
        self.editing = false;
        self.buffer.clear();
    }

    /// Panel title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// All rows.
    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    /// Selected row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected field.
    pub fn field(&self) -> EntryField {
        self.field
    }

    /// Check if a field is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Switch between real and imaginary field.
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            EntryField::Real => EntryField::Imaginary,
            EntryField::Imaginary => EntryField::Real,
        };
    }

    /// Start editing the selected field.
    pub fn start_edit(&mut self) {
        self.buffer = self.selected_text().to_string();
        self.editing = true;
    }

    /// Add a character to the edit buffer.
    pub fn input(&mut self, c: char) {
        if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') {
            self.buffer.push(c);
        }
    }

    /// Remove the last character from the edit buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Store the edit buffer in the selected field.
    ///
    /// Editing the last row appends a fresh blank row.
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        let row = &mut self.rows[self.cursor];
        match self.field {
            EntryField::Real => row.re = text,
            EntryField::Imaginary => row.im = text,
        }
        self.editing = false;

        if self.cursor + 1 == self.rows.len() && !self.rows[self.cursor].is_blank() {
            self.rows.push(EntryRow::default());
        }
    }

    /// Abandon the current edit.
    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    /// Blank the selected row.
    pub fn clear_row(&mut self) {
        self.rows[self.cursor] = EntryRow::default();
    }

    /// Parse all non-blank rows. A missing part counts as zero.
    pub fn parse(&self) -> Result<Vec<Complex64>> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_blank())
            .map(|(i, row)| {
                let re = parse_part(&row.re, i + 1, "real")?;
                let im = parse_part(&row.im, i + 1, "imaginary")?;
                Ok(Complex64::new(re, im))
            })
            .collect()
    }

    fn selected_text(&self) -> &str {
        let row = &self.rows[self.cursor];
        match self.field {
            EntryField::Real => &row.re,
            EntryField::Imaginary => &row.im,
        }
    }
}

fn parse_part(text: &str, row: usize, part: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = text.parse().map_err(|_| {
        PolezeroError::invalid_input(row, format!("{} part '{}' is not a number", part, text))
    })?;
    if !value.is_finite() {
        return Err(PolezeroError::invalid_input(
            row,
            format!("{} part must be finite", part),
        ));
    }
    Ok(value)
}
