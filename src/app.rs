//! Application state and logic.

use crossterm::event::KeyCode;

use crate::clipboard;
use crate::entry::EntryList;
use crate::error::Result;
use crate::model::FilterModel;
use crate::presenter::Presenter;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Plot grid (menus only).
    #[default]
    Plots,
    /// Pole entry list.
    Poles,
    /// Zero entry list.
    Zeros,
}

impl Focus {
    /// Get the next focus in the cycle.
    pub fn next(self) -> Self {
        match self {
            Focus::Plots => Focus::Poles,
            Focus::Poles => Focus::Zeros,
            Focus::Zeros => Focus::Plots,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Model owner and figure source.
    pub presenter: Presenter,
    /// Manual pole entries.
    pub poles: EntryList,
    /// Manual zero entries.
    pub zeros: EntryList,
    /// Focused panel.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance.
    pub fn new(presenter: Presenter) -> Self {
        let mut app = Self {
            presenter,
            poles: EntryList::new("Poles [Real, Imaginary]"),
            zeros: EntryList::new("Zeros [Real, Imaginary]"),
            focus: Focus::Plots,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
        };
        app.reload_entries();
        app
    }

    /// Switch between the analog and digital preset of the current family.
    pub fn cycle_domain(&mut self) {
        let domain = self.presenter.domain().next();
        let family = self.presenter.family();
        let result = self.presenter.change_default_model(domain, family);
        self.apply_preset(result);
    }

    /// Switch to the next filter family in the current domain.
    pub fn cycle_family(&mut self) {
        let domain = self.presenter.domain();
        let family = self.presenter.family().next();
        let result = self.presenter.change_default_model(domain, family);
        self.apply_preset(result);
    }

    fn apply_preset(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.reload_entries();
                self.error_message = None;
                self.status = format!(
                    "{} {}",
                    self.presenter.domain(),
                    self.presenter.family().name()
                );
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status = "Error building preset".to_string();
                tracing::error!("Error building preset: {}", e);
            },
        }
    }

    /// Rebuild the model from the pole and zero entry lists.
    pub fn apply_manual(&mut self) {
        let result = self.poles.parse().and_then(|poles| {
            let zeros = self.zeros.parse()?;
            self.presenter.change_manual_model(&poles, &zeros)
        });

        match result {
            Ok(()) => {
                self.reload_entries();
                self.error_message = None;
                let model = self.presenter.model();
                self.status = format!(
                    "Manual model: {} poles, {} zeros",
                    model.poles().len(),
                    model.zeros().len()
                );
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status = "Manual entry rejected".to_string();
                tracing::warn!("Manual entry rejected: {}", e);
            },
        }
    }

    /// Entry list that has focus, if any.
    pub fn focused_entries(&mut self) -> Option<&mut EntryList> {
        match self.focus {
            Focus::Plots => None,
            Focus::Poles => Some(&mut self.poles),
            Focus::Zeros => Some(&mut self.zeros),
        }
    }

    /// Apply a navigation key to the focused entry list.
    ///
    /// Returns false when no list has focus or the key is not a list key.
    pub fn handle_entry_key(&mut self, code: KeyCode) -> bool {
        if self.focus == Focus::Plots {
            return false;
        }
        if code == KeyCode::Esc {
            self.focus = Focus::Plots;
            return true;
        }
        let Some(list) = self.focused_entries() else {
            return false;
        };
        match code {
            KeyCode::Up | KeyCode::Char('k') => list.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => list.cursor_down(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                list.toggle_field()
            },
            KeyCode::Enter => list.start_edit(),
            KeyCode::Char('d') => list.clear_row(),
            _ => return false,
        }
        true
    }

    /// Whether a field is being edited.
    pub fn is_editing(&self) -> bool {
        self.poles.is_editing() || self.zeros.is_editing()
    }

    /// Cycle panel focus.
    pub fn cycle_focus(&mut self) {
        if let Some(list) = self.focused_entries() {
            list.cancel();
        }
        self.focus = self.focus.next();
    }

    /// Copy the model summary to the clipboard.
    pub fn copy_model(&mut self) {
        match clipboard::copy_model_summary(self.presenter.model()) {
            Ok(()) => self.status = "Model copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Close the error popup.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    fn reload_entries(&mut self) {
        let model = self.presenter.model();
        self.poles.load(model.poles());
        self.zeros.load(model.zeros());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignParams, Domain, FilterFamily};

    fn app() -> App {
        let presenter =
            Presenter::new(Domain::Discrete, FilterFamily::LowPass, DesignParams::default())
                .unwrap();
        App::new(presenter)
    }

    #[test]
    fn entries_mirror_model_roots() {
        let app = app();
        assert_eq!(app.poles.rows().len(), 2 + 3);
        assert_eq!(app.zeros.rows().len(), 2 + 3);
    }

    #[test]
    fn cycles_domain_and_family() {
        let mut app = app();
        app.cycle_domain();
        assert_eq!(app.presenter.domain(), Domain::Continuous);
        app.cycle_family();
        assert_eq!(app.presenter.family(), FilterFamily::HighPass);
        assert_eq!(app.status, "Analog High pass");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn applies_manual_entries() {
        let mut app = app();
        app.poles.load(&[]);
        app.zeros.load(&[]);
        app.apply_manual();
        assert!(app.presenter.is_manual());
        assert!(app.presenter.model().poles().is_empty());
        assert_eq!(app.status, "Manual model: 0 poles, 0 zeros");
    }

    #[test]
    fn bad_entry_keeps_previous_model() {
        let mut app = app();
        let before = app.presenter.model().clone();
        app.focus = Focus::Poles;
        let list = app.focused_entries().unwrap();
        list.start_edit();
        list.input('-');
        list.submit();
        app.apply_manual();
        assert!(app.error_message.is_some());
        assert_eq!(app.presenter.model(), &before);
    }

    #[test]
    fn entry_keys_drive_focused_list() {
        let mut app = app();
        assert!(!app.handle_entry_key(KeyCode::Char('j')));

        app.focus = Focus::Zeros;
        assert!(app.handle_entry_key(KeyCode::Char('j')));
        assert_eq!(app.zeros.cursor(), 1);
        assert_eq!(app.poles.cursor(), 0);

        assert!(app.handle_entry_key(KeyCode::Char('d')));
        assert!(app.zeros.rows()[1].re.is_empty());

        assert!(app.handle_entry_key(KeyCode::Enter));
        assert!(app.is_editing());
        app.zeros.cancel();

        assert!(!app.handle_entry_key(KeyCode::Char('m')));
        assert!(app.handle_entry_key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Plots);
    }

    #[test]
    fn focus_cycles_through_panels() {
        let mut app = app();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Poles);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Zeros);
        app.cycle_focus();
        assert!(app.focused_entries().is_none());
    }
}
