//! Keymap help bar UI component.

use crate::app::{App, Focus};
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = if app.is_editing() {
        "Enter:store | Esc:cancel | Type a number"
    } else if app.focus != Focus::Plots {
        "jk/↑↓:row | hl/←→:field | Enter:edit | d:clear | a:apply | Tab:focus | Esc:back"
    } else {
        "q:quit | m:model | f:filter | Tab:edit poles/zeros | a:apply | y:copy | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
