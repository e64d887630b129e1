//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let editing = [&app.poles, &app.zeros]
        .into_iter()
        .find(|list| list.is_editing());

    let text = match editing {
        Some(list) => format!("{}: {}", list.title(), list.buffer()),
        None => app.status.clone(),
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
