//! User interface rendering.

mod figure;
mod keymap_bar;
mod side_panel;
mod status_bar;
mod theme;

use crate::app::App;
use crate::plot::{
    FREQUENCY_RESPONSE_TITLE, PHASE_RESPONSE_TITLE, POLE_ZERO_TITLE, TIME_RESPONSE_TITLE,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use theme::ThemeColors;

/// Width of the side panel in characters.
const SIDE_PANEL_WIDTH: u16 = 36;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(chunks[0]);

    draw_plots(f, app, content[0], &colors);
    side_panel::draw_side_panel(f, app, content[1], &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app, &colors);

    if let Some(ref error) = app.error_message {
        draw_error_popup(f, error, &colors);
    }
}

/// Pole-zero map and time response on the left, magnitude and phase on the right.
fn draw_plots(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cells: Vec<Rect> = columns
        .iter()
        .flat_map(|column| {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*column)
                .to_vec()
        })
        .collect();

    let plots = app.presenter.plots();
    let titles = [
        POLE_ZERO_TITLE,
        TIME_RESPONSE_TITLE,
        FREQUENCY_RESPONSE_TITLE,
        PHASE_RESPONSE_TITLE,
    ];
    for ((slot, title), cell) in plots.slots().into_iter().zip(titles).zip(cells) {
        figure::draw_slot(f, cell, slot, title, colors);
    }
}

fn draw_error_popup(f: &mut Frame<'_>, error: &str, colors: &ThemeColors) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(colors.text))),
        Line::from(""),
        Line::from("Press Esc to close"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.error))
                .style(Style::default().bg(colors.bg)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignParams, Domain, FilterFamily};
    use crate::presenter::Presenter;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn side_panel_shows_preset_order() {
        let params = DesignParams {
            order: 3,
            ..Default::default()
        };
        let presenter = Presenter::new(Domain::Discrete, FilterFamily::LowPass, params).unwrap();
        let screen = render(&App::new(presenter));
        assert!(screen.contains("Order   3"));
        assert!(screen.contains("Pole Zero map"));
        assert!(screen.contains("Time response"));
    }
}
