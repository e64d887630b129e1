//! Side panel: option menus and the manual pole/zero entry lists.

use super::ThemeColors;
use crate::app::{App, Focus};
use crate::entry::{EntryField, EntryList};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Width of one entry column in characters.
const FIELD_WIDTH: usize = 11;

/// Draw the side panel.
pub(super) fn draw_side_panel(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_menus(f, app, chunks[0], colors);
    draw_entries(f, &app.poles, app.focus == Focus::Poles, chunks[1], colors);
    draw_entries(f, &app.zeros, app.focus == Focus::Zeros, chunks[2], colors);
}

fn draw_menus(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let presenter = &app.presenter;
    let source = if presenter.is_manual() {
        "Manual"
    } else {
        "Preset"
    };

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<8}", label), Style::default().fg(colors.label)),
            Span::styled(value, Style::default().fg(colors.text)),
        ])
    };

    let lines = vec![
        row("Model", format!("‹{}›", presenter.domain())),
        row("Filter", format!("‹{}›", presenter.family().name())),
        row("Order", presenter.params().order.to_string()),
        row("Source", source.to_string()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Zero Pole Demo ")
            .title_style(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

fn draw_entries(
    f: &mut Frame<'_>,
    list: &EntryList,
    focused: bool,
    area: Rect,
    colors: &ThemeColors,
) {
    let items: Vec<ListItem<'_>> = list
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let selected = focused && idx == list.cursor();
            let cell = |field: EntryField, text: &str| {
                let active = selected && list.field() == field;
                let shown = if active && list.is_editing() {
                    format!("{}▏", list.buffer())
                } else if text.is_empty() {
                    "empty".to_string()
                } else {
                    text.to_string()
                };
                let style = if active {
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(colors.cursor_bg)
                        .add_modifier(Modifier::BOLD)
                } else if text.is_empty() {
                    Style::default().fg(colors.border)
                } else {
                    Style::default().fg(colors.text)
                };
                Span::styled(format!("{:>width$}", shown, width = FIELD_WIDTH), style)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", idx + 1), Style::default().fg(colors.label)),
                cell(EntryField::Real, &row.re),
                Span::raw("  "),
                cell(EntryField::Imaginary, &row.im),
            ]))
        })
        .collect();

    let border = if focused {
        colors.border_focus
    } else {
        colors.border
    };

    let widget = List::new(items).block(
        Block::default()
            .title(format!(" {} ", list.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );

    // Selecting the cursor row keeps it scrolled into view.
    let mut state = ListState::default().with_selected(Some(list.cursor()));
    f.render_stateful_widget(widget, area, &mut state);
}
