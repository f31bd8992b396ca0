//! ratatui rendering for the task board.
//!
//! Layout:
//!   - Header: app title + filter tabs + status line
//!   - Task list (placeholder when the filtered view is empty)
//!   - Input line for new tasks
//!   - Help line
//!   - Edit popup over the list while a rename is in progress

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::api::TaskStatus;
use crate::board::{Board, StatusFilter};

pub fn draw(f: &mut ratatui::Frame, board: &Board) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // task list
            Constraint::Length(3), // input area
            Constraint::Length(1), // help line
        ])
        .split(area);

    render_header(f, chunks[0], board);
    render_tasks(f, chunks[1], board);
    render_input(f, chunks[2], &board.input);
    render_help(f, chunks[3]);

    if let Some(ref draft) = board.edit {
        render_edit_popup(f, area, &draft.text);
    }
}

fn render_header(f: &mut ratatui::Frame, area: Rect, board: &Board) {
    let mut spans = vec![Span::styled(
        " Tasks ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed] {
        let style = if filter == board.filter {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    if !board.status_line.is_empty() {
        spans.push(Span::styled(
            format!("  {}", board.status_line),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(28, 28, 40)).fg(Color::White));
    f.render_widget(header, area);
}

fn render_tasks(f: &mut ratatui::Frame, area: Rect, board: &Board) {
    let visible = board.visible();

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  No tasks found",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let marker = if index == board.selected { "> " } else { "  " };

                let name_style = match task.status {
                    // Completed tasks read as done: dimmed and struck through
                    TaskStatus::Completed => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                    TaskStatus::Active => Style::default().fg(Color::White),
                };

                let mut line = vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(task.name.clone(), name_style),
                ];

                if task.status == TaskStatus::Active {
                    line.push(Span::styled(
                        "  [active]",
                        Style::default().fg(Color::Green),
                    ));
                }

                ListItem::new(Line::from(line))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .style(Style::default().fg(Color::White));

    f.render_widget(list, area);
}

fn render_input(f: &mut ratatui::Frame, area: Rect, input: &str) {
    let text = Paragraph::new(format!("> {input}▌"))
        .block(Block::default().borders(Borders::ALL).title("New task"))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    f.render_widget(text, area);
}

fn render_help(f: &mut ratatui::Frame, area: Rect) {
    let help = Paragraph::new(
        " Enter: add  |  ←/→: filter  |  ↑/↓: select  |  ^T: toggle  |  ^E: edit  |  ^D: delete  |  Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_edit_popup(f: &mut ratatui::Frame, area: Rect, text: &str) {
    let popup = centered_rect(area, 60, 5);

    let body = Paragraph::new(format!("{text}▌"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Edit task (Enter: save, Esc: cancel)"),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// A fixed-height rectangle centered in `area`, `percent_x` wide.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
