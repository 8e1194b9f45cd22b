use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, TableState},
};

use crate::app::App;
use crate::questions::{same_type, sum_points, sum_published_points};

const NAME_PREVIEW_LENGTH: usize = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let questions = app.questions();
    if questions.is_empty() {
        let widget = Paragraph::new("No questions loaded · n to add one")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_summary(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let questions = app.questions();
    let uniform = if same_type(questions) {
        "single type"
    } else {
        "mixed types"
    };
    let summary = format!(
        "{} questions  ·  {} / {} points published  ·  {}",
        questions.len(),
        sum_published_points(questions),
        sum_points(questions),
        uniform
    );

    let widget = Paragraph::new(summary).fg(Color::DarkGray).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["id", "name", "type", "options", "points", "published"])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows = app.questions().iter().map(|q| {
        let published = if q.published {
            Cell::from("yes").fg(Color::Green)
        } else {
            Cell::from("no").fg(Color::DarkGray)
        };
        Row::new(vec![
            Cell::from(q.id.to_string()),
            Cell::from(truncate_name(&q.name)),
            Cell::from(q.question_type.label()),
            Cell::from(q.options.len().to_string()),
            Cell::from(q.points.to_string()),
            published,
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
    .block(Block::default().padding(Padding::horizontal(1)));

    let mut state = TableState::default().with_selected(Some(app.selected_question()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_PREVIEW_LENGTH {
        let truncated: String = name.chars().take(NAME_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}
