mod dice;
mod holiday;
mod questions;
mod shove_box;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{App, Panel};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_tabs(frame, chunks[0], app.panel);

    match app.panel {
        Panel::Dice => dice::render(frame, chunks[1], &app.dice),
        Panel::Holiday => holiday::render(frame, chunks[1], &app.holiday),
        Panel::ShoveBox => shove_box::render(frame, chunks[1], &app.shove_box),
        Panel::Questions => questions::render(frame, chunks[1], app),
    }

    render_status(frame, chunks[2], app.status());
    render_controls(frame, chunks[3], app.panel);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Panel) {
    let titles: Vec<&str> = Panel::all().iter().map(|p| p.title()).collect();
    let selected = Panel::all().iter().position(|p| *p == active).unwrap_or(0);

    let widget = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if let Some(status) = status {
        let widget = Paragraph::new(status)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, panel: Panel) {
    let controls = match panel {
        Panel::Dice => "l roll left  ·  r roll right  ·  tab next  ·  q quit",
        Panel::Holiday => "a alphabet  ·  y year  ·  tab next  ·  q quit",
        Panel::ShoveBox => "s shove  ·  tab next  ·  q quit",
        Panel::Questions => "j/k move  ·  n new  ·  d dup  ·  t type  ·  x remove  ·  p publish  ·  w save  ·  q quit",
    };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
