use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::widgets::{DiceOutcome, TwoDice};

pub fn render(frame: &mut Frame, area: Rect, dice: &TwoDice) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Length(4),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    render_die(frame, columns[1], "Left", dice.left());
    render_die(frame, columns[3], "Right", dice.right());
    render_outcome(frame, chunks[2], dice.outcome());
}

fn render_die(frame: &mut Frame, area: Rect, label: &str, value: u8) {
    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_outcome(frame: &mut Frame, area: Rect, outcome: DiceOutcome) {
    let (text, color) = match outcome {
        DiceOutcome::Win => ("You Win!", Color::Green),
        DiceOutcome::Lose => ("Snake eyes. You Lose!", Color::Red),
        DiceOutcome::Pending => ("", Color::Reset),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}
