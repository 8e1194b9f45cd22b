use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::widgets::CycleHoliday;

pub fn render(frame: &mut Frame, area: Rect, cycle: &CycleHoliday) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);

    let holiday = cycle.current();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Holiday: {}", holiday.emoji()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(holiday.name().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
