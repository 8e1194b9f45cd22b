use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::widgets::ShoveBox;

const BOX_WIDTH: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, shove_box: &ShoveBox) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let position = format!("Position: {}/{}", shove_box.position(), shove_box.limit());
    let position_color = if shove_box.is_at_limit() {
        Color::Red
    } else {
        Color::DarkGray
    };
    frame.render_widget(
        Paragraph::new(position)
            .alignment(Alignment::Center)
            .fg(position_color),
        chunks[1],
    );

    let track = chunks[2];
    let offset = scaled_offset(shove_box.position(), shove_box.limit(), track.width);
    let box_area = Rect {
        x: track.x + offset,
        width: BOX_WIDTH.min(track.width),
        ..track
    };

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .bg(Color::Cyan),
        box_area,
    );
}

/// Map a position in `0..=limit` onto the free width of the track.
fn scaled_offset(position: u16, limit: u16, track_width: u16) -> u16 {
    let free = track_width.saturating_sub(BOX_WIDTH);
    if limit == 0 {
        return 0;
    }
    ((position as u32 * free as u32) / limit as u32) as u16
}
