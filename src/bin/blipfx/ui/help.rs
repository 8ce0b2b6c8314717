//! Key-binding help panel.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Space", "jump"),
    ("P", "punch"),
    ("K", "kick"),
    ("C", "coin"),
    ("U", "power-up"),
    ("G", "game-over"),
    ("E", "explosion"),
    ("L", "laser"),
    ("H", "heal"),
    ("A", "alert"),
    ("M", "toggle song"),
    ("Enter", "play song"),
    ("S", "stop song"),
    ("O", "toggle loop"),
    ("1/2/3", "preset: 8-bit / modern / arcade"),
    ("↑↓ ←→", "select / adjust slider"),
    ("Q", "quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Keys ").borders(Borders::ALL);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!(" {key:<7}"), Style::default().fg(Color::Cyan)),
                Span::styled(*action, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
