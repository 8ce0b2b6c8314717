//! Transport bar widget - song state, loop mode, preset, and audio stats.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use blipfx::engine::Snapshot;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, snapshot: &Snapshot, stats: &AudioStats) {
    let block = Block::default().title(" blipfx ").borders(Borders::ALL);

    let (song_symbol, song_state) = if snapshot.playing {
        ("▶", "Playing")
    } else {
        ("⏹", "Stopped")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {song_symbol} {song_state}  "),
            Style::default().fg(if snapshot.playing {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(
            format!("Loop: {}  ", if snapshot.looping { "On" } else { "Off" }),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Preset: {}  ", snapshot.preset.name()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Chains: {}  ", snapshot.active_chains),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
