//! Slider list widget with numeric readouts.
//!
//! Sliders have no state of their own: each renders the value the latest
//! engine snapshot reports, so a preset overwriting the parameter store
//! updates every readout on the next frame.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use blipfx::engine::{Command, Snapshot};
use blipfx::params::Param;

const BAR_WIDTH: usize = 18;

/// What a slider edits.
#[derive(Debug, Clone, Copy)]
pub enum SliderTarget {
    Master,
    Sfx,
    Music,
    Param(Param),
}

pub struct Slider {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub target: SliderTarget,
}

impl Slider {
    /// Current value as the engine reports it.
    pub fn value(&self, snapshot: &Snapshot) -> f32 {
        match self.target {
            SliderTarget::Master => snapshot.master_gain,
            SliderTarget::Sfx => snapshot.sfx_gain,
            SliderTarget::Music => snapshot.music_gain,
            SliderTarget::Param(param) => snapshot.params.get(param),
        }
    }

    pub fn command(&self, value: f32) -> Command {
        match self.target {
            SliderTarget::Master => Command::SetMasterVolume(value),
            SliderTarget::Sfx => Command::SetSfxVolume(value),
            SliderTarget::Music => Command::SetMusicVolume(value),
            SliderTarget::Param(param) => Command::SetParam(param, value),
        }
    }
}

pub fn default_sliders() -> Vec<Slider> {
    vec![
        Slider {
            label: "Master volume",
            min: 0.0,
            max: 1.0,
            step: 0.05,
            target: SliderTarget::Master,
        },
        Slider {
            label: "SFX volume",
            min: 0.0,
            max: 1.0,
            step: 0.05,
            target: SliderTarget::Sfx,
        },
        Slider {
            label: "Music volume",
            min: 0.0,
            max: 1.0,
            step: 0.05,
            target: SliderTarget::Music,
        },
        Slider {
            label: "Jump freq",
            min: 200.0,
            max: 800.0,
            step: 10.0,
            target: SliderTarget::Param(Param::JumpFreqStart),
        },
        Slider {
            label: "Punch decay",
            min: 0.05,
            max: 0.5,
            step: 0.01,
            target: SliderTarget::Param(Param::PunchDecay),
        },
        Slider {
            label: "Coin freq end",
            min: 600.0,
            max: 2000.0,
            step: 25.0,
            target: SliderTarget::Param(Param::CoinFreqEnd),
        },
        Slider {
            label: "Explosion power",
            min: 0.2,
            max: 2.0,
            step: 0.05,
            target: SliderTarget::Param(Param::ExplosionIntensity),
        },
    ]
}

pub fn render_sliders(
    frame: &mut Frame,
    area: Rect,
    sliders: &[Slider],
    selected: usize,
    snapshot: &Snapshot,
) {
    let block = Block::default().title(" Sliders ").borders(Borders::ALL);

    let lines: Vec<Line> = sliders
        .iter()
        .enumerate()
        .map(|(i, slider)| {
            let value = slider.value(snapshot);
            let fraction = ((value - slider.min) / (slider.max - slider.min)).clamp(0.0, 1.0);
            let filled = (fraction * BAR_WIDTH as f32).round() as usize;
            let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);

            let style = if i == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if i == selected { "▸" } else { " " };

            Line::from(vec![
                Span::styled(format!("{marker} {:<16}", slider.label), style),
                Span::styled(bar, style),
                Span::styled(format!(" {value:>8.2}"), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
