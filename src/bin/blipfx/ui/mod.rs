//! TUI module for blipfx.
//!
//! One pad-style screen: transport line on top, sliders and key help on the
//! left, oscilloscope and spectrum on the right. Keys map straight to
//! engine commands; the display renders from the latest engine snapshot so
//! readouts always match what the audio thread actually uses.

mod help;
mod scope;
mod sliders;
mod spectrum;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use blipfx::engine::{Command, Snapshot};
use blipfx::params::PresetId;
use blipfx::sfx::Effect;

use help::render_help;
use scope::render_scope;
use sliders::{default_sliders, render_sliders, Slider};
use spectrum::SpectrumAnalyzer;
use transport::{render_transport, AudioStats};

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

pub struct UiApp {
    cmd_tx: Producer<Command>,
    audio_rx: Consumer<f32>,
    snap_rx: Consumer<Snapshot>,
    /// Latest engine snapshot; all readouts render from this.
    snapshot: Snapshot,
    audio_buffer: Vec<f32>,
    sliders: Vec<Slider>,
    selected_slider: usize,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        cmd_tx: Producer<Command>,
        audio_rx: Consumer<f32>,
        snap_rx: Consumer<Snapshot>,
        initial_snapshot: Snapshot,
        sample_rate: f32,
    ) -> Self {
        Self {
            cmd_tx,
            audio_rx,
            snap_rx,
            snapshot: initial_snapshot,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            sliders: default_sliders(),
            selected_slider: 0,
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_snapshots();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Pull new samples, keeping the last VIS_BUFFER_SIZE for the views.
    fn poll_audio(&mut self) {
        let mut new_samples = Vec::new();
        while let Ok(sample) = self.audio_rx.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            self.audio_buffer.extend(new_samples);
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
        }
    }

    /// Keep only the latest snapshot.
    fn poll_snapshots(&mut self) {
        while let Ok(snapshot) = self.snap_rx.pop() {
            self.snapshot = snapshot;
        }
    }

    fn send(&mut self, command: Command) {
        let _ = self.cmd_tx.push(command);
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.send(Command::PlaySong),
            KeyCode::Up => {
                self.selected_slider = self.selected_slider.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected_slider = (self.selected_slider + 1).min(self.sliders.len() - 1);
            }
            KeyCode::Left => self.nudge_slider(-1.0),
            KeyCode::Right => self.nudge_slider(1.0),
            KeyCode::Char(' ') => self.send(Command::Effect(Effect::Jump)),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => self.should_quit = true,
                'p' => self.send(Command::Effect(Effect::Punch)),
                'k' => self.send(Command::Effect(Effect::Kick)),
                'c' => self.send(Command::Effect(Effect::Coin)),
                'u' => self.send(Command::Effect(Effect::PowerUp)),
                'g' => self.send(Command::Effect(Effect::GameOver)),
                'e' => self.send(Command::Effect(Effect::Explosion)),
                'l' => self.send(Command::Effect(Effect::Laser)),
                'h' => self.send(Command::Effect(Effect::Heal)),
                'a' => self.send(Command::Effect(Effect::Alert)),
                'm' => self.send(Command::ToggleSongPlayback),
                's' => self.send(Command::StopSong),
                'o' => self.send(Command::ToggleLoop),
                '1' => self.send(Command::ApplyPreset(PresetId::EightBit)),
                '2' => self.send(Command::ApplyPreset(PresetId::Modern)),
                '3' => self.send(Command::ApplyPreset(PresetId::Arcade)),
                _ => {}
            },
            _ => {}
        }
    }

    /// Step the selected slider and send the resulting command.
    fn nudge_slider(&mut self, direction: f32) {
        let slider = &self.sliders[self.selected_slider];
        let value = (slider.value(&self.snapshot) + direction * slider.step)
            .clamp(slider.min, slider.max);
        let command = slider.command(value);
        self.send(command);
    }

    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(frame.area());

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_transport(frame, rows[0], &self.snapshot, &stats);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.sliders.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        render_sliders(
            frame,
            left[0],
            &self.sliders,
            self.selected_slider,
            &self.snapshot,
        );
        render_help(frame, left[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        render_scope(frame, right[0], &self.audio_buffer);
        self.spectrum.render(frame, right[1], &self.audio_buffer);
    }
}
