//! Spectrum analyzer widget
//!
//! FFT-based frequency spectrum visualization with log-spaced bins.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 48;
/// Display floor in dB
const DB_FLOOR: f64 = -60.0;
/// Update every N frames to keep the display readable
const UPDATE_INTERVAL: usize = 3;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    /// FFT bin index shown for each display bin (log-spaced 20 Hz..Nyquist)
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Current spectrum data: (display bin, magnitude dB)
    spectrum: Vec<(f64, f64)>,
    frame_counter: usize,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        // Hann window - reduces spectral leakage
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                let denom = (buffer_len.max(2) - 1) as f32;
                0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos())
            })
            .collect();

        // Log-spaced frequencies from 20 Hz to Nyquist, mapped to FFT bins
        let nyquist = sample_rate as f64 / 2.0;
        let hz_per_bin = sample_rate as f64 / buffer_len as f64;
        let bin_indices: Vec<usize> = (0..SPECTRUM_BINS)
            .map(|i| {
                let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
                let freq = 20.0 * (nyquist / 20.0).powf(t);
                ((freq / hz_per_bin) as usize).min(buffer_len / 2 - 1)
            })
            .collect();

        Self {
            window,
            bin_indices,
            fft,
            scratch: vec![Complex::default(); buffer_len],
            spectrum: (0..SPECTRUM_BINS).map(|i| (i as f64, DB_FLOOR)).collect(),
            frame_counter: 0,
        }
    }

    fn update(&mut self, audio_buffer: &[f32]) {
        if audio_buffer.len() != self.scratch.len() {
            return;
        }

        for (slot, (&sample, &w)) in self
            .scratch
            .iter_mut()
            .zip(audio_buffer.iter().zip(self.window.iter()))
        {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let norm = 2.0 / self.scratch.len() as f32;
        for (i, &bin) in self.bin_indices.iter().enumerate() {
            let magnitude = self.scratch[bin].norm() * norm;
            let db = (20.0 * magnitude.max(1e-9).log10() as f64).max(DB_FLOOR);
            self.spectrum[i] = (i as f64, db);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        if self.frame_counter % UPDATE_INTERVAL == 0 {
            self.update(audio_buffer);
        }

        let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&self.spectrum);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, (SPECTRUM_BINS - 1) as f64])
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([DB_FLOOR, 0.0])
                    .style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_widget(chart, area);
    }
}
