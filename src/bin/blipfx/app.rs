//! Blipfx - audio stream setup and UI hand-off.
//!
//! The engine lives inside the cpal callback; the UI talks to it through
//! three ring buffers: commands in, rendered samples and state snapshots
//! out.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use blipfx::engine::{Command, Engine, Snapshot};
use blipfx::MAX_BLOCK_SIZE;

use super::ui::UiApp;

/// Command queue depth. Key events are sparse; 256 is plenty of headroom.
const COMMAND_QUEUE_SIZE: usize = 256;
/// Samples buffered for the oscilloscope/spectrum views.
const AUDIO_QUEUE_SIZE: usize = 8_192;
const SNAPSHOT_QUEUE_SIZE: usize = 64;

pub struct Blipfx;

impl Blipfx {
    pub fn new() -> Self {
        Self
    }

    /// Run the application (takes over the terminal, plays audio).
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (cmd_tx, mut cmd_rx) = RingBuffer::<Command>::new(COMMAND_QUEUE_SIZE);
        let (mut audio_tx, audio_rx) = RingBuffer::<f32>::new(AUDIO_QUEUE_SIZE);
        let (mut snap_tx, snap_rx) = RingBuffer::<Snapshot>::new(SNAPSHOT_QUEUE_SIZE);

        let mut engine = Engine::new(sample_rate);
        let initial_snapshot = engine.snapshot();
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    engine.drain(&mut cmd_rx);

                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_to_render =
                            (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        engine.render(block);

                        // Fan the mono block out to every channel and feed
                        // the visualization ring (dropping when it is full).
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                            let _ = audio_tx.push(s);
                        }

                        frames_written += frames_to_render;
                    }

                    let _ = snap_tx.push(engine.snapshot());
                },
                |err| eprintln!("audio error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(cmd_tx, audio_rx, snap_rx, initial_snapshot, sample_rate)
            .run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for Blipfx {
    fn default() -> Self {
        Self::new()
    }
}
