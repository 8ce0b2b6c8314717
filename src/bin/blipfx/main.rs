//! blipfx - terminal game-audio playground
//!
//! Run with: cargo run

mod app;
mod ui;

use app::Blipfx;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Blipfx::new().run()
}
