//! Pitch tables, song data, and the song player.

pub mod pitch;
pub mod player;
pub mod song;

pub use player::SongPlayer;
pub use song::{NoteEvent, Song, SongError};
