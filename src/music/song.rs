//! Song tables: melody + bass note sequences with a fixed total duration.
//!
//! Each bundled song is two bars of 4/4 at 120 BPM, i.e. exactly 4.0
//! seconds, so the loop arithmetic in the player stays on a fixed grid.
//! Note times are absolute offsets in seconds from the loop anchor.

use super::pitch::*;

/// Fixed duration of every bundled song, in seconds.
pub const SONG_DURATION: f32 = 4.0;

/// A scheduled (pitch, start offset, duration) triple within a song.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// MIDI note number (see [`crate::music::pitch`]).
    pub note: u8,
    /// Offset from the loop anchor, seconds.
    pub time: f32,
    /// Seconds; the note's gain decays to the silence floor by this point.
    pub duration: f32,
}

/// Melody and bass lines with a fixed total duration.
#[derive(Debug, Clone)]
pub struct Song {
    pub name: &'static str,
    pub duration: f32,
    pub melody: Vec<NoteEvent>,
    pub bass: Vec<NoteEvent>,
}

/// Errors from building a custom song.
#[derive(Debug, Clone, PartialEq)]
pub enum SongError {
    /// A note's window extends past the song duration.
    NoteOverflows {
        line: &'static str,
        index: usize,
        ends_at: f32,
        duration: f32,
    },
}

impl std::fmt::Display for SongError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SongError::NoteOverflows {
                line,
                index,
                ends_at,
                duration,
            } => {
                write!(
                    f,
                    "{line} note {index} ends at {ends_at}s, past the song duration of {duration}s"
                )
            }
        }
    }
}

impl std::error::Error for SongError {}

impl Song {
    /// Build a song, validating that every note ends within the duration.
    pub fn new(
        name: &'static str,
        duration: f32,
        melody: Vec<NoteEvent>,
        bass: Vec<NoteEvent>,
    ) -> Result<Song, SongError> {
        for (line, notes) in [("melody", &melody), ("bass", &bass)] {
            for (index, event) in notes.iter().enumerate() {
                let ends_at = event.time + event.duration;
                if ends_at > duration + 1e-6 {
                    return Err(SongError::NoteOverflows {
                        line,
                        index,
                        ends_at,
                        duration,
                    });
                }
            }
        }

        Ok(Song {
            name,
            duration,
            melody,
            bass,
        })
    }

    fn from_table(
        name: &'static str,
        melody: &[(u8, f32, f32)],
        bass: &[(u8, f32, f32)],
    ) -> Song {
        let convert = |table: &[(u8, f32, f32)]| {
            table
                .iter()
                .map(|&(note, time, duration)| NoteEvent {
                    note,
                    time,
                    duration,
                })
                .collect()
        };
        Song {
            name,
            duration: SONG_DURATION,
            melody: convert(melody),
            bass: convert(bass),
        }
    }

    /// Driving minor-key chase theme.
    pub fn chase() -> Song {
        Song::from_table("chase", CHASE_MELODY, CHASE_BASS)
    }

    /// Low, menacing boss theme.
    pub fn boss() -> Song {
        Song::from_table("boss", BOSS_MELODY, BOSS_BASS)
    }

    /// Moody A-minor theme; the default for playback.
    pub fn drama() -> Song {
        Song::from_table("drama", DRAMA_MELODY, DRAMA_BASS)
    }

    /// Bouncy major-key theme.
    pub fn silly() -> Song {
        Song::from_table("silly", SILLY_MELODY, SILLY_BASS)
    }

    pub fn all() -> [Song; 4] {
        [Song::chase(), Song::boss(), Song::drama(), Song::silly()]
    }
}

const CHASE_MELODY: &[(u8, f32, f32)] = &[
    (E4, 0.0, 0.25),
    (G4, 0.25, 0.25),
    (A4, 0.5, 0.25),
    (B4, 0.75, 0.25),
    (E5, 1.0, 0.25),
    (D5, 1.25, 0.25),
    (B4, 1.5, 0.25),
    (A4, 1.75, 0.25),
    (G4, 2.0, 0.25),
    (A4, 2.25, 0.25),
    (B4, 2.5, 0.25),
    (D5, 2.75, 0.25),
    (E5, 3.0, 0.25),
    (B4, 3.25, 0.25),
    (G4, 3.5, 0.25),
    (E4, 3.75, 0.25),
];

const CHASE_BASS: &[(u8, f32, f32)] = &[
    (E2, 0.0, 0.5),
    (E2, 0.5, 0.5),
    (G2, 1.0, 0.5),
    (G2, 1.5, 0.5),
    (A2, 2.0, 0.5),
    (A2, 2.5, 0.5),
    (B2, 3.0, 0.5),
    (B2, 3.5, 0.5),
];

const BOSS_MELODY: &[(u8, f32, f32)] = &[
    (C4, 0.0, 0.75),
    (C4, 0.75, 0.25),
    (Eb4, 1.0, 0.5),
    (C4, 1.5, 0.5),
    (F4, 2.0, 0.75),
    (Eb4, 2.75, 0.25),
    (D4, 3.0, 0.5),
    (B3, 3.5, 0.5),
];

const BOSS_BASS: &[(u8, f32, f32)] = &[
    (C2, 0.0, 1.0),
    (C2, 1.0, 1.0),
    (Ab2, 2.0, 1.0),
    (G2, 3.0, 1.0),
];

const DRAMA_MELODY: &[(u8, f32, f32)] = &[
    (A4, 0.0, 0.5),
    (C5, 0.5, 0.5),
    (E5, 1.0, 0.5),
    (D5, 1.5, 0.25),
    (C5, 1.75, 0.25),
    (B4, 2.0, 0.5),
    (G4, 2.5, 0.5),
    (A4, 3.0, 1.0),
];

const DRAMA_BASS: &[(u8, f32, f32)] = &[
    (A2, 0.0, 1.0),
    (F2, 1.0, 1.0),
    (G2, 2.0, 1.0),
    (A2, 3.0, 1.0),
];

const SILLY_MELODY: &[(u8, f32, f32)] = &[
    (C5, 0.0, 0.25),
    (E5, 0.25, 0.25),
    (G5, 0.5, 0.25),
    (E5, 0.75, 0.25),
    (C5, 1.0, 0.5),
    (G4, 1.5, 0.5),
    (A4, 2.0, 0.25),
    (B4, 2.25, 0.25),
    (C5, 2.5, 0.5),
    (D5, 3.0, 0.25),
    (B4, 3.25, 0.25),
    (C5, 3.5, 0.5),
];

const SILLY_BASS: &[(u8, f32, f32)] = &[
    (C3, 0.0, 0.5),
    (G2, 0.5, 0.5),
    (C3, 1.0, 0.5),
    (G2, 1.5, 0.5),
    (F2, 2.0, 0.5),
    (G2, 2.5, 0.5),
    (C3, 3.0, 0.5),
    (G2, 3.5, 0.5),
];
