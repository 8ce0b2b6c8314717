#![allow(non_upper_case_globals)]

/*
Pitch Constants
===============

Readable names for MIDI note numbers, used by the song tables. Middle C
(C4) = MIDI note 60; A4 = 69 is the 440 Hz tuning reference.

Naming convention: natural notes C4, D4, ...; sharps Cs4 (C#4); flats are
aliases for the same numbers (Eb4 == Ds4). Octaves 2-5 cover everything the
bundled songs use.

The MIDI formula: note_number = 12 * (octave + 1) + semitone,
where semitone: C=0, C#=1, D=2, ..., B=11.
*/

// Octave 2
pub const C2: u8 = 36;
pub const Cs2: u8 = 37;
pub const D2: u8 = 38;
pub const Ds2: u8 = 39;
pub const Eb2: u8 = 39;
pub const E2: u8 = 40;
pub const F2: u8 = 41;
pub const Fs2: u8 = 42;
pub const G2: u8 = 43;
pub const Gs2: u8 = 44;
pub const Ab2: u8 = 44;
pub const A2: u8 = 45;
pub const As2: u8 = 46;
pub const Bb2: u8 = 46;
pub const B2: u8 = 47;

// Octave 3
pub const C3: u8 = 48;
pub const Cs3: u8 = 49;
pub const D3: u8 = 50;
pub const Ds3: u8 = 51;
pub const Eb3: u8 = 51;
pub const E3: u8 = 52;
pub const F3: u8 = 53;
pub const Fs3: u8 = 54;
pub const G3: u8 = 55;
pub const Gs3: u8 = 56;
pub const Ab3: u8 = 56;
pub const A3: u8 = 57;
pub const As3: u8 = 58;
pub const Bb3: u8 = 58;
pub const B3: u8 = 59;

// Octave 4 (Middle C octave)
pub const C4: u8 = 60;
pub const Cs4: u8 = 61;
pub const D4: u8 = 62;
pub const Ds4: u8 = 63;
pub const Eb4: u8 = 63;
pub const E4: u8 = 64;
pub const F4: u8 = 65;
pub const Fs4: u8 = 66;
pub const G4: u8 = 67;
pub const Gs4: u8 = 68;
pub const Ab4: u8 = 68;
pub const A4: u8 = 69; // A440 tuning reference
pub const As4: u8 = 70;
pub const Bb4: u8 = 70;
pub const B4: u8 = 71;

// Octave 5
pub const C5: u8 = 72;
pub const Cs5: u8 = 73;
pub const D5: u8 = 74;
pub const Ds5: u8 = 75;
pub const Eb5: u8 = 75;
pub const E5: u8 = 76;
pub const F5: u8 = 77;
pub const Fs5: u8 = 78;
pub const G5: u8 = 79;
pub const Gs5: u8 = 80;
pub const Ab5: u8 = 80;
pub const A5: u8 = 81;
pub const As5: u8 = 82;
pub const Bb5: u8 = 82;
pub const B5: u8 = 83;

/// Convert a MIDI note number to its equal-temperament frequency in Hz.
#[inline]
pub fn freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}
