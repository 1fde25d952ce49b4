//! Positioned hitobjects.
//!
//! Rates aim, reading, and, depending on the mods, cognition and
//! flashlight.

pub mod difficulty;
