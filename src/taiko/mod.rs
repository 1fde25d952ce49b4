//! Drum timelines.
//!
//! Objects only carry a colour and a start time. Colour patterns and finger
//! speed are rated.

pub mod difficulty;
pub mod object;
