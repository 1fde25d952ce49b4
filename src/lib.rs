//! Skill-based difficulty evaluation for osu! and osu!taiko object
//! timelines.
//!
//! The caller hands in a timeline of hitobjects that are already positioned,
//! stacked, and sorted by start time. Every object is enriched with its
//! spatial and temporal features, after which independent skills fold the
//! enriched objects into one rating each.
//!
//! ### Usage
//!
//! ```
//! use rosu_skills::{Difficulty, HitObject, Pos, SkillKind};
//!
//! // A back-and-forth jump pattern at 240 bpm
//! let hit_objects: Vec<_> = (0..32_u32)
//!     .map(|i| {
//!         let x = if i % 2 == 0 { 64.0 } else { 448.0 };
//!
//!         HitObject::circle(Pos::new(x, 192.0), 250.0 * f64::from(i), 32.0)
//!     })
//!     .collect();
//!
//! let ratings = Difficulty::new()
//!     .mods(1024_u32) // FL
//!     .ar(9.0)
//!     .calculate(&hit_objects)
//!     .unwrap();
//!
//! for (kind, rating) in &ratings {
//!     println!("{}: {rating:.2}", kind.as_str());
//! }
//!
//! assert!(ratings.get(SkillKind::Flashlight) > 0.0);
//! ```
//!
//! Drum timelines only need a colour per note:
//!
//! ```
//! use rosu_skills::{Difficulty, SkillKind, TaikoObject};
//!
//! let hit_objects: Vec<_> = (0..64_u32)
//!     .map(|i| {
//!         let start_time = 120.0 * f64::from(i);
//!
//!         if i % 3 == 0 {
//!             TaikoObject::rim(start_time)
//!         } else {
//!             TaikoObject::center(start_time)
//!         }
//!     })
//!     .collect();
//!
//! let ratings = Difficulty::new().calculate_taiko(&hit_objects).unwrap();
//!
//! assert!(ratings.get(SkillKind::Stamina) > 0.0);
//! ```
//!
//! ### Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Logs timeline rejections and skill results through `tracing`. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    any::difficulty::{Difficulty, SkillKind, SkillRatings},
    model::{
        error::TimelineError,
        hit_object::{HitObject, HitObjectKind, Pos, SliderNodeKind, SliderPath},
        mods::GameMods,
    },
    taiko::object::{HitType, TaikoObject, TaikoObjectKind},
};

/// Types shared by all timelines.
pub mod any;

/// Positioned hitobject timelines.
pub mod osu;

/// Drum timelines.
pub mod taiko;

/// Types used in and around this crate.
pub mod model;

mod util;
