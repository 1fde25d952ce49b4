pub use self::difficulty::{Difficulty, SkillKind, SkillRatings};

/// The difficulty builder, the strain accumulator, and the traits shared by
/// all skills.
pub mod difficulty;
