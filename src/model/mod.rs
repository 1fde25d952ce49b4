/// Raw hitobjects as handed in by the caller.
pub mod hit_object;

/// Game mods that affect which skills are evaluated.
pub mod mods;

/// Input validation errors.
pub mod error;
