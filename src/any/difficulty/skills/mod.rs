pub use self::strain_set::{difficulty_value, StrainSet};

mod strain_set;

/// Folds difficulty objects one at a time into a single rating.
///
/// A skill owns all of its state so that several skills can run over the
/// same objects independently.
pub trait Skill {
    type DifficultyObject<'a>;

    fn process<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &[Self::DifficultyObject<'a>],
    );

    fn difficulty_value(&self) -> f64;

    /// Processes all `objects` in order and returns the final rating.
    fn process_all<'a>(mut self, objects: &[Self::DifficultyObject<'a>]) -> f64
    where
        Self: Sized,
    {
        for curr in objects {
            self.process(curr, objects);
        }

        self.difficulty_value()
    }
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}
