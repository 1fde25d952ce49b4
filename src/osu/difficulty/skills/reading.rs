use crate::{
    any::difficulty::skills::Skill,
    osu::difficulty::{
        evaluators::{ReadingEvaluator, RhythmRepeats},
        object::OsuDifficultyObject,
    },
    util::strains_vec::StrainsVec,
};

/// Reading difficulty of each object, aggregated without time decay.
#[derive(Clone, Debug)]
pub struct Reading {
    has_hidden_mod: bool,
    repeats: RhythmRepeats,
    object_difficulties: StrainsVec,
}

impl Reading {
    const SKILL_MULTIPLIER: f64 = 0.2;
    const DECAY_WEIGHT: f64 = 0.9;

    pub fn new(has_hidden_mod: bool) -> Self {
        Self {
            has_hidden_mod,
            repeats: RhythmRepeats::new(),
            object_difficulties: StrainsVec::with_capacity(256),
        }
    }
}

impl Skill for Reading {
    type DifficultyObject<'a> = OsuDifficultyObject<'a>;

    fn process<'a>(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        let difficulty = ReadingEvaluator::evaluate_diff_of(
            curr,
            objects,
            self.has_hidden_mod,
            &mut self.repeats,
        ) * Self::SKILL_MULTIPLIER;

        self.object_difficulties.push(difficulty);
    }

    /// Weighted sum of all object difficulties, from highest to lowest.
    fn difficulty_value(&self) -> f64 {
        let mut difficulties = self.object_difficulties.clone();
        difficulties.retain_non_zero_and_sort();

        let mut difficulty = 0.0;
        let mut weight = 1.0;

        for value in difficulties.iter() {
            difficulty += value * weight;
            weight *= Self::DECAY_WEIGHT;
        }

        difficulty
    }
}
