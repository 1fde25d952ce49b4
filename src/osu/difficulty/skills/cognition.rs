use crate::{
    any::difficulty::skills::Skill,
    osu::difficulty::{evaluators::CognitionEvaluator, object::OsuDifficultyObject},
    util::strains_vec::StrainsVec,
};

#[derive(Clone, Debug)]
pub struct Cognition {
    has_hidden_mod: bool,
    difficulties: StrainsVec,
}

impl Cognition {
    const SKILL_MULTIPLIER: f64 = 2.4;

    pub fn new(has_hidden_mod: bool) -> Self {
        Self {
            has_hidden_mod,
            difficulties: StrainsVec::with_capacity(256),
        }
    }
}

impl Skill for Cognition {
    type DifficultyObject<'a> = OsuDifficultyObject<'a>;

    fn process<'a>(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        self.difficulties.push(
            CognitionEvaluator::evaluate_diff_of(curr, objects, self.has_hidden_mod)
                * Self::SKILL_MULTIPLIER,
        );
    }

    /// The highest values count fully, every further value is divided by its
    /// rank.
    fn difficulty_value(&self) -> f64 {
        harmonic_sum(self.difficulties.clone())
    }
}

fn harmonic_sum(mut difficulties: StrainsVec) -> f64 {
    difficulties.retain_non_zero_and_sort();

    let mut sum = 0.0;

    for (difficulty, rank) in difficulties.iter().zip(1_u32..) {
        sum += difficulty / f64::from(rank);
    }

    sum
}
