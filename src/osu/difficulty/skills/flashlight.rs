use crate::{
    any::difficulty::skills::{Skill, StrainSet},
    osu::difficulty::{evaluators::FlashlightEvaluator, object::OsuDifficultyObject},
};

#[derive(Clone, Debug)]
pub struct Flashlight {
    strains: StrainSet,
    has_hidden_mod: bool,
}

impl Flashlight {
    const SKILL_MULTIPLIER: f64 = 0.052;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    pub fn new(section_length: f64, has_hidden_mod: bool) -> Self {
        Self {
            strains: StrainSet::new()
                .with_section_length(section_length)
                .with_strain_decay_base(Self::STRAIN_DECAY_BASE),
            has_hidden_mod,
        }
    }
}

impl Skill for Flashlight {
    type DifficultyObject<'a> = OsuDifficultyObject<'a>;

    fn process<'a>(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        let difficulty = FlashlightEvaluator::evaluate_diff_of(curr, objects, self.has_hidden_mod)
            * Self::SKILL_MULTIPLIER;

        self.strains.add_strain(difficulty, curr, objects);
    }

    /// Section peaks are summed up rather than weighted.
    fn difficulty_value(&self) -> f64 {
        self.strains.sum_peaks() * StrainSet::DIFFICULTY_MULTIPLIER
    }
}
