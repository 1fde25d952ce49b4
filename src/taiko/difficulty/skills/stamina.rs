use crate::{
    any::difficulty::skills::{Skill, StrainSet},
    taiko::difficulty::{
        evaluators::StaminaEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

#[derive(Clone, Debug)]
pub struct Stamina<'o> {
    strains: StrainSet,
    objects: &'o TaikoDifficultyObjects,
}

impl<'o> Stamina<'o> {
    const SKILL_MULTIPLIER: f64 = 1.1;
    const STRAIN_DECAY_BASE: f64 = 0.4;

    pub fn new(section_length: f64, objects: &'o TaikoDifficultyObjects) -> Self {
        Self {
            strains: StrainSet::new()
                .with_section_length(section_length)
                .with_strain_decay_base(Self::STRAIN_DECAY_BASE),
            objects,
        }
    }
}

impl Skill for Stamina<'_> {
    type DifficultyObject<'a> = TaikoDifficultyObject;

    fn process<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &[Self::DifficultyObject<'a>],
    ) {
        let difficulty =
            StaminaEvaluator::evaluate_diff_of(curr, self.objects) * Self::SKILL_MULTIPLIER;

        self.strains.add_strain(difficulty, curr, objects);
    }

    fn difficulty_value(&self) -> f64 {
        self.strains.difficulty_value()
    }
}
