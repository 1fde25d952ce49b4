use crate::{
    any::difficulty::skills::{Skill, StrainSet},
    osu::difficulty::{evaluators::AimEvaluator, object::OsuDifficultyObject},
};

/// Aim strain with and without the slider bonus, tracked concurrently.
#[derive(Clone, Debug)]
pub struct Aim {
    with_sliders: StrainSet,
    without_sliders: StrainSet,
}

impl Aim {
    const SKILL_MULTIPLIER: f64 = 23.55;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    pub fn new(section_length: f64) -> Self {
        let strains = StrainSet::new()
            .with_section_length(section_length)
            .with_strain_decay_base(Self::STRAIN_DECAY_BASE);

        Self {
            with_sliders: strains.clone(),
            without_sliders: strains,
        }
    }

    /// The aim rating when slider paths are ignored.
    pub fn difficulty_value_without_sliders(&self) -> f64 {
        self.without_sliders.difficulty_value()
    }
}

impl Skill for Aim {
    type DifficultyObject<'a> = OsuDifficultyObject<'a>;

    fn process<'a>(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        let value = AimEvaluator::evaluate_diff_of(curr, objects);

        self.with_sliders
            .add_strain(value.with_sliders * Self::SKILL_MULTIPLIER, curr, objects);
        self.without_sliders
            .add_strain(value.without_sliders * Self::SKILL_MULTIPLIER, curr, objects);
    }

    fn difficulty_value(&self) -> f64 {
        self.with_sliders.difficulty_value()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::hit_object::{HitObject, Pos, SliderPath},
        osu::difficulty::create_difficulty_objects,
    };

    use super::*;

    #[test]
    fn sliders_only_add_difficulty() {
        let path = |x: f32| SliderPath {
            end_pos: Pos::new(x, 150.0),
            length: 150.0,
            repeats: 0,
        };

        let hit_objects: Vec<_> = (0..16_u32)
            .map(|i| {
                let x = 300.0 * (i % 2) as f32;
                let start_time = 400.0 * f64::from(i);

                if i % 4 == 0 {
                    HitObject::slider(Pos::new(x, 0.0), start_time, start_time + 200.0, 32.0, path(x))
                } else {
                    HitObject::circle(Pos::new(x, 0.0), start_time, 32.0)
                }
            })
            .collect();

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);

        let mut aim = Aim::new(400.0);

        for curr in diff_objects.iter() {
            aim.process(curr, &diff_objects);
        }

        let with_sliders = aim.difficulty_value();
        let without_sliders = aim.difficulty_value_without_sliders();

        assert!(without_sliders > 0.0);
        assert!(with_sliders > without_sliders);
    }
}
