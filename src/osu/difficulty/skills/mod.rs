use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    osu::difficulty::object::OsuDifficultyObject,
};

use self::{aim::Aim, cognition::Cognition, flashlight::Flashlight, reading::Reading};

pub mod aim;
pub mod cognition;
pub mod flashlight;
pub mod reading;

/// All skills of a calculation. Skills whose mods are missing are `None`.
pub struct OsuSkills {
    pub aim: Aim,
    pub reading: Reading,
    pub cognition: Option<Cognition>,
    pub flashlight: Option<Flashlight>,
}

/// Final values of [`OsuSkills`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OsuSkillValues {
    pub aim: f64,
    pub aim_no_sliders: f64,
    pub reading: f64,
    pub cognition: f64,
    pub flashlight: f64,
}

impl OsuSkills {
    pub fn new(difficulty: &Difficulty) -> Self {
        let mods = difficulty.get_mods();
        let section_length = difficulty.get_section_length();
        let hidden = mods.hd();

        Self {
            aim: Aim::new(section_length),
            reading: Reading::new(hidden),
            cognition: (hidden || mods.fl()).then(|| Cognition::new(hidden)),
            flashlight: mods.fl().then(|| Flashlight::new(section_length, hidden)),
        }
    }

    /// Runs every skill over all objects.
    ///
    /// Skills don't share state so each one folds the objects on its own
    /// thread.
    pub fn evaluate(self, objects: &[OsuDifficultyObject<'_>]) -> OsuSkillValues {
        let Self {
            aim,
            reading,
            cognition,
            flashlight,
        } = self;

        let ((aim, aim_no_sliders), (reading, (cognition, flashlight))) = rayon::join(
            || {
                let aim = run(aim, objects);

                (aim.difficulty_value(), aim.difficulty_value_without_sliders())
            },
            || {
                rayon::join(
                    || reading.process_all(objects),
                    || {
                        rayon::join(
                            || cognition.map_or(0.0, |skill| skill.process_all(objects)),
                            || flashlight.map_or(0.0, |skill| skill.process_all(objects)),
                        )
                    },
                )
            },
        );

        OsuSkillValues {
            aim,
            aim_no_sliders,
            reading,
            cognition,
            flashlight,
        }
    }
}

fn run<'a, S>(mut skill: S, objects: &[S::DifficultyObject<'a>]) -> S
where
    S: Skill,
{
    for curr in objects {
        skill.process(curr, objects);
    }

    skill
}
