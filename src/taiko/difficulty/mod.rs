use crate::{
    any::difficulty::{skills::Skill, Difficulty, SkillKind, SkillRatings},
    model::error::TimelineError,
    taiko::object::{validate_timeline, TaikoObject},
    util::{log_debug, log_warn},
};

use self::{
    object::TaikoDifficultyObjects,
    skills::{Color, Stamina},
};

pub mod color;
pub mod evaluators;
pub mod object;
pub mod skills;

/// The skills rated for drum timelines.
pub const TAIKO_SKILLS: [SkillKind; 2] = [SkillKind::Color, SkillKind::Stamina];

pub fn difficulty(
    difficulty: &Difficulty,
    hit_objects: &[TaikoObject],
) -> Result<SkillRatings, TimelineError> {
    if let Err(err) = difficulty
        .validate()
        .and_then(|()| validate_timeline(hit_objects))
    {
        log_warn!(%err, "Rejected drum timeline");

        return Err(err);
    }

    let objects = TaikoDifficultyObjects::new(hit_objects, difficulty.get_clock_rate());

    log_debug!(
        n_objects = objects.len(),
        n_mono_streaks = objects.color.mono_streaks.len(),
        n_repeating_hit_patterns = objects.color.repeating_hit_patterns.len(),
        "Created drum difficulty objects"
    );

    let mut ratings = SkillRatings::zeroed(&TAIKO_SKILLS);

    if objects.is_empty() {
        return Ok(ratings);
    }

    let section_length = difficulty.get_section_length();

    let (color, stamina) = rayon::join(
        || Color::new(section_length, &objects).process_all(&objects.objects),
        || Stamina::new(section_length, &objects).process_all(&objects.objects),
    );

    log_debug!(color, stamina, "Evaluated drum skills");

    ratings.insert(SkillKind::Color, color);
    ratings.insert(SkillKind::Stamina, stamina);
    ratings.scale(difficulty.get_multiplier());

    Ok(ratings)
}
