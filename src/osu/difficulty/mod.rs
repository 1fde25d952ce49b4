use crate::{
    any::difficulty::{Difficulty, SkillKind, SkillRatings},
    model::{
        error::TimelineError,
        hit_object::{validate_timeline, HitObject},
    },
    util::{log_debug, log_warn},
};

use self::{
    object::{Neighbours, OsuDifficultyObject},
    skills::{OsuSkillValues, OsuSkills},
};

pub mod evaluators;
pub mod object;
pub mod skills;

const HD_FADE_IN_DURATION_MULTIPLIER: f64 = 0.4;
const HD_FADE_OUT_DURATION_MULTIPLIER: f64 = 0.3;

/// The skills rated for positioned hitobjects.
pub const OSU_SKILLS: [SkillKind; 5] = [
    SkillKind::Aim,
    SkillKind::AimNoSliders,
    SkillKind::Reading,
    SkillKind::Cognition,
    SkillKind::Flashlight,
];

pub fn difficulty(
    difficulty: &Difficulty,
    hit_objects: &[HitObject],
) -> Result<SkillRatings, TimelineError> {
    if let Err(err) = difficulty
        .validate()
        .and_then(|()| validate_timeline(hit_objects))
    {
        log_warn!(%err, "Rejected timeline");

        return Err(err);
    }

    let clock_rate = difficulty.get_clock_rate();
    let preempt = difficulty.get_preempt();

    let diff_objects = create_difficulty_objects(hit_objects, clock_rate, preempt);

    log_debug!(
        n_objects = diff_objects.len(),
        clock_rate,
        preempt,
        "Created difficulty objects"
    );

    let mut ratings = SkillRatings::zeroed(&OSU_SKILLS);

    if diff_objects.is_empty() {
        return Ok(ratings);
    }

    let OsuSkillValues {
        aim,
        aim_no_sliders,
        reading,
        cognition,
        flashlight,
    } = OsuSkills::new(difficulty).evaluate(&diff_objects);

    log_debug!(
        aim,
        aim_no_sliders,
        reading,
        cognition,
        flashlight,
        "Evaluated skills"
    );

    ratings.insert(SkillKind::Aim, aim);
    ratings.insert(SkillKind::AimNoSliders, aim_no_sliders);
    ratings.insert(SkillKind::Reading, reading);
    ratings.insert(SkillKind::Cognition, cognition);
    ratings.insert(SkillKind::Flashlight, flashlight);
    ratings.scale(difficulty.get_multiplier());

    Ok(ratings)
}

/// Enriches every hitobject but the first one.
///
/// `preempt` must already be adjusted by the clock rate.
pub fn create_difficulty_objects(
    hit_objects: &[HitObject],
    clock_rate: f64,
    preempt: f64,
) -> Vec<OsuDifficultyObject<'_>> {
    let Some((first, rest)) = hit_objects.split_first() else {
        return Vec::new();
    };

    let mut diff_objects = Vec::with_capacity(rest.len());

    let mut last = first;
    let mut last_last = None;
    let mut last_clickable = first;

    for (idx, h) in rest.iter().enumerate() {
        let neighbours = Neighbours {
            last,
            last_last,
            last_clickable,
        };

        diff_objects.push(OsuDifficultyObject::new(
            h,
            &neighbours,
            clock_rate,
            preempt,
            idx,
        ));

        if h.is_clickable() {
            last_clickable = h;
        }

        last_last = Some(last);
        last = h;
    }

    set_visible_objects(&mut diff_objects);

    diff_objects
}

/// Stores the range of objects that are visible at each object's start time.
///
/// Start times are non-decreasing and the preempt is shared, so the end of
/// the range only ever moves forward.
fn set_visible_objects(diff_objects: &mut [OsuDifficultyObject<'_>]) {
    let mut end = 0;

    for idx in 0..diff_objects.len() {
        let visible_until = diff_objects[idx].start_time + diff_objects[idx].preempt;
        end = end.max(idx + 1);

        while diff_objects
            .get(end)
            .is_some_and(|h| h.start_time <= visible_until)
        {
            end += 1;
        }

        let curr = &mut diff_objects[idx];
        curr.visible = idx + 1..end;
        curr.note_density = end - (idx + 1);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{Pos, SliderNodeKind};

    use super::*;

    #[test]
    fn fewer_than_two_objects() {
        assert!(create_difficulty_objects(&[], 1.0, 600.0).is_empty());

        let single = [HitObject::circle(Pos::default(), 0.0, 32.0)];
        assert!(create_difficulty_objects(&single, 1.0, 600.0).is_empty());
    }

    #[test]
    fn time_floor_with_duplicate_timestamps() {
        let hit_objects: Vec<_> = (0..6)
            .map(|i| HitObject::circle(Pos::new(10.0 * i as f32, 0.0), 1000.0, 32.0))
            .collect();

        let diff_objects = create_difficulty_objects(&hit_objects, 1.5, 600.0);

        assert_eq!(diff_objects.len(), 5);

        for h in diff_objects.iter() {
            assert!(h.strain_time >= OsuDifficultyObject::MIN_DELTA_TIME);
            assert!(h.tap_time >= OsuDifficultyObject::MIN_DELTA_TIME);
            assert!(h.delta_time.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn angle_needs_two_raw_predecessors() {
        let hit_objects: Vec<_> = (0..5_u32)
            .map(|i| HitObject::circle(Pos::new(50.0 * i as f32, 0.0), 100.0 * f64::from(i), 32.0))
            .collect();

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);

        assert!(diff_objects[0].angle.is_none());

        for h in &diff_objects[1..] {
            let angle = h.angle.unwrap();
            assert!((angle - std::f64::consts::PI).abs() < 1e-6);
        }
    }

    #[test]
    fn spinners_only_prevent_angles() {
        let hit_objects = [
            HitObject::circle(Pos::new(0.0, 0.0), 0.0, 32.0),
            HitObject::circle(Pos::new(100.0, 0.0), 100.0, 32.0),
            HitObject::spinner(Pos::new(256.0, 192.0), 200.0, 1000.0, 32.0),
            HitObject::circle(Pos::new(200.0, 0.0), 1100.0, 32.0),
            HitObject::circle(Pos::new(300.0, 0.0), 1200.0, 32.0),
            HitObject::circle(Pos::new(400.0, 0.0), 1300.0, 32.0),
        ];

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);

        // Distances to and from the spinner are still measured
        assert!(diff_objects[1].jump_dist > 0.0);
        assert!(diff_objects[1].angle.is_some());
        assert!(diff_objects[2].jump_dist > 0.0);
        assert!(diff_objects[2].angle.is_none());

        // The spinner is two objects back
        assert!(diff_objects[3].angle.is_none());
        assert!(diff_objects[3].jump_dist > 0.0);

        assert!(diff_objects[4].angle.is_some());
    }

    #[test]
    fn tap_time_skips_slider_nodes() {
        let hit_objects = [
            HitObject::circle(Pos::new(0.0, 0.0), 0.0, 32.0),
            HitObject::slider_node(Pos::new(50.0, 0.0), 100.0, 32.0, SliderNodeKind::Tick),
            HitObject::slider_node(Pos::new(100.0, 0.0), 200.0, 32.0, SliderNodeKind::Tail),
            HitObject::circle(Pos::new(0.0, 0.0), 300.0, 32.0),
        ];

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);
        let last = &diff_objects[2];

        assert!((last.strain_time - 100.0).abs() < f64::EPSILON);
        assert!((last.tap_time - 300.0).abs() < f64::EPSILON);
        assert!(last.tap_dist.abs() < f64::EPSILON);
    }

    #[test]
    fn visible_range_and_density() {
        let hit_objects: Vec<_> = (0..10_u32)
            .map(|i| HitObject::circle(Pos::default(), 200.0 * f64::from(i), 32.0))
            .collect();

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);

        // Objects at +200, +400, and +600 are visible
        assert_eq!(diff_objects[0].note_density, 3);
        assert_eq!(diff_objects[0].visible, 1..4);

        let last = diff_objects.last().unwrap();
        assert_eq!(last.note_density, 0);
        assert!(last.visible_objects(&diff_objects).is_empty());

        assert_eq!(diff_objects[7].note_density, 1);
    }

    #[test]
    fn visibility_fraction() {
        let hit_objects: Vec<_> = (0..3_u32)
            .map(|i| HitObject::circle(Pos::default(), 300.0 * f64::from(i), 32.0))
            .collect();

        let diff_objects = create_difficulty_objects(&hit_objects, 1.0, 600.0);
        let h = &diff_objects[1];

        assert!(h.visibility_at(0.0).abs() < f64::EPSILON);
        assert!((h.visibility_at(300.0) - 0.5).abs() < f64::EPSILON);
        assert!((h.visibility_at(600.0) - 1.0).abs() < f64::EPSILON);
        assert!((h.visibility_at(900.0) - 1.0).abs() < f64::EPSILON);
    }
}
