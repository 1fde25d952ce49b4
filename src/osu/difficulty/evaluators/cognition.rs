use std::iter;

use crate::{
    osu::difficulty::object::OsuDifficultyObject,
    util::difficulty::{logistic, smoothstep},
};

/// Difficulty of memorising objects that are barely or not at all visible.
pub struct CognitionEvaluator;

impl CognitionEvaluator {
    const MIN_HORIZON: f64 = OsuDifficultyObject::MIN_DELTA_TIME;

    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let horizon = curr.preempt.max(Self::MIN_HORIZON);
        let visible = curr.visible_objects(diff_objects);

        let mut difficulty = 0.0;

        for h in iter::once(curr).chain(visible) {
            if h.base.is_spinner() {
                continue;
            }

            // * How much of the object has to be remembered rather than seen.
            let hidden_amount = 1.0 - h.opacity_at(curr.start_time, hidden);

            if hidden_amount <= 0.0 {
                continue;
            }

            let velocity = h.jump_dist / h.strain_time;

            // * Objects that are stacked or barely move are easy to keep track of.
            let movement = logistic(
                h.jump_dist,
                f64::from(OsuDifficultyObject::NORMALIZED_RADIUS),
                0.1,
                None,
            );

            let time_weight = 1.0 - smoothstep(h.start_time - curr.start_time, 0.0, horizon);

            difficulty += hidden_amount * velocity * movement * time_weight;
        }

        difficulty
    }
}
