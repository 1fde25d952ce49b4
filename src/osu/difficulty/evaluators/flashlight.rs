use std::cmp;

use crate::{
    any::difficulty::object::IDifficultyObject,
    model::hit_object::HitObjectKind,
    osu::difficulty::object::OsuDifficultyObject,
};

pub struct FlashlightEvaluator;

impl FlashlightEvaluator {
    const MAX_OPACITY_BONUS: f64 = 0.4;
    const HIDDEN_BONUS: f64 = 0.2;

    const MIN_VELOCITY: f64 = 0.5;
    const SLIDER_MULTIPLIER: f64 = 1.3;

    const MIN_ANGLE_MULTIPLIER: f64 = 0.2;

    /// Evaluates the difficulty of memorising and hitting the current object,
    /// based on:
    ///
    /// - distance between a number of previous objects and the current object,
    /// - the visual opacity of the current object,
    /// - the angle made by the current object,
    /// - length and speed of the current object (for sliders),
    /// - and whether hidden is active.
    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let scaling_factor = curr.scaling_factor;
        let pos = curr.base.stacked_pos();

        let mut small_dist_nerf = 1.0;
        let mut cumulative_strain_time = 0.0;

        let mut result = 0.0;

        let mut last_obj = curr;

        let mut angle_repeat_count = 0.0;

        // * This is iterating backwards in time from the current object.
        for i in 0..cmp::min(curr.idx, 10) {
            let Some(curr_obj) = curr.previous(i, diff_objects) else {
                break;
            };

            cumulative_strain_time += last_obj.strain_time;

            if !curr_obj.base.is_spinner() {
                let jump_dist = f64::from((pos - curr_obj.base.stacked_end_pos()).length());

                // * We want to nerf objects that can be easily seen within the Flashlight circle radius.
                if i == 0 {
                    small_dist_nerf = (jump_dist / 75.0).min(1.0);
                }

                // * We also want to nerf stacks so that only the first object of the stack is accounted for.
                let stack_nerf = ((curr_obj.jump_dist / scaling_factor) / 25.0).min(1.0);

                // * Bonus based on how visible the object is.
                let opacity_bonus = 1.0
                    + Self::MAX_OPACITY_BONUS
                        * (1.0 - curr.opacity_at(curr_obj.start_time, hidden));

                result +=
                    stack_nerf * opacity_bonus * scaling_factor * jump_dist / cumulative_strain_time;

                if let Some((curr_obj_angle, curr_angle)) = curr_obj.angle.zip(curr.angle) {
                    // * Objects further back in time should count less for the nerf.
                    if (curr_obj_angle - curr_angle).abs() < 0.02 {
                        angle_repeat_count += (1.0 - 0.1 * i as f64).max(0.0);
                    }
                }
            }

            last_obj = curr_obj;
        }

        result = (small_dist_nerf * result).powf(2.0);

        // * Additional bonus for Hidden due to there being no approach circles.
        if hidden {
            result *= 1.0 + Self::HIDDEN_BONUS;
        }

        // * Nerf patterns with repeated angles.
        result *= Self::MIN_ANGLE_MULTIPLIER
            + (1.0 - Self::MIN_ANGLE_MULTIPLIER) / (angle_repeat_count + 1.0);

        let mut slider_bonus = 0.0;

        if let HitObjectKind::Slider(ref path) = curr.base.kind {
            // * Reward sliders based on velocity.
            slider_bonus = ((path.length / curr.travel_time - Self::MIN_VELOCITY).max(0.0)).powf(0.5);

            // * Longer sliders require more memorisation.
            slider_bonus *= path.length;

            // * Nerf sliders with repeats, as less memorisation is required.
            if path.repeats > 0 {
                slider_bonus /= (path.repeats + 1) as f64;
            }
        }

        result += slider_bonus * Self::SLIDER_MULTIPLIER;

        result
    }
}
