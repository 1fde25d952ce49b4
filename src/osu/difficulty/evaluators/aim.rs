use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::{difficulty::sin_squared_ramp, float_ext::FloatExt},
};

/// Aim difficulty of a single object, once with and once without taking
/// slider paths into account.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AimDifficultyValue {
    pub with_sliders: f64,
    pub without_sliders: f64,
}

/// The parts that make up the aim strain of an object.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AimStrain {
    pub velocity: f64,
    pub wide_angle_bonus: f64,
    pub acute_angle_bonus: f64,
    pub velocity_change_bonus: f64,
}

impl AimStrain {
    pub fn total(&self) -> f64 {
        // * Add in acute angle bonus or wide angle bonus + velocity change bonus, whichever is larger.
        self.velocity
            + f64::max(
                self.acute_angle_bonus * AimEvaluator::ACUTE_ANGLE_MULTIPLIER,
                self.wide_angle_bonus * AimEvaluator::WIDE_ANGLE_MULTIPLIER
                    + self.velocity_change_bonus * AimEvaluator::VELOCITY_CHANGE_MULTIPLIER,
            )
    }
}

pub struct AimEvaluator;

impl AimEvaluator {
    const WIDE_ANGLE_MULTIPLIER: f64 = 1.5;
    const ACUTE_ANGLE_MULTIPLIER: f64 = 1.95;
    const SLIDER_MULTIPLIER: f64 = 1.35;
    const VELOCITY_CHANGE_MULTIPLIER: f64 = 0.75;

    /// Evaluates the difficulty of aiming the current object, based on:
    ///
    /// - cursor velocity to the current object,
    /// - angle difficulty,
    /// - sharp velocity increases,
    /// - and slider difficulty.
    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
    ) -> AimDifficultyValue {
        let osu_curr_obj = curr;

        let Some((osu_last_obj, osu_last_last_obj)) = curr
            .previous(0, diff_objects)
            .zip(curr.previous(1, diff_objects))
            .filter(|(last, _)| !(curr.base.is_spinner() || last.base.is_spinner()))
        else {
            return AimDifficultyValue::default();
        };

        let mut curr_velocity = osu_curr_obj.jump_dist / osu_curr_obj.strain_time;
        let mut prev_velocity = osu_last_obj.jump_dist / osu_last_obj.strain_time;

        // * Before we deduce whether any objects are sliders, lets calculate the strain as if they are circles.
        let without_sliders = Self::calculate_aim_strain(
            osu_curr_obj,
            osu_last_obj,
            osu_last_last_obj,
            curr_velocity,
            prev_velocity,
        )
        .total();

        let last_is_slider = osu_last_obj.base.is_slider();
        let last_last_is_slider = osu_last_last_obj.base.is_slider();

        if !(last_is_slider || last_last_is_slider) {
            return AimDifficultyValue {
                with_sliders: without_sliders,
                without_sliders,
            };
        }

        let mut slider_bonus = 0.0;

        if last_is_slider {
            // * Calculate the slider velocity from slider head to slider end.
            let travel_velocity = osu_last_obj.travel_dist / osu_last_obj.travel_time;
            // * Calculate the movement velocity from slider end to current object.
            let movement_velocity = osu_curr_obj.min_jump_dist / osu_curr_obj.min_jump_time;

            // * Take the larger total combined velocity.
            curr_velocity = curr_velocity.max(movement_velocity + travel_velocity);

            // * Reward sliders based on velocity.
            slider_bonus = travel_velocity;
        }

        if last_last_is_slider {
            let travel_velocity = osu_last_last_obj.travel_dist / osu_last_last_obj.travel_time;
            let movement_velocity = osu_last_obj.min_jump_dist / osu_last_obj.min_jump_time;

            prev_velocity = prev_velocity.max(movement_velocity + travel_velocity);
        }

        let with_sliders = Self::calculate_aim_strain(
            osu_curr_obj,
            osu_last_obj,
            osu_last_last_obj,
            curr_velocity,
            prev_velocity,
        )
        .total()
            + slider_bonus * Self::SLIDER_MULTIPLIER;

        AimDifficultyValue {
            with_sliders,
            without_sliders,
        }
    }

    pub fn calculate_aim_strain(
        osu_curr_obj: &OsuDifficultyObject<'_>,
        osu_last_obj: &OsuDifficultyObject<'_>,
        osu_last_last_obj: &OsuDifficultyObject<'_>,
        curr_velocity: f64,
        prev_velocity: f64,
    ) -> AimStrain {
        let mut wide_angle_bonus = 0.0;
        let mut acute_angle_bonus = 0.0;
        let mut velocity_change_bonus = 0.0;

        let curr_time = osu_curr_obj.strain_time;
        let last_time = osu_last_obj.strain_time;

        // * If rhythms are the same.
        if curr_time.max(last_time) < 1.25 * curr_time.min(last_time) {
            if let Some(((curr_angle, last_angle), last_last_angle)) = osu_curr_obj
                .angle
                .zip(osu_last_obj.angle)
                .zip(osu_last_last_obj.angle)
            {
                // * Rewarding angles, take the smaller velocity as base.
                let angle_bonus = curr_velocity.min(prev_velocity);

                wide_angle_bonus = Self::calc_wide_angle_bonus(curr_angle);
                acute_angle_bonus = Self::calc_acute_angle_bonus(curr_angle);

                // * Only buff deltaTime exceeding 300 bpm 1/2.
                if curr_time > 100.0 {
                    acute_angle_bonus = 0.0;
                } else {
                    acute_angle_bonus *=
                        // * Multiply by previous angle, we don't want to buff unless this is a wiggle type pattern.
                        Self::calc_acute_angle_bonus(last_angle)
                        // * The maximum velocity we buff is equal to 125 / strainTime
                        * angle_bonus.min(125.0 / curr_time)
                        // * scale buff from 150 bpm 1/4 to 200 bpm 1/4
                        * sin_squared_ramp(((100.0 - curr_time) / 25.0).min(1.0))
                        // * Buff distance exceeding 50 (radius) up to 100 (diameter).
                        * sin_squared_ramp((osu_curr_obj.jump_dist.clamp(50.0, 100.0) - 50.0) / 50.0);
                }

                // * Penalize wide angles if they're repeated, reducing the penalty as the lastAngle gets more acute.
                wide_angle_bonus *= angle_bonus
                    * (1.0
                        - wide_angle_bonus.min(Self::calc_wide_angle_bonus(last_angle).powf(3.0)));

                // * Penalize acute angles if they're repeated, reducing the penalty as the lastLastAngle gets more obtuse.
                acute_angle_bonus *= 0.5
                    + 0.5
                        * (1.0
                            - acute_angle_bonus
                                .min(Self::calc_acute_angle_bonus(last_last_angle).powf(3.0)));
            }
        }

        if FloatExt::not_eq(curr_velocity.max(prev_velocity), 0.0) {
            // * We want to use the average velocity over the whole object when awarding differences, not the individual jump and slider path velocities.
            let prev_velocity = (osu_last_obj.jump_dist + osu_last_last_obj.travel_dist) / last_time;
            let curr_velocity = (osu_curr_obj.jump_dist + osu_last_obj.travel_dist) / curr_time;

            let velocity_diff = (prev_velocity - curr_velocity).abs();

            // * Scale with ratio of difference compared to 0.5 * max dist.
            let dist_ratio = f64::powf(
                f64::sin(FRAC_PI_2 * velocity_diff.safe_div(prev_velocity.max(curr_velocity))),
                2.0,
            );

            // * Reward for % distance up to 125 / strainTime for overlaps where velocity is still changing.
            let overlap_velocity_buff = (125.0 / curr_time.min(last_time)).min(velocity_diff);

            velocity_change_bonus = overlap_velocity_buff * dist_ratio;

            // * Penalize for rhythm changes.
            velocity_change_bonus *= (curr_time.min(last_time) / curr_time.max(last_time)).powf(2.0);
        }

        AimStrain {
            velocity: curr_velocity,
            wide_angle_bonus,
            acute_angle_bonus,
            velocity_change_bonus,
        }
    }

    pub fn calc_wide_angle_bonus(angle: f64) -> f64 {
        f64::powf(
            f64::sin(3.0 / 4.0 * ((5.0 / 6.0 * PI).min((PI / 6.0).max(angle)) - PI / 6.0)),
            2.0,
        )
    }

    pub fn calc_acute_angle_bonus(angle: f64) -> f64 {
        1.0 - Self::calc_wide_angle_bonus(angle)
    }
}
