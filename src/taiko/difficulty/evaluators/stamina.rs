use crate::{
    any::difficulty::object::IDifficultyObject,
    taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects},
};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    const COLOR_CHANGE_WINDOW: f64 = 300.0;

    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        if curr.hit_type.is_none() {
            return 0.0;
        }

        // * Find the previous hit object hit by the current finger, which is n notes prior, n being the number of
        // * available fingers.
        let prev = curr.previous(1, &objects.objects);
        let prev_mono = objects.previous_mono(curr, Self::available_fingers_for(curr, objects) - 1);

        // * Add a base strain to all objects
        let mut object_strain = 0.5;

        let Some(prev) = prev else {
            return object_strain;
        };

        if let Some(prev_mono) = prev_mono {
            object_strain += Self::speed_bonus(curr.start_time - prev_mono.start_time)
                + 0.5 * Self::speed_bonus(curr.start_time - prev.start_time);
        }

        object_strain
    }

    /// Two fingers around colour changes, eight within long mono streaks.
    pub fn available_fingers_for(
        hit_object: &TaikoDifficultyObject,
        hit_objects: &TaikoDifficultyObjects,
    ) -> usize {
        let prev_color_change = hit_objects.previous_color_change(hit_object);

        if prev_color_change
            .is_some_and(|change| hit_object.start_time - change.start_time < Self::COLOR_CHANGE_WINDOW)
        {
            return 2;
        }

        let next_color_change = hit_objects.next_color_change(hit_object);

        if next_color_change
            .is_some_and(|change| change.start_time - hit_object.start_time < Self::COLOR_CHANGE_WINDOW)
        {
            return 2;
        }

        8
    }

    fn speed_bonus(interval: f64) -> f64 {
        // * Interval is capped at a very small value to prevent infinite values.
        20.0 / interval.max(1.0)
    }
}
