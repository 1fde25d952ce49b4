use crate::{
    taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    util::difficulty::sigmoid,
};

pub struct ColorEvaluator;

impl ColorEvaluator {
    /// Sums the difficulty of every colour encoding that starts at the
    /// current object.
    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        let color = &objects.color;
        let data = curr.color;
        let mut difficulty = 0.0;

        if let Some(streak_idx) = data.mono_streak {
            let is_first = color
                .mono_streaks
                .get(streak_idx)
                .and_then(|streak| streak.first_hit_object())
                == Some(curr.idx);

            if is_first {
                difficulty += Self::eval_mono_streak_diff(objects, streak_idx);
            }
        }

        if let Some(pattern_idx) = data.alternating_mono_pattern {
            if color.pattern_first_hit_object(pattern_idx) == Some(curr.idx) {
                difficulty += Self::eval_alternating_mono_pattern_diff(objects, pattern_idx);
            }
        }

        if let Some(repeating_idx) = data.repeating_hit_patterns {
            if color.repeating_first_hit_object(repeating_idx) == Some(curr.idx) {
                difficulty += Self::eval_repeating_hit_patterns_diff(objects, repeating_idx);
            }
        }

        difficulty
    }

    /// Streaks further into their pattern are harder.
    pub fn eval_mono_streak_diff(objects: &TaikoDifficultyObjects, streak_idx: usize) -> f64 {
        let Some(streak) = objects.color.mono_streaks.get(streak_idx) else {
            return 0.0;
        };

        let parent_eval = Self::eval_alternating_mono_pattern_diff(objects, streak.parent);

        sigmoid(streak.idx as f64, 2.0, 2.0, 0.5, 1.0) * parent_eval * 0.5
    }

    pub fn eval_alternating_mono_pattern_diff(
        objects: &TaikoDifficultyObjects,
        pattern_idx: usize,
    ) -> f64 {
        let Some(pattern) = objects.color.alternating_mono_patterns.get(pattern_idx) else {
            return 0.0;
        };

        let parent_eval = Self::eval_repeating_hit_patterns_diff(objects, pattern.parent);

        sigmoid(pattern.idx as f64, 2.0, 2.0, 0.5, 1.0) * parent_eval
    }

    /// Patterns that were seen recently are easier.
    pub fn eval_repeating_hit_patterns_diff(
        objects: &TaikoDifficultyObjects,
        repeating_idx: usize,
    ) -> f64 {
        let Some(repeating) = objects.color.repeating_hit_patterns.get(repeating_idx) else {
            return 0.0;
        };

        let repetition_interval = repeating.repetition_interval as f64;

        2.0 * (1.0 - sigmoid(repetition_interval, 2.0, 2.0, 0.5, 1.0))
    }
}
