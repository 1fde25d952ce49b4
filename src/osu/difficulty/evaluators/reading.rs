use std::collections::HashMap;

use rosu_map::util::Pos;

use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::{
        difficulty::{logistic, smoothstep},
        float_ext::FloatExt,
    },
};

/// Counts how often each rhythm ratio occurred so far.
///
/// Every repetition of a ratio makes it easier to memorise, so its
/// contribution shrinks linearly until it vanishes after
/// [`RhythmRepeats::MAX_REPEATS`] occurrences.
#[derive(Clone, Debug, Default)]
pub struct RhythmRepeats {
    counts: HashMap<i64, u32>,
}

impl RhythmRepeats {
    pub const MAX_REPEATS: f64 = 4.0;

    /// Ratios are bucketed in steps of `1 / RATIO_PRECISION`.
    const RATIO_PRECISION: f64 = 20.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one occurrence of `ratio` and returns the factor that its
    /// contribution is multiplied with.
    pub fn register(&mut self, ratio: f64) -> f64 {
        let count = self.counts.entry(Self::key(ratio)).or_insert(0);
        let factor = (1.0 - f64::from(*count) / Self::MAX_REPEATS).max(0.0);
        *count += 1;

        factor
    }

    /// How often `ratio` occurred so far.
    pub fn count(&self, ratio: f64) -> u32 {
        self.counts.get(&Self::key(ratio)).copied().unwrap_or(0)
    }

    fn key(ratio: f64) -> i64 {
        (ratio * Self::RATIO_PRECISION).round() as i64
    }
}

/// Difficulty of reading the current object given everything that is on
/// screen around its hit time.
pub struct ReadingEvaluator;

impl ReadingEvaluator {
    /// Objects up to this many milliseconds before the current one are still
    /// on screen.
    const BACKWARD_HORIZON: f64 = 250.0;
    const FORWARD_HORIZON: f64 = 3000.0;

    const OVERLAP_STEEPNESS: f64 = 0.06;
    const PREDICTABLE_RHYTHM_FACTOR: f64 = 0.25;
    const DISORDER_BONUS: f64 = 0.5;
    const SPACING_CHANGE_BONUS: f64 = 0.5;

    const DENSITY_MULTIPLIER: f64 = 0.025;
    const HIDDEN_DENSITY_MULTIPLIER: f64 = 0.1;
    const LOW_PREEMPT_THRESHOLD: f64 = 400.0;
    const LOW_PREEMPT_MULTIPLIER: f64 = 0.008;
    const COMPLEXITY_MULTIPLIER: f64 = 0.5;
    const COMPLEXITY_EXPONENT: f64 = 1.2;

    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
        repeats: &mut RhythmRepeats,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let window = Self::reading_window(curr, diff_objects);

        let mut value = Self::density_value(curr, window.len(), hidden);

        // Nothing to misread if barely anything is on screen
        if curr.note_density <= 1 {
            return value;
        }

        let rhythm = Self::rhythm_complexity(curr, &window, repeats);
        let aim = Self::aim_complexity(curr, &window, diff_objects);

        value += (rhythm + aim).powf(Self::COMPLEXITY_EXPONENT) * Self::COMPLEXITY_MULTIPLIER;

        value
    }

    /// All objects on screen around the current object's hit time in
    /// chronological order, including the current object.
    pub fn reading_window<'a, 'b>(
        curr: &'b OsuDifficultyObject<'a>,
        diff_objects: &'b [OsuDifficultyObject<'a>],
    ) -> Vec<&'b OsuDifficultyObject<'a>> {
        let visible = curr.visible_objects(diff_objects);
        let mut window = Vec::with_capacity(visible.len() + 8);

        let mut i = 0;

        while let Some(prev) = curr.previous(i, diff_objects) {
            if curr.start_time - prev.start_time > Self::BACKWARD_HORIZON {
                break;
            }

            window.push(prev);
            i += 1;
        }

        window.reverse();
        window.push(curr);

        window.extend(
            visible
                .iter()
                .take_while(|h| h.start_time - curr.start_time <= Self::FORWARD_HORIZON),
        );

        window
    }

    /// Overlapping objects with an unpredictable rhythm in between them.
    ///
    /// Every pair registers its timing ratio in `repeats`, so ratios that
    /// occurred before contribute less.
    pub fn rhythm_complexity(
        curr: &OsuDifficultyObject<'_>,
        window: &[&OsuDifficultyObject<'_>],
        repeats: &mut RhythmRepeats,
    ) -> f64 {
        let mut complexity = 0.0;

        for pair in window.windows(2) {
            let [a, b] = pair else { continue };

            if a.base.is_spinner() || b.base.is_spinner() {
                continue;
            }

            let dist = Self::normalized_dist(curr, a.base.stacked_pos(), b.base.stacked_pos());
            let overlap = Self::overlap(dist);

            let time_ratio = Self::ratio(a.strain_time, b.strain_time);

            // Evenly spaced rhythms are predictable
            let unpredictability = Self::PREDICTABLE_RHYTHM_FACTOR
                + (1.0 - Self::PREDICTABLE_RHYTHM_FACTOR) * smoothstep(time_ratio, 1.0, 1.5);

            let disorder = 1.0 + Self::DISORDER_BONUS * b.angle.map_or(0.0, f64::sin);

            let dist_ratio = Self::ratio(a.jump_dist + 10.0, b.jump_dist + 10.0);
            let spacing_change =
                1.0 + Self::SPACING_CHANGE_BONUS * smoothstep(dist_ratio * time_ratio, 1.0, 3.0);

            let repeat_factor = repeats.register(time_ratio);

            complexity += overlap
                * repeat_factor
                * unpredictability
                * disorder
                * spacing_change
                * Self::falloff(curr, b)
                * b.visibility_at(curr.start_time);
        }

        complexity
    }

    /// Objects that lie on the path from the current object to the next one.
    pub fn aim_complexity(
        curr: &OsuDifficultyObject<'_>,
        window: &[&OsuDifficultyObject<'_>],
        diff_objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        let Some(next) = curr.next(0, diff_objects) else {
            return 0.0;
        };

        if next.base.is_spinner() {
            return 0.0;
        }

        let start = curr.base.stacked_pos();
        let end = next.base.stacked_pos();

        let movement = Self::normalized_dist(curr, start, end);
        let movement_factor = logistic(
            movement,
            f64::from(OsuDifficultyObject::NORMALIZED_RADIUS),
            0.1,
            None,
        );

        let radius = curr.base.radius;
        let mut complexity = 0.0;

        for h in window.iter().filter(|h| h.idx > next.idx) {
            if h.base.is_spinner() {
                continue;
            }

            let dist = dist_to_segment(h.base.stacked_pos(), start, end);
            let intrusion = (1.0 - dist / radius).max(0.0);

            if intrusion <= 0.0 {
                continue;
            }

            complexity += intrusion
                * movement_factor
                * Self::falloff(curr, h)
                * h.visibility_at(curr.start_time);
        }

        complexity
    }

    fn density_value(curr: &OsuDifficultyObject<'_>, window_len: usize, hidden: bool) -> f64 {
        let spaced = logistic(
            curr.jump_dist,
            f64::from(OsuDifficultyObject::NORMALIZED_RADIUS),
            0.1,
            None,
        );

        let mut value =
            Self::DENSITY_MULTIPLIER * window_len.saturating_sub(1) as f64 * spaced;

        if hidden {
            value += Self::HIDDEN_DENSITY_MULTIPLIER * curr.note_density as f64;
        }

        if curr.preempt < Self::LOW_PREEMPT_THRESHOLD {
            value += Self::LOW_PREEMPT_MULTIPLIER * (Self::LOW_PREEMPT_THRESHOLD - curr.preempt);
        }

        value
    }

    /// Ratio of the bigger to the smaller value.
    fn ratio(a: f64, b: f64) -> f64 {
        a.max(b).safe_div(a.min(b)).max(1.0)
    }

    fn normalized_dist(curr: &OsuDifficultyObject<'_>, a: Pos, b: Pos) -> f64 {
        f64::from((a - b).length()) * curr.scaling_factor
    }

    /// Close to one for overlapping objects and close to zero once they are
    /// more than a diameter apart.
    fn overlap(normalized_dist: f64) -> f64 {
        1.0 - logistic(
            normalized_dist,
            f64::from(OsuDifficultyObject::NORMALIZED_DIAMETER),
            Self::OVERLAP_STEEPNESS,
            None,
        )
    }

    /// Objects further away in time matter less; the past fades quicker than
    /// the future.
    fn falloff(curr: &OsuDifficultyObject<'_>, h: &OsuDifficultyObject<'_>) -> f64 {
        let offset = h.start_time - curr.start_time;

        if offset < 0.0 {
            1.0 - smoothstep(-offset, 0.0, Self::BACKWARD_HORIZON)
        } else {
            1.0 - smoothstep(offset, 0.0, Self::FORWARD_HORIZON)
        }
    }
}

/// Distance from `point` to the segment between `start` and `end`.
fn dist_to_segment(point: Pos, start: Pos, end: Pos) -> f64 {
    let segment = end - start;
    let len_sq = f64::from(segment.dot(segment));

    if len_sq < f64::EPSILON {
        return f64::from((point - start).length());
    }

    let t = (f64::from((point - start).dot(segment)) / len_sq).clamp(0.0, 1.0);
    let closest = start + segment * t as f32;

    f64::from((point - closest).length())
}
