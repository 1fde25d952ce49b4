use std::ops::Range;

use crate::{
    any::difficulty::object::{HasDeltaTime, HasStartTime, IDifficultyObject},
    model::hit_object::{HitObject, HitObjectKind},
};

use super::{HD_FADE_IN_DURATION_MULTIPLIER, HD_FADE_OUT_DURATION_MULTIPLIER};

/// A hitobject enriched with the features that evaluators work on.
///
/// All times are adjusted by the clock rate and all distances are normalized
/// to a radius of [`OsuDifficultyObject::NORMALIZED_RADIUS`].
pub struct OsuDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a HitObject,
    pub start_time: f64,
    pub delta_time: f64,

    /// `delta_time` floored at [`OsuDifficultyObject::MIN_DELTA_TIME`].
    pub strain_time: f64,
    /// Time since the previous clickable object, floored the same way.
    pub tap_time: f64,
    pub jump_dist: f64,
    pub tap_dist: f64,
    pub min_jump_dist: f64,
    pub min_jump_time: f64,
    pub travel_dist: f64,
    pub travel_time: f64,
    pub angle: Option<f64>,

    /// Amount of following objects that are visible when this one is hit.
    pub note_density: usize,
    /// Indices of the following objects that are visible when this one is
    /// hit.
    pub visible: Range<usize>,
    pub preempt: f64,
    pub scaling_factor: f64,
}

/// Raw neighbours of the object that is being enriched.
pub(crate) struct Neighbours<'a> {
    pub last: &'a HitObject,
    pub last_last: Option<&'a HitObject>,
    pub last_clickable: &'a HitObject,
}

impl<'a> OsuDifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 50;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 25.0;
    const MAX_SLIDER_RADIUS: f64 = Self::NORMALIZED_RADIUS as f64 * 2.4;
    const ASSUMED_SLIDER_RADIUS: f64 = Self::NORMALIZED_RADIUS as f64 * 1.8;

    pub(crate) fn new(
        hit_object: &'a HitObject,
        neighbours: &Neighbours<'a>,
        clock_rate: f64,
        preempt: f64,
        idx: usize,
    ) -> Self {
        let Neighbours {
            last,
            last_last,
            last_clickable,
        } = *neighbours;

        let delta_time = (hit_object.start_time - last.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;
        let tap_time = (hit_object.start_time - last_clickable.start_time) / clock_rate;

        let mut this = Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            strain_time: delta_time.max(Self::MIN_DELTA_TIME),
            tap_time: tap_time.max(Self::MIN_DELTA_TIME),
            jump_dist: 0.0,
            tap_dist: 0.0,
            min_jump_dist: 0.0,
            min_jump_time: 0.0,
            travel_dist: 0.0,
            travel_time: 0.0,
            angle: None,
            note_density: 0,
            visible: idx + 1..idx + 1,
            preempt,
            scaling_factor: Self::scaling_factor(hit_object),
        };

        this.set_distances(last, last_last, last_clickable, clock_rate);

        this
    }

    /// Factor to normalize distances so that circle size does not matter.
    pub fn scaling_factor(h: &HitObject) -> f64 {
        let mut scaling_factor = f64::from(Self::NORMALIZED_RADIUS) / h.radius;

        // Nested slider objects only need to be followed, not clicked
        if !h.is_clickable() {
            scaling_factor /= 2.4;
        }

        if h.radius < 30.0 {
            let small_circle_bonus = f64::min(30.0 - h.radius, 5.0) / 50.0;
            scaling_factor *= 1.0 + small_circle_bonus;
        }

        scaling_factor
    }

    fn travel_time(h: &HitObject, clock_rate: f64) -> f64 {
        ((h.end_time - h.start_time) / clock_rate).max(Self::MIN_DELTA_TIME)
    }

    fn set_distances(
        &mut self,
        last: &HitObject,
        last_last: Option<&HitObject>,
        last_clickable: &HitObject,
        clock_rate: f64,
    ) {
        let scaling_factor = self.scaling_factor;

        if let HitObjectKind::Slider(ref path) = self.base.kind {
            self.travel_dist = path.length
                * scaling_factor
                * f64::powf(1.0 + path.repeats as f64 / 2.5, 1.0 / 2.5);

            self.travel_time = Self::travel_time(self.base, clock_rate);
        }

        let pos = self.base.stacked_pos();

        self.jump_dist = f64::from((pos - last.stacked_pos()).length()) * scaling_factor;
        self.tap_dist = f64::from((pos - last_clickable.stacked_pos()).length()) * scaling_factor;

        self.min_jump_time = self.strain_time;
        self.min_jump_dist = self.jump_dist;

        if last.is_slider() {
            self.min_jump_time = (self.strain_time - Self::travel_time(last, clock_rate))
                .max(Self::MIN_DELTA_TIME);

            let tail_jump_dist =
                f64::from((last.stacked_end_pos() - pos).length()) * scaling_factor;

            let diff = Self::MAX_SLIDER_RADIUS - Self::ASSUMED_SLIDER_RADIUS;
            let min = tail_jump_dist - Self::MAX_SLIDER_RADIUS;
            self.min_jump_dist = ((self.jump_dist - diff).min(min)).max(0.0);
        }

        // Movement into or out of a spinner has no meaningful angle
        let Some(last_last) = last_last.filter(|h| !(h.is_spinner() || last.is_spinner())) else {
            return;
        };

        let v1 = last_last.stacked_end_pos() - last.stacked_pos();
        let v2 = pos - last.stacked_end_pos();

        let dot = f64::from(v1.dot(v2));
        let det = f64::from(v1.x * v2.y - v1.y * v2.x);

        self.angle = Some(det.atan2(dot).abs());
    }

    /// The time at which the object starts to become visible.
    pub fn visibility_start(&self) -> f64 {
        self.start_time - self.preempt
    }

    /// How far the object has faded into view at the given time.
    ///
    /// `0.0` before it appears, `1.0` once it is to be hit, and linear
    /// in-between.
    pub fn visibility_at(&self, time: f64) -> f64 {
        if time >= self.start_time {
            return 1.0;
        }

        let visibility_start = self.visibility_start();

        if time <= visibility_start {
            return 0.0;
        }

        ((time - visibility_start) / self.preempt).clamp(0.0, 1.0)
    }

    /// Fade-in duration of the object, depending on whether hidden is active.
    pub fn time_fade_in(&self, hidden: bool) -> f64 {
        if hidden {
            self.preempt * HD_FADE_IN_DURATION_MULTIPLIER
        } else {
            400.0 * (self.preempt / 450.0).min(1.0)
        }
    }

    /// The opacity the object is drawn with at the given time.
    pub fn opacity_at(&self, time: f64, hidden: bool) -> f64 {
        if time > self.start_time {
            // * Consider a hitobject as being invisible when its start time is passed.
            // * In reality the hitobject will be visible beyond its start time up until its hittable window has passed,
            // * but this is an approximation and such a case is unlikely to be hit where this function is used.
            return 0.0;
        }

        let time_fade_in = self.time_fade_in(hidden);

        if time_fade_in <= 0.0 {
            return 1.0;
        }

        let fade_in_start_time = self.start_time - self.preempt;
        let fade_in = ((time - fade_in_start_time) / time_fade_in).clamp(0.0, 1.0);

        if hidden {
            let fade_out_start_time = self.start_time - self.preempt + time_fade_in;
            let fade_out_duration = self.preempt * HD_FADE_OUT_DURATION_MULTIPLIER;

            fade_in.min(1.0 - ((time - fade_out_start_time) / fade_out_duration).clamp(0.0, 1.0))
        } else {
            fade_in
        }
    }

    /// The objects that are visible when this one is hit.
    pub fn visible_objects<'b>(
        &self,
        diff_objects: &'b [OsuDifficultyObject<'a>],
    ) -> &'b [OsuDifficultyObject<'a>] {
        diff_objects.get(self.visible.clone()).unwrap_or(&[])
    }
}

impl IDifficultyObject for OsuDifficultyObject<'_> {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for OsuDifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl HasDeltaTime for OsuDifficultyObject<'_> {
    fn delta_time(&self) -> f64 {
        self.delta_time
    }
}
