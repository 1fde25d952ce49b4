//! Encoding of note colours into three nested levels.
//!
//! - [`MonoStreak`]: consecutive notes of the same colour.
//! - [`AlternatingMonoPattern`]: consecutive mono streaks of equal length.
//! - [`RepeatingHitPatterns`]: alternating patterns that repeat each other.
//!
//! Every level is stored in a flat arena and refers to its children and
//! parent through indices.

use std::ops::Range;

use crate::taiko::object::HitType;

use super::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

/// The largest distance at which repeating hit patterns are compared.
pub const MAX_REPETITION_INTERVAL: usize = 16;

/// Indices of the encodings that a note belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorData {
    pub mono_streak: Option<usize>,
    pub alternating_mono_pattern: Option<usize>,
    pub repeating_hit_patterns: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct MonoStreak {
    /// Indices of the difficulty objects.
    pub hit_objects: Vec<usize>,
    pub hit_type: HitType,
    pub parent: usize,
    /// Position within the parent.
    pub idx: usize,
}

impl MonoStreak {
    fn new(hit_type: HitType) -> Self {
        Self {
            hit_objects: Vec::new(),
            hit_type,
            parent: 0,
            idx: 0,
        }
    }

    pub fn run_len(&self) -> usize {
        self.hit_objects.len()
    }

    pub fn first_hit_object(&self) -> Option<usize> {
        self.hit_objects.first().copied()
    }

    pub fn last_hit_object(&self) -> Option<usize> {
        self.hit_objects.last().copied()
    }
}

#[derive(Clone, Debug)]
pub struct AlternatingMonoPattern {
    pub mono_streaks: Range<usize>,
    pub parent: usize,
    /// Position within the parent.
    pub idx: usize,
}

#[derive(Clone, Debug)]
pub struct RepeatingHitPatterns {
    pub alternating_mono_patterns: Range<usize>,
    /// How many patterns back the closest repetition occurs, or
    /// `MAX_REPETITION_INTERVAL + 1` if there is none.
    pub repetition_interval: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ColorEncoding {
    pub mono_streaks: Vec<MonoStreak>,
    pub alternating_mono_patterns: Vec<AlternatingMonoPattern>,
    pub repeating_hit_patterns: Vec<RepeatingHitPatterns>,
}

impl ColorEncoding {
    pub(crate) fn encode(objects: &TaikoDifficultyObjects) -> Self {
        let mut this = Self {
            mono_streaks: Self::encode_mono_streaks(objects),
            ..Self::default()
        };

        this.encode_alternating_mono_patterns();
        this.encode_repeating_hit_patterns();

        this
    }

    /// Stores the encoding indices in every note.
    pub(crate) fn assign(&self, objects: &mut [TaikoDifficultyObject]) {
        for (streak_idx, streak) in self.mono_streaks.iter().enumerate() {
            let pattern_idx = streak.parent;

            let repeating_idx = self
                .alternating_mono_patterns
                .get(pattern_idx)
                .map(|pattern| pattern.parent);

            let data = ColorData {
                mono_streak: Some(streak_idx),
                alternating_mono_pattern: Some(pattern_idx),
                repeating_hit_patterns: repeating_idx,
            };

            for &idx in streak.hit_objects.iter() {
                if let Some(h) = objects.get_mut(idx) {
                    h.color = data;
                }
            }
        }
    }

    fn encode_mono_streaks(objects: &TaikoDifficultyObjects) -> Vec<MonoStreak> {
        let mut mono_streaks: Vec<MonoStreak> = Vec::new();

        for &idx in objects.note_objects.iter() {
            let Some(hit_type) = objects.objects.get(idx).and_then(|h| h.hit_type) else {
                continue;
            };

            match mono_streaks.last_mut() {
                Some(streak) if streak.hit_type == hit_type => streak.hit_objects.push(idx),
                _ => {
                    let mut streak = MonoStreak::new(hit_type);
                    streak.hit_objects.push(idx);
                    mono_streaks.push(streak);
                }
            }
        }

        mono_streaks
    }

    fn encode_alternating_mono_patterns(&mut self) {
        let mut start = 0;

        for i in 1..=self.mono_streaks.len() {
            let is_end = self
                .mono_streaks
                .get(i)
                .map_or(true, |streak| streak.run_len() != self.mono_streaks[i - 1].run_len());

            if !is_end {
                continue;
            }

            let pattern_idx = self.alternating_mono_patterns.len();

            for (idx, streak) in self.mono_streaks[start..i].iter_mut().enumerate() {
                streak.parent = pattern_idx;
                streak.idx = idx;
            }

            self.alternating_mono_patterns.push(AlternatingMonoPattern {
                mono_streaks: start..i,
                parent: 0,
                idx: 0,
            });

            start = i;
        }
    }

    fn encode_repeating_hit_patterns(&mut self) {
        let n = self.alternating_mono_patterns.len();
        let is_coupled = |i: usize| i + 2 < n && self.is_mono_pattern_repetition(i, i + 2);

        let mut ranges = Vec::new();
        let mut i = 0;

        while i < n {
            let start = i;

            if is_coupled(i) {
                while is_coupled(i) {
                    i += 1;
                }

                // The two patterns that the last coupled one was compared with
                i = (i + 2).min(n);
            } else {
                i += 1;
            }

            ranges.push(start..i);
        }

        for (repeating_idx, range) in ranges.iter().enumerate() {
            for (idx, pattern) in self.alternating_mono_patterns[range.clone()]
                .iter_mut()
                .enumerate()
            {
                pattern.parent = repeating_idx;
                pattern.idx = idx;
            }
        }

        self.repeating_hit_patterns = ranges
            .into_iter()
            .map(|alternating_mono_patterns| RepeatingHitPatterns {
                alternating_mono_patterns,
                repetition_interval: MAX_REPETITION_INTERVAL + 1,
            })
            .collect();

        for i in 0..self.repeating_hit_patterns.len() {
            let interval = self.find_repetition_interval(i);
            self.repeating_hit_patterns[i].repetition_interval = interval;
        }
    }

    fn find_repetition_interval(&self, repeating_idx: usize) -> usize {
        (1..MAX_REPETITION_INTERVAL)
            .take_while(|&interval| interval <= repeating_idx)
            .find(|&interval| self.is_hit_pattern_repetition(repeating_idx, repeating_idx - interval))
            .unwrap_or(MAX_REPETITION_INTERVAL + 1)
    }

    /// Whether the two alternating patterns start with the same colour and
    /// have the same shape.
    fn is_mono_pattern_repetition(&self, a: usize, b: usize) -> bool {
        let (Some(a), Some(b)) = (
            self.alternating_mono_patterns.get(a),
            self.alternating_mono_patterns.get(b),
        ) else {
            return false;
        };

        let (Some(first_a), Some(first_b)) = (
            self.mono_streaks.get(a.mono_streaks.start),
            self.mono_streaks.get(b.mono_streaks.start),
        ) else {
            return false;
        };

        first_a.run_len() == first_b.run_len()
            && a.mono_streaks.len() == b.mono_streaks.len()
            && first_a.hit_type == first_b.hit_type
    }

    /// Whether the first two alternating patterns of both have identical
    /// mono streak lengths.
    fn is_hit_pattern_repetition(&self, a: usize, b: usize) -> bool {
        let (Some(a), Some(b)) = (
            self.repeating_hit_patterns.get(a),
            self.repeating_hit_patterns.get(b),
        ) else {
            return false;
        };

        if a.alternating_mono_patterns.len() != b.alternating_mono_patterns.len() {
            return false;
        }

        a.alternating_mono_patterns
            .clone()
            .zip(b.alternating_mono_patterns.clone())
            .take(2)
            .all(|(a, b)| self.first_run_len(a) == self.first_run_len(b))
    }

    fn first_run_len(&self, pattern_idx: usize) -> Option<usize> {
        let pattern = self.alternating_mono_patterns.get(pattern_idx)?;

        self.mono_streaks
            .get(pattern.mono_streaks.start)
            .map(MonoStreak::run_len)
    }

    /// Index of the first difficulty object of an alternating pattern.
    pub fn pattern_first_hit_object(&self, pattern_idx: usize) -> Option<usize> {
        let pattern = self.alternating_mono_patterns.get(pattern_idx)?;

        self.mono_streaks
            .get(pattern.mono_streaks.start)
            .and_then(MonoStreak::first_hit_object)
    }

    /// Index of the first difficulty object of repeating hit patterns.
    pub fn repeating_first_hit_object(&self, repeating_idx: usize) -> Option<usize> {
        let repeating = self.repeating_hit_patterns.get(repeating_idx)?;

        self.pattern_first_hit_object(repeating.alternating_mono_patterns.start)
    }
}

impl TaikoDifficultyObjects {
    /// The last note before the mono streak of `curr`.
    pub fn previous_color_change(&self, curr: &TaikoDifficultyObject) -> Option<&TaikoDifficultyObject> {
        let first = self
            .color
            .mono_streaks
            .get(curr.color.mono_streak?)?
            .first_hit_object()?;

        self.previous_note(self.objects.get(first)?, 0)
    }

    /// The first note after the mono streak of `curr`.
    pub fn next_color_change(&self, curr: &TaikoDifficultyObject) -> Option<&TaikoDifficultyObject> {
        let last = self
            .color
            .mono_streaks
            .get(curr.color.mono_streak?)?
            .last_hit_object()?;

        self.next_note(self.objects.get(last)?, 0)
    }
}
