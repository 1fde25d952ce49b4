use crate::{
    any::difficulty::object::{HasDeltaTime, HasStartTime, IDifficultyObject},
    util::{difficulty::lerp, strains_vec::StrainsVec},
};

use super::strain_decay;

/// Independently accumulates one strain, allowing a skill to track several
/// strains concurrently.
///
/// Strain decays exponentially over time and the maximum strain of every
/// fixed-length section is recorded. Once all objects are processed, the
/// section peaks are aggregated into a single difficulty value.
#[derive(Clone, Debug)]
pub struct StrainSet {
    section_length: f64,
    strain_decay_base: f64,
    reduced_section_count: usize,
    reduced_strain_baseline: f64,
    decay_weight: f64,
    difficulty_multiplier: f64,

    current_strain: f64,
    current_section_peak: f64,
    current_section_end: f64,
    strain_peaks: StrainsVec,
}

impl StrainSet {
    pub const SECTION_LENGTH: f64 = 400.0;
    pub const STRAIN_DECAY_BASE: f64 = 0.15;
    pub const REDUCED_SECTION_COUNT: usize = 10;
    pub const REDUCED_STRAIN_BASELINE: f64 = 0.75;
    pub const DECAY_WEIGHT: f64 = 0.9;
    pub const DIFFICULTY_MULTIPLIER: f64 = 1.06;

    pub fn new() -> Self {
        Self {
            section_length: Self::SECTION_LENGTH,
            strain_decay_base: Self::STRAIN_DECAY_BASE,
            reduced_section_count: Self::REDUCED_SECTION_COUNT,
            reduced_strain_baseline: Self::REDUCED_STRAIN_BASELINE,
            decay_weight: Self::DECAY_WEIGHT,
            difficulty_multiplier: Self::DIFFICULTY_MULTIPLIER,
            current_strain: 0.0,
            current_section_peak: 0.0,
            current_section_end: 0.0,
            strain_peaks: StrainsVec::with_capacity(256),
        }
    }

    #[must_use]
    pub const fn with_section_length(mut self, section_length: f64) -> Self {
        self.section_length = section_length;

        self
    }

    /// For example a value of 0.15 indicates that strain decays to 15% of its
    /// original value in one second.
    #[must_use]
    pub const fn with_strain_decay_base(mut self, strain_decay_base: f64) -> Self {
        self.strain_decay_base = strain_decay_base;

        self
    }

    /// Decays the current strain up to `curr` and adds `difficulty` to it.
    pub fn add_strain<D>(&mut self, difficulty: f64, curr: &D, objects: &[D])
    where
        D: IDifficultyObject + HasStartTime + HasDeltaTime,
    {
        let start_time = curr.start_time();

        // * The first object doesn't generate a strain, so we begin with an incremented section end
        if curr.idx() == 0 {
            self.current_section_end =
                f64::ceil(start_time / self.section_length) * self.section_length;
        }

        if start_time > self.current_section_end {
            let prev_start_time = curr
                .previous(0, objects)
                .map_or(0.0, HasStartTime::start_time);

            while start_time > self.current_section_end {
                self.strain_peaks.push(self.current_section_peak);

                // * The maximum strain of the new section is not zero by default
                // * This means we need to capture the strain level at the beginning of the new section, and use that as the initial peak level.
                self.current_section_peak = self.current_strain
                    * strain_decay(
                        self.current_section_end - prev_start_time,
                        self.strain_decay_base,
                    );

                self.current_section_end += self.section_length;
            }
        }

        self.current_strain *= strain_decay(curr.delta_time(), self.strain_decay_base);
        self.current_strain += difficulty;

        self.current_section_peak = f64::max(self.current_strain, self.current_section_peak);
    }

    /// All recorded section peaks including the still open section.
    pub fn current_strain_peaks(&self) -> StrainsVec {
        let mut peaks = self.strain_peaks.clone();
        peaks.push(self.current_section_peak);

        peaks
    }

    /// Plain sum of all section peaks.
    pub fn sum_peaks(&self) -> f64 {
        self.current_strain_peaks().sum()
    }

    /// The weighted sum of all section peaks where the highest peaks are
    /// reduced first.
    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(
            self.current_strain_peaks(),
            self.reduced_section_count,
            self.reduced_strain_baseline,
            self.decay_weight,
        ) * self.difficulty_multiplier
    }
}

impl Default for StrainSet {
    fn default() -> Self {
        Self::new()
    }
}

pub fn difficulty_value(
    current_strain_peaks: StrainsVec,
    reduced_section_count: usize,
    reduced_strain_baseline: f64,
    decay_weight: f64,
) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    let mut peaks = current_strain_peaks;

    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort.
    // * These sections will not contribute to the difficulty.
    let peaks_iter = peaks.sorted_non_zero_iter_mut().take(reduced_section_count);

    // * We are reducing the highest strains first to account for extreme difficulty spikes
    for (i, strain) in peaks_iter.enumerate() {
        let clamped = f64::from((i as f32 / reduced_section_count as f32).clamp(0.0, 1.0));
        let scale = f64::log10(lerp(1.0, 10.0, clamped));
        *strain *= lerp(reduced_strain_baseline, 1.0, scale);
    }

    // Reduction may have moved a peak below unreduced ones
    peaks.sort_desc();

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks.iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::util::float_ext::FloatExt;

    use super::*;

    struct TestObject {
        idx: usize,
        start_time: f64,
        delta_time: f64,
    }

    impl IDifficultyObject for TestObject {
        fn idx(&self) -> usize {
            self.idx
        }
    }

    impl HasStartTime for TestObject {
        fn start_time(&self) -> f64 {
            self.start_time
        }
    }

    impl HasDeltaTime for TestObject {
        fn delta_time(&self) -> f64 {
            self.delta_time
        }
    }

    fn objects_at(times: &[f64]) -> Vec<TestObject> {
        times
            .iter()
            .enumerate()
            .map(|(idx, &start_time)| TestObject {
                idx,
                start_time,
                delta_time: if idx == 0 {
                    start_time
                } else {
                    start_time - times[idx - 1]
                },
            })
            .collect()
    }

    fn feed(set: &mut StrainSet, objects: &[TestObject], strains: &[f64]) {
        for (curr, &strain) in objects.iter().zip(strains) {
            set.add_strain(strain, curr, objects);
        }
    }

    #[test]
    fn single_section_peak_is_decayed_sum() {
        let objects = objects_at(&[1000.0, 1050.0, 1100.0, 1150.0]);
        let mut set = StrainSet::new();
        feed(&mut set, &objects, &[1.0; 4]);

        let decay = strain_decay(50.0, StrainSet::STRAIN_DECAY_BASE);
        let mut expected = 0.0;

        for _ in 0..4 {
            expected = expected * decay + 1.0;
        }

        // All objects fall into the section ending at 1200
        let peaks: Vec<_> = set.current_strain_peaks().iter().collect();
        let non_zero: Vec<_> = peaks.into_iter().filter(|p| *p > 0.0).collect();

        assert_eq!(non_zero.len(), 1);
        assert!(non_zero[0].eq(expected));
    }

    #[test]
    fn section_peak_carries_decayed_strain() {
        let objects = objects_at(&[0.0, 390.0, 1000.0]);
        let mut set = StrainSet::new();
        feed(&mut set, &objects, &[0.0, 10.0, 0.0]);

        let peaks: Vec<_> = set.current_strain_peaks().iter().collect();

        // Sections (0, 400], (400, 800], (800, 1200]
        assert!(peaks[1].eq(10.0));

        let at_400 = 10.0 * strain_decay(10.0, StrainSet::STRAIN_DECAY_BASE);
        assert!(peaks[2].eq(at_400));

        let at_800 = 10.0 * strain_decay(410.0, StrainSet::STRAIN_DECAY_BASE);
        assert!(peaks[3].eq(at_800));
    }

    #[test]
    fn all_zero_aggregates_to_zero() {
        let objects = objects_at(&[0.0, 100.0, 900.0, 3000.0]);
        let mut set = StrainSet::new();
        feed(&mut set, &objects, &[0.0; 4]);

        assert_eq!(set.difficulty_value().to_bits(), 0.0_f64.to_bits());
        assert_eq!(set.sum_peaks().to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn spike_is_reduced() {
        let objects = objects_at(&[0.0, 5000.0]);
        let mut set = StrainSet::new();
        feed(&mut set, &objects, &[0.0, 100.0]);

        let unreduced = set.sum_peaks() * StrainSet::DIFFICULTY_MULTIPLIER;
        let reduced = set.difficulty_value();

        assert!(reduced < unreduced);
        assert!(reduced.eq(100.0 * 0.75 * StrainSet::DIFFICULTY_MULTIPLIER));
    }

    #[test]
    fn reduction_reorders_peaks() {
        // Ten reduced peaks of 10 and an unreduced 9.9 that overtakes the
        // heavily reduced top peaks.
        let mut peaks = StrainsVec::with_capacity(11);

        for _ in 0..10 {
            peaks.push(10.0);
        }

        peaks.push(9.9);

        let value = difficulty_value(peaks, 10, 0.75, 0.9);

        let mut expected: Vec<f64> = (0..10)
            .map(|i| {
                let clamped = f64::from((i as f32 / 10.0_f32).clamp(0.0, 1.0));
                10.0 * lerp(0.75, 1.0, f64::log10(lerp(1.0, 10.0, clamped)))
            })
            .collect();
        expected.push(9.9);
        expected.sort_by(|a, b| b.total_cmp(a));

        let mut weight = 1.0;
        let mut sum = 0.0;

        for strain in expected {
            sum += strain * weight;
            weight *= 0.9;
        }

        assert!(value.eq(sum));
    }

    proptest! {
        #[test]
        fn finite_and_non_negative(
            strains in prop::collection::vec(0.0..1_000.0_f64, 1..200),
            gaps in prop::collection::vec(0.0..2_000.0_f64, 1..200),
        ) {
            let mut time = 0.0;
            let times: Vec<_> = gaps
                .iter()
                .map(|gap| {
                    time += gap;

                    time
                })
                .collect();

            let objects = objects_at(&times);
            let mut set = StrainSet::new();
            feed(&mut set, &objects, &strains);

            let value = set.difficulty_value();

            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }
}
