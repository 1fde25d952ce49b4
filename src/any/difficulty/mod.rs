use std::collections::{btree_map, BTreeMap};

use crate::{
    model::{error::TimelineError, hit_object::HitObject, mods::GameMods},
    taiko::object::TaikoObject,
    util::difficulty::difficulty_range,
};

pub mod object;
pub mod skills;

/// Difficulty calculator on a timeline of hitobjects.
///
/// # Example
///
/// ```
/// use rosu_skills::{Difficulty, HitObject, Pos, SkillKind};
///
/// let objects: Vec<_> = (0..8_u32)
///     .map(|i| HitObject::circle(Pos::new(100.0 * (i % 2) as f32, 0.0), 250.0 * f64::from(i), 32.0))
///     .collect();
///
/// let ratings = Difficulty::new()
///     .mods(8_u32 + 64) // HDDT
///     .ar(9.0)
///     .calculate(&objects)
///     .unwrap();
///
/// assert!(ratings.get(SkillKind::Aim) > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    clock_rate: Option<f64>,
    ar: Option<f64>,
    preempt: Option<f64>,
    section_length: f64,
    multiplier: f64,
}

impl Difficulty {
    pub const DEFAULT_AR: f64 = 5.0;
    pub const DEFAULT_SECTION_LENGTH: f64 = 400.0;
    pub const MIN_SECTION_LENGTH: f64 = 1.0;

    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            clock_rate: None,
            ar: None,
            preempt: None,
            section_length: Self::DEFAULT_SECTION_LENGTH,
            multiplier: 1.0,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify the approach rate, already adjusted by difficulty mods such
    /// as HR or EZ.
    ///
    /// Ignored if a preempt was specified through [`Difficulty::preempt`].
    pub fn ar(self, ar: f64) -> Self {
        Self {
            ar: Some(ar),
            ..self
        }
    }

    /// Specify the time in milliseconds between an object appearing and it
    /// having to be hit, before clock rate adjustments.
    pub fn preempt(self, preempt: f64) -> Self {
        Self {
            preempt: Some(preempt),
            ..self
        }
    }

    /// Length of a strain section in milliseconds. Defaults to 400 and must
    /// be at least [`Difficulty::MIN_SECTION_LENGTH`].
    pub fn section_length(self, section_length: f64) -> Self {
        Self {
            section_length,
            ..self
        }
    }

    /// Global multiplier applied to every skill rating. Defaults to 1.0.
    pub fn multiplier(self, multiplier: f64) -> Self {
        Self { multiplier, ..self }
    }

    /// Calculate the skill ratings of a timeline of positioned hitobjects.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if the timeline is
    /// unordered or contains malformed objects.
    pub fn calculate(&self, hit_objects: &[HitObject]) -> Result<SkillRatings, TimelineError> {
        crate::osu::difficulty::difficulty(self, hit_objects)
    }

    /// Calculate the skill ratings of a drum timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if the timeline is
    /// unordered.
    pub fn calculate_taiko(
        &self,
        hit_objects: &[TaikoObject],
    ) -> Result<SkillRatings, TimelineError> {
        crate::taiko::difficulty::difficulty(self, hit_objects)
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// Preempt in milliseconds, adjusted by the clock rate.
    pub(crate) fn get_preempt(&self) -> f64 {
        let preempt = self.preempt.unwrap_or_else(|| {
            difficulty_range(self.ar.unwrap_or(Self::DEFAULT_AR), 1800.0, 1200.0, 450.0)
        });

        preempt / self.get_clock_rate()
    }

    pub(crate) const fn get_section_length(&self) -> f64 {
        self.section_length
    }

    pub(crate) const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Ensures that the configuration can produce meaningful ratings.
    pub(crate) fn validate(&self) -> Result<(), TimelineError> {
        let clock_rate = self.get_clock_rate();

        if !(clock_rate.is_finite() && clock_rate > 0.0) {
            return Err(TimelineError::InvalidClockRate(clock_rate));
        }

        if !(self.section_length.is_finite() && self.section_length >= Self::MIN_SECTION_LENGTH) {
            return Err(TimelineError::InvalidSectionLength(self.section_length));
        }

        if !(self.multiplier.is_finite() && self.multiplier >= 0.0) {
            return Err(TimelineError::InvalidMultiplier(self.multiplier));
        }

        let preempt = self.get_preempt();

        if !(preempt.is_finite() && preempt >= 0.0) {
            return Err(TimelineError::InvalidPreempt(preempt));
        }

        Ok(())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// The skills that can be rated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillKind {
    /// Cursor movement including slider paths.
    Aim,
    /// Cursor movement between objects only.
    AimNoSliders,
    /// Reading dense or overlapping patterns.
    Reading,
    /// Memorising objects that are hard to see.
    Cognition,
    Flashlight,
    /// Drum colour patterns.
    Color,
    /// Drum finger speed.
    Stamina,
}

impl SkillKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aim => "aim",
            Self::AimNoSliders => "aim_no_sliders",
            Self::Reading => "reading",
            Self::Cognition => "cognition",
            Self::Flashlight => "flashlight",
            Self::Color => "color",
            Self::Stamina => "stamina",
        }
    }
}

/// One rating per evaluated skill.
///
/// Skills that were not evaluated, e.g. because the required mods were
/// missing, are present with a rating of zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillRatings {
    inner: BTreeMap<SkillKind, f64>,
}

impl SkillRatings {
    pub(crate) fn zeroed(kinds: &[SkillKind]) -> Self {
        Self {
            inner: kinds.iter().map(|&kind| (kind, 0.0)).collect(),
        }
    }

    pub(crate) fn insert(&mut self, kind: SkillKind, rating: f64) {
        self.inner.insert(kind, rating);
    }

    pub(crate) fn scale(&mut self, multiplier: f64) {
        for rating in self.inner.values_mut() {
            *rating *= multiplier;
        }
    }

    /// The rating of the given skill or `0.0` if it was not rated.
    pub fn get(&self, kind: SkillKind) -> f64 {
        self.inner.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, kind: SkillKind) -> bool {
        self.inner.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SkillKind, f64> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a SkillRatings {
    type Item = (&'a SkillKind, &'a f64);
    type IntoIter = btree_map::Iter<'a, SkillKind, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<SkillRatings> for BTreeMap<&'static str, f64> {
    fn from(ratings: SkillRatings) -> Self {
        ratings
            .inner
            .into_iter()
            .map(|(kind, rating)| (kind.as_str(), rating))
            .collect()
    }
}
