use crate::model::error::TimelineError;

/// A raw drum object.
///
/// Times are in milliseconds and not yet adjusted by the clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoObject {
    pub start_time: f64,
    pub kind: TaikoObjectKind,
}

impl TaikoObject {
    pub const fn center(start_time: f64) -> Self {
        Self::new(start_time, TaikoObjectKind::Hit(HitType::Center))
    }

    pub const fn rim(start_time: f64) -> Self {
        Self::new(start_time, TaikoObjectKind::Hit(HitType::Rim))
    }

    pub const fn drum_roll(start_time: f64) -> Self {
        Self::new(start_time, TaikoObjectKind::DrumRoll)
    }

    pub const fn swell(start_time: f64) -> Self {
        Self::new(start_time, TaikoObjectKind::Swell)
    }

    pub const fn new(start_time: f64, kind: TaikoObjectKind) -> Self {
        Self { start_time, kind }
    }

    /// The colour of the object if it is a single hit.
    pub const fn hit_type(&self) -> Option<HitType> {
        match self.kind {
            TaikoObjectKind::Hit(hit_type) => Some(hit_type),
            TaikoObjectKind::DrumRoll | TaikoObjectKind::Swell => None,
        }
    }

    pub const fn is_hit(&self) -> bool {
        matches!(self.kind, TaikoObjectKind::Hit(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaikoObjectKind {
    Hit(HitType),
    DrumRoll,
    Swell,
}

/// The colour of a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitType {
    Center,
    Rim,
}

/// Ensures that the start times are finite and sorted.
pub(crate) fn validate_timeline(hit_objects: &[TaikoObject]) -> Result<(), TimelineError> {
    let mut prev_start = f64::NEG_INFINITY;

    for (idx, h) in hit_objects.iter().enumerate() {
        if !h.start_time.is_finite() {
            return Err(TimelineError::NonFiniteTime { idx });
        }

        if h.start_time < prev_start {
            return Err(TimelineError::Unordered {
                idx,
                start_time: h.start_time,
                prev_start_time: prev_start,
            });
        }

        prev_start = h.start_time;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_hits_have_a_colour() {
        assert_eq!(TaikoObject::rim(0.0).hit_type(), Some(HitType::Rim));
        assert_eq!(TaikoObject::drum_roll(0.0).hit_type(), None);
        assert!(!TaikoObject::swell(0.0).is_hit());
    }

    #[test]
    fn rejects_nan_time() {
        let objects = [TaikoObject::center(0.0), TaikoObject::center(f64::NAN)];

        assert_eq!(
            validate_timeline(&objects),
            Err(TimelineError::NonFiniteTime { idx: 1 })
        );
    }
}
