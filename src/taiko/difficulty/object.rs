use crate::{
    any::difficulty::object::{HasDeltaTime, HasStartTime, IDifficultyObject},
    taiko::object::{HitType, TaikoObject},
};

use super::color::{ColorData, ColorEncoding};

/// A drum object enriched with its neighbourhood.
#[derive(Clone, Debug)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub hit_type: Option<HitType>,
    /// Position among the notes of the same colour.
    pub mono_idx: Option<usize>,
    /// Position among all notes.
    pub note_idx: Option<usize>,
    pub color: ColorData,
}

impl TaikoDifficultyObject {
    fn new(hit_object: &TaikoObject, last: &TaikoObject, clock_rate: f64, idx: usize) -> Self {
        Self {
            idx,
            start_time: hit_object.start_time / clock_rate,
            delta_time: (hit_object.start_time - last.start_time) / clock_rate,
            hit_type: hit_object.hit_type(),
            mono_idx: None,
            note_idx: None,
            color: ColorData::default(),
        }
    }
}

impl IDifficultyObject for TaikoDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl HasDeltaTime for TaikoDifficultyObject {
    fn delta_time(&self) -> f64 {
        self.delta_time
    }
}

/// Arena of all difficulty objects alongside per-colour index lists and the
/// colour encoding.
#[derive(Debug, Default)]
pub struct TaikoDifficultyObjects {
    pub objects: Vec<TaikoDifficultyObject>,
    pub center_hit_objects: Vec<usize>,
    pub rim_hit_objects: Vec<usize>,
    pub note_objects: Vec<usize>,
    pub color: ColorEncoding,
}

impl TaikoDifficultyObjects {
    /// Enriches every object but the first one and encodes the colours of
    /// the notes.
    pub fn new(hit_objects: &[TaikoObject], clock_rate: f64) -> Self {
        let mut this = Self::default();

        let Some((mut last, rest)) = hit_objects.split_first() else {
            return this;
        };

        this.objects.reserve_exact(rest.len());

        for (idx, h) in rest.iter().enumerate() {
            let mut diff_object = TaikoDifficultyObject::new(h, last, clock_rate, idx);

            if let Some(hit_type) = diff_object.hit_type {
                let mono = match hit_type {
                    HitType::Center => &mut this.center_hit_objects,
                    HitType::Rim => &mut this.rim_hit_objects,
                };

                diff_object.mono_idx = Some(mono.len());
                mono.push(idx);

                diff_object.note_idx = Some(this.note_objects.len());
                this.note_objects.push(idx);
            }

            this.objects.push(diff_object);
            last = h;
        }

        this.color = ColorEncoding::encode(&this);
        this.color.assign(&mut this.objects);

        this
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The note of the same colour `backwards_idx + 1` notes before `curr`.
    pub fn previous_mono(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        let mono = match curr.hit_type? {
            HitType::Center => &self.center_hit_objects,
            HitType::Rim => &self.rim_hit_objects,
        };

        curr.mono_idx?
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| mono.get(idx))
            .and_then(|&idx| self.objects.get(idx))
    }

    pub fn previous_note(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        curr.note_idx?
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| self.note(idx))
    }

    pub fn next_note(
        &self,
        curr: &TaikoDifficultyObject,
        forwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        self.note(curr.note_idx? + (forwards_idx + 1))
    }

    /// The `note_idx`-th note.
    pub fn note(&self, note_idx: usize) -> Option<&TaikoDifficultyObject> {
        self.note_objects
            .get(note_idx)
            .and_then(|&idx| self.objects.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects() -> Vec<TaikoObject> {
        vec![
            TaikoObject::center(0.0),
            TaikoObject::center(100.0),
            TaikoObject::rim(200.0),
            TaikoObject::drum_roll(300.0),
            TaikoObject::center(400.0),
            TaikoObject::rim(500.0),
        ]
    }

    #[test]
    fn first_object_is_skipped() {
        let diff_objects = TaikoDifficultyObjects::new(&objects(), 2.0);

        assert_eq!(diff_objects.len(), 5);
        assert!((diff_objects.objects[0].start_time - 50.0).abs() < f64::EPSILON);
        assert!((diff_objects.objects[0].delta_time - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_colour_lookups() {
        let diff_objects = TaikoDifficultyObjects::new(&objects(), 1.0);
        let last = &diff_objects.objects[4];

        let prev_rim = diff_objects.previous_mono(last, 0).unwrap();
        assert_eq!(prev_rim.idx, 1);
        assert!(diff_objects.previous_mono(last, 1).is_none());

        let prev_center = diff_objects.previous_mono(&diff_objects.objects[3], 0).unwrap();
        assert_eq!(prev_center.idx, 0);
    }

    #[test]
    fn drum_rolls_are_not_notes() {
        let diff_objects = TaikoDifficultyObjects::new(&objects(), 1.0);
        let roll = &diff_objects.objects[2];

        assert!(roll.note_idx.is_none());
        assert!(diff_objects.previous_note(roll, 0).is_none());

        let after_roll = &diff_objects.objects[3];
        assert_eq!(diff_objects.previous_note(after_roll, 0).unwrap().idx, 1);
        assert_eq!(diff_objects.next_note(after_roll, 0).unwrap().idx, 4);
    }

    #[test]
    fn empty_and_single() {
        assert!(TaikoDifficultyObjects::new(&[], 1.0).is_empty());
        assert!(TaikoDifficultyObjects::new(&[TaikoObject::rim(0.0)], 1.0).is_empty());
    }
}
