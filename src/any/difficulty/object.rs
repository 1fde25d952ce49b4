/// An element of an arena of difficulty objects.
///
/// Neighbours are looked up through the index instead of owned links so that
/// all objects can live in a single flat slice.
pub trait IDifficultyObject: Sized {
    fn idx(&self) -> usize;

    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    fn next<'a>(&self, forwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        diff_objects.get(self.idx() + (forwards_idx + 1))
    }
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}

pub trait HasDeltaTime {
    /// Milliseconds since the previous object, adjusted by clock rate.
    fn delta_time(&self) -> f64;
}
