pub use rosu_map::util::Pos;

use super::error::TimelineError;

/// All hitobject related data required for difficulty calculation.
///
/// Times are in milliseconds and not yet adjusted by the clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    /// Offset applied by stacking; `Pos::default()` for unstacked objects.
    pub stack_offset: Pos,
    pub start_time: f64,
    pub end_time: f64,
    pub radius: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Creates a circle.
    pub fn circle(pos: Pos, start_time: f64, radius: f64) -> Self {
        Self {
            pos,
            stack_offset: Pos::default(),
            start_time,
            end_time: start_time,
            radius,
            kind: HitObjectKind::Circle,
        }
    }

    /// Creates a slider head whose path ends at `path.end_pos`.
    pub fn slider(pos: Pos, start_time: f64, end_time: f64, radius: f64, path: SliderPath) -> Self {
        Self {
            pos,
            stack_offset: Pos::default(),
            start_time,
            end_time,
            radius,
            kind: HitObjectKind::Slider(path),
        }
    }

    /// Creates a nested slider object such as a tick, repeat, or tail.
    pub fn slider_node(pos: Pos, start_time: f64, radius: f64, node: SliderNodeKind) -> Self {
        Self {
            pos,
            stack_offset: Pos::default(),
            start_time,
            end_time: start_time,
            radius,
            kind: HitObjectKind::SliderNode(node),
        }
    }

    /// Creates a spinner.
    pub fn spinner(pos: Pos, start_time: f64, end_time: f64, radius: f64) -> Self {
        Self {
            pos,
            stack_offset: Pos::default(),
            start_time,
            end_time,
            radius,
            kind: HitObjectKind::Spinner,
        }
    }

    /// Sets the stack offset.
    #[must_use]
    pub const fn stacked(mut self, stack_offset: Pos) -> Self {
        self.stack_offset = stack_offset;

        self
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner)
    }

    /// Whether the hitobject requires an active click.
    ///
    /// Nested slider objects are triggered by following the path.
    pub const fn is_clickable(&self) -> bool {
        !matches!(self.kind, HitObjectKind::SliderNode(_))
    }

    pub const fn stacked_pos(&self) -> Pos {
        // Performed manually for const-ness
        Pos::new(
            self.pos.x + self.stack_offset.x,
            self.pos.y + self.stack_offset.y,
        )
    }

    /// The cursor position once the object is done with.
    pub fn end_pos(&self) -> Pos {
        match self.kind {
            HitObjectKind::Slider(ref path) => path.end_pos,
            HitObjectKind::Circle | HitObjectKind::SliderNode(_) | HitObjectKind::Spinner => {
                self.pos
            }
        }
    }

    pub fn stacked_end_pos(&self) -> Pos {
        self.end_pos() + self.stack_offset
    }

    pub(crate) fn validate(&self, idx: usize) -> Result<(), TimelineError> {
        if !self.start_time.is_finite() || !self.end_time.is_finite() {
            return Err(TimelineError::NonFiniteTime { idx });
        }

        if self.end_time < self.start_time {
            return Err(TimelineError::NegativeDuration {
                idx,
                start_time: self.start_time,
                end_time: self.end_time,
            });
        }

        let is_finite = |pos: Pos| pos.x.is_finite() && pos.y.is_finite();

        if !(is_finite(self.pos) && is_finite(self.stack_offset) && is_finite(self.end_pos())) {
            return Err(TimelineError::NonFinitePosition { idx });
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(TimelineError::InvalidRadius {
                idx,
                radius: self.radius,
            });
        }

        if let HitObjectKind::Slider(ref path) = self.kind {
            if !(path.length.is_finite() && path.length >= 0.0) {
                return Err(TimelineError::InvalidPathLength {
                    idx,
                    length: path.length,
                });
            }
        }

        Ok(())
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(SliderPath),
    SliderNode(SliderNodeKind),
    Spinner,
}

/// The path of a slider as far as difficulty calculation is concerned.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderPath {
    /// Position at which the cursor ends up after the last span.
    pub end_pos: Pos,
    /// Length of a single span in osu!pixels.
    pub length: f64,
    pub repeats: usize,
}

/// The kind of nested slider object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliderNodeKind {
    Tick,
    Repeat,
    Tail,
}

/// Ensures that the timeline is sorted by start time and that each object is
/// well-formed.
pub(crate) fn validate_timeline(hit_objects: &[HitObject]) -> Result<(), TimelineError> {
    let mut prev_start = f64::NEG_INFINITY;

    for (idx, h) in hit_objects.iter().enumerate() {
        h.validate(idx)?;

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
