//! Incremental stroke tracking: pairs consecutive samples per mirror copy.

use crate::symmetry::{PointSet, SymmetryError, SymmetryMode, compute_point_set};
use kurbo::Point;

/// One line-segment side effect produced by a move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// State of a stroke in progress.
#[derive(Debug, Clone, Default)]
enum StrokeState {
    /// No stroke in progress.
    #[default]
    Idle,
    /// Mid-stroke; `previous` holds the last sampled point set.
    Drawing { previous: PointSet },
}

/// Tracks one pointer through a stroke.
///
/// The mode is re-read on every event rather than pinned at down-time, so a
/// mode change mid-stroke changes the topology for the remainder of that
/// stroke. That is carried behavior, not a bug.
#[derive(Debug, Clone, Default)]
pub struct StrokeTracker {
    state: StrokeState,
}

impl StrokeTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Begin a stroke at `point`.
    ///
    /// Any point set left over from a previous stroke is discarded.
    pub fn begin(
        &mut self,
        point: Point,
        mode: SymmetryMode,
        axis: Point,
    ) -> Result<(), SymmetryError> {
        let previous = compute_point_set(point, mode, axis)?;
        self.state = StrokeState::Drawing { previous };
        Ok(())
    }

    /// Advance the stroke to `point`, returning one segment per mirror copy.
    ///
    /// Segments pair the stored previous set with the new set index by
    /// index. If a mode change altered the set length, the unpairable step
    /// is skipped and tracking continues with the new topology. Returns an
    /// empty list when no stroke is in progress.
    pub fn advance(
        &mut self,
        point: Point,
        mode: SymmetryMode,
        axis: Point,
    ) -> Result<Vec<Segment>, SymmetryError> {
        let StrokeState::Drawing { previous } = &mut self.state else {
            return Ok(Vec::new());
        };

        let next = compute_point_set(point, mode, axis)?;
        let segments = if next.len() == previous.len() {
            previous
                .iter()
                .zip(next.iter())
                .map(|(from, to)| Segment { from, to })
                .collect()
        } else {
            log::debug!(
                "point set changed from {} to {} entries mid-stroke; skipping one draw step",
                previous.len(),
                next.len()
            );
            Vec::new()
        };
        *previous = next;
        Ok(segments)
    }

    /// End the stroke (pointer up or pointer leaving the surface).
    pub fn end(&mut self) {
        self.state = StrokeState::Idle;
    }
}
