//! Draw-call recording and stroked-path scene assembly.

use kaleido_core::surface::Surface;
use kurbo::{BezPath, Point};
use peniko::Color;

/// One recorded `draw_segment` call.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
}

/// A stroked path sharing one width and color, ready for a backend to draw.
#[derive(Debug, Clone)]
pub struct StrokeBatch {
    pub path: BezPath,
    pub width: f64,
    pub color: Color,
}

/// A [`Surface`] that records draw calls instead of rasterizing.
///
/// Backends replay the recording as stroked path batches; tests use it to
/// observe exactly what the session emitted.
#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    calls: Vec<DrawCall>,
    background: Option<Color>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded since construction or the last clear.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// The background from the most recent clear, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Assemble the recording into stroked path batches, merging consecutive
    /// calls that share width and color into one path.
    pub fn batches(&self) -> Vec<StrokeBatch> {
        let mut batches: Vec<StrokeBatch> = Vec::new();
        for call in &self.calls {
            match batches.last_mut() {
                Some(batch)
                    if batch.width == call.width
                        && batch.color.to_rgba8() == call.color.to_rgba8() =>
                {
                    batch.path.move_to(call.from);
                    batch.path.line_to(call.to);
                }
                _ => {
                    let mut path = BezPath::new();
                    path.move_to(call.from);
                    path.line_to(call.to);
                    batches.push(StrokeBatch {
                        path,
                        width: call.width,
                        color: call.color,
                    });
                }
            }
        }
        batches
    }
}

impl Surface for SceneRecorder {
    fn draw_segment(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.calls.push(DrawCall {
            from,
            to,
            width,
            color,
        });
    }

    fn clear(&mut self, background: Color) {
        self.calls.clear();
        self.background = Some(background);
    }
}
