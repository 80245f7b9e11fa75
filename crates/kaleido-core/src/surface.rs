//! Abstract rendering surface consumed by the drawing session.

use kurbo::Point;
use peniko::Color;

/// The draw capability the session needs from a rendering backend.
///
/// Each call is an independent draw operation; the session never batches
/// mirror copies into one call. Implementations can rasterize immediately or
/// record calls for a retained scene.
pub trait Surface {
    /// Stroke one line segment with the given width and color.
    fn draw_segment(&mut self, from: Point, to: Point, width: f64, color: Color);

    /// Clear the whole surface to `background`.
    fn clear(&mut self, background: Color);
}
