//! Drawing session state and pointer-event routing.

use crate::input::PointerEvent;
use crate::stroke::StrokeTracker;
use crate::style::{BrushStyle, Rgba};
use crate::surface::Surface;
use crate::symmetry::{SymmetryError, SymmetryMode};
use kurbo::{Point, Size};
use peniko::Color;

/// Default canvas background.
pub const DEFAULT_BACKGROUND: Rgba = Rgba::opaque(250, 250, 250);

/// One interactive drawing surface with live symmetry mirroring.
///
/// Owns the session state the embedding shell mutates through setters; the
/// geometry itself lives in pure functions in [`crate::symmetry`]. All
/// methods run synchronously on the caller's event thread, in arrival order.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Active symmetry mode, re-read on every pointer sample.
    mode: SymmetryMode,
    /// Fixed reflection/rotation origin, the geometric canvas center.
    axis: Point,
    /// Brush width and color applied to new segments.
    brush: BrushStyle,
    /// Background used by [`Canvas::clear`].
    background: Rgba,
    tracker: StrokeTracker,
}

impl Canvas {
    /// Create a session for a surface of the given size.
    ///
    /// The axis point is pinned to the geometric center and never moves for
    /// the lifetime of the session.
    pub fn new(size: Size) -> Self {
        Self {
            mode: SymmetryMode::default(),
            axis: Point::new(size.width / 2.0, size.height / 2.0),
            brush: BrushStyle::default(),
            background: DEFAULT_BACKGROUND,
            tracker: StrokeTracker::new(),
        }
    }

    pub fn axis(&self) -> Point {
        self.axis
    }

    pub fn mode(&self) -> SymmetryMode {
        self.mode
    }

    pub fn brush(&self) -> BrushStyle {
        self.brush
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Check if a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tracker.is_drawing()
    }

    /// Switch symmetry mode.
    ///
    /// Takes effect on the next geometry computation, including the
    /// remainder of a stroke already in progress.
    pub fn set_mode(&mut self, mode: SymmetryMode) -> Result<(), SymmetryError> {
        mode.validate()?;
        self.mode = mode;
        Ok(())
    }

    /// Set the rotational copy count, switching to radial mode.
    pub fn set_radial_order(&mut self, order: u32) -> Result<(), SymmetryError> {
        self.set_mode(SymmetryMode::Radial { order })
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    pub fn set_brush_width(&mut self, width: f64) {
        self.brush.width = width;
    }

    pub fn set_background(&mut self, background: Rgba) {
        self.background = background;
    }

    /// Route one pointer event, drawing onto `surface` as needed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, surface: &mut dyn Surface) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_moved(position, surface),
            PointerEvent::Up { .. } => self.pointer_up(),
            PointerEvent::Leave => self.pointer_left(),
        }
    }

    /// Begin a stroke at `position`.
    pub fn pointer_down(&mut self, position: Point) {
        if let Err(err) = self.tracker.begin(position, self.mode, self.axis) {
            log::warn!("stroke rejected: {err}");
        }
    }

    /// Extend the stroke in progress, emitting one independent
    /// `draw_segment` call per mirror copy. A no-op while idle.
    pub fn pointer_moved(&mut self, position: Point, surface: &mut dyn Surface) {
        let segments = match self.tracker.advance(position, self.mode, self.axis) {
            Ok(segments) => segments,
            Err(err) => {
                log::warn!("draw step skipped: {err}");
                return;
            }
        };

        let color = Color::from(self.brush.color);
        for segment in segments {
            surface.draw_segment(segment.from, segment.to, self.brush.width, color);
        }
    }

    /// End the stroke.
    pub fn pointer_up(&mut self) {
        self.tracker.end();
    }

    /// The pointer left the surface, which also ends the stroke.
    pub fn pointer_left(&mut self) {
        self.tracker.end();
    }

    /// Clear the surface to the current background.
    pub fn clear(&self, surface: &mut dyn Surface) {
        surface.clear(self.background.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls for assertions.
    #[derive(Default)]
    struct TestSurface {
        segments: Vec<(Point, Point, f64, Rgba)>,
        cleared_to: Option<Rgba>,
    }

    impl Surface for TestSurface {
        fn draw_segment(&mut self, from: Point, to: Point, width: f64, color: Color) {
            self.segments.push((from, to, width, color.into()));
        }

        fn clear(&mut self, background: Color) {
            self.segments.clear();
            self.cleared_to = Some(background.into());
        }
    }

    #[test]
    fn test_axis_is_canvas_center() {
        let canvas = Canvas::new(Size::new(650.0, 650.0));
        assert_eq!(canvas.axis(), Point::new(325.0, 325.0));
    }

    #[test]
    fn test_vertical_session_end_to_end() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        canvas.set_mode(SymmetryMode::Vertical).unwrap();
        let mut surface = TestSurface::default();

        canvas.pointer_down(Point::new(250.0, 300.0));
        assert!(canvas.is_drawing());

        canvas.pointer_moved(Point::new(260.0, 310.0), &mut surface);
        assert_eq!(surface.segments.len(), 2);
        assert_eq!(
            surface.segments[0],
            (
                Point::new(250.0, 300.0),
                Point::new(260.0, 310.0),
                3.0,
                BrushStyle::default().color,
            )
        );
        assert_eq!(
            surface.segments[1],
            (
                Point::new(350.0, 300.0),
                Point::new(340.0, 310.0),
                3.0,
                BrushStyle::default().color,
            )
        );

        canvas.pointer_up();
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn test_move_without_down_draws_nothing() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        let mut surface = TestSurface::default();

        canvas.pointer_moved(Point::new(100.0, 100.0), &mut surface);
        assert!(surface.segments.is_empty());
    }

    #[test]
    fn test_pointer_leave_ends_stroke() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        let mut surface = TestSurface::default();

        canvas.handle_pointer_event(
            PointerEvent::Down { position: Point::new(100.0, 100.0) },
            &mut surface,
        );
        canvas.handle_pointer_event(PointerEvent::Leave, &mut surface);
        assert!(!canvas.is_drawing());

        canvas.handle_pointer_event(
            PointerEvent::Move { position: Point::new(120.0, 120.0) },
            &mut surface,
        );
        assert!(surface.segments.is_empty());
    }

    #[test]
    fn test_brush_change_applies_to_next_move() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        let mut surface = TestSurface::default();

        canvas.pointer_down(Point::new(100.0, 100.0));
        canvas.set_brush_width(10.0);
        canvas.set_brush_color(Rgba::opaque(220, 38, 38));
        canvas.pointer_moved(Point::new(110.0, 110.0), &mut surface);

        let (_, _, width, color) = surface.segments[0];
        assert!((width - 10.0).abs() < f64::EPSILON);
        assert_eq!(color, Rgba::opaque(220, 38, 38));
    }

    #[test]
    fn test_radial_order_zero_rejected() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        assert!(canvas.set_radial_order(0).is_err());
        // Mode is unchanged after the rejection.
        assert_eq!(canvas.mode(), SymmetryMode::None);
    }

    #[test]
    fn test_mode_change_mid_stroke_changes_topology() {
        let mut canvas = Canvas::new(Size::new(650.0, 650.0));
        canvas.set_mode(SymmetryMode::Vertical).unwrap();
        let mut surface = TestSurface::default();

        canvas.pointer_down(Point::new(200.0, 325.0));
        canvas.set_radial_order(4).unwrap();

        // The unpairable step is skipped, then the stroke continues with
        // five copies per move.
        canvas.pointer_moved(Point::new(210.0, 325.0), &mut surface);
        assert!(surface.segments.is_empty());

        canvas.pointer_moved(Point::new(220.0, 325.0), &mut surface);
        assert_eq!(surface.segments.len(), 5);
    }

    #[test]
    fn test_clear_uses_background() {
        let mut canvas = Canvas::new(Size::new(600.0, 600.0));
        canvas.set_background(Rgba::opaque(30, 41, 59));
        let mut surface = TestSurface::default();

        canvas.clear(&mut surface);
        assert_eq!(surface.cleared_to, Some(Rgba::opaque(30, 41, 59)));
    }
}
