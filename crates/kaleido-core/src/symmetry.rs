//! Symmetry transforms: axis reflection and N-fold radial rotation.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Errors from symmetry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymmetryError {
    #[error("invalid symmetry configuration: {0}")]
    InvalidConfiguration(String),
}

/// Symmetry mode applied to every pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SymmetryMode {
    /// No mirroring; strokes draw once.
    #[default]
    None,
    /// Reflect across the horizontal line through the axis point.
    Horizontal,
    /// Reflect across the vertical line through the axis point.
    Vertical,
    /// `order` rotational copies around the axis point.
    Radial { order: u32 },
}

impl SymmetryMode {
    /// Number of derived copies in addition to the source point.
    pub fn mirror_count(&self) -> usize {
        match self {
            SymmetryMode::None => 0,
            SymmetryMode::Horizontal | SymmetryMode::Vertical => 1,
            SymmetryMode::Radial { order } => *order as usize,
        }
    }

    /// Check the mode is usable before running a computation with it.
    pub fn validate(&self) -> Result<(), SymmetryError> {
        match self {
            SymmetryMode::Radial { order: 0 } => Err(SymmetryError::InvalidConfiguration(
                "radial order must be at least 1".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Build a mode from the selector strings the UI strips use.
    ///
    /// `radial_order` is only consulted for the `"RADIAL"` selector, matching
    /// the separate order input next to the mode selector.
    pub fn from_selector(name: &str, radial_order: u32) -> Result<Self, SymmetryError> {
        let mode = match name {
            "NONE" => SymmetryMode::None,
            "HORIZONTAL" => SymmetryMode::Horizontal,
            "VERTICAL" => SymmetryMode::Vertical,
            "RADIAL" => SymmetryMode::Radial { order: radial_order },
            other => {
                return Err(SymmetryError::InvalidConfiguration(format!(
                    "unrecognized symmetry mode: {other:?}"
                )));
            }
        };
        mode.validate()?;
        Ok(mode)
    }
}

/// The source point plus all of its symmetry-derived copies for one sample.
///
/// Index 0 is always the true (unmirrored) point; the remaining entries are
/// the derived copies in a fixed, mode-dependent order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        Self(points)
    }

    /// The true (unmirrored) point.
    pub fn source(&self) -> Point {
        self.0[0]
    }

    /// The derived copies, excluding the source point.
    pub fn mirrors(&self) -> &[Point] {
        &self.0[1..]
    }

    /// Total number of points, source included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All points in order, source first.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

/// Compute the full set of points to draw for one pointer sample.
///
/// Pure function of its inputs; the engine holds no state. The result always
/// has length `1 + mode.mirror_count()` with the source at index 0.
pub fn compute_point_set(
    point: Point,
    mode: SymmetryMode,
    axis: Point,
) -> Result<PointSet, SymmetryError> {
    mode.validate()?;
    let points = match mode {
        SymmetryMode::None => vec![point],
        SymmetryMode::Horizontal => vec![point, Point::new(point.x, 2.0 * axis.y - point.y)],
        SymmetryMode::Vertical => vec![point, Point::new(2.0 * axis.x - point.x, point.y)],
        SymmetryMode::Radial { order } => radial_points(point, order, axis),
    };
    Ok(PointSet::new(points))
}

/// Rotational copies of `point` around `axis`, in counter-clockwise steps.
fn radial_points(point: Point, order: u32, axis: Point) -> Vec<Point> {
    let mut points = Vec::with_capacity(order as usize + 1);
    points.push(point);

    let dx = point.x - axis.x;
    // Canvas y grows downward; flip so angles follow the usual convention.
    let dy = axis.y - point.y;
    let radius = (dx * dx + dy * dy).sqrt();

    if radius == 0.0 {
        // Sample exactly on the axis: theta is undefined and every copy
        // coincides with the axis point.
        points.resize(order as usize + 1, axis);
        return points;
    }

    let theta = polar_angle(dx, dy, radius);
    let slice = 2.0 * PI / f64::from(order);
    for i in 1..=order {
        let angle = theta + slice * f64::from(i);
        points.push(Point::new(
            axis.x + radius * angle.cos(),
            axis.y - radius * angle.sin(),
        ));
    }
    points
}

/// Quadrant-aware polar angle in `[0, 2π)`. Caller guarantees `radius > 0`.
fn polar_angle(dx: f64, dy: f64, radius: f64) -> f64 {
    if dx >= 0.0 && dy >= 0.0 {
        (dy / dx).atan()
    } else if dx <= 0.0 && dy >= 0.0 {
        PI - (dy / radius).clamp(-1.0, 1.0).asin()
    } else if dx <= 0.0 && dy <= 0.0 {
        PI + (dy / dx).atan()
    } else {
        2.0 * PI - (dx / radius).clamp(-1.0, 1.0).acos()
    }
}
