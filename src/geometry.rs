//! Pixel-space geometry primitives.
//!
//! The central type is [`PixelRing`], a closed rectangular ring with a fixed
//! corner order: upper-left, lower-left, lower-right, upper-right, closing
//! upper-left (y grows downward, so "upper" means the smaller y value). The
//! edit session depends on this ordering to map drag handles to resize
//! cursors; every ring produced by this crate is canonicalized before use.

/// A 2D point in spectrogram pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round both coordinates to the nearest integer pixel.
    pub fn rounded(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

/// Display dimensions of the rendered spectrogram, in pixels.
///
/// The effective raster for mapping is the larger of this and the context's
/// native size on each axis, so a zero scale means "render at native size".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderScale {
    pub width: f64,
    pub height: f64,
}

impl RenderScale {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale that defers to the context's native dimensions on both axes.
    pub const fn native() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Index of each corner within the canonical ring order.
const UPPER_LEFT: usize = 0;
const LOWER_LEFT: usize = 1;
const LOWER_RIGHT: usize = 2;
const UPPER_RIGHT: usize = 3;

/// A closed 5-point rectangular ring in pixel space.
///
/// Corners are stored in canonical order (UL, LL, LR, UR, UL). Construction
/// always canonicalizes, so consumers may rely on the ordering invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRing {
    points: [PixelPoint; 5],
}

impl PixelRing {
    /// Degenerate ring returned when a compressed context cannot place a
    /// shape. Callers treat it as "not visible" and skip rendering.
    pub const SENTINEL: PixelRing = PixelRing {
        points: [PixelPoint::new(-1.0, -1.0); 5],
    };

    /// Build a canonical ring from two opposite corners in any order.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self::from_bounds(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Build a canonical ring from axis-aligned bounds.
    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            points: [
                PixelPoint::new(xmin, ymin),
                PixelPoint::new(xmin, ymax),
                PixelPoint::new(xmax, ymax),
                PixelPoint::new(xmax, ymin),
                PixelPoint::new(xmin, ymin),
            ],
        }
    }

    /// Re-order an arbitrary dragged rectangle into canonical corner order.
    ///
    /// Accepts 4 or 5 points (the closing point is ignored) and returns
    /// `None` for fewer corners or non-finite coordinates, which callers
    /// drop as malformed substrate geometry.
    pub fn canonicalize(points: &[PixelPoint]) -> Option<Self> {
        if points.len() < 4 {
            return None;
        }
        let corners = &points[..4];
        if corners.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let xmin = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let xmax = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let ymin = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let ymax = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Some(Self::from_bounds(xmin, ymin, xmax, ymax))
    }

    pub fn upper_left(&self) -> PixelPoint {
        self.points[UPPER_LEFT]
    }

    pub fn lower_left(&self) -> PixelPoint {
        self.points[LOWER_LEFT]
    }

    pub fn lower_right(&self) -> PixelPoint {
        self.points[LOWER_RIGHT]
    }

    pub fn upper_right(&self) -> PixelPoint {
        self.points[UPPER_RIGHT]
    }

    /// All five ring points in canonical order (last closes to the first).
    pub fn points(&self) -> &[PixelPoint; 5] {
        &self.points
    }

    pub fn width(&self) -> f64 {
        self.upper_right().x - self.upper_left().x
    }

    pub fn height(&self) -> f64 {
        self.lower_left().y - self.upper_left().y
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Whether the ring can be rendered. NaN coordinates and the sentinel
    /// are the designed "outside current view" signal, not errors.
    pub fn is_visible(&self) -> bool {
        !self.is_sentinel() && self.points.iter().all(|p| p.is_finite())
    }
}
