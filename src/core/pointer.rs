//! Pointer-follow effects: magnetic buttons, tilt cards and spotlights
//!
//! All functions take the element's bounding rectangle and the pointer's
//! client coordinates, so they can be tested without a DOM.

/// Pull factor for magnetic wrappers
pub const MAGNETIC_STRENGTH: f64 = 0.3;

/// Maximum tilt in degrees on each axis
pub const MAX_TILT_DEG: f64 = 5.0;

/// Style restoring a tilt card to rest
pub const TILT_RESET: &str =
    "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1); background: transparent;";

/// Bounding rectangle in client coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position as fractions of the rectangle, clamped to `[0, 1]`.
    /// A zero-size rectangle reports its centre.
    fn fraction(&self, x: f64, y: f64) -> (f64, f64) {
        if !self.has_area() {
            return (0.5, 0.5);
        }
        (
            ((x - self.left) / self.width).clamp(0.0, 1.0),
            ((y - self.top) / self.height).clamp(0.0, 1.0),
        )
    }
}

/// Translation applied to a magnetic wrapper: the pointer's offset from the
/// centre scaled by `MAGNETIC_STRENGTH`.
pub fn magnetic_offset(rect: PointerRect, x: f64, y: f64) -> (f64, f64) {
    let dx = x - rect.left - rect.width / 2.0;
    let dy = y - rect.top - rect.height / 2.0;
    (dx * MAGNETIC_STRENGTH, dy * MAGNETIC_STRENGTH)
}

pub fn magnetic_style(offset: (f64, f64)) -> String {
    format!("transform: translate({:.1}px, {:.1}px);", offset.0, offset.1)
}

/// Perspective tilt towards the pointer plus a warm radial highlight
pub fn tilt_style(rect: PointerRect, x: f64, y: f64) -> String {
    let (fx, fy) = rect.fraction(x, y);
    let rotate_x = (fy - 0.5) * -2.0 * MAX_TILT_DEG;
    let rotate_y = (fx - 0.5) * 2.0 * MAX_TILT_DEG;

    format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02); \
         background: radial-gradient(circle at {:.1}% {:.1}%, rgba(249, 115, 22, 0.15), transparent 50%);",
        rotate_x,
        rotate_y,
        fx * 100.0,
        fy * 100.0
    )
}

/// Pointer position in percent of the rectangle
pub fn relative_percent(rect: PointerRect, x: f64, y: f64) -> (f64, f64) {
    let (fx, fy) = rect.fraction(x, y);
    (fx * 100.0, fy * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: PointerRect = PointerRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_magnetic_offset_at_centre_is_zero() {
        assert_eq!(magnetic_offset(RECT, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_magnetic_offset_scales_distance() {
        let (dx, dy) = magnetic_offset(RECT, 300.0, 150.0);
        assert!((dx - 30.0).abs() < 1e-9);
        assert!((dy - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnetic_style_format() {
        assert_eq!(
            magnetic_style((3.0, -1.5)),
            "transform: translate(3.0px, -1.5px);"
        );
    }

    #[test]
    fn test_relative_percent_clamps() {
        assert_eq!(relative_percent(RECT, 200.0, 100.0), (50.0, 50.0));
        assert_eq!(relative_percent(RECT, 0.0, 1000.0), (0.0, 100.0));
    }

    #[test]
    fn test_zero_size_rect_reports_centre() {
        let rect = PointerRect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(relative_percent(rect, 99.0, 99.0), (50.0, 50.0));
    }

    #[test]
    fn test_tilt_at_corner_hits_max_angle() {
        let style = tilt_style(RECT, 300.0, 150.0);
        assert!(style.contains("rotateX(-5.00deg)"));
        assert!(style.contains("rotateY(5.00deg)"));
        assert!(style.contains("circle at 100.0% 100.0%"));
    }
}
