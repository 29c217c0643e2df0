//! Contains the Viewport struct, which describes the rectangle on the
//! complex plane rendered into one frame, along with the pixel
//! resolution of that frame.  Maps pixel coordinates to points on the
//! complex plane.
use num::Complex;

/// One frame's window onto the complex plane: four real bounds plus
/// the pixel dimensions they are sampled at.  Immutable once built.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// Left edge of the window on the real axis.
    pub x_min: f64,
    /// Right edge of the window on the real axis.
    pub x_max: f64,
    /// Bottom edge of the window on the imaginary axis.
    pub y_min: f64,
    /// Top edge of the window on the imaginary axis.
    pub y_max: f64,
    /// Horizontal pixel resolution.
    pub width: usize,
    /// Vertical pixel resolution.
    pub height: usize,
}

impl Viewport {
    /// Constructor.  Checks that the bounds are properly ordered and
    /// the resolution is nonzero; a window that fails either check
    /// cannot be sampled.
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        width: usize,
        height: usize,
    ) -> Result<Viewport, String> {
        if x_min >= x_max {
            return Err("The left bound is not to the left of the right bound.".to_string());
        }

        if y_min >= y_max {
            return Err("The lower bound is not below the upper bound.".to_string());
        }

        if width == 0 || height == 0 {
            return Err("The pixel resolution must be nonzero in both axes.".to_string());
        }

        Ok(Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
            width,
            height,
        })
    }

    /// Builds the viewport framing `real_width` of the plane around a
    /// center point, with the imaginary extent scaled to the pixel
    /// aspect ratio so samples stay square.  Callers are expected to
    /// supply a positive width and nonzero resolution; this is not
    /// checked here, and nonsense in yields nonsense out.
    pub fn centered(center: Complex<f64>, real_width: f64, width: usize, height: usize) -> Viewport {
        let real_height = real_width * (height as f64) / (width as f64);
        Viewport {
            x_min: center.re - real_width / 2.0,
            x_max: center.re + real_width / 2.0,
            y_min: center.im - real_height / 2.0,
            y_max: center.im + real_height / 2.0,
            width,
            height,
        }
    }

    /// Given the column and row of a pixel, return the point on the
    /// complex plane it samples.  The corner pixels land exactly on
    /// the bounds: column 0 samples `x_min` and column `width - 1`
    /// samples `x_max`.  An axis that is a single pixel wide samples
    /// its minimum bound.
    pub fn pixel_to_point(&self, px: usize, py: usize) -> Complex<f64> {
        let x_steps = (self.width - 1).max(1) as f64;
        let y_steps = (self.height - 1).max(1) as f64;
        Complex::new(
            self.x_min + (px as f64 / x_steps) * (self.x_max - self.x_min),
            self.y_min + (py as f64 / y_steps) * (self.y_max - self.y_min),
        )
    }

    /// The midpoint of the window.
    pub fn center(&self) -> Complex<f64> {
        Complex::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// The extent of the window along the real axis.
    pub fn real_width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fails_on_inverted_x_bounds() {
        let vp = Viewport::new(1.0, -2.0, -1.5, 1.5, 100, 100);
        assert!(vp.is_err());
    }

    #[test]
    fn viewport_fails_on_inverted_y_bounds() {
        let vp = Viewport::new(-2.0, 1.0, 1.5, -1.5, 100, 100);
        assert!(vp.is_err());
    }

    #[test]
    fn viewport_fails_on_zero_resolution() {
        assert!(Viewport::new(-2.0, 1.0, -1.5, 1.5, 0, 100).is_err());
        assert!(Viewport::new(-2.0, 1.0, -1.5, 1.5, 100, 0).is_err());
    }

    #[test]
    fn viewport_passes_on_good_shape() {
        let vp = Viewport::new(-2.0, 1.0, -1.5, 1.5, 100, 100);
        assert!(vp.is_ok());
    }

    #[test]
    fn corner_pixels_land_on_bounds() {
        let vp = Viewport::new(-2.0, 1.0, -1.5, 1.5, 100, 100).unwrap();
        assert_eq!(vp.pixel_to_point(0, 0), Complex::new(-2.0, -1.5));
        assert_eq!(vp.pixel_to_point(99, 99), Complex::new(1.0, 1.5));
        assert_eq!(vp.pixel_to_point(99, 0), Complex::new(1.0, -1.5));
    }

    #[test]
    fn interior_pixel_maps_proportionally() {
        // Column 66 of 100 is exactly two-thirds of the way across
        // [-2, 1], which is the origin of the real axis.
        let vp = Viewport::new(-2.0, 1.0, -1.5, 1.5, 100, 100).unwrap();
        assert_eq!(vp.pixel_to_point(66, 0).re, 0.0);
    }

    #[test]
    fn single_pixel_axis_samples_the_minimum() {
        let vp = Viewport::new(-2.0, 1.0, -1.5, 1.5, 1, 1).unwrap();
        assert_eq!(vp.pixel_to_point(0, 0), Complex::new(-2.0, -1.5));
    }

    #[test]
    fn centered_frames_the_midpoint() {
        let vp = Viewport::centered(Complex::new(0.0, 0.0), 4.0, 100, 50);
        assert_eq!(vp.x_min, -2.0);
        assert_eq!(vp.x_max, 2.0);
        assert_eq!(vp.y_min, -1.0);
        assert_eq!(vp.y_max, 1.0);
        assert_eq!(vp.center(), Complex::new(0.0, 0.0));
        assert_eq!(vp.real_width(), 4.0);
    }
}
