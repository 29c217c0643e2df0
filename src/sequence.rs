//! The frame sequencer.  A zoom animation is an ordered sequence of
//! viewports sliding from one framing of the plane to another.  The
//! scale interpolates geometrically, so each frame zooms by the same
//! factor and the apparent zoom speed stays constant; the center
//! interpolates linearly.
use num::Complex;

use viewport::Viewport;

/// A point of interest on the complex plane together with the
/// real-axis width of the view that frames it.
#[derive(Copy, Clone, Debug)]
pub struct Region {
    /// The point the view is centered on.
    pub center: Complex<f64>,
    /// The real-axis extent of the view framing it.
    pub width: f64,
}

impl Region {
    /// The same center framed at a different width.  Useful for the
    /// wide establishing view of a deep target.
    pub fn widened(self, width: f64) -> Region {
        Region { width, ..self }
    }
}

/// Produces the ordered viewports of one zoom movement, from a start
/// framing to an end framing over a fixed number of frames.  The
/// parameters are fixed at construction; frames are produced lazily
/// and the sequence can be walked any number of times.
#[derive(Clone, Debug)]
pub struct ZoomSequence {
    start: Region,
    end: Region,
    width: usize,
    height: usize,
    frame_count: usize,
}

impl ZoomSequence {
    /// Constructor.  Checks everything the per-frame math divides by.
    pub fn new(
        start: Region,
        end: Region,
        width: usize,
        height: usize,
        frame_count: usize,
    ) -> Result<Self, String> {
        if start.width <= 0.0 || end.width <= 0.0 {
            return Err("Region widths must be positive.".to_string());
        }

        if width == 0 || height == 0 {
            return Err("The pixel resolution must be nonzero in both axes.".to_string());
        }

        if frame_count == 0 {
            return Err("A zoom sequence needs at least one frame.".to_string());
        }

        Ok(ZoomSequence {
            start,
            end,
            width,
            height,
            frame_count,
        })
    }

    /// The number of frames the sequence produces.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// The viewport for one frame.  Frame 0 is the start framing and
    /// frame `frame_count - 1` is the end framing; a one-frame
    /// sequence shows the start.  The scale follows
    /// scale(t) = w_start · (w_end / w_start)^t, which makes the
    /// per-frame zoom factor constant.
    pub fn viewport_at(&self, frame: usize) -> Viewport {
        let t = if self.frame_count > 1 {
            frame as f64 / (self.frame_count - 1) as f64
        } else {
            0.0
        };
        let scale = self.start.width * (self.end.width / self.start.width).powf(t);
        let center = Complex::new(
            self.start.center.re + t * (self.end.center.re - self.start.center.re),
            self.start.center.im + t * (self.end.center.im - self.start.center.im),
        );
        Viewport::centered(center, scale, self.width, self.height)
    }

    /// A lazy iterator over the whole sequence, in playback order.
    /// Restartable: call it again for a fresh walk.
    pub fn frames(&self) -> impl Iterator<Item = Viewport> + '_ {
        (0..self.frame_count).map(move |frame| self.viewport_at(frame))
    }

    /// The same movement run backwards, for the classic
    /// zoom-out-then-zoom-in composition.
    pub fn reversed(&self) -> ZoomSequence {
        ZoomSequence {
            start: self.end,
            end: self.start,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
    }

    fn wide_to_deep() -> ZoomSequence {
        let start = Region {
            center: Complex::new(-0.5, 0.0),
            width: 4.0,
        };
        let end = Region {
            center: Complex::new(-1.75, 0.01),
            width: 1.0e-6,
        };
        ZoomSequence::new(start, end, 320, 240, 25).unwrap()
    }

    #[test]
    fn sequence_fails_on_bad_parameters() {
        let region = Region {
            center: Complex::new(0.0, 0.0),
            width: 1.0,
        };
        assert!(ZoomSequence::new(region.widened(0.0), region, 320, 240, 25).is_err());
        assert!(ZoomSequence::new(region, region.widened(-1.0), 320, 240, 25).is_err());
        assert!(ZoomSequence::new(region, region, 0, 240, 25).is_err());
        assert!(ZoomSequence::new(region, region, 320, 240, 0).is_err());
    }

    #[test]
    fn sequence_produces_exactly_n_frames() {
        let seq = wide_to_deep();
        assert_eq!(seq.frame_count(), 25);
        assert_eq!(seq.frames().count(), 25);
    }

    #[test]
    fn endpoints_match_the_requested_framings() {
        let seq = wide_to_deep();
        let frames: Vec<Viewport> = seq.frames().collect();
        let first = frames.first().unwrap();
        let last = frames.last().unwrap();
        assert!(close(first.real_width(), 4.0));
        assert!(close(first.center().re, -0.5));
        assert!(close(first.center().im, 0.0));
        assert!(close(last.real_width(), 1.0e-6));
        assert!(close(last.center().re, -1.75));
        assert!(close(last.center().im, 0.01));
    }

    #[test]
    fn zoom_factor_is_constant_between_frames() {
        let seq = wide_to_deep();
        let widths: Vec<f64> = seq.frames().map(|vp| vp.real_width()).collect();
        let first_ratio = widths[1] / widths[0];
        for pair in widths.windows(2) {
            assert!(close(pair[1] / pair[0], first_ratio));
        }
    }

    #[test]
    fn sequence_is_restartable() {
        let seq = wide_to_deep();
        let once: Vec<f64> = seq.frames().map(|vp| vp.real_width()).collect();
        let twice: Vec<f64> = seq.frames().map(|vp| vp.real_width()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn reversed_swaps_the_endpoints() {
        let seq = wide_to_deep().reversed();
        let first = seq.viewport_at(0);
        let last = seq.viewport_at(seq.frame_count() - 1);
        assert!(close(first.real_width(), 1.0e-6));
        assert!(close(last.real_width(), 4.0));
        assert!(close(last.center().re, -0.5));
    }

    #[test]
    fn one_frame_sequence_shows_the_start() {
        let start = Region {
            center: Complex::new(0.25, 0.5),
            width: 2.0,
        };
        let end = start.widened(1.0e-3);
        let seq = ZoomSequence::new(start, end, 64, 64, 1).unwrap();
        let only = seq.viewport_at(0);
        assert!(close(only.real_width(), 2.0));
        assert!(close(only.center().re, 0.25));
    }
}
