// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  For every pixel of a viewport, take
//! the point c it samples and run the iteration z ← z² + c from zero,
//! counting how many steps it takes |z| to pass 2.  Points that never
//! pass it within the iteration cap are presumed members of the set.
//! The result is a grid of raw counts; coloring them is the
//! consumer's problem.

use itertools::iproduct;
use num::Complex;

use viewport::Viewport;

/// The classic iteration.  Returns the zero-based step at which the
/// orbit of c first leaves the circle of radius 2, or `max_iter` if
/// it never does.  The escape test compares the squared magnitude
/// against 4, which is the same threshold without the square root.
pub fn escape_time(c: Complex<f64>, max_iter: u32) -> u32 {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 0..max_iter {
        z = z * z + c;
        if z.norm_sqr() > 4.0_f64 {
            return i;
        }
    }
    max_iter
}

/// A frame's worth of escape counts, one per pixel, stored row-major
/// from the (x_min, y_min) corner.  Every value is in
/// [0, max_iter], with max_iter meaning "never escaped".
#[derive(Clone, Debug)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl IterationGrid {
    /// Horizontal pixel resolution of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Vertical pixel resolution of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The escape count at a pixel.  Panics if the coordinates are
    /// off the grid.
    pub fn get(&self, px: usize, py: usize) -> u32 {
        assert!(px < self.width && py < self.height);
        self.counts[py * self.width + px]
    }

    /// The whole grid as a flat row-major slice, for consumers that
    /// walk every pixel anyway.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

/// Evaluates one viewport into an IterationGrid.  Owns the viewport
/// and the iteration cap; both are fixed at construction.
pub struct EscapeRenderer {
    viewport: Viewport,
    max_iter: u32,
}

impl EscapeRenderer {
    /// Constructor.  The viewport has already proven its shape; the
    /// only thing left to check is that the cap allows at least one
    /// iteration.
    pub fn new(viewport: Viewport, max_iter: u32) -> Result<Self, String> {
        if max_iter == 0 {
            return Err("The iteration cap must be at least 1.".to_string());
        }
        Ok(EscapeRenderer { viewport, max_iter })
    }

    /// The single-threaded evaluator: walk every pixel in raster
    /// order and record its escape count.
    pub fn render_single(&self) -> IterationGrid {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let mut counts = vec![0_u32; w * h];
        for (py, px) in iproduct!(0..h, 0..w) {
            counts[py * w + px] = escape_time(self.viewport.pixel_to_point(px, py), self.max_iter);
        }
        IterationGrid {
            width: w,
            height: h,
            counts,
        }
    }

    /// A multi-threaded version of the evaluator.  Pixels are
    /// independent, so the grid is split into horizontal bands, one
    /// per thread, each exclusively owned by its worker; no merge
    /// step is needed afterwards.  Produces the same grid as
    /// `render_single`.
    pub fn render(&self, threads: usize) -> IterationGrid {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let mut counts = vec![0_u32; w * h];
        let band_rows = h / threads.max(1) + 1;
        {
            let bands: Vec<(usize, &mut [u32])> =
                counts.chunks_mut(band_rows * w).enumerate().collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands {
                    let top = i * band_rows;
                    spawner.spawn(move |_| {
                        for (row, line) in band.chunks_mut(w).enumerate() {
                            let py = top + row;
                            for (px, count) in line.iter_mut().enumerate() {
                                *count = escape_time(
                                    self.viewport.pixel_to_point(px, py),
                                    self.max_iter,
                                );
                            }
                        }
                    });
                }
            })
            .unwrap();
        }
        IterationGrid {
            width: w,
            height: h,
            counts,
        }
    }
}
