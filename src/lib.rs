#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot zoom renderer
//!
//! The Mandelbrot set is the collection of points c on the complex
//! plane for which the iteration z ← z² + c, starting from zero,
//! never runs off to infinity.  Points outside the set escape, and
//! the number of iterations they take to do so is what gets painted;
//! points inside never escape and stay black.
//!
//! This crate computes those per-pixel escape counts for any
//! rectangular viewport of the plane, and generates the sequence of
//! viewports for a zoom animation between two famous locations: the
//! "starfish" spiral and the deep "Julia Island" embedded copy.  The
//! library hands back grids of raw iteration counts; turning them
//! into colored frames and a video is the consumer's business.

extern crate crossbeam;
extern crate itertools;
extern crate num;

pub mod escape;
pub mod regions;
pub mod sequence;
pub mod viewport;

pub use escape::{escape_time, EscapeRenderer, IterationGrid};
pub use sequence::{Region, ZoomSequence};
pub use viewport::Viewport;
