// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders the zoom sequence: a pull back from the starfish spiral to
//! the whole set, then a dive into Julia Island.  One PNG per frame,
//! numbered in playback order, ready for an external tool to
//! composite into a video, e.g.
//! `ffmpeg -i frames/frame_%04d.png zoom.mp4`.

extern crate image;
extern crate mandelzoom;
extern crate num_cpus;

use mandelzoom::regions;
use mandelzoom::{EscapeRenderer, IterationGrid, ZoomSequence};
use std::env;
use std::fs;
use std::path::Path;

/// Iteration cap shared by every frame.  Deep frames need the
/// headroom; shallow frames escape long before reaching it.
const MAX_ITER: u32 = 450;

/// Output quality, selected with the MANDELZOOM_QUALITY environment
/// variable.  Maps to the pixel resolution and the frame counts of
/// the two movements; the escape-time core never sees it.
#[derive(Copy, Clone, Debug)]
enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    fn from_env() -> Quality {
        match env::var("MANDELZOOM_QUALITY") {
            Err(_) => Quality::Medium,
            Ok(value) => match value.as_str() {
                "low" => Quality::Low,
                "medium" => Quality::Medium,
                "high" => Quality::High,
                other => {
                    eprintln!("Unrecognized quality '{}'.", other);
                    eprintln!("Usage: MANDELZOOM_QUALITY=low|medium|high mandelzoom");
                    std::process::exit(1);
                }
            },
        }
    }

    /// (resolution, zoom-out frames, zoom-in frames).
    fn profile(self) -> (usize, usize, usize) {
        match self {
            Quality::Low => (96, 6, 4),
            Quality::Medium => (512, 80, 20),
            Quality::High => (1024, 120, 40),
        }
    }
}

/// Maps an escape count to a color: a cyclic palette of three
/// phase-shifted sine waves, with points that never escaped painted
/// black.
fn shade(count: u32, max_iter: u32) -> [u8; 3] {
    if count >= max_iter {
        return [0, 0, 0];
    }
    let phase = f64::from(count) * 0.12;
    [
        (128.0 + 127.0 * phase.sin()) as u8,
        (128.0 + 127.0 * (phase + 2.0).sin()) as u8,
        (128.0 + 127.0 * (phase + 4.0).sin()) as u8,
    ]
}

/// Colors a grid and writes it out as one PNG frame.  Grid row zero
/// is the bottom of the viewport while image row zero is the top, so
/// rows go out in reverse.
fn write_frame(path: &Path, grid: &IterationGrid) -> Result<(), std::io::Error> {
    let mut pixels = Vec::with_capacity(grid.counts().len() * 3);
    for row in grid.counts().chunks(grid.width()).rev() {
        for &count in row {
            pixels.extend_from_slice(&shade(count, MAX_ITER));
        }
    }
    image::save_buffer(
        path,
        &pixels,
        grid.width() as u32,
        grid.height() as u32,
        image::ColorType::RGB(8),
    )?;
    Ok(())
}

pub fn main() {
    let quality = Quality::from_env();
    let out_dir = env::var("MANDELZOOM_OUT").unwrap_or_else(|_| "frames".to_string());
    let (resolution, out_frames, in_frames) = quality.profile();

    fs::create_dir_all(&out_dir).expect("Error creating the output directory");

    // The establishing movement pulls back from the starfish to a
    // whole-set view; building it wide-to-deep and reversing keeps
    // the zoom factor identical in both directions.
    let pull_back = ZoomSequence::new(
        regions::STARFISH.widened(4.0),
        regions::STARFISH,
        resolution,
        resolution,
        out_frames,
    )
    .expect("Error building the starfish sequence")
    .reversed();

    let dive = ZoomSequence::new(
        regions::JULIA_ISLAND.widened(3.0),
        regions::JULIA_ISLAND,
        resolution,
        resolution,
        in_frames,
    )
    .expect("Error building the Julia Island sequence");

    let threads = num_cpus::get();
    let total = pull_back.frame_count() + dive.frame_count();

    for (frame, viewport) in pull_back.frames().chain(dive.frames()).enumerate() {
        let renderer =
            EscapeRenderer::new(viewport, MAX_ITER).expect("Error building the frame renderer");
        let grid = renderer.render(threads);
        let path = Path::new(&out_dir).join(format!("frame_{:04}.png", frame));
        write_frame(&path, &grid).expect("Error writing a frame");
        eprintln!("frame {:>4} of {}: {}", frame + 1, total, path.display());
    }
}
