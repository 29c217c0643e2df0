//! The two named locations the animation travels between.  Neither
//! has an official name; "starfish" is the spiral of arms just above
//! the main body, and "Julia Island" is a tiny embedded copy of a
//! Julia set deep in the filaments west of the set, famous from deep
//! zoom videos.
use num::Complex;

use sequence::Region;

/// The starfish spiral, framed tight enough that the arms fill the
/// view.
pub const STARFISH: Region = Region {
    center: Complex {
        re: -0.373973468,
        im: 0.659770403,
    },
    width: 1.0e-4,
};

/// Julia Island.  The framing width of 1e-9 is near the floor of
/// what f64 pixel spacing can resolve, which is as deep as this
/// renderer goes.
pub const JULIA_ISLAND: Region = Region {
    center: Complex {
        re: -1.768778833,
        im: -0.001738995,
    },
    width: 1.0e-9,
};
