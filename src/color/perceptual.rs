//! Anchor colors of the matplotlib perceptually uniform colormaps
//!
//! The published maps are 256-entry tables. Each scheme here keeps entries
//! `round(255 * k / 9)` for `k` in `0..10`, rounded to 8 bits, so sampling them back to
//! 256 entries reproduces the published table to within a few 8-bit levels.

#![allow(clippy::unreadable_literal)]

use crate::color::scheme::{Scheme, SchemeKind};

/// viridis, magma, inferno and plasma, dark to light
pub const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "viridis",
        kind: SchemeKind::Perceptual,
        anchors: &[
            0x440154, 0x482878, 0x3e4a89, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6dcd59,
            0xb4de2c, 0xfde725,
        ],
    },
    Scheme {
        name: "magma",
        kind: SchemeKind::Perceptual,
        anchors: &[
            0x000004, 0x180f3e, 0x451077, 0x721f81, 0x9f2f7f, 0xcd4071, 0xf1605d, 0xfd9567,
            0xfec98d, 0xfcfdbf,
        ],
    },
    Scheme {
        name: "inferno",
        kind: SchemeKind::Perceptual,
        anchors: &[
            0x000004, 0x1b0c42, 0x4b0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9a06,
            0xf7d03c, 0xfcffa4,
        ],
    },
    Scheme {
        name: "plasma",
        kind: SchemeKind::Perceptual,
        anchors: &[
            0x0d0887, 0x47039f, 0x7301a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfa9e3b,
            0xfdc926, 0xf0f921,
        ],
    },
];
