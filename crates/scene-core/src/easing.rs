//! Polynomial easing curves.
//!
//! Each curve maps normalized progress `t` to eased progress. Inputs outside
//! \[0, 1\] are evaluated with the same polynomial rather than clamped, so a
//! caller can deliberately overshoot.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
}

impl Easing {
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
    ];

    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => t * (2.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::InQuart => t * t * t * t,
            Easing::OutQuart => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Easing::InOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 - 8.0 * u * u * u * u
                }
            }
            Easing::InQuint => t * t * t * t * t,
            Easing::OutQuint => {
                let u = t - 1.0;
                1.0 + u * u * u * u * u
            }
            Easing::InOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 + 16.0 * u * u * u * u * u
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "ease-in-quad",
            Easing::OutQuad => "ease-out-quad",
            Easing::InOutQuad => "ease-in-out-quad",
            Easing::InCubic => "ease-in-cubic",
            Easing::OutCubic => "ease-out-cubic",
            Easing::InOutCubic => "ease-in-out-cubic",
            Easing::InQuart => "ease-in-quart",
            Easing::OutQuart => "ease-out-quart",
            Easing::InOutQuart => "ease-in-out-quart",
            Easing::InQuint => "ease-in-quint",
            Easing::OutQuint => "ease-out-quint",
            Easing::InOutQuint => "ease-in-out-quint",
        }
    }
}

/// Free-function form of [`Easing::apply`].
#[inline]
pub fn ease(kind: Easing, t: f32) -> f32 {
    kind.apply(t)
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| format!("unknown easing {s:?}"))
    }
}
