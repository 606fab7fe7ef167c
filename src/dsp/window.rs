use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tapering applied to a truncated sinc.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowKind {
    /// Exact Blackman, sidelobes near -58 dB.
    #[default]
    Blackman,
}

impl WindowKind {
    /// Window value at tap `i` of a kernel of order `order` (`order + 1` taps).
    #[inline]
    pub fn value(self, i: usize, order: usize) -> f64 {
        match self {
            WindowKind::Blackman => blackman(i, order),
        }
    }
}

const BLACKMAN_A0: f64 = 7938.0 / 18608.0;
const BLACKMAN_A1: f64 = 9240.0 / 18608.0;
const BLACKMAN_A2: f64 = 1430.0 / 18608.0;

#[inline]
fn blackman(i: usize, order: usize) -> f64 {
    let x = i as f64 / order as f64;
    BLACKMAN_A0 - BLACKMAN_A1 * (2.0 * PI * x).cos() + BLACKMAN_A2 * (4.0 * PI * x).cos()
}
