//! Path lengths that may be infinite.

use core::fmt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A shortest-path length: either a finite sum of edge weights or infinite
/// (the target has not been reached).
///
/// Variant order drives the derived ordering, so every `Finite` value is
/// smaller than `Infinite` and finite values compare by their weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance<W> {
    /// A reachable node, at this distance.
    Finite(W),
    /// An unreachable node.
    Infinite,
}

impl<W> Distance<W> {
    /// Returns `true` for [`Distance::Finite`].
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite length, or `None` when infinite.
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// Extends the path by one edge of weight `weight`.
    ///
    /// Infinity absorbs everything. A sum that does not fit in `W` is
    /// infinite as well.
    pub fn extend(self, weight: W) -> Self
    where
        W: PathWeight,
    {
        match self {
            Self::Finite(w) => w.checked_extend(weight).map_or(Self::Infinite, Self::Finite),
            Self::Infinite => Self::Infinite,
        }
    }
}

/// Edge weights that can be summed along a path.
///
/// Addition reports overflow instead of wrapping: integers use their
/// `checked_add`, floats treat a non-finite sum as overflow.
pub trait PathWeight: Copy + PartialOrd + Zero {
    /// `self + weight`, or `None` if the sum is not representable.
    fn checked_extend(self, weight: Self) -> Option<Self>;
}

macro_rules! impl_path_weight_int {
    ($($t:ty),*) => {$(
        impl PathWeight for $t {
            #[inline]
            fn checked_extend(self, weight: Self) -> Option<Self> {
                self.checked_add(weight)
            }
        }
    )*};
}

macro_rules! impl_path_weight_float {
    ($($t:ty),*) => {$(
        impl PathWeight for $t {
            #[inline]
            fn checked_extend(self, weight: Self) -> Option<Self> {
                let sum = self + weight;
                sum.is_finite().then_some(sum)
            }
        }
    )*};
}

impl_path_weight_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_path_weight_float!(f32, f64);

impl<W> From<W> for Distance<W> {
    fn from(w: W) -> Self {
        Self::Finite(w)
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => w.fmt(f),
            Self::Infinite => f.write_str("∞"),
        }
    }
}
