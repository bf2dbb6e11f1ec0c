//! Physical dimensions for dose units.
//!
//! Dose quantities are either a mass or a volume (L³), so a dimension is
//! stored as the exponents of those two base quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The physical dimension of a quantity, as mass and length exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Dimension {
    /// Mass exponent (M)
    pub mass: i8,
    /// Length exponent (L)
    pub length: i8,
}

impl Dimension {
    /// Creates a dimension with the specified exponents.
    #[must_use]
    pub const fn new(mass: i8, length: i8) -> Self {
        Self { mass, length }
    }

    /// Creates a new dimension with all exponents set to zero (dimensionless).
    #[must_use]
    pub const fn dimensionless() -> Self {
        Self::new(0, 0)
    }

    /// Mass dimension (M¹).
    pub const MASS: Self = Self::new(1, 0);

    /// Volume dimension (L³).
    pub const VOLUME: Self = Self::new(0, 3);

    /// Returns true if all exponents are zero.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::dimensionless()
    }

    /// Returns true if two dimensions can be converted into each other.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let mut parts = Vec::new();
        for (exp, sym) in [(self.mass, "M"), (self.length, "L")] {
            if exp == 1 {
                parts.push(sym.to_string());
            } else if exp != 0 {
                parts.push(format!("{sym}^{exp}"));
            }
        }

        write!(f, "{}", parts.join(" "))
    }
}
