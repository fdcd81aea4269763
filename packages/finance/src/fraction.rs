use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A non-negative rational number kept as the raw pair the contracts expect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "camelCase",
    try_from = "unchecked::Fraction"
)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        let res = Self {
            numerator,
            denominator,
        };
        res.invariant_held().map(|()| res)
    }

    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Whether the fraction does not exceed a whole `1`.
    pub const fn is_proper(&self) -> bool {
        self.numerator <= self.denominator
    }

    fn invariant_held(&self) -> Result<()> {
        Error::broken_invariant_if::<Self>(self.denominator == 0, "Denominator should not be zero")
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

mod unchecked {
    use serde::Deserialize;

    use crate::error::Error;

    use super::Fraction as ValidatedFraction;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub(super) struct Fraction {
        numerator: u64,
        denominator: u64,
    }

    impl TryFrom<Fraction> for ValidatedFraction {
        type Error = Error;

        fn try_from(dto: Fraction) -> Result<Self, Self::Error> {
            Self::new(dto.numerator, dto.denominator)
        }
    }
}
