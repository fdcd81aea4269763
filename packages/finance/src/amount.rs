use crate::error::{Error, Result};

/// An amount in the smallest on-chain unit of a coin.
pub type Amount = u64;

pub type DecimalDigits = u8;

/// Converts an amount of whole coins into the smallest on-chain units,
/// i.e. `whole * 10 ^ decimal_digits`.
///
/// Example: `100 SUI` with 9 decimal digits are `100_000_000_000` MIST.
pub fn from_whole(whole: Amount, decimal_digits: DecimalDigits) -> Result<Amount> {
    10u64
        .checked_pow(decimal_digits.into())
        .and_then(|unit| whole.checked_mul(unit))
        .ok_or_else(|| Error::overflow("from_whole", whole, decimal_digits))
}
