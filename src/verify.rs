use crate::error::{Error, Result};
use crate::normalize::{restore_implied_one, MSB};
use crate::table::Pow10Entry;
use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, Zero};

/// Checks `entry` against 10^dec_exp using exact integer arithmetic.
///
/// The mantissa must have its leading bit (restored first when `implied_one`)
/// and lie within one unit of 10^dec_exp * 2**(63 - bin_exp).
pub fn verify_entry(dec_exp: i32, entry: Pow10Entry, implied_one: bool) -> Result<()> {
    let mantissa = if implied_one {
        restore_implied_one(entry.mantissa)
    } else {
        entry.mantissa
    };

    let inexact = Error::Inexact {
        dec_exp,
        mantissa: entry.mantissa,
        bin_exp: entry.bin_exp,
    };
    if mantissa & MSB == 0 {
        return Err(inexact);
    }

    // exact = num / den = 10^dec_exp * 2^(63 - bin_exp)
    let pow10 = BigUint::from(10_u8).pow(dec_exp.unsigned_abs());
    let (mut num, mut den) = if dec_exp >= 0 {
        (pow10, BigUint::one())
    } else {
        (BigUint::one(), pow10)
    };
    let shift = i64::from(entry.bin_exp) - 63;
    if shift >= 0 {
        den <<= shift as u64;
    } else {
        num <<= shift.unsigned_abs();
    }

    let (floor, rem) = num.div_rem(&den);
    let mantissa = BigUint::from(mantissa);
    if mantissa == floor || (!rem.is_zero() && mantissa == floor + 1_u32) {
        Ok(())
    } else {
        Err(inexact)
    }
}
