use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Bit 63, set in every normalized mantissa.
pub const MSB: u64 = 1 << 63;

/// Reduces `magnitude` to a 64-bit mantissa with bit 63 set and the binary
/// exponent `p` such that magnitude ~= mantissa * 2**(p - 63).
///
/// Magnitudes wider than 64 bits are truncated, not rounded. Zero maps to
/// `(0, 0)` regardless of `implied_one`.
///
/// With `implied_one` the leading one is shifted out of the returned word,
/// leaving only the fraction bits as IEEE significands store them. The
/// exponent is unaffected.
pub fn normalize(magnitude: &BigUint, implied_one: bool) -> (u64, i32) {
    if magnitude.is_zero() {
        return (0, 0);
    }

    let (mantissa, bin_exp) = match magnitude.to_u64() {
        // Under-filled: shift left until bit 63 is set.
        Some(x) => {
            let shift = x.leading_zeros();
            (x << shift, 63 - shift as i32)
        }
        // Over-filled: drop the low bits past the top 64.
        None => {
            let excess = magnitude.bits() - 64;
            let top = magnitude >> excess;
            let x = top.iter_u64_digits().next().unwrap_or(0);
            (x, 63 + excess as i32)
        }
    };
    debug_assert!(mantissa & MSB != 0);

    if implied_one {
        (mantissa << 1, bin_exp)
    } else {
        (mantissa, bin_exp)
    }
}

/// Undoes the implied-one shift, restoring the leading bit.
#[inline]
pub const fn restore_implied_one(stored: u64) -> u64 {
    (stored >> 1) | MSB
}
