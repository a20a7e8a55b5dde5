use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of binary digits kept after the leading one when expanding a
/// negative power of ten.
///
/// Only 64 significant bits survive normalization. The extra bits keep the
/// truncated result stable; this is a heuristic margin, not a proven error
/// bound, which is why every generated table is checked by
/// [`verify_entry`](crate::verify_entry).
pub const EXPANSION_BITS: u64 = 128;

/// Binary magnitude of 10^dec_exp, value = digits / 2^frac_bits.
///
/// For non-negative exponents `digits` is exactly 10^dec_exp and `frac_bits`
/// is 0. For negative exponents `digits` holds the leading binary digits of
/// the fraction, truncated after [`EXPANSION_BITS`] bits past the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMagnitude {
    pub digits: BigUint,
    pub frac_bits: u64,
}

impl RawMagnitude {
    /// Returns true if the magnitude came from a non-terminating expansion
    /// rather than an exact integer power.
    pub fn is_fraction(&self) -> bool {
        self.frac_bits != 0
    }
}

/// Computes the binary magnitude of 10^dec_exp without any floating point.
pub fn decimal_power_magnitude(dec_exp: i32) -> RawMagnitude {
    let ten = BigUint::from(10_u8);
    if dec_exp >= 0 {
        return RawMagnitude {
            digits: ten.pow(dec_exp.unsigned_abs()),
            frac_bits: 0,
        };
    }

    // The fraction f = rem / denom, starting at 1 / 10^-dec_exp.
    let denom = ten.pow(dec_exp.unsigned_abs());
    let mut rem = BigUint::one();
    let mut digits = BigUint::zero();
    let mut frac_bits = 0_u64;
    let mut first_one: Option<u64> = None;

    loop {
        rem <<= 1_u32;
        digits <<= 1_u32;
        frac_bits += 1;

        if rem >= denom {
            rem -= &denom;
            digits += 1_u32;
            first_one.get_or_insert(frac_bits);
            // Doubling reached exactly 1: the expansion terminated.
            if rem.is_zero() {
                break;
            }
        }

        if first_one.is_some_and(|first| frac_bits - first >= EXPANSION_BITS) {
            break;
        }
    }

    RawMagnitude { digits, frac_bits }
}
