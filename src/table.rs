use crate::config::Config;
use crate::error::{Error, Result};
use crate::magnitude::decimal_power_magnitude;
use crate::normalize::normalize;
use crate::verify::verify_entry;

/// Normalized approximation of one power of ten:
/// 10^dec_exp ~= mantissa * 2**(bin_exp - 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pow10Entry {
    pub mantissa: u64,
    pub bin_exp: i32,
}

/// Computes the table entry for 10^dec_exp.
pub fn cached_power(dec_exp: i32, implied_one: bool) -> Pow10Entry {
    let magnitude = decimal_power_magnitude(dec_exp);
    let (mantissa, bin_exp) = normalize(&magnitude.digits, implied_one);
    // normalize() counts the fraction digits as integer bits; take them back
    // out so the exponent describes 10^dec_exp itself.
    Pow10Entry {
        mantissa,
        bin_exp: bin_exp - magnitude.frac_bits as i32,
    }
}

/// Decimal exponents start, start + step, ... below end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRange {
    start: i32,
    end: i32,
    step: i32,
}

impl TableRange {
    /// One entry per decimal exponent in [0, 28).
    pub const FINE: TableRange = TableRange {
        start: 0,
        end: 28,
        step: 1,
    };

    /// Every 28th decimal exponent from -330, covering the f64 range.
    pub const COARSE: TableRange = TableRange {
        start: -330,
        end: 310,
        step: 28,
    };

    pub fn new(start: i32, end: i32, step: i32) -> Result<Self> {
        if step <= 0 {
            return Err(Error::InvalidStep(step));
        }
        Ok(TableRange { start, end, step })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Sampled decimal exponents in increasing order.
    pub fn exponents(&self) -> impl Iterator<Item = i32> {
        (self.start..self.end).step_by(self.step as usize)
    }

    /// Number of sampled exponents, ceil((end - start) / step).
    pub fn len(&self) -> usize {
        let span = i64::from(self.end) - i64::from(self.start);
        if span <= 0 {
            return 0;
        }
        let step = i64::from(self.step);
        ((span + step - 1) / step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write-once sequence of entries for a [`TableRange`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    range: TableRange,
    implied_one: bool,
    entries: Vec<Pow10Entry>,
}

impl Table {
    pub fn range(&self) -> TableRange {
        self.range
    }

    /// Whether the stored mantissas have their leading one stripped.
    pub fn implied_one(&self) -> bool {
        self.implied_one
    }

    pub fn entries(&self) -> &[Pow10Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their decimal exponents.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Pow10Entry)> + '_ {
        self.range.exponents().zip(self.entries.iter().copied())
    }

    /// Checks every entry against the exact value of its power of ten.
    pub fn verify(&self) -> Result<()> {
        for (dec_exp, entry) in self.iter() {
            verify_entry(dec_exp, entry, self.implied_one)?;
        }
        tracing::debug!(
            start = self.range.start,
            end = self.range.end,
            step = self.range.step,
            "table verified"
        );
        Ok(())
    }
}

/// Builds the entries for every exponent in `range`.
pub fn build_table(range: TableRange, config: &Config) -> Table {
    let span = tracing::debug_span!(
        "build_table",
        start = range.start,
        end = range.end,
        step = range.step
    );
    let _enter = span.enter();

    let mut entries = Vec::with_capacity(range.len());
    for dec_exp in range.exponents() {
        let entry = cached_power(dec_exp, config.implied_one);
        tracing::trace!(dec_exp, mantissa = entry.mantissa, bin_exp = entry.bin_exp);
        entries.push(entry);
    }
    tracing::debug!(len = entries.len(), "table built");

    Table {
        range,
        implied_one: config.implied_one,
        entries,
    }
}
