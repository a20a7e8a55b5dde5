//! Generator for cached power-of-ten tables.
//!
//! Fast float parsing and printing routines avoid arbitrary precision at run
//! time by indexing a precomputed table of 64-bit significands of 10^e. This
//! crate computes those significands exactly with big integers:
//!
//! - 10^e for e >= 0 is formed exactly and truncated to its top 64 bits.
//! - 10^e for e < 0 is expanded into binary digits one bit at a time using
//!   exact rational arithmetic, then truncated the same way.
//!
//! Each result is a [`Pow10Entry`] with bit 63 of the mantissa set, such that
//! 10^e ~= mantissa * 2**(bin_exp - 63).
//!
//! Two tables are produced: a *fine* table with every exponent in [0, 28) and
//! a *coarse* table with every 28th exponent in [-330, 310). A caller
//! approximates 10^e by multiplying one coarse entry by one fine entry.
//!
//! <br>
//!
//! # Example
//!
//! ```
//! use pow10_tables::{build_table, Config, TableRange};
//!
//! let table = build_table(TableRange::FINE, &Config::default());
//! assert_eq!(table.len(), 28);
//! assert_eq!(table.entries()[1].mantissa, 0xA000000000000000);
//! assert_eq!(table.entries()[1].bin_exp, 3);
//! table.verify().unwrap();
//! ```

#![deny(unsafe_code)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::doc_markdown,
    clippy::must_use_candidate,
    clippy::unreadable_literal
)]

mod config;
mod error;
mod magnitude;
mod normalize;
pub mod render;
mod table;
mod verify;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::magnitude::{decimal_power_magnitude, RawMagnitude, EXPANSION_BITS};
pub use crate::normalize::{normalize, restore_implied_one, MSB};
pub use crate::table::{build_table, cached_power, Pow10Entry, Table, TableRange};
pub use crate::verify::verify_entry;

/// Builds and verifies the fine and coarse tables and renders them as a C
/// header.
pub fn generate(config: &Config) -> Result<String> {
    let fine = build_table(TableRange::FINE, config);
    fine.verify()?;
    let coarse = build_table(TableRange::COARSE, config);
    coarse.verify()?;

    let mut header = String::new();
    render::write_header(&mut header, &fine, &coarse, config)?;
    Ok(header)
}
