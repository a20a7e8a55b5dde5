use core::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("table step must be positive, got {0}")]
    InvalidStep(i32),

    #[error("unrecognized argument `{0}` (expected -d/--detail, -i/--implicit-one or -p/--powers)")]
    UnknownArgument(String),

    #[error("entry for 1e{dec_exp} is not within one unit of the exact value: {mantissa:#018x} * 2^({bin_exp} - 63)")]
    Inexact {
        dec_exp: i32,
        mantissa: u64,
        bin_exp: i32,
    },

    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
