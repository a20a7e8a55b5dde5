use crate::error::{Error, Result};

/// Generation options. Passed explicitly to the builder and renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Annotate each rendered line with the source decimal exponents.
    pub detail: bool,
    /// Drop the leading one from every stored mantissa.
    pub implied_one: bool,
    /// Follow each rendered line with the binary exponents of its entries.
    pub powers: bool,
}

impl Config {
    /// Parses command line flags. The first item is the program name and is
    /// skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Config::default();
        for arg in args.into_iter().skip(1) {
            match arg.as_ref() {
                "-d" | "--detail" => config.detail = true,
                "-i" | "--implicit-one" => config.implied_one = true,
                "-p" | "--powers" => config.powers = true,
                other => return Err(Error::UnknownArgument(other.to_owned())),
            }
        }
        Ok(config)
    }
}
