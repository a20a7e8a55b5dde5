use crate::config::Config;
use crate::table::Table;
use core::fmt::{self, Write};

/// Writes the entries of `table`, two per line, each line starting with
/// `indent`.
pub fn write_entries<W: Write>(
    out: &mut W,
    indent: &str,
    table: &Table,
    config: &Config,
) -> fmt::Result {
    let mut entries = table.iter();
    while let Some((dec_exp0, entry0)) = entries.next() {
        match entries.next() {
            Some((dec_exp1, entry1)) => {
                write!(out, "{indent}{:#X}, {:#X},", entry0.mantissa, entry1.mantissa)?;
                if config.detail {
                    write!(out, "\t// 1e{dec_exp0}, 1e{dec_exp1}")?;
                }
                writeln!(out)?;
                if config.powers {
                    writeln!(out, "// 2^{}, 2^{}", entry0.bin_exp, entry1.bin_exp)?;
                }
            }
            None => {
                write!(out, "{indent}{:#X},", entry0.mantissa)?;
                if config.detail {
                    write!(out, "\t\t\t// 1e{dec_exp0}")?;
                }
                writeln!(out)?;
                if config.powers {
                    writeln!(out, "// 2^{}", entry0.bin_exp)?;
                }
            }
        }
    }
    Ok(())
}

/// Writes a `static const uint64_t` array declaration holding `table`.
pub fn write_array<W: Write>(
    out: &mut W,
    name: &str,
    table: &Table,
    config: &Config,
) -> fmt::Result {
    writeln!(out, "static const uint64_t {name}[] = {{")?;
    write_entries(out, "\t", table, config)?;
    writeln!(out, "}};")
}

/// Writes the complete C header with the fine and coarse tables.
pub fn write_header<W: Write>(
    out: &mut W,
    fine: &Table,
    coarse: &Table,
    config: &Config,
) -> fmt::Result {
    out.write_str(
        "// Don't touch this file, this is auto generated by gen-tables\n\
         // Include this in function to have local variables\n\
         // Also include stdint.h before this\n\
         #ifndef _tables_h_\n\
         #define _tables_h_\n\
         \n\
         //#include <stdint.h>\n\
         \n",
    )?;

    writeln!(out, "// Fine table")?;
    write_array(out, "fine", fine, config)?;
    writeln!(out)?;

    writeln!(out, "\n// Coarse table")?;
    write_array(out, "coarse", coarse, config)?;
    writeln!(out)?;

    writeln!(out, "#endif // _tables_h_")
}
