use pow10_tables::render::{write_array, write_entries};
use pow10_tables::{build_table, generate, Config, TableRange};

fn entries(range: TableRange, config: &Config) -> String {
    let table = build_table(range, config);
    let mut out = String::new();
    write_entries(&mut out, "\t", &table, config).unwrap();
    out
}

#[test]
fn plain_pairs() {
    let range = TableRange::new(0, 4, 1).unwrap();
    let expected = "\
\t0x8000000000000000, 0xA000000000000000,
\t0xC800000000000000, 0xFA00000000000000,
";
    assert_eq!(entries(range, &Config::default()), expected);
}

#[test]
fn detail_with_odd_tail_and_implied_one() {
    let range = TableRange::new(0, 5, 1).unwrap();
    let config = Config {
        detail: true,
        implied_one: true,
        powers: false,
    };
    let expected = "\
\t0x0, 0x4000000000000000,\t// 1e0, 1e1
\t0x9000000000000000, 0xF400000000000000,\t// 1e2, 1e3
\t0x3880000000000000,\t\t\t// 1e4
";
    assert_eq!(entries(range, &config), expected);
}

#[test]
fn coarse_tail_with_powers() {
    let config = Config {
        detail: true,
        implied_one: false,
        powers: true,
    };
    let out = entries(TableRange::COARSE, &config);
    assert!(out.starts_with(
        "\t0xD953E8624B85DD78, 0xDB71E91432B1A24A,\t// 1e-330, 1e-302\n// 2^-1097, 2^-1004\n"
    ));
    assert!(out.ends_with("\t0x867F59A9D4BED6C0,\t\t\t// 1e286\n// 2^950\n"));
    assert_eq!(out.lines().count(), 24);
}

#[test]
fn array_declaration() {
    let config = Config::default();
    let table = build_table(TableRange::new(-1, 0, 1).unwrap(), &config);
    let mut out = String::new();
    write_array(&mut out, "tenth", &table, &config).unwrap();
    assert_eq!(
        out,
        "static const uint64_t tenth[] = {\n\t0xCCCCCCCCCCCCCCCC,\n};\n"
    );
}

#[test]
fn full_header() {
    let header = generate(&Config::default()).unwrap();
    assert!(header.starts_with("// Don't touch this file"));
    assert!(header.contains("#ifndef _tables_h_\n#define _tables_h_\n\n//#include <stdint.h>\n\n"));
    assert!(header.contains(
        "// Fine table\nstatic const uint64_t fine[] = {\n\t0x8000000000000000, 0xA000000000000000,\n"
    ));
    assert!(header.contains("};\n\n\n// Coarse table\nstatic const uint64_t coarse[] = {\n"));
    assert!(header.ends_with("};\n\n#endif // _tables_h_\n"));
    // 14 fine lines, 12 coarse lines.
    assert_eq!(header.lines().filter(|line| line.starts_with("\t0x")).count(), 26);
}
