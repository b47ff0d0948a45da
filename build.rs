use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let data_dir = Path::new(&manifest_dir).join("assets").join("data");

    compile_confusables(&data_dir, &out_dir);

    println!("cargo:rerun-if-changed=assets/data/confusables.txt");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Compile `confusables.txt` into a sorted `(source, prototype)` table.
///
/// The table is part of the distance contract, so malformed data fails the
/// build instead of silently changing results:
/// - a source may appear only once
/// - a row may not map a code point to itself
/// - a prototype may never be a source (prototypes are fixed points)
fn compile_confusables(data_dir: &Path, out_dir: &str) {
    let path = data_dir.join("confusables.txt");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read confusables.txt: {e}"));

    let mut version = None;
    let mut entries: BTreeMap<u32, u32> = BTreeMap::new();

    for (line_num, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("# Version:") {
            version = Some(rest.trim().to_string());
            continue;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split('#')
            .next()
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .collect();
        if fields.len() < 2 {
            panic!("confusables.txt:{}: expected `source ; prototype`", line_num + 1);
        }

        let targets: Vec<&str> = fields[1].split_whitespace().collect();
        if targets.len() != 1 {
            panic!(
                "confusables.txt:{}: prototype must be a single code point, got {:?}",
                line_num + 1,
                fields[1]
            );
        }

        let src = parse_code_point(fields[0], line_num + 1);
        let tgt = parse_code_point(targets[0], line_num + 1);

        if src == tgt {
            panic!("confusables.txt:{}: identity row for U+{src:04X}", line_num + 1);
        }
        if entries.insert(src, tgt).is_some() {
            panic!("confusables.txt:{}: duplicate source U+{src:04X}", line_num + 1);
        }
    }

    let sources: BTreeSet<u32> = entries.keys().copied().collect();
    for (src, tgt) in &entries {
        if sources.contains(tgt) {
            panic!("confusables.txt: prototype U+{tgt:04X} of U+{src:04X} is itself a source");
        }
    }

    let version = version.unwrap_or_else(|| panic!("confusables.txt is missing a `# Version:` header"));

    let mut code = String::new();
    code.push_str("// Auto-generated from assets/data/confusables.txt by build.rs.\n\n");
    code.push_str(&format!("/// Version of the confusables dataset the table was compiled from.\npub const CONFUSABLES_VERSION: &str = \"{version}\";\n\n"));
    code.push_str("/// `(source, prototype)` pairs, sorted by source.\n");
    code.push_str("pub const CONFUSABLE_TABLE: &[(u32, u32)] = &[\n");
    for (src, tgt) in &entries {
        code.push_str(&format!("    (0x{src:04X}, 0x{tgt:04X}),\n"));
    }
    code.push_str("];\n");
    let count = entries.len();
    code.push_str(&format!("\n/// Number of entries in [`CONFUSABLE_TABLE`].\npub const CONFUSABLE_COUNT: usize = {count};\n"));

    let out_path = Path::new(out_dir).join("confusables_gen.rs");
    fs::write(&out_path, code).unwrap_or_else(|e| panic!("Failed to write confusables_gen.rs: {e}"));
}

fn parse_code_point(field: &str, line_num: usize) -> u32 {
    let value = u32::from_str_radix(field, 16)
        .unwrap_or_else(|e| panic!("confusables.txt:{line_num}: bad code point {field:?}: {e}"));
    if char::from_u32(value).is_none() {
        panic!("confusables.txt:{line_num}: U+{value:04X} is not a Unicode scalar value");
    }
    value
}
