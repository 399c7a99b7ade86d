//! Build script to generate the embedded word pool
//!
//! Reads the authored group file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_group_list(
        "data/groups.txt",
        &Path::new(&out_dir).join("groups.rs"),
        "GROUPS",
        "Built-in word groups (theme, four words)",
    );

    // Rebuild if the pool changes
    println!("cargo:rerun-if-changed=data/groups.txt");
}

fn generate_group_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let groups: Vec<(&str, Vec<&str>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (theme, words) = line.split_once(':').unwrap_or(("", line));
            let words: Vec<&str> = words.split(',').map(str::trim).collect();
            assert!(
                words.len() == 4 && words.iter().all(|w| !w.is_empty()),
                "Group line must hold exactly four words: {line}"
            );
            (theme.trim(), words)
        })
        .collect();
    let count = groups.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, [&str; 4])] = &[").unwrap();

    for (theme, words) in groups {
        writeln!(
            output,
            "    ({theme:?}, [{:?}, {:?}, {:?}, {:?}]),",
            words[0], words[1], words[2], words[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of groups in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
