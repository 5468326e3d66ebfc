//! Build script to embed the bundled dictionaries
//!
//! Reads the raw word list files and generates Rust source code with const arrays.
//! Normalization happens at load time, so the raw lines are copied as-is.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/en.txt",
        &Path::new(&out_dir).join("en_words.rs"),
        "EN_WORDS",
        "Bundled English dictionary (raw lines)",
    );

    generate_word_list(
        "data/fr.txt",
        &Path::new(&out_dir).join("fr_words.rs"),
        "FR_WORDS",
        "Bundled French dictionary (raw lines)",
    );

    println!("cargo:rerun-if-changed=data/en.txt");
    println!("cargo:rerun-if-changed=data/fr.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Comment lines and anything that would break a string literal are left out.
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !line.contains('"') && !line.contains('\\'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of raw lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
