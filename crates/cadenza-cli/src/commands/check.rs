use std::path::PathBuf;

use super::{read_source, report};

pub fn run(file: PathBuf) {
    let source = read_source(&file);
    cadenza::parse(&source).unwrap_or_else(|e| report(&file, &e));
    // Silent on success, like `cargo check`.
}
