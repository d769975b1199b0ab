use std::path::PathBuf;

use super::{read_source, report};

pub fn run(file: PathBuf, pretty: bool) {
    let source = read_source(&file);
    let program = cadenza::parse(&source).unwrap_or_else(|e| report(&file, &e));

    let json = if pretty {
        serde_json::to_string_pretty(&program)
    } else {
        serde_json::to_string(&program)
    };
    println!("{}", json.expect("AST is always JSON-serializable"));
}
