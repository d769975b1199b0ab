use std::path::PathBuf;

use super::{read_source, report};

pub fn run(file: PathBuf, output: Option<PathBuf>) {
    let source = read_source(&file);
    let csharp = cadenza::compile(&source).unwrap_or_else(|e| report(&file, &e));

    match output {
        Some(path) => {
            std::fs::write(&path, csharp).unwrap_or_else(|e| {
                eprintln!("{}: error: {}", path.display(), e);
                std::process::exit(1);
            });
        }
        None => print!("{}", csharp),
    }
}
