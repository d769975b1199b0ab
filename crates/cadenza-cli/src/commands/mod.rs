pub mod ast;
pub mod build;
pub mod check;

use std::path::Path;

use cadenza::Error;

/// `{file}: error: {message} at line N, column M`, the rendering contract
/// the core's `Error` `Display` leaves to the driver.
pub fn report(file: &Path, err: &Error) -> ! {
    eprintln!("{}: error: {}", file.display(), err);
    std::process::exit(1);
}

pub fn read_source(file: &Path) -> String {
    std::fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("{}: error: {}", file.display(), e);
        std::process::exit(1);
    })
}
