use std::path::PathBuf;
use std::process::ExitCode;

use pwaicons::generate_icons;
use pwaicons::logger::{log_error, log_line};

const DEFAULT_INPUT: &str = "assets/icon.png";
const DEFAULT_OUTPUT_DIR: &str = "assets/icons";

fn main() -> ExitCode {
    // Positional only: [INPUT] [OUTPUT_DIR]
    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    log_line(&format!(
        "Generating PWA icons from {} into {}",
        input.display(),
        out_dir.display()
    ));
    match generate_icons(&input, &out_dir) {
        Ok(icons) => {
            log_line(&format!("Done: {} icons", icons.len()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error("icon generation failed", &e);
            ExitCode::FAILURE
        }
    }
}
