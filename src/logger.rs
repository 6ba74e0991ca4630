use std::path::Path;

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Diagnostic line on stderr, kept off stdout so progress output stays clean.
pub fn log_line(line: &str) {
    eprintln!("[{}] {}", timestamp(), line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}

pub fn log_generated(path: &Path) {
    println!("Generated: {}", path.display());
}
