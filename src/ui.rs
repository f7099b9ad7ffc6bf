use colored::Colorize;

/// Print text meant for pipelines to capture, without decoration
pub fn plain_message(message: &str) {
    println!("{message}");
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}
