//! Terminal output helpers.
//!
//! Plain formatting functions with no state; colors via raw ANSI escapes.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Print the generated note, or a placeholder when it is empty.
pub fn display_note(note: &str) {
    if note.is_empty() {
        println!("\x1b[2m(empty release note)\x1b[0m");
    } else {
        print!("{}", note);
    }
}
