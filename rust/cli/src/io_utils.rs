//! Helpers for reading interactive input.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. Returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// # use sequence_cli::io_utils::read_stdin_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  pass \n");
/// assert_eq!(read_stdin_line(&mut input), Some("pass".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
