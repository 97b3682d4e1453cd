//! Line input for interactive commands.

use std::io::BufRead;

/// Next line from `input` without surrounding whitespace.
///
/// `None` once the input is closed. A read error counts as closed.
///
/// ```rust
/// use std::io::Cursor;
/// use minipoker_cli::io_utils::read_trimmed_line;
///
/// let mut input = Cursor::new("  bet 10 \r\n");
/// assert_eq!(read_trimmed_line(&mut input).as_deref(), Some("bet 10"));
/// assert_eq!(read_trimmed_line(&mut input), None);
/// ```
pub fn read_trimmed_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
