//! Line-oriented terminal I/O for the interactive screens.

use std::io::{BufRead, Write};

use anyhow::Result;

/// Prompt/response I/O over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", line.as_ref())?;
        Ok(())
    }

    /// Write `prompt` and read one line of input with the line ending
    /// stripped. Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.ask(&format!("{message} [y/N]: "))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }

    /// [`Terminal::confirm`] for callers that cannot propagate errors: an
    /// I/O failure is logged and treated as no.
    pub fn confirm_or_decline(&mut self, message: &str) -> bool {
        self.confirm(message).unwrap_or_else(|e| {
            tracing::warn!("confirmation prompt failed, declining: {e:#}");
            false
        })
    }
}

/// Render a fixed-width progress bar for a percentage in `0.0..=100.0`.
pub fn progress_bar(percent: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent / 100.0) * WIDTH as f64).round().clamp(0.0, WIDTH as f64) as usize;
    format!("[{}{}] {:>3.0}%", "#".repeat(filled), "-".repeat(WIDTH - filled), percent)
}

/// Parse a 1-based menu choice into a 0-based index below `len`.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str) -> Terminal<&[u8], Vec<u8>> {
        Terminal::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn ask_strips_line_endings() {
        let mut t = terminal("Asha\r\nnext\n");
        assert_eq!(t.ask("Name: ").unwrap().as_deref(), Some("Asha"));
        assert_eq!(t.ask("Again: ").unwrap().as_deref(), Some("next"));
        assert_eq!(t.ask("Done: ").unwrap(), None);
        assert!(String::from_utf8(t.out).unwrap().starts_with("Name: Again: "));
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(terminal("y\n").confirm("Sure?").unwrap());
        assert!(terminal("YES\n").confirm("Sure?").unwrap());
        assert!(!terminal("\n").confirm("Sure?").unwrap());
        assert!(!terminal("").confirm("Sure?").unwrap());
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn confirm_or_decline_treats_io_error_as_no() {
        let mut t = Terminal::new("y\n".as_bytes(), BrokenWriter);
        assert!(t.confirm("Sure?").is_err());
        assert!(!t.confirm_or_decline("Sure?"));
        assert!(terminal("y\n").confirm_or_decline("Sure?"));
    }

    #[test]
    fn progress_bar_width() {
        assert_eq!(progress_bar(0.0), "[--------------------]   0%");
        assert_eq!(progress_bar(50.0), "[##########----------]  50%");
        assert_eq!(progress_bar(100.0), "[####################] 100%");
    }

    #[test]
    fn parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("x", 3), None);
    }
}
