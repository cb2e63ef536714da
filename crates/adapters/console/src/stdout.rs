//! Standard-output console.

use std::io::{self, Write};

use smarthome_app::ports::Console;

/// Writes to the process's standard output.
///
/// Write errors (e.g. a closed pipe) are logged at `debug` and otherwise
/// ignored, so output problems never change the exit status.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    fn write(out: &mut impl Write, text: &str) -> io::Result<()> {
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

impl Console for StdoutConsole {
    fn print(&mut self, text: &str) {
        if let Err(err) = Self::write(&mut io::stdout().lock(), text) {
            tracing::debug!(%err, "failed to write to stdout");
        }
    }

    fn println(&mut self, line: &str) {
        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        self.print(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_write_text_verbatim() {
        let mut out = Vec::new();
        StdoutConsole::write(&mut out, "Device name: a").unwrap();
        StdoutConsole::write(&mut out, " type: b\n").unwrap();
        assert_eq!(out, b"Device name: a type: b\n");
    }

    #[test]
    fn should_report_error_when_writer_fails() {
        let err = StdoutConsole::write(&mut ClosedPipe, "hello").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
