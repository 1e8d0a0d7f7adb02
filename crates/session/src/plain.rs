use super::*;
use std::io::BufRead;
use std::io::Write;

/// Line-based console over any reader and writer.
///
/// Used when stdin is not a terminal, and by tests with in-memory buffers.
#[derive(Debug)]
pub struct Plain<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Plain<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Plain<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Plain<R, W> {
    fn notify(&mut self, event: &Event<'_>) -> std::io::Result<()> {
        writeln!(self.output, "{}", event)
    }
    fn read(&mut self) -> std::io::Result<Option<String>> {
        write!(self.output, "{}: ", PROMPT)?;
        self.output.flush()?;
        let ref mut bytes = Vec::new();
        match self.input.read_until(b'\n', bytes)? {
            0 => Ok(None),
            _ => Ok(Some(
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            )),
        }
    }
}
