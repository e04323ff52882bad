use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::RecordError;

/// Input and output ports for everything interactive. Any `BufRead` and
/// `Write` pair works, stdin/stdout in the binary and byte buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its line ending. A closed input is an
    /// `UnexpectedEof` error, so no prompt loop can spin on it. Bytes that are
    /// not UTF-8 are replaced rather than failing the read.
    pub fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }

        let mut line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!("Console input is not valid UTF-8, replacing the bad bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        trace!("Read line: {:?}", line);
        Ok(line)
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.read_line()
    }

    /// Keeps prompting until `check` accepts what was typed.
    pub fn prompt_valid<T>(
        &mut self,
        label: &str,
        check: impl Fn(&str) -> Result<T, RecordError>,
    ) -> io::Result<T> {
        loop {
            let line = self.prompt(label)?;
            match check(&line) {
                Ok(value) => return Ok(value),
                Err(e) => debug!("Rejected {:?}: {}", line, e),
            }
        }
    }

    /// Keeps prompting until the answer parses as `N`. Used for menu choices.
    pub fn prompt_number<N: FromStr>(&mut self, label: &str) -> io::Result<N> {
        loop {
            let line = self.prompt(label)?;
            if let Ok(n) = line.trim().parse() {
                return Ok(n);
            }
            writeln!(self.output, "Please enter a number.")?;
        }
    }

    /// Yes/no question, anything but "y"/"yes" counts as no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} [y/N]: ", question))?;
        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Parses a number out of console text, turning garbage into the same error
/// a setter would give for a bad value.
pub fn parse_field<N: FromStr>(field: &'static str, text: &str) -> Result<N, RecordError> {
    text.trim()
        .parse()
        .map_err(|_| RecordError::InvalidArgument {
            field,
            reason: "is not a number",
        })
}
