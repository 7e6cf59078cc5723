//! Line-oriented view over a text source.
//!
//! The coder never sees raw line terminators: a source is handed over as a
//! sequence of logical lines, each remembering whether a `\n` followed it.

use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub bytes: Vec<u8>,
    /// `true` when the line was followed by a `\n` in the source.
    pub terminated: bool,
}

impl Line {
    pub fn new(bytes: impl Into<Vec<u8>>, terminated: bool) -> Self {
        Self {
            bytes: bytes.into(),
            terminated,
        }
    }
}

/// Anything that can be read as a sequence of logical lines.
pub trait TextSource {
    fn read_lines(self) -> io::Result<Vec<Line>>;
}

impl<R: BufRead> TextSource for R {
    fn read_lines(mut self) -> io::Result<Vec<Line>> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let terminated = buf.last() == Some(&b'\n');
            if terminated {
                buf.pop();
            }
            lines.push(Line::new(buf.as_slice(), terminated));
        }

        Ok(lines)
    }
}
