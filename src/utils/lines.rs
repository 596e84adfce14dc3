use std::io::{self, BufRead};

/// Line-by-line reader over a byte stream that reuses one buffer.
///
/// Lines are returned as raw bytes with no decoding, so text in any encoding
/// (or none) passes through unchanged. The line terminator is stripped, and
/// a `\r` directly before it goes with it: a CRLF file reads the same as its
/// LF form, and a lone `\r` never ends up in the last word of a line.
pub struct LineReader<R> {
    input: R,
    line: Vec<u8>,
    lines_read: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
            lines_read: 0,
        }
    }

    /// Read the next line. The returned bytes are only valid until the next call.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }

        self.lines_read += 1;
        Ok(Some(self.line.as_slice()))
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> Vec<Vec<u8>> {
        let mut reader = LineReader::new(Cursor::new(input.to_vec()));
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line.to_vec());
        }
        assert_eq!(reader.lines_read(), lines.len());
        lines
    }

    #[test]
    fn test_terminators() {
        assert_eq!(read_all(b"a\nb\r\nc"), [b"a", b"b", b"c"]);
        assert_eq!(read_all(b"a\n"), [b"a"]);
        assert_eq!(read_all(b"\n\n"), [b"", b""]);
        assert!(read_all(b"").is_empty());
    }

    #[test]
    fn test_cr_kept_without_newline() {
        assert_eq!(read_all(b"a\rb\r"), [b"a\rb\r"]);
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        assert_eq!(read_all(b"x\xffy\n\xfe"), [&b"x\xffy"[..], &b"\xfe"[..]]);
    }
}
