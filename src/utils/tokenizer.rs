use memchr::memchr;

/// Word separator. Only the ASCII space splits words; tabs and other
/// whitespace are part of the word they touch.
const SEPARATOR: u8 = b' ';

/// Iterator over the space-delimited words of a line.
///
/// Lines are opaque bytes. Each item is a view into the source line, so the
/// words live exactly as long as the buffer they were split from.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a [u8],
}

impl<'a> Words<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        // Skip the run of separators in front of the next word
        let start = self.rest.iter().position(|&b| b != SEPARATOR)?;
        let rest = &self.rest[start..];

        let end = memchr(SEPARATOR, rest).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        self.rest = tail;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.rest.len().div_ceil(2)))
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Split a line into words lazily
#[inline]
pub fn split_into_words<L: AsRef<[u8]> + ?Sized>(line: &L) -> Words<'_> {
    Words::new(line.as_ref())
}

/// Split a line into words, collecting the views up front
pub fn collect_words<L: AsRef<[u8]> + ?Sized>(line: &L) -> Vec<&[u8]> {
    split_into_words(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        collect_words(line)
            .into_iter()
            .map(|w| std::str::from_utf8(w).unwrap())
            .collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(words("a b a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_space_runs() {
        assert_eq!(
            words("   london  is   the capital   "),
            vec!["london", "is", "the", "capital"]
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(collect_words("").is_empty());
        assert!(collect_words("     ").is_empty());
    }

    #[test]
    fn test_only_space_separates() {
        assert_eq!(words("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_words_borrow_source() {
        let line = String::from("moscow  paris");
        let words = collect_words(&line);
        let base = line.as_ptr() as usize;
        assert_eq!(words[0].as_ptr() as usize, base);
        assert_eq!(words[1].as_ptr() as usize, base + 8);
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(words(" привет  мир "), vec!["привет", "мир"]);
    }

    #[test]
    fn test_invalid_utf8_kept_as_is() {
        let line: &[u8] = b"\xff \xfe\xfd  ok";
        let split = collect_words(line);
        assert_eq!(split, [&b"\xff"[..], &b"\xfe\xfd"[..], &b"ok"[..]]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut words = split_into_words("x");
        assert_eq!(words.next(), Some(&b"x"[..]));
        assert_eq!(words.next(), None);
        assert_eq!(words.next(), None);
    }
}
