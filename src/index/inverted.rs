//! In-memory inverted index
//!
//! Maps every word to its postings: one [`Entry`] per document containing the
//! word, in ascending document order. An index is built once from a complete
//! document stream and never modified afterwards; a rebuild produces a new
//! value.

use crate::index::types::{DocId, Entry};
use crate::utils::{LineReader, split_into_words};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::io::BufRead;

#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Document bytes, indexed by DocId
    docs: Vec<Vec<u8>>,
    /// Word -> postings in ascending DocId order
    index: FxHashMap<Box<[u8]>, Vec<Entry>>,
}

impl InvertedIndex {
    /// Build an index reading one document per line until the input is exhausted
    pub fn build<R: BufRead>(input: R) -> Result<Self> {
        let mut index = Self::default();
        let mut reader = LineReader::new(input);

        while let Some(document) = reader
            .next_line()
            .with_context(|| format!("Failed to read document {}", index.docs.len()))?
        {
            index.push_document(document.to_vec());
        }

        tracing::debug!(
            documents = index.document_count(),
            words = index.word_count(),
            "built inverted index"
        );
        Ok(index)
    }

    /// Build an index from in-memory documents
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let mut index = Self::default();
        for document in documents {
            index.push_document(document.into());
        }
        index
    }

    /// Append the next document. Relies on documents arriving in DocId order:
    /// all words of one document are counted before the next one starts.
    fn push_document(&mut self, document: Vec<u8>) {
        let doc_id = self.docs.len();

        for word in split_into_words(&document) {
            match self.index.get_mut(word) {
                Some(postings) => match postings.last_mut() {
                    Some(last) if last.doc_id == doc_id => last.hit_count += 1,
                    _ => postings.push(Entry::new(doc_id, 1)),
                },
                None => {
                    self.index.insert(word.into(), vec![Entry::new(doc_id, 1)]);
                }
            }
        }

        self.docs.push(document);
    }

    /// Postings for an exact word, empty if the word was never indexed.
    /// Words compare byte for byte.
    pub fn lookup<W: AsRef<[u8]> + ?Sized>(&self, word: &W) -> &[Entry] {
        self.index
            .get(word.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    pub fn document(&self, doc_id: DocId) -> Option<&[u8]> {
        self.docs.get(doc_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_counts_per_document() {
        let index = InvertedIndex::from_documents(["a b a", "b b", "c"]);

        assert_eq!(index.lookup("a"), &[Entry::new(0, 2)]);
        assert_eq!(index.lookup("b"), &[Entry::new(0, 1), Entry::new(1, 2)]);
        assert_eq!(index.lookup("c"), &[Entry::new(2, 1)]);
        assert_eq!(index.document_count(), 3);
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn test_lookup_missing_word() {
        let index = InvertedIndex::from_documents(["x y"]);
        assert!(index.lookup("z").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let index = InvertedIndex::from_documents(["Word word"]);
        assert_eq!(index.lookup("word"), &[Entry::new(0, 1)]);
        assert_eq!(index.lookup("Word"), &[Entry::new(0, 1)]);
        assert!(index.lookup("WORD").is_empty());
    }

    #[test]
    fn test_build_from_reader() {
        let input = Cursor::new("london is the capital of great britain\r\nparis is the capital of france\n\nmoscow");
        let index = InvertedIndex::build(input).unwrap();

        assert_eq!(index.document_count(), 4);
        assert_eq!(index.document(1), Some(&b"paris is the capital of france"[..]));
        assert_eq!(index.document(2), Some(&b""[..]));
        assert_eq!(index.document(3), Some(&b"moscow"[..]));
        assert_eq!(index.document(4), None);
        assert_eq!(
            index.lookup("capital"),
            &[Entry::new(0, 1), Entry::new(1, 1)]
        );
    }

    #[test]
    fn test_build_empty_input() {
        let index = InvertedIndex::build(Cursor::new("")).unwrap();
        assert_eq!(index.document_count(), 0);
        assert_eq!(index.word_count(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_opaque_text() {
        let index = InvertedIndex::build(Cursor::new(b"ok \xff\xfe ok\n\xff\n".to_vec())).unwrap();
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.document(0), Some(&b"ok \xff\xfe ok"[..]));
        assert_eq!(index.lookup("ok"), &[Entry::new(0, 2)]);
        assert_eq!(index.lookup(b"\xff\xfe"), &[Entry::new(0, 1)]);
        assert_eq!(index.lookup(b"\xff"), &[Entry::new(1, 1)]);
        // Distinct invalid bytes are distinct words
        assert!(index.lookup(b"\xfe").is_empty());
        assert!(index.lookup("\u{fffd}").is_empty());
    }

    #[test]
    fn test_blank_documents_keep_ids() {
        let index = InvertedIndex::from_documents(["", "   ", "w"]);
        assert_eq!(index.document_count(), 3);
        assert_eq!(index.lookup("w"), &[Entry::new(2, 1)]);
    }
}
