#![no_main]

use docsearch::index::InvertedIndex;
use docsearch::output::write_result;
use docsearch::query::QueryProcessor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are opaque text: building and querying must not panic,
    // and every result line starts with the query bytes
    let Ok(index) = InvertedIndex::build(data) else {
        return;
    };
    let mut processor = QueryProcessor::default();
    if let Some(query) = index.document(0) {
        let result = processor.process_snapshot(query, &index);
        let mut line = Vec::new();
        write_result(&mut line, &result).unwrap();
        assert!(line.starts_with(query));
    }
});
