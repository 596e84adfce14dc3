pub mod processor;
pub mod ranker;

pub use processor::QueryProcessor;
pub use ranker::{Hit, Ranker};
