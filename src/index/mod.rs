pub mod inverted;
pub mod types;

pub use inverted::InvertedIndex;
pub use types::*;
