pub mod cs;
pub mod error;

pub use cs::hashing;
pub use cs::hashing::{ChainedHashMap, ChainedHashMapBuilder};
pub use error::{Error, Result};
