pub mod fnv;
pub mod separate;

pub use fnv::FnvBuildHasher;
pub use separate::{ChainedHashMap, ChainedHashMapBuilder};
