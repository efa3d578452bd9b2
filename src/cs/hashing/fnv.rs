//! # FNV-1a Hasher
//!
//! A deterministic 64-bit FNV-1a (Fowler–Noll–Vo) hasher. Unlike
//! `RandomState`, the same key always lands in the same bucket across runs,
//! which makes bucket layouts reproducible for tests, demos and benchmarks.
//!
//! **Note**: FNV is not cryptographically secure and offers no protection
//! against adversarial keys. Prefer the default `RandomState` for untrusted
//! input.
//!
//! ```rust
//! use algos::cs::hashing::fnv::FnvBuildHasher;
//! use algos::cs::hashing::separate::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::with_hasher(FnvBuildHasher);
//! map.put("apple", 5);
//! assert_eq!(map.get("apple"), Some(&5));
//! ```

use std::hash::{BuildHasher, Hasher};

const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Streaming 64-bit FNV-1a state implementing `std::hash::Hasher`.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates a hasher seeded with the standard offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV64_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            // xor first, then multiply (the "1a" ordering)
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
    }
}

/// `BuildHasher` producing fresh [`FnvHasher`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}

/// Returns the 64-bit FNV-1a hash of `data`.
pub fn fnv1a_64(data: &[u8]) -> u64 {
    let mut hasher = FnvHasher::new();
    hasher.write(data);
    hasher.finish()
}
