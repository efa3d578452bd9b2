//! # Separate Chaining Hash Table
//!
//! This module implements a **HashMap** using **separate chaining** in Rust.
//! It supports:
//! - **Generic** key-value pairs (`K: Hash + Eq, V`).
//! - **Configurable** initial capacity and load factor threshold through [`ChainedHashMapBuilder`].
//! - **Configurable** hasher using `BuildHasher` traits (`RandomState` by default, or a deterministic
//!   hasher such as [`FnvBuildHasher`](super::fnv::FnvBuildHasher)).
//! - **put**, **get**, **remove**, **contains_key**, **keys**/**values** iteration with expected **O(1)**
//!   average performance per lookup.
//!
//! ## Growth policy
//!
//! The table starts with 16 buckets and a maximum load factor of 0.75. Growth is checked *before* every
//! `put`: once `len >= capacity * max_load_factor`, the bucket count doubles and every entry is rehashed
//! into `hash(key) mod new_capacity`. The table never shrinks, not even after `remove` or `clear`.
//!
//! Lookups return `Option`, so a stored value (including `None` stored in a `ChainedHashMap<K, Option<T>>`)
//! is never confused with a missing key.
//!
//! **Note**: This table is not thread-safe. Wrap it in a `Mutex` or `RwLock` for shared mutation.
//!
//! ## Example
//! ```rust
//! use algos::cs::hashing::separate::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.put("apple", 5);
//! map.put("banana", 3);
//! map.put("cherry", 8);
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get("apple"), Some(&5));
//! assert!(map.contains_key("banana"));
//! assert!(!map.contains_key("grape"));
//!
//! assert_eq!(map.remove("banana"), Some(3));
//! assert_eq!(map.len(), 2);
//! assert!(!map.contains_key("banana"));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::Index;
use std::{mem, slice, vec};

use log::{debug, trace, warn};

use crate::error::{Error, Result};

/// Default initial capacity (number of buckets).
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default maximum load factor before resizing.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// A single entry in a chain: `(K, V)`.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A "bucket" is a vector of entries for separate chaining.
type Bucket<K, V> = Vec<Entry<K, V>>;

fn empty_buckets<K, V>(bucket_count: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(bucket_count);
    buckets.resize_with(bucket_count, Vec::new);
    buckets
}

/// Maps a key to its bucket: `hash(key) mod bucket_count`.
fn index_for<Q, S>(build_hasher: &S, key: &Q, bucket_count: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    (build_hasher.hash_one(key) % bucket_count as u64) as usize
}

/// A separate-chaining HashMap with generic `K, V` and a customizable hasher.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    buckets: Vec<Bucket<K, V>>,
    /// The number of stored key-value pairs.
    len: usize,
    /// Growth threshold on `len / bucket count`.
    max_load_factor: f64,
    build_hasher: S,
}

/// A builder for the `ChainedHashMap`.
///
/// Call `.with_capacity(...)`, `.with_max_load_factor(...)` and `.with_hasher(...)` as needed, then
/// `.build()`. Invalid settings are reported by `build` rather than by the setters.
///
/// ```rust
/// use algos::cs::hashing::separate::{ChainedHashMap, ChainedHashMapBuilder};
///
/// let map: ChainedHashMap<u32, &str> = ChainedHashMapBuilder::new()
///     .with_capacity(64)
///     .with_max_load_factor(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(map.capacity(), 64);
///
/// let err = ChainedHashMapBuilder::new()
///     .with_max_load_factor(0.0)
///     .build::<u32, u32>();
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChainedHashMapBuilder<S> {
    capacity: usize,
    max_load_factor: f64,
    hasher: S,
}

impl Default for ChainedHashMapBuilder<RandomState> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher: RandomState::new(),
        }
    }
}

impl ChainedHashMapBuilder<RandomState> {
    /// Creates a new builder with default capacity, load factor and hasher (RandomState).
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S> ChainedHashMapBuilder<S> {
    /// Sets the initial number of buckets. Must be at least 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum load factor. Must be finite and > 0.
    pub fn with_max_load_factor(mut self, lf: f64) -> Self {
        self.max_load_factor = lf;
        self
    }

    /// Sets a custom hasher builder.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> ChainedHashMapBuilder<T> {
        ChainedHashMapBuilder {
            capacity: self.capacity,
            max_load_factor: self.max_load_factor,
            hasher,
        }
    }

    /// Validates the settings and builds an empty `ChainedHashMap`.
    pub fn build<K, V>(self) -> Result<ChainedHashMap<K, V, S>> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(Error::InvalidLoadFactor(self.max_load_factor));
        }
        trace!(
            "building chained hash map: {} buckets, max load factor {}",
            self.capacity,
            self.max_load_factor
        );
        Ok(ChainedHashMap::from_parts(
            self.capacity,
            self.max_load_factor,
            self.hasher,
        ))
    }
}

impl<K, V> ChainedHashMap<K, V, RandomState> {
    /// Creates an empty map with 16 buckets, load factor 0.75 and the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty map with `cap` buckets (at least one) and the default hasher.
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, RandomState::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Creates an empty map with the default capacity that hashes keys with `build_hasher`.
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_INITIAL_CAPACITY, build_hasher)
    }

    /// Creates an empty map with `cap` buckets (at least one) that hashes keys with `build_hasher`.
    pub fn with_capacity_and_hasher(cap: usize, build_hasher: S) -> Self {
        Self::from_parts(cap.max(1), DEFAULT_MAX_LOAD_FACTOR, build_hasher)
    }

    fn from_parts(bucket_count: usize, max_load_factor: f64, build_hasher: S) -> Self {
        ChainedHashMap {
            buckets: empty_buckets(bucket_count),
            len: 0,
            max_load_factor,
            build_hasher,
        }
    }

    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the load factor at which `put` grows the table.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.build_hasher
    }

    /// Returns the chain length of every bucket, in bucket order.
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Clears the map, removing all key-value pairs. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Removes every pair and returns them as an owning iterator. The bucket count is kept.
    pub fn drain(&mut self) -> IntoIter<K, V> {
        let bucket_count = self.buckets.len();
        let buckets = mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        let remaining = mem::take(&mut self.len);
        IntoIter {
            buckets: buckets.into_iter(),
            chain: None,
            remaining,
        }
    }

    /// Keeps only the pairs for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut len = 0;
        for bucket in &mut self.buckets {
            bucket.retain_mut(|entry| f(&entry.key, &mut entry.value));
            len += bucket.len();
        }
        self.len = len;
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the pairs with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the keys. No ordering guarantee.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values. No ordering guarantee.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    /// Inserts a key-value pair into the map.
    ///
    /// The growth check runs first: if `len >= capacity * max_load_factor` the table doubles before the
    /// pair is placed. If the key already exists, its value is replaced in place, `len` is unchanged and the
    /// old value is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.needs_growth() {
            match self.doubled_capacity() {
                Ok(new_bucket_count) => self.rehash(new_bucket_count),
                Err(err) => warn!("cannot grow chained hash map: {err}"),
            }
        }

        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        bucket.push(Entry { key, value });
        self.len += 1;
        None
    }

    /// Returns a reference to the value corresponding to the key, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value corresponding to the key, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the map holds a value for `key`, whatever that value is.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes and returns the value for the specified key, if present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the pair for `key` and returns it with the stored key.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|entry| entry.key.borrow() == key)?;
        // chain order is not part of the contract
        let entry = bucket.swap_remove(pos);
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Collects the keys into a set.
    pub fn key_set(&self) -> HashSet<&K> {
        self.keys().collect()
    }

    /// Grows the table so that `additional` more distinct keys fit under the load factor.
    ///
    /// # Panics
    /// Panics if the required bucket count overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("{err}");
        }
    }

    /// Like [`reserve`](Self::reserve), but reports bucket count overflow as an error.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;

        let mut bucket_count = self.buckets.len();
        while required as f64 > bucket_count as f64 * self.max_load_factor {
            bucket_count = bucket_count
                .checked_mul(2)
                .ok_or(Error::CapacityOverflow)?;
        }
        if bucket_count != self.buckets.len() {
            self.rehash(bucket_count);
        }
        Ok(())
    }

    fn needs_growth(&self) -> bool {
        self.len as f64 >= self.buckets.len() as f64 * self.max_load_factor
    }

    fn doubled_capacity(&self) -> Result<usize> {
        self.buckets
            .len()
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow)
    }

    /// Internal function computing the bucket index for a given key.
    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        index_for(&self.build_hasher, key, self.buckets.len())
    }

    /// Moves every entry into a fresh array of `new_bucket_count` buckets.
    fn rehash(&mut self, new_bucket_count: usize) {
        debug!(
            "resizing chained hash map: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_bucket_count,
            self.len
        );
        let mut new_buckets = empty_buckets(new_bucket_count);

        for bucket in self.buckets.drain(..) {
            for entry in bucket {
                let idx = index_for(&self.build_hasher, &entry.key, new_bucket_count);
                new_buckets[idx].push(entry);
            }
        }
        self.buckets = new_buckets;
        // len remains the same
    }
}

impl<K, V, S: Default> Default for ChainedHashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for ChainedHashMap<K, V, S> {}

impl<K, Q, V, S> Index<&Q> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in ChainedHashMap"),
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for ChainedHashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Borrowing iterator over `(&K, &V)`, created by [`ChainedHashMap::iter`].
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    chain: Option<slice::Iter<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)`, created by [`ChainedHashMap::iter_mut`].
pub struct IterMut<'a, K, V> {
    buckets: slice::IterMut<'a, Bucket<K, V>>,
    chain: Option<slice::IterMut<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&entry.key, &mut entry.value));
            }
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over `(K, V)`, created by `into_iter` or [`ChainedHashMap::drain`].
pub struct IntoIter<K, V> {
    buckets: vec::IntoIter<Bucket<K, V>>,
    chain: Option<vec::IntoIter<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
            self.chain = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_iter(),
            chain: None,
            remaining: self.len,
        }
    }
}
