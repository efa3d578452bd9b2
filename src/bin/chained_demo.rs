use algos::cs::hashing::{ChainedHashMap, FnvBuildHasher};

fn main() {
    println!("=== Chained Hash Map Examples ===");

    let mut table = ChainedHashMap::with_hasher(FnvBuildHasher);
    table.put("apple", 5);
    table.put("banana", 3);
    table.put("cherry", 8);

    println!("Hash table size: {}", table.len());
    println!("Get apple: {:?}", table.get("apple"));
    println!("Contains banana: {}", table.contains_key("banana"));
    println!("Contains grape: {}", table.contains_key("grape"));

    println!("Remove banana: {:?}", table.remove("banana"));
    println!("Hash table size: {}", table.len());

    let mut grown: ChainedHashMap<String, usize, _> = ChainedHashMap::with_hasher(FnvBuildHasher);
    for i in 0..100 {
        grown.put(format!("key{i}"), i);
    }
    println!(
        "After 100 keys: size {}, buckets {}, load factor {:.3}",
        grown.len(),
        grown.capacity(),
        grown.load_factor()
    );
    let longest = grown.bucket_lengths().into_iter().max().unwrap_or(0);
    println!("Longest chain: {longest}");
}
