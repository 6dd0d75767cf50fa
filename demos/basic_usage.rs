//! Basic usage example for sparse-word-trie.
//!
//! Walks through the set and map adapters and the ordered cursor.

use sparse_word_trie::{TrieMap, TrieSet};

fn main() {
    println!("=== Sparse Word Trie - Basic Usage Example ===\n");

    let mut set = TrieSet::<u64>::new();
    println!("Created empty set");

    println!("\nInserting keys: 100, 200, 150, 300, 1 << 40");
    for key in [100, 200, 150, 300, 1 << 40] {
        set.insert(key);
    }
    println!("  repeat insert of 150 reports new: {}", set.insert(150));
    println!("Set now contains {} keys", set.len());

    println!("\nMembership checks:");
    println!("  contains(150): {}", set.contains(150));
    println!("  contains(999): {}", set.contains(999));

    println!("\nNavigation:");
    println!("  first: {:?}  last: {:?}", set.first(), set.last());
    println!("  successor(175): {:?}", set.successor(175));
    println!("  predecessor(175): {:?}", set.predecessor(175));
    println!("  count_range(100..=300): {}", set.count_range(100..=300));

    println!("\nCursor walk:");
    let mut cursor = set.cursor_front();
    print!("  ");
    while let Some(key) = cursor.key() {
        print!("{} ", key);
        cursor.move_next();
    }
    println!();
    println!("  find(999) is end: {}", set.find(999).is_end());

    println!("\nErase through a cursor:");
    let removed = set.find_mut(200).remove_current();
    println!("  removed {:?}, len now {}", removed.map(|(k, _)| k), set.len());

    println!("\nMap with default-initialised slots:");
    let mut hits: TrieMap<u32, u32> = TrieMap::new();
    for word in [7u32, 3, 7, 9, 7, 3] {
        *hits.put(word) += 1;
    }
    for (key, count) in hits.iter() {
        println!("  {key}: {count}");
    }
    println!("  erase(3) -> {}, erase(3) -> {}", hits.erase(3), hits.erase(3));

    let stats = set.stats();
    println!(
        "\nFootprint: {} bytes, {} branches, {} leaves",
        stats.bytes,
        stats.branches(),
        stats.leaves()
    );
}
