//! Tracks live heap objects by address, the way an allocator or a GC
//! root table would, and answers "which object owns this address?".

use sparse_word_trie::TrieMap;

struct Object {
    name: &'static str,
    len: usize,
}

fn main() {
    let buffers: Vec<Box<[u8; 64]>> = (0..6).map(|_| Box::new([0u8; 64])).collect();

    let mut registry: TrieMap<*const u8, Object> = TrieMap::new();
    for (i, buf) in buffers.iter().enumerate() {
        let name = ["header", "body", "footer", "index", "cache", "scratch"][i];
        registry.set(buf.as_ptr(), Object { name, len: buf.len() });
    }
    println!("registered {} objects", registry.len());

    // Interior pointer: the owner is the greatest start address not above it
    let probe = buffers[3].as_ptr().wrapping_add(17);
    let owner = registry
        .range(..=probe)
        .next_back()
        .filter(|(start, obj)| (probe as usize) < *start as usize + obj.len);
    match owner {
        Some((start, obj)) => println!("{:p} lies in '{}' at {:p}", probe, obj.name, start),
        None => println!("{:p} is not inside a registered object", probe),
    }

    registry.erase(buffers[1].as_ptr());
    println!("after freeing 'body':");
    for (start, obj) in registry.iter() {
        println!("  {:p} {} ({} bytes)", start, obj.name, obj.len);
    }

    let mut cursor = registry.cursor_front();
    let mut live = 0;
    while !cursor.is_end() {
        live += cursor.value().map_or(0, |obj| obj.len);
        cursor.move_next();
    }
    println!("live bytes: {live}, index overhead: {} bytes", registry.memory_usage());
}
