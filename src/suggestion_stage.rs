use ahash::AHashMap;

const CHUNK_SIZE: usize = 4096;

/// Growable array stored in fixed size chunks, so growing never moves existing elements.
#[derive(Debug, Clone)]
struct ChunkArray<T> {
    chunks: Vec<Vec<T>>,
    count: usize,
}

impl<T> ChunkArray<T> {
    fn with_capacity(initial_capacity: usize) -> Self {
        let chunk_count = initial_capacity.div_ceil(CHUNK_SIZE).max(1);
        let mut chunks = Vec::with_capacity(chunk_count);
        chunks.push(Vec::with_capacity(CHUNK_SIZE));
        Self { chunks, count: 0 }
    }

    fn push(&mut self, value: T) -> usize {
        let chunk = self.count / CHUNK_SIZE;
        if chunk == self.chunks.len() {
            self.chunks.push(Vec::with_capacity(CHUNK_SIZE));
        }
        self.chunks[chunk].push(value);
        self.count += 1;
        self.count - 1
    }

    fn get(&self, index: usize) -> &T {
        &self.chunks[index / CHUNK_SIZE][index % CHUNK_SIZE]
    }

    fn len(&self) -> usize {
        self.count
    }

    // chunk allocations are kept for the next load
    fn clear(&mut self) {
        for chunk in self.chunks.iter_mut() {
            chunk.clear();
        }
        self.count = 0;
    }
}

#[derive(Debug, Clone)]
struct Node {
    suggestion: Box<str>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first: usize,
}

/// Temporary buffer of delete hash to word associations, used during bulk dictionary loads.
///
/// Words sharing a delete hash are chained as a linked list inside a chunked node array,
/// and merged into the permanent delete index in one pass by [`SuggestionStage::commit_to`].
#[derive(Debug, Clone)]
pub struct SuggestionStage {
    deletes: AHashMap<u32, Entry>,
    nodes: ChunkArray<Node>,
}

impl SuggestionStage {
    /// Create a stage sized for roughly `initial_capacity` delete hashes.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            deletes: AHashMap::with_capacity(initial_capacity),
            nodes: ChunkArray::with_capacity(initial_capacity * 2),
        }
    }

    /// Number of distinct delete hashes staged.
    pub fn delete_count(&self) -> usize {
        self.deletes.len()
    }

    /// Number of staged (hash, word) associations.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Stage `suggestion` under `delete_hash`.
    pub fn add(&mut self, delete_hash: u32, suggestion: &str) {
        let next = self.deletes.get(&delete_hash).map(|entry| entry.first);
        let first = self.nodes.push(Node {
            suggestion: suggestion.into(),
            next,
        });
        let entry = self.deletes.entry(delete_hash).or_insert(Entry { count: 0, first });
        entry.count += 1;
        entry.first = first;
    }

    /// Reset the stage, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.deletes.clear();
        self.nodes.clear();
    }

    /// Merge all staged associations into `permanent_deletes` and empty the stage.
    /// Staged words are appended after the words already stored under the same hash,
    /// in the order they were staged.
    pub fn commit_to(&mut self, permanent_deletes: &mut AHashMap<u32, Vec<Box<str>>>) {
        for (delete_hash, entry) in self.deletes.drain() {
            let suggestions = permanent_deletes.entry(delete_hash).or_default();
            suggestions.reserve(entry.count);
            let start = suggestions.len();

            let mut next = Some(entry.first);
            while let Some(index) = next {
                let node = self.nodes.get(index);
                suggestions.push(node.suggestion.clone());
                next = node.next;
            }
            // the chain runs newest to oldest
            suggestions[start..].reverse();
        }
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SuggestionStage;
    use ahash::AHashMap;

    #[test]
    fn test_commit_merges_with_existing() {
        let mut permanent: AHashMap<u32, Vec<Box<str>>> = AHashMap::new();
        permanent.insert(7, vec!["old".into()]);

        let mut stage = SuggestionStage::new(16);
        stage.add(7, "first");
        stage.add(9, "other");
        stage.add(7, "second");
        assert_eq!(2, stage.delete_count());
        assert_eq!(3, stage.node_count());

        stage.commit_to(&mut permanent);
        assert_eq!(
            vec![Box::<str>::from("old"), "first".into(), "second".into()],
            permanent[&7]
        );
        assert_eq!(vec![Box::<str>::from("other")], permanent[&9]);
        assert!(stage.is_empty());

        // a second commit adds nothing
        stage.commit_to(&mut permanent);
        assert_eq!(3, permanent[&7].len());
        assert_eq!(1, permanent[&9].len());
    }

    #[test]
    fn test_chunk_boundary_and_clear() {
        let mut stage = SuggestionStage::new(1);
        for i in 0..10_000u32 {
            stage.add(i % 3, &i.to_string());
        }
        assert_eq!(10_000, stage.node_count());
        stage.clear();
        assert_eq!(0, stage.delete_count());
        assert!(stage.is_empty());

        stage.add(1, "again");
        let mut permanent = AHashMap::new();
        stage.commit_to(&mut permanent);
        assert_eq!(vec![Box::<str>::from("again")], permanent[&1]);
    }
}
