//! Hash map and set aliases backed by `ahash`.

/// Hash map keyed with the fast non-cryptographic `ahash` hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set keyed with the fast non-cryptographic `ahash` hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
