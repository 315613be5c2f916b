/// Value stored under `key` in an association list, first match wins
pub fn keyfind<'a, K: PartialEq, V>(key: &K, pairs: &'a [(K, V)]) -> Option<&'a V> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Index of `key` in `pairs`, which must be sorted by key.
///
/// Binary search; with duplicate keys any matching index may be returned.
pub fn keysearch<K: Ord, V>(key: &K, pairs: &[(K, V)]) -> Option<usize> {
    pairs.binary_search_by(|(k, _)| k.cmp(key)).ok()
}
