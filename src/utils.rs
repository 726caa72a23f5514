
use std::collections::HashSet;
use std::hash::Hash;


/// Keeps the first occurrence of each item, order preserved.
pub fn dedup_first_occurrence<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}


#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
