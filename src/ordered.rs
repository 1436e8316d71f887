use indexmap::IndexSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable set which keeps its elements in insertion order. Duplicates
/// are dropped when the set is built, keeping the first occurrence.
///
/// Equality, hashing and ordering all follow the iteration order, so two sets
/// holding the same elements in a different order are distinct.
#[derive(Clone)]
pub struct OrderedSet<T: Hash + Eq>(IndexSet<T>);

impl<T: Hash + Eq> OrderedSet<T> {
    /// Returns a new empty set
    pub fn new() -> OrderedSet<T> {
        OrderedSet(IndexSet::new())
    }

    /// Returns true if the set contains the given value
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Returns the first element in insertion order
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T: Hash + Eq> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrderedSet(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Hash + Eq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &OrderedSet<T>) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<T: Hash + Eq> Eq for OrderedSet<T> {}

impl<T: Hash + Eq> Hash for OrderedSet<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.len().hash(state);
        for value in self.0.iter() {
            value.hash(state);
        }
    }
}

impl<T: Hash + Ord> Ord for OrderedSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().cmp(other.0.iter())
    }
}

impl<T: Hash + Ord> PartialOrd for OrderedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Hash + Eq + fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dedup_keeps_first() {
        let set: OrderedSet<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(set.first(), Some(&"b"));
        assert!(set.contains(&"c"));
        assert!(!set.contains(&"d"));
    }

    #[test]
    fn test_order_sensitive_equality() {
        let first = OrderedSet::from([1, 2, 3]);
        let second = OrderedSet::from([1, 2, 3, 2]);
        let third = OrderedSet::from([3, 2, 1]);

        assert_eq!(first, second);
        assert_ne!(first, third);
        assert!(first < third);

        let mut seen: HashSet<OrderedSet<i32>> = HashSet::new();
        seen.insert(first);
        assert!(seen.contains(&second));
        assert!(!seen.contains(&third));
    }

    #[test]
    fn test_empty() {
        let set: OrderedSet<u8> = Default::default();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        assert_eq!(set, OrderedSet::from([]));
    }
}
