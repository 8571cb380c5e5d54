//! A set over a bounded universe which allows O(1) insertions, removals, membership queries and
//! positional access.
//!
//! # Theoretical
//! The set keeps its members packed at the front of `elements`, and stores for each value of the
//! universe where it is located (or [`usize::MAX`] if it is not a member). To remove a value, the
//! element is swapped with the last member and popped. Positional access is what allows sampling a
//! member uniformly at random in constant time.
//!
//! # Practical
//! Our implementation follows [\[1\]](https://hal.science/hal-01339250/document). The main
//! practical consideration is that a function `mapping` should be provided which maps every value
//! of the universe to an index in \[0..|universe|\) in a bijective manner.
//!
//! # Bibliography
//! \[1\] V. le C. de Saint-Marcq, P. Schaus, C. Solnon, and C. Lecoutre, ‘Sparse-sets for domain
//! implementation’, in CP workshop on Techniques foR Implementing Constraint programming Systems
//! (TRICS), 2013, pp. 1–10.

use crate::twosat_assert_moderate;
use crate::twosat_assert_simple;

/// A set with O(1) insertion, removal and positional access based on [\[1\]](https://hal.science/hal-01339250/document).
/// See the module level documentation for more information.
///
/// # Bibliography
/// \[1\] V. le C. de Saint-Marcq, P. Schaus, C. Solnon, and C. Lecoutre, ‘Sparse-sets for domain
/// implementation’, in CP workshop on Techniques foR Implementing Constraint programming Systems
/// (TRICS), 2013, pp. 1–10.
#[derive(Debug, Clone)]
pub(crate) struct SparseSet<T> {
    /// The members of the set; the order is arbitrary
    elements: Vec<T>,
    /// Stores for each value of T what its corresponding index is in
    /// [`elements`][`SparseSet::elements`], or [`usize::MAX`] if it is not a member
    indices: Vec<usize>,
    /// A bijective function which takes as input an element `T` and returns an index in the range
    /// [0, |universe|) to be used for retrieving values from [`indices`][`SparseSet::indices`]
    mapping: fn(&T) -> usize,
}

impl<T> SparseSet<T> {
    /// Creates an empty set over a universe of `universe_size` values.
    ///
    /// Assumption: It is assumed that `mapping` is a bijective function which will return an index
    /// which is in the range [0, `universe_size`).
    pub(crate) fn empty(universe_size: usize, mapping: fn(&T) -> usize) -> Self {
        SparseSet {
            elements: Vec::new(),
            indices: vec![usize::MAX; universe_size],
            mapping,
        }
    }

    /// Determines whether the set is empty
    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns how many elements are part of the set
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the `index`th member; if `index` is larger than or equal to [`SparseSet::len`] then
    /// this method will panic.
    pub(crate) fn get(&self, index: usize) -> &T {
        twosat_assert_simple!(index < self.elements.len());
        &self.elements[index]
    }

    /// Determines whether the `element` is contained in the set.
    pub(crate) fn contains(&self, element: &T) -> bool {
        let index = (self.mapping)(element);
        index < self.indices.len() && self.indices[index] != usize::MAX
    }

    /// Inserts the element if it is not already contained in the set.
    pub(crate) fn insert(&mut self, element: T) {
        let index = (self.mapping)(&element);
        twosat_assert_simple!(
            index < self.indices.len(),
            "The element maps to {index} which is outside the universe of size {}",
            self.indices.len()
        );

        if self.indices[index] == usize::MAX {
            self.indices[index] = self.elements.len();
            self.elements.push(element);
        }
    }

    /// Remove `to_remove` from the set; if the value is not a member then this method does not
    /// perform any operations.
    pub(crate) fn remove(&mut self, to_remove: &T) {
        let index = (self.mapping)(to_remove);
        let position = self.indices[index];
        if position == usize::MAX {
            return;
        }

        let last = self.elements.len() - 1;
        self.elements.swap(position, last);
        self.indices[(self.mapping)(&self.elements[position])] = position;

        let element = self.elements.pop().expect("Has to have something to pop.");
        twosat_assert_moderate!((self.mapping)(&element) == index);
        self.indices[index] = usize::MAX;
    }

    /// Returns an iterator which goes over the members of the set
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SparseSet;

    fn mapping_function(input: &u32) -> usize {
        *input as usize
    }

    fn set_of(elements: &[u32]) -> SparseSet<u32> {
        let mut sparse_set = SparseSet::empty(5, mapping_function);
        for element in elements {
            sparse_set.insert(*element);
        }
        sparse_set
    }

    #[test]
    fn test_len() {
        let sparse_set = set_of(&[0, 1, 2]);
        assert_eq!(sparse_set.len(), 3);
    }

    #[test]
    fn duplicate_insertion_is_ignored() {
        let sparse_set = set_of(&[3, 3, 3]);
        assert_eq!(sparse_set.len(), 1);
        assert!(sparse_set.contains(&3));
    }

    #[test]
    fn removal() {
        let mut sparse_set = set_of(&[0, 1, 2]);
        sparse_set.remove(&0);
        assert_eq!(sparse_set.elements, vec![2, 1]);
        assert_eq!(sparse_set.indices, vec![usize::MAX, 1, 0, usize::MAX, usize::MAX]);
        assert!(!sparse_set.contains(&0));
    }

    #[test]
    fn removing_a_non_member_does_nothing() {
        let mut sparse_set = set_of(&[1]);
        sparse_set.remove(&4);
        assert_eq!(sparse_set.len(), 1);
    }

    #[test]
    fn remove_all_elements_leads_to_empty_set() {
        let mut sparse_set = set_of(&[0, 1, 2]);
        sparse_set.remove(&0);
        sparse_set.remove(&1);
        sparse_set.remove(&2);
        assert!(sparse_set.is_empty());
        assert_eq!(sparse_set.iter().count(), 0);
    }

    #[test]
    fn positional_access_covers_all_members() {
        let mut sparse_set = set_of(&[4, 2, 0]);
        sparse_set.remove(&2);
        let mut members = (0..sparse_set.len())
            .map(|index| *sparse_set.get(index))
            .collect::<Vec<_>>();
        members.sort();
        assert_eq!(members, vec![0, 4]);
    }
}
