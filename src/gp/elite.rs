//! The elite set: consistent codes accumulated by one search.

use crate::game::Code;
use std::collections::HashSet;

/// An insertion-ordered collection of distinct codes.
///
/// Membership is tracked in a hash set; order is kept in a vector so that
/// [`EliteSet::pop`] always yields the most recently inserted code.
#[derive(Debug, Clone, Default)]
pub struct EliteSet {
    order: Vec<Code>,
    members: HashSet<Code>,
}

impl EliteSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `code` is in the set.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.members.contains(code)
    }

    /// Append `code` unless it is already present.
    ///
    /// Returns whether the code was inserted.
    pub fn insert(&mut self, code: Code) -> bool {
        if self.members.contains(&code) {
            return false;
        }
        self.members.insert(code.clone());
        self.order.push(code);
        true
    }

    /// Remove `code`, returning whether it was present.
    pub fn remove(&mut self, code: &Code) -> bool {
        if !self.members.remove(code) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|c| c == code) {
            self.order.remove(pos);
        }
        true
    }

    /// Take the most recently inserted code.
    pub fn pop(&mut self) -> Option<Code> {
        let code = self.order.pop()?;
        self.members.remove(&code);
        Some(code)
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Codes in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.order.iter()
    }

    /// Consume the set, returning codes in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Code> {
        self.order
    }
}

impl<'a> IntoIterator for &'a EliteSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(values: &[u8]) -> Code {
        Code::from(values.to_vec())
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut elite = EliteSet::new();
        assert!(elite.insert(code(&[1, 2, 3, 4])));
        assert!(!elite.insert(code(&[1, 2, 3, 4])));
        assert!(elite.insert(code(&[4, 3, 2, 1])));
        assert_eq!(elite.len(), 2);
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut elite = EliteSet::new();
        elite.insert(code(&[1, 1, 1, 1]));
        elite.insert(code(&[2, 2, 2, 2]));
        elite.insert(code(&[3, 3, 3, 3]));

        assert_eq!(elite.pop(), Some(code(&[3, 3, 3, 3])));
        assert!(!elite.contains(&code(&[3, 3, 3, 3])));
        assert_eq!(elite.pop(), Some(code(&[2, 2, 2, 2])));
        assert_eq!(elite.pop(), Some(code(&[1, 1, 1, 1])));
        assert_eq!(elite.pop(), None);
        assert!(elite.is_empty());
    }

    #[test]
    fn test_remove_then_reinsert_moves_to_tail() {
        let mut elite = EliteSet::new();
        elite.insert(code(&[1, 1, 1, 1]));
        elite.insert(code(&[2, 2, 2, 2]));

        assert!(elite.remove(&code(&[1, 1, 1, 1])));
        assert!(!elite.remove(&code(&[1, 1, 1, 1])));
        elite.insert(code(&[1, 1, 1, 1]));

        let order: Vec<_> = elite.into_vec();
        assert_eq!(order, vec![code(&[2, 2, 2, 2]), code(&[1, 1, 1, 1])]);
    }
}
