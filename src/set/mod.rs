//! The public persistent bitset value.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor};

use rustc_hash::FxHasher;

use crate::node::{self, Iter, Node};


/// A persistent set of `usize` indices.
///
/// Every operation is pure: `set`, `reset`, and `flip` return a new value and
/// leave the receiver untouched. Cloning is cheap (a refcount bump on the
/// root's child array) and values that share history share subtrees, so a
/// point update allocates only the spine from the root to the touched leaf.
///
/// Values use non-atomic refcounts and are neither `Send` nor `Sync`; sharing
/// a value across threads is a compile error rather than a data race.
#[derive(Clone)]
pub struct BitSet {
    node: Node,
}

impl BitSet {
    /// The empty set.
    pub fn new() -> BitSet {
        BitSet {
            node: Node::empty(),
        }
    }

    /// The set containing exactly `pos`.
    pub fn singleton(pos: usize) -> BitSet {
        BitSet {
            node: Node::unit(pos),
        }
    }

    /// Build from a strictly ascending slice of indices. Duplicated or
    /// unsorted input violates the contract and yields an unspecified value.
    pub fn from_sorted(elems: &[usize]) -> BitSet {
        BitSet {
            node: node::from_sorted_slice(elems),
        }
    }

    /// Whether `pos` is in the set.
    pub fn test(&self, pos: usize) -> bool {
        self.node.test(pos)
    }

    /// A new set that also contains `pos`.
    pub fn set(&self, pos: usize) -> BitSet {
        let (node, _) = self.node.set(pos);
        BitSet { node }
    }

    /// A new set without `pos`.
    pub fn reset(&self, pos: usize) -> BitSet {
        let (node, _) = self.node.reset(pos);
        BitSet { node }
    }

    /// A new set with `pos` toggled.
    pub fn flip(&self, pos: usize) -> BitSet {
        BitSet {
            node: self.node.flip(pos),
        }
    }

    /// The number of indices in the set. Walks the tree; prefer `is_empty`
    /// or `any` for emptiness checks.
    pub fn len(&self) -> usize {
        self.node.len()
    }

    /// Whether the set is empty. Constant time.
    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    /// Whether the set contains at least one index. Constant time.
    pub fn any(&self) -> bool {
        !self.node.is_empty()
    }

    /// The smallest index, or `None` for the empty set.
    pub fn first(&self) -> Option<usize> {
        self.node.first()
    }

    /// The largest index, or `None` for the empty set.
    pub fn last(&self) -> Option<usize> {
        self.node.last()
    }

    /// Append the indices to `elems` in ascending order.
    pub fn get_elements(&self, elems: &mut Vec<usize>) {
        elems.reserve(self.len());
        self.node.push_elements(0, elems);
    }

    /// The indices as a fresh vector, in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut elems = Vec::new();
        self.get_elements(&mut elems);
        elems
    }

    /// Iterate over the indices in ascending order without materializing
    /// them. The iterator borrows the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.node)
    }

    /// Whether the two sets share at least one index.
    pub fn test_any(&self, other: &BitSet) -> bool {
        (self & other).any()
    }

    /// Whether every index of `other` is also in this set.
    pub fn test_all(&self, other: &BitSet) -> bool {
        &(self & other) == other
    }

    #[cfg(test)]
    pub(crate) fn node(&self) -> &Node {
        &self.node
    }
}

impl Default for BitSet {
    fn default() -> BitSet {
        BitSet::new()
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        BitSet {
            node: node::and(&self.node, &rhs.node),
        }
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        BitSet {
            node: node::or(&self.node, &rhs.node),
        }
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: &BitSet) -> BitSet {
        BitSet {
            node: node::xor(&self.node, &rhs.node),
        }
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &BitSet) -> bool {
        self.node == other.node
    }
}

impl Eq for BitSet {}

/// Total order consistent with `==`: lexicographic over the canonical tree
/// encoding. Level sorts first, so the set whose largest index needs the
/// shorter representation sorts before the taller one.
impl Ord for BitSet {
    fn cmp(&self, other: &BitSet) -> Ordering {
        self.node.cmp(&other.node)
    }
}

impl PartialOrd for BitSet {
    fn partial_cmp(&self, other: &BitSet) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Set notation: `{1, 2, 5}`.
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "}}")
    }
}

/// Hash a set with the crate's hasher. Equal sets hash equal.
pub fn hash_value(set: &BitSet) -> u64 {
    let mut hasher = FxHasher::default();
    set.hash(&mut hasher);
    hasher.finish()
}
