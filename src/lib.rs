//! A persistent sparse bitset keyed by `usize` indices.
//!
//! The set is stored as a tree with word-wide fan-out: leaves pack
//! `2 * usize::BITS` indices into two words, interior nodes keep a word-wide
//! occupancy mask over a packed, refcounted child array, and the tree only
//! grows levels that the largest stored index actually needs. Sparse sets of
//! huge indices therefore stay small: a singleton at `usize::MAX` is a chain
//! of a dozen one-child nodes, not a bit array.
//!
//! # Persistence
//! Values are immutable; `set`, `reset`, `flip`, and the Boolean combinators
//! return new values. A mutation rebuilds only the ancestor path of the
//! touched block and shares every other subtree with the source by refcount,
//! so derived values cost memory proportional to what actually changed.
//!
//! # Comparisons and hashing
//! Every value is kept in a canonical form (minimal height, no empty or
//! lone-digit-0 children), which makes structural comparison coincide with
//! set equality. `Ord` is a total lexicographic order over that encoding and
//! `Hash` agrees with `==`, so sets can key maps or live in sorted
//! collections without further ceremony.
//!
//! # Threading
//! Refcounts are non-atomic (`Rc`); a value can be cloned and shared freely
//! within a thread but does not implement `Send` or `Sync`. Allocation
//! failure follows the std collections' behavior.

pub(crate) mod bits;
pub(crate) mod node;
pub(crate) mod set;

pub use node::Iter;
pub use set::{hash_value, BitSet};
