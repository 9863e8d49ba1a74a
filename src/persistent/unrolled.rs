//! Persistent (immutable) unrolled linked list.
//!
//! This module provides [`UnrolledList`], an immutable sequence whose nodes
//! each hold a small batch of elements rather than a single element.
//!
//! # Overview
//!
//! `UnrolledList` combines the cheap prepend of a cons list with the cache
//! friendliness of chunked storage. It provides:
//!
//! - O(1) prepend (`cons`) amortized over the chunk capacity
//! - O(1) head access
//! - O(n) membership, search, and removal
//! - O(n) append that reuses the entire right operand by reference
//!
//! All operations return new lists without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use unrolled::persistent::UnrolledList;
//!
//! // Build a list using cons
//! let list = UnrolledList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list with prepended element
//!
//! // Build from a slice with an explicit chunk capacity
//! let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Structural Sharing
//!
//! A node is never modified after construction; any content change builds a
//! new node, and the unchanged remainder of the chain is reused by
//! reference:
//!
//! ```text
//! list1:  [1, 2] -> [3, 4] -> nil
//! list2 = list1.cons(0):  [0, 1, 2] -> [3, 4] -> nil   // shares [3, 4]
//! ```
//!
//! The chunk capacity is fixed per list (default 4) and inherited by every
//! derived list. `cons` uses simple head growth: a full head node is left
//! alone and a fresh single-element node is placed in front of it, so node
//! occupancy can drift below capacity over time. [`UnrolledList::rebalance`]
//! restores the bound when desired.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

/// Chunk capacity used by [`UnrolledList::new`] and the std trait
/// constructors (`Default`, `FromIterator`).
pub const DEFAULT_CHUNK_CAPACITY: usize = 4;

/// Per-node element storage. Inline for the default capacity, heap spill
/// for lists configured with a larger one.
type Chunk<T> = SmallVec<[T; DEFAULT_CHUNK_CAPACITY]>;

/// Internal node structure for the unrolled list.
///
/// Each node holds an ordered batch of elements and an optional reference
/// to the next node. Using [`ReferenceCounter`] enables structural sharing
/// between lists. A node is never empty: operations that would empty a node
/// elide it from the chain instead.
struct Node<T> {
    /// The elements stored in this node, in insertion order.
    elements: Chunk<T>,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// Error returned when a list is constructed with a chunk capacity of zero.
///
/// # Examples
///
/// ```rust
/// use unrolled::persistent::{UnrolledList, ZeroChunkCapacity};
///
/// let result: Result<UnrolledList<i32>, _> = UnrolledList::try_with_chunk_capacity(0);
/// assert_eq!(result.unwrap_err(), ZeroChunkCapacity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroChunkCapacity;

impl fmt::Display for ZeroChunkCapacity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("chunk capacity must be at least 1")
    }
}

impl std::error::Error for ZeroChunkCapacity {}

/// A persistent (immutable) unrolled linked list.
///
/// `UnrolledList` is an immutable sequence whose nodes each hold up to
/// `chunk_capacity` elements. Structural sharing makes every operation
/// non-destructive: the original list and all previously derived lists
/// remain valid and unchanged.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `cons`         | O(c)       |
/// | `head`         | O(1)       |
/// | `len`          | O(1)       |
/// | `get`          | O(n)       |
/// | `contains`     | O(n)       |
/// | `remove_first` | O(n)       |
/// | `append`       | O(n) in `self.len()` only |
/// | `reverse`      | O(n)       |
///
/// where `c` is the chunk capacity.
///
/// # Examples
///
/// ```rust
/// use unrolled::persistent::UnrolledList;
///
/// let list = UnrolledList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct UnrolledList<T> {
    /// Reference to the head node (if any).
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
    /// Maximum number of elements a node built by this list may hold.
    chunk_capacity: usize,
}

impl<T> UnrolledList<T> {
    /// Creates a new empty list with the default chunk capacity of 4.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = UnrolledList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
        }
    }

    /// Creates a new empty list with the given chunk capacity.
    ///
    /// The capacity is fixed for the lifetime of the list and inherited by
    /// every list derived from it.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_capacity` is zero. Use
    /// [`try_with_chunk_capacity`](Self::try_with_chunk_capacity) for a
    /// fallible variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = UnrolledList::with_chunk_capacity(8);
    /// assert_eq!(list.chunk_capacity(), 8);
    /// ```
    #[must_use]
    pub const fn with_chunk_capacity(chunk_capacity: usize) -> Self {
        assert!(chunk_capacity > 0, "chunk capacity must be at least 1");
        Self {
            head: None,
            length: 0,
            chunk_capacity,
        }
    }

    /// Creates a new empty list with the given chunk capacity, failing on
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroChunkCapacity`] if `chunk_capacity` is zero; no list
    /// is constructed in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = UnrolledList::try_with_chunk_capacity(2).unwrap();
    /// assert_eq!(list.chunk_capacity(), 2);
    /// assert!(UnrolledList::<i32>::try_with_chunk_capacity(0).is_err());
    /// ```
    pub const fn try_with_chunk_capacity(chunk_capacity: usize) -> Result<Self, ZeroChunkCapacity> {
        if chunk_capacity == 0 {
            return Err(ZeroChunkCapacity);
        }
        Ok(Self {
            head: None,
            length: 0,
            chunk_capacity,
        })
    }

    /// Creates a list containing a single element, at the default chunk
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut elements = Chunk::new();
        elements.push(element);
        Self {
            head: Some(ReferenceCounter::new(Node {
                elements,
                next: None,
            })),
            length: 1,
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
        }
    }

    /// Builds a list by partitioning a Vec into chunks of `chunk_capacity`.
    ///
    /// Groups are formed front to back, so only the final node may hold
    /// fewer than `chunk_capacity` elements. The chain is threaded from the
    /// last group backwards so each node can point at an already-built tail.
    fn build_from_vec(mut elements: Vec<T>, chunk_capacity: usize) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;

        while !elements.is_empty() {
            // Start index of the last group when grouping from the front.
            let remaining = elements.len();
            let split = remaining - 1 - ((remaining - 1) % chunk_capacity);
            let group: Chunk<T> = elements.split_off(split).into_iter().collect();
            head = Some(ReferenceCounter::new(Node {
                elements: group,
                next: head,
            }));
        }

        Self {
            head,
            length,
            chunk_capacity,
        }
    }

    /// Returns the chunk capacity this list was constructed with.
    #[inline]
    #[must_use]
    pub const fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// let empty: UnrolledList<i32> = UnrolledList::new();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().and_then(|node| node.elements.first())
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the element at the given index in flattened
    /// chain order.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(n / c) node hops plus O(1) within the node
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = self.head.as_ref();
        let mut remaining = index;

        while let Some(node) = current {
            if remaining < node.elements.len() {
                return node.elements.get(remaining);
            }
            remaining -= node.elements.len();
            current = node.next.as_ref();
        }
        None
    }

    /// Returns `true` if some node holds an element equal to `element`.
    ///
    /// Uses value equality, not identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3]);
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&5));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            if node.elements.contains(element) {
                return true;
            }
            current = node.next.as_ref();
        }
        false
    }

    /// Returns the first element (in chain order) satisfying the predicate.
    ///
    /// Returns `None` when no element matches; "not found" is a normal
    /// outcome, not an error. The search crosses node boundaries, so a
    /// match in a later node is always reached. Because the return type is
    /// `Option<&T>`, a found element is distinguishable from "nothing
    /// found" even when `T` itself has an absence-like value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(list.find(|element| element % 2 == 0), Some(&2));
    /// assert_eq!(list.find(|element| *element > 10), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            for element in &node.elements {
                if predicate(element) {
                    return Some(element);
                }
            }
            current = node.next.as_ref();
        }
        None
    }

    /// Finds the index of the first element that satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(list.find_index(|element| *element > 3), Some(3));
    /// assert_eq!(list.find_index(|element| *element > 10), None);
    /// ```
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements in flattened chain order (within-node
    /// order first, then the next node). Each call to `iter` starts fresh,
    /// and an exhausted iterator keeps returning `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> UnrolledListIterator<'_, T> {
        UnrolledListIterator {
            node: self.head.as_ref(),
            index: 0,
            remaining: self.length,
        }
    }

    /// Produces a list with every element replaced by `function(element)`.
    ///
    /// Node boundaries and the chunk capacity are preserved, so the result
    /// has exactly the shape of the input. The function is applied in chain
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3]);
    /// let doubled = list.map(|element| element * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> UnrolledList<B>
    where
        F: FnMut(&T) -> B,
    {
        // Map front to back so FnMut side effects observe chain order,
        // then thread the chain from the last node backwards.
        let mut mapped: Vec<SmallVec<[B; DEFAULT_CHUNK_CAPACITY]>> = Vec::new();
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            mapped.push(node.elements.iter().map(&mut function).collect());
            current = node.next.as_ref();
        }

        let mut head = None;
        for elements in mapped.into_iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                elements,
                next: head,
            }));
        }
        UnrolledList {
            head,
            length: self.length,
            chunk_capacity: self.chunk_capacity,
        }
    }
}

impl<T: Clone> UnrolledList<T> {
    /// Creates a list from a slice at the default chunk capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_slice_with_capacity(slice, DEFAULT_CHUNK_CAPACITY)
    }

    /// Creates a list from a slice, partitioned into consecutive groups of
    /// exactly `chunk_capacity` elements (the final group may be smaller).
    ///
    /// Round-trip invariant: `from_slice_with_capacity(xs, c).to_vec() == xs`
    /// for every slice `xs` and capacity `c >= 1`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(list.chunk_capacity(), 2);
    /// ```
    #[must_use]
    pub fn from_slice_with_capacity(slice: &[T], chunk_capacity: usize) -> Self {
        assert!(chunk_capacity > 0, "chunk capacity must be at least 1");

        // chunks() groups from the front; building in reverse lets each
        // node point at an already-built tail.
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for group in slice.chunks(chunk_capacity).rev() {
            head = Some(ReferenceCounter::new(Node {
                elements: group.iter().cloned().collect(),
                next: head,
            }));
        }

        Self {
            head,
            length: slice.len(),
            chunk_capacity,
        }
    }

    /// Flattens the chain into a `Vec` in chain order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Prepends an element to the front of the list.
    ///
    /// If the head node has room (fewer than `chunk_capacity` elements),
    /// the element is prepended into a copy of that node which shares the
    /// old head's tail. Otherwise a fresh single-element node is placed in
    /// front of the whole chain. Existing nodes are never split
    /// retroactively.
    ///
    /// # Complexity
    ///
    /// O(c) where c is the chunk capacity; the rest of the chain is shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        if let Some(node) = self.head.as_ref() {
            if node.elements.len() < self.chunk_capacity {
                let mut elements = Chunk::with_capacity(node.elements.len() + 1);
                elements.push(element);
                elements.extend(node.elements.iter().cloned());
                return Self {
                    head: Some(ReferenceCounter::new(Node {
                        elements,
                        next: node.next.clone(),
                    })),
                    length: self.length + 1,
                    chunk_capacity: self.chunk_capacity,
                };
            }
        }

        // Empty list or full head node: fresh single-element node in front.
        let mut elements = Chunk::new();
        elements.push(element);
        Self {
            head: Some(ReferenceCounter::new(Node {
                elements,
                next: self.head.clone(),
            })),
            length: self.length + 1,
            chunk_capacity: self.chunk_capacity,
        }
    }

    /// Returns the list without its first element.
    ///
    /// If the list is empty, returns an empty list with the same capacity.
    /// When the head node holds a single element the rest of the chain is
    /// shared untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3]);
    /// let tail = list.tail();
    /// assert_eq!(tail.to_vec(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn tail(&self) -> Self {
        match self.head.as_ref() {
            None => self.clone(),
            Some(node) if node.elements.len() == 1 => Self {
                head: node.next.clone(),
                length: self.length - 1,
                chunk_capacity: self.chunk_capacity,
            },
            Some(node) => Self {
                head: Some(ReferenceCounter::new(Node {
                    elements: node.elements[1..].iter().cloned().collect(),
                    next: node.next.clone(),
                })),
                length: self.length - 1,
                chunk_capacity: self.chunk_capacity,
            },
        }
    }

    /// Decomposes the list into its first element and the rest.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2]);
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail.to_vec(), vec![2]);
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        let head = self.head()?;
        Some((head, self.tail()))
    }

    /// Removes the first occurrence of `element` in chain order.
    ///
    /// The node containing the occurrence is rebuilt without it; a node
    /// that would become empty is elided from the chain. Nodes before the
    /// occurrence are rebuilt with their contents unchanged, and the entire
    /// suffix after the affected node is reused by reference. When no
    /// occurrence exists the original chain itself is returned (an O(1)
    /// clone, not a copy).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 2, 3]);
    /// let removed = list.remove_first(&2);
    /// assert_eq!(removed.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 2, 3]); // original untouched
    ///
    /// let unchanged = list.remove_first(&9);
    /// assert_eq!(unchanged, list);
    /// ```
    #[must_use]
    pub fn remove_first(&self, element: &T) -> Self
    where
        T: PartialEq,
    {
        // Walk until the occurrence, remembering the prefix spine.
        let mut prefix: Vec<&ReferenceCounter<Node<T>>> = Vec::new();
        let mut current = self.head.as_ref();
        let mut hit: Option<(usize, &ReferenceCounter<Node<T>>)> = None;

        while let Some(node) = current {
            if let Some(position) = node.elements.iter().position(|candidate| candidate == element)
            {
                hit = Some((position, node));
                break;
            }
            prefix.push(node);
            current = node.next.as_ref();
        }

        let Some((position, node)) = hit else {
            // No occurrence anywhere: share the whole chain.
            return self.clone();
        };

        // Rebuild the affected node, eliding it if it empties.
        let mut head = if node.elements.len() == 1 {
            node.next.clone()
        } else {
            let mut elements = Chunk::with_capacity(node.elements.len() - 1);
            for (index, candidate) in node.elements.iter().enumerate() {
                if index != position {
                    elements.push(candidate.clone());
                }
            }
            Some(ReferenceCounter::new(Node {
                elements,
                next: node.next.clone(),
            }))
        };

        // Rebuild the prefix spine back to front onto the new tail.
        for node in prefix.into_iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                elements: node.elements.clone(),
                next: head,
            }));
        }

        Self {
            head,
            length: self.length - 1,
            chunk_capacity: self.chunk_capacity,
        }
    }

    /// Returns a new list with elements in reverse flattened order.
    ///
    /// A single pass reverses element order within each node and node order
    /// along the chain. `list.reverse().reverse()` equals `list`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    /// assert_eq!(list.reverse().to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut head = None;
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            let elements: Chunk<T> = node.elements.iter().rev().cloned().collect();
            head = Some(ReferenceCounter::new(Node {
                elements,
                next: head,
            }));
            current = node.next.as_ref();
        }
        Self {
            head,
            length: self.length,
            chunk_capacity: self.chunk_capacity,
        }
    }

    /// Appends another list to this list.
    ///
    /// The result's flattened elements are `self` followed by `other`,
    /// under `self`'s chunk capacity. Only `self`'s spine is rebuilt; the
    /// entirety of `other`'s chain is reused by reference. An empty operand
    /// yields the other operand unchanged, which together with
    /// associativity makes `append` a monoid with [`UnrolledList::new`] as
    /// identity.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`; independent of `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list1 = UnrolledList::from_slice(&[1, 2]);
    /// let list2 = UnrolledList::from_slice(&[3, 4]);
    /// assert_eq!(list1.append(&list2).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut spine: Vec<&ReferenceCounter<Node<T>>> = Vec::new();
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            spine.push(node);
            current = node.next.as_ref();
        }

        // Terminate self's rebuilt spine with other's chain, by reference.
        let mut head = other.head.clone();
        for node in spine.into_iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                elements: node.elements.clone(),
                next: head,
            }));
        }

        Self {
            head,
            length: self.length + other.length,
            chunk_capacity: self.chunk_capacity,
        }
    }

    /// Keeps, in order, only the elements satisfying the predicate.
    ///
    /// The kept elements are repacked into fresh nodes at this list's
    /// chunk capacity. Filtering an empty list returns it by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list = UnrolledList::from_slice(&[1, 2, 3, 4, 5, 6]);
    /// let evens = list.filter(|element| element % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return self.clone();
        }

        let mut kept = Vec::new();
        for element in self {
            if predicate(element) {
                kept.push(element.clone());
            }
        }
        Self::build_from_vec(kept, self.chunk_capacity)
    }

    /// Returns, in this list's order, every element that is also a member
    /// of `other`.
    ///
    /// This is a filter by membership, not a set intersection: duplicates
    /// in `self` are preserved when they individually match. The result
    /// carries `self`'s chunk capacity and is empty whenever either operand
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let list1 = UnrolledList::from_slice(&[1, 2, 3, 4]);
    /// let list2 = UnrolledList::from_slice(&[3, 4, 5, 6]);
    /// assert_eq!(list1.intersection(&list2).to_vec(), vec![3, 4]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.filter(|element| other.contains(element))
    }

    /// Restores the node-occupancy invariant in a single pass.
    ///
    /// Split runs before merge at each step: a batch larger than the chunk
    /// capacity sheds its front half until every piece fits, and adjacent
    /// batches whose combined size is within capacity are merged greedily
    /// left to right. The pass is idempotent and preserves flattened
    /// content and length.
    ///
    /// Useful after long chains of `cons` and `remove_first`, which may
    /// leave interior nodes underfilled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled::persistent::UnrolledList;
    ///
    /// let sparse = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4], 1);
    /// let packed = sparse.rebalance();
    /// assert_eq!(packed, sparse);
    /// assert_eq!(packed.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn rebalance(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }

        let capacity = self.chunk_capacity;
        let mut batches: Vec<Chunk<T>> = Vec::new();
        let mut current = self.head.as_ref();

        while let Some(node) = current {
            let mut pending: Vec<Chunk<T>> = vec![node.elements.clone()];
            while let Some(mut piece) = pending.pop() {
                if piece.len() > capacity {
                    // Split: front half stays, remainder is examined again.
                    let half = piece.len() / 2;
                    let rest: Chunk<T> = piece.drain(half..).collect();
                    pending.push(rest);
                    pending.push(piece);
                    continue;
                }
                match batches.last_mut() {
                    // Merge: adjacent batches that fit in one node.
                    Some(previous) if previous.len() + piece.len() <= capacity => {
                        previous.extend(piece);
                    }
                    _ => batches.push(piece),
                }
            }
            current = node.next.as_ref();
        }

        let mut head = None;
        for elements in batches.into_iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                elements,
                next: head,
            }));
        }
        Self {
            head,
            length: self.length,
            chunk_capacity: capacity,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of an [`UnrolledList`].
///
/// Yields elements in flattened chain order. Exhaustion is signalled by
/// `None`, and the iterator stays exhausted afterwards.
pub struct UnrolledListIterator<'a, T> {
    node: Option<&'a ReferenceCounter<Node<T>>>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for UnrolledListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.node {
            if self.index < node.elements.len() {
                let element = &node.elements[self.index];
                self.index += 1;
                self.remaining -= 1;
                return Some(element);
            }
            self.node = node.next.as_ref();
            self.index = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for UnrolledListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over elements of an [`UnrolledList`].
pub struct UnrolledListIntoIterator<T> {
    node: Option<ReferenceCounter<Node<T>>>,
    index: usize,
    remaining: usize,
}

impl<T: Clone> Iterator for UnrolledListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.node.as_ref() {
            if self.index < node.elements.len() {
                let element = node.elements[self.index].clone();
                self.index += 1;
                self.remaining -= 1;
                return Some(element);
            }
            let next = node.next.clone();
            self.node = next;
            self.index = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for UnrolledListIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for UnrolledList<T> {
    /// Cloning shares the whole chain; O(1).
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
            chunk_capacity: self.chunk_capacity,
        }
    }
}

impl<T> Default for UnrolledList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for UnrolledList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect(), DEFAULT_CHUNK_CAPACITY)
    }
}

impl<T: Clone> IntoIterator for UnrolledList<T> {
    type Item = T;
    type IntoIter = UnrolledListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        UnrolledListIntoIterator {
            node: self.head,
            index: 0,
            remaining: self.length,
        }
    }
}

impl<'a, T> IntoIterator for &'a UnrolledList<T> {
    type Item = &'a T;
    type IntoIter = UnrolledListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two lists are equal iff their flattened element sequences are equal.
///
/// Neither the chunk capacity nor node boundaries participate: a list built
/// at capacity 2 equals one with the same elements built at capacity 4.
impl<T: PartialEq> PartialEq for UnrolledList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnrolledList<T> {}

/// Computes a hash value for this list.
///
/// The length is hashed first, then each element in flattened order, so the
/// hash agrees with [`PartialEq`] regardless of node boundaries.
impl<T: Hash> Hash for UnrolledList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnrolledList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the flattened elements as `"[e1, e2, ...]"`, `"[]"` when empty.
impl<T: fmt::Display> fmt::Display for UnrolledList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for UnrolledList<T> {
    type Inner = T;
    type WithType<B> = UnrolledList<B>;
}

impl<T: Clone> Functor for UnrolledList<T> {
    fn fmap<B, F>(self, mut function: F) -> UnrolledList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }

    fn fmap_ref<B, F>(&self, function: F) -> UnrolledList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> Foldable for UnrolledList<T> {
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(initial, function)
    }

    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.reverse()
            .into_iter()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T: Clone> Semigroup for UnrolledList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for UnrolledList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UnrolledList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UnrolledListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> UnrolledListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UnrolledListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = UnrolledList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UnrolledList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UnrolledListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
