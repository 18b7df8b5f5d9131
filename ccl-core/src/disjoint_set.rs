//! Union-find (disjoint set union) keyed by arbitrary hashable elements.
//!
//! The labeller registers pixels lazily as it discovers them, so the forest
//! stores its parent and rank tables in hash maps instead of dense vectors.
//! `find` compresses paths and `union` attaches by rank.

use std::{collections::HashMap, hash::Hash};

use crate::error::DisjointSetError;

#[derive(Clone, Copy, Debug)]
struct Node<K> {
    parent: K,
    rank: u8,
}

/// A disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use ccl_core::DisjointSet;
///
/// let mut forest = DisjointSet::new();
/// forest.union('a', 'b');
/// forest.make_set('c');
/// assert_eq!(forest.find('a')?, forest.find('b')?);
/// assert_ne!(forest.find('a')?, forest.find('c')?);
/// assert_eq!(forest.set_count(), 2);
/// # Ok::<(), ccl_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    nodes: HashMap<K, Node<K>>,
    sets: usize,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            sets: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> DisjointSet<K> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Registers `element` as a singleton set.
    ///
    /// Returns `false` without touching the forest when `element` is already
    /// present.
    pub fn make_set(&mut self, element: K) -> bool {
        if self.nodes.contains_key(&element) {
            return false;
        }
        self.nodes.insert(
            element,
            Node {
                parent: element,
                rank: 0,
            },
        );
        self.sets += 1;
        true
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is re-pointed at the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `element` was never
    /// registered.
    pub fn find(&mut self, element: K) -> Result<K, DisjointSetError> {
        if !self.contains(&element) {
            return Err(DisjointSetError::UnknownElement);
        }
        Ok(self.find_registered(element))
    }

    /// Merges the sets containing `left` and `right`, registering either
    /// element first if needed. Returns the root of the merged set.
    pub fn union(&mut self, left: K, right: K) -> K {
        self.make_set(left);
        self.make_set(right);

        let mut left = self.find_registered(left);
        let mut right = self.find_registered(right);
        if left == right {
            return left;
        }

        let left_rank = self.rank(left);
        let right_rank = self.rank(right);
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        if let Some(child) = self.nodes.get_mut(&right) {
            child.parent = left;
        }
        if left_rank == right_rank {
            if let Some(root) = self.nodes.get_mut(&left) {
                root.rank = root.rank.saturating_add(1);
            }
        }
        self.sets -= 1;
        left
    }

    /// Returns whether `element` has been registered.
    #[must_use]
    pub fn contains(&self, element: &K) -> bool {
        self.nodes.contains_key(element)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint sets currently held.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Root lookup for an element known to be registered; compresses the
    /// walked path onto the root.
    fn find_registered(&mut self, element: K) -> K {
        let root = self.root_of(element);

        let mut node = element;
        while node != root {
            let Some(entry) = self.nodes.get_mut(&node) else {
                break;
            };
            node = std::mem::replace(&mut entry.parent, root);
        }

        root
    }

    /// Follows parent links from `element` until a self-parented node. An
    /// unregistered element is its own root.
    fn root_of(&self, element: K) -> K {
        let mut root = element;
        while let Some(parent) = self
            .nodes
            .get(&root)
            .map(|node| node.parent)
            .filter(|&parent| parent != root)
        {
            root = parent;
        }
        root
    }

    fn rank(&self, element: K) -> u8 {
        self.nodes.get(&element).map_or(0, |node| node.rank)
    }
}
