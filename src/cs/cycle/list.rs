//! # Arena-backed singly-linked chains
//!
//! A chain whose tail points back into itself cannot be expressed with plain
//! owning `Box` links, since the node closing the loop would need to own a node
//! that is already owned. Here every node lives in a [`LinkedArena`] and links
//! are [`NodeId`] handles into it. The arena owns all nodes and frees them
//! together when it is dropped.
//!
//! Identity of a node is its handle. Two nodes holding the same value are
//! still different nodes.
//!
//! ```rust
//! use cycle_finder::cycle::{LinkedArena, Successors};
//!
//! // 1 -> 2 -> 3 -> 4 -> 5 -> back to 3
//! let (arena, head) = LinkedArena::with_cycle([1, 2, 3, 4, 5], 2).unwrap();
//! let third = arena.advance_by_two(head).unwrap();
//! assert_eq!(arena.value(third), Some(&3));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::cs::error::{Error, Result};

/// Handle to a node stored in a [`LinkedArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node holding a value and an optional successor link.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub val: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a node with the given value and no successor.
    pub fn new(val: T) -> Self {
        Node { val, next: None }
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.val)
    }
}

/// Anything that can be walked one successor at a time.
///
/// The cycle finders in this crate are written against this trait so they
/// only ever compare node handles, never the values behind them.
pub trait Successors {
    /// Node identity. Equal handles must denote the same node.
    type Node: Copy + Eq + Hash;

    /// Returns the successor of `node`, or `None` if the chain ends here.
    fn advance(&self, node: Self::Node) -> Option<Self::Node>;

    /// Applies [`advance`](Successors::advance) twice. Returns `None` if
    /// either hop is unavailable.
    fn advance_by_two(&self, node: Self::Node) -> Option<Self::Node> {
        self.advance(node).and_then(|next| self.advance(next))
    }
}

/// Owning storage for the nodes of one or more linked chains.
#[derive(Debug, Clone)]
pub struct LinkedArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for LinkedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedArena<T> {
    pub fn new() -> Self {
        LinkedArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LinkedArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds an unlinked node and returns its handle.
    pub fn push(&mut self, val: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(val));
        id
    }

    /// Points `from` at `to`, replacing any previous successor.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::UnknownNode(to));
        }
        self.node_mut(from)?.next = Some(to);
        Ok(())
    }

    /// Removes the successor of `from`, making it the end of its chain.
    pub fn unlink(&mut self, from: NodeId) -> Result<()> {
        self.node_mut(from)?.next = None;
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>> {
        self.nodes.get_mut(id.index()).ok_or(Error::UnknownNode(id))
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.val)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds an acyclic chain from `values` and returns it with its head,
    /// or `None` for the head if `values` is empty.
    pub fn chain<I>(values: I) -> (Self, Option<NodeId>)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = values.into_iter();
        let mut arena = Self::with_capacity(iter.size_hint().0);
        let mut head = None;
        let mut prev: Option<NodeId> = None;
        for val in iter {
            let id = arena.push(val);
            match prev {
                Some(p) => arena.nodes[p.index()].next = Some(id),
                None => head = Some(id),
            }
            prev = Some(id);
        }
        (arena, head)
    }

    /// Builds a chain from `values` whose last node links back to the node at
    /// position `entry`, so that node becomes the cycle entry point.
    pub fn with_cycle<I>(values: I, entry: usize) -> Result<(Self, NodeId)>
    where
        I: IntoIterator<Item = T>,
    {
        let (mut arena, head) = Self::chain(values);
        let head = head.ok_or_else(|| Error::invalid_parameter("values", "chain is empty"))?;
        if entry >= arena.len() {
            return Err(Error::invalid_parameter(
                "entry",
                format!("position {entry} is past the end of a {}-node chain", arena.len()),
            ));
        }
        let tail = NodeId(arena.len() - 1);
        arena.link(tail, NodeId(entry))?;
        Ok((arena, head))
    }
}

impl<T> Successors for LinkedArena<T> {
    type Node = NodeId;

    #[inline]
    fn advance(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(Node::next)
    }
}

/// Builds the demonstration chain `1 -> 2 -> 3 -> 4 -> 5 -> 3` and returns it
/// with its head. The cycle is entered at the node holding `3`.
pub fn canonical_example() -> (LinkedArena<i32>, NodeId) {
    let mut arena = LinkedArena::with_capacity(5);
    let nodes: Vec<NodeId> = (1..=5).map(|v| arena.push(v)).collect();
    for pair in nodes.windows(2) {
        arena.nodes[pair[0].index()].next = Some(pair[1]);
    }
    arena.nodes[nodes[4].index()].next = Some(nodes[2]);
    (arena, nodes[0])
}
