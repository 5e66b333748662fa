//! A red-black tree keyed by any totally-ordered type.
//!
//! Insertion places the new key as a red leaf, then walks back up the tree
//! recoloring and rotating until no red node has a red child and the root is
//! black. Nodes expose their key, color and links read-only, so renderers and
//! test harnesses can inspect the exact shape of the tree.
//!
//! ```
//! use redblack::{Color, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), &20);
//! assert_eq!(root.color(), Color::Black);
//! assert_eq!(root.left().map(|n| n.color()), Some(Color::Red));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
//! ```
mod alloc;
mod iter;
mod node;
mod root;
mod tree;
mod validate;

use std::{marker::PhantomData, ptr::NonNull};

pub use iter::{Iter, Nodes};
pub use validate::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// The other color.
    #[inline(always)]
    pub fn toggled(self) -> Color {
        Color::from(usize::from(self) ^ 1)
    }
}

impl From<Color> for usize {
    fn from(color: Color) -> usize {
        color as usize
    }
}

impl From<usize> for Color {
    fn from(color: usize) -> Color {
        match color {
            0 => Color::Red,
            _ => Color::Black,
        }
    }
}

/// Which child slot of its parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComingFrom {
    Left,
    Right,
}

pub(crate) type NodePtr<K> = Option<NonNull<Node<K>>>;

/// Null-aware accessors; an absent node reads as black and ignores writes.
pub(crate) trait NodePtrExt {
    type Key;

    fn is_red(&self) -> bool;
    fn left(&self) -> NodePtr<Self::Key>;
    fn parent(&self) -> NodePtr<Self::Key>;
    fn red_parent(&self) -> NodePtr<Self::Key>;
    fn right(&self) -> NodePtr<Self::Key>;
    fn set_left(&mut self, left: NodePtr<Self::Key>);
    fn set_parent(&mut self, parent: NodePtr<Self::Key>);
    fn set_right(&mut self, right: NodePtr<Self::Key>);
    fn toggle_color(&mut self);
}

impl<K> NodePtrExt for NodePtr<K> {
    type Key = K;

    #[inline(always)]
    fn is_red(&self) -> bool {
        self.is_some_and(|v| unsafe { v.as_ref() }.is_red())
    }

    #[inline(always)]
    fn left(&self) -> NodePtr<Self::Key> {
        self.and_then(|v| unsafe { v.as_ref() }.left)
    }

    #[inline(always)]
    fn parent(&self) -> NodePtr<Self::Key> {
        self.and_then(|v| unsafe { v.as_ref() }.parent)
    }

    /// The parent, but only when it is red.
    #[inline(always)]
    fn red_parent(&self) -> NodePtr<Self::Key> {
        self.parent().filter(|p| unsafe { p.as_ref() }.is_red())
    }

    #[inline(always)]
    fn right(&self) -> NodePtr<Self::Key> {
        self.and_then(|v| unsafe { v.as_ref() }.right)
    }

    #[inline(always)]
    fn set_left(&mut self, left: NodePtr<Self::Key>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.left = left;
        }
    }

    #[inline(always)]
    fn set_parent(&mut self, parent: NodePtr<Self::Key>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.parent = parent;
        }
    }

    #[inline(always)]
    fn set_right(&mut self, right: NodePtr<Self::Key>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.right = right;
        }
    }

    #[inline(always)]
    fn toggle_color(&mut self) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.toggle_color();
        }
    }
}

impl<K> From<&Node<K>> for NodePtr<K> {
    fn from(node: &Node<K>) -> Self {
        Some(NonNull::from(node))
    }
}

/// A single tree cell.
///
/// `left` and `right` own their subtrees; `parent` is a back-reference that is
/// only ever followed, never freed through.
pub struct Node<K> {
    pub(crate) parent: NodePtr<K>,
    pub(crate) right: NodePtr<K>,
    pub(crate) left: NodePtr<K>,
    pub(crate) color: Color,
    key: K,
}

/// The structural half of a tree: the root link and the algorithms that
/// rewire nodes (rotations and the insertion fixup). It does not own memory.
pub(crate) struct Root<K> {
    root: NodePtr<K>,
}

/// An ordered collection of keys kept balanced as a red-black tree.
///
/// Equal keys are all kept. A key equal to ones already present is placed
/// before them, so equal keys iterate newest first.
pub struct Tree<K> {
    root: Root<K>,
    len: usize,
    _owns: PhantomData<Box<Node<K>>>,
}

// SAFETY: a tree owns its nodes exclusively and hands out shared references
// only through `&self`, exactly like `Box<Node<K>>`.
unsafe impl<K: Send> Send for Tree<K> {}
unsafe impl<K: Sync> Sync for Tree<K> {}
