use crate::{Node, NodePtr, Tree};
use std::{iter::FusedIterator, marker::PhantomData};

/// An iterator over the `Node`s of a tree in in-order traversal.
///
/// Walks successor links from both ends, so it never allocates. A renderer
/// can use the position of each node as its horizontal coordinate.
pub struct Nodes<'a, K> {
    front: NodePtr<K>,
    back: NodePtr<K>,
    len: usize,
    phantom: PhantomData<&'a Node<K>>,
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the tree is borrowed for 'a and len bounds the walk to
        // nodes not yet yielded from either end.
        let current = unsafe { self.front?.as_ref() };
        self.front = current.next();
        self.len -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> DoubleEndedIterator for Nodes<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: see `next`.
        let current = unsafe { self.back?.as_ref() };
        self.back = current.prev();
        self.len -= 1;
        Some(current)
    }
}

impl<K> ExactSizeIterator for Nodes<'_, K> {}

impl<K> FusedIterator for Nodes<'_, K> {}

impl<K> Clone for Nodes<'_, K> {
    fn clone(&self) -> Self {
        Nodes { ..*self }
    }
}

impl<K> Tree<K> {
    /// Gets an iterator over the nodes of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Color, Tree};
    ///
    /// let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    /// let colors: Vec<_> = tree.nodes().map(|n| n.color()).collect();
    /// assert_eq!(colors, [Color::Red, Color::Black, Color::Red]);
    /// ```
    pub fn nodes(&self) -> Nodes<'_, K> {
        Nodes {
            front: self.root.first(),
            back: self.root.last(),
            len: self.len,
            phantom: PhantomData,
        }
    }
}
