use std::{mem, ptr::NonNull};

use log::trace;

use super::{Color, Node, NodePtr, NodePtrExt, Root};

impl<K> Default for Root<K> {
    fn default() -> Self {
        Root::new()
    }
}

impl<K> Root<K> {
    pub(crate) const fn new() -> Self {
        Root { root: None }
    }

    #[inline(always)]
    pub(crate) fn root(&self) -> NodePtr<K> {
        self.root
    }

    #[inline(always)]
    pub(crate) fn set_root(&mut self, root: NodePtr<K>) {
        self.root = root;
    }

    pub(crate) fn first(&self) -> NodePtr<K> {
        let mut n = self.root?;
        while let Some(left) = unsafe { n.as_ref() }.left {
            n = left;
        }
        Some(n)
    }

    pub(crate) fn last(&self) -> NodePtr<K> {
        let mut n = self.root?;
        while let Some(right) = unsafe { n.as_ref() }.right {
            n = right;
        }
        Some(n)
    }

    /// Restores the red-black properties after `node` was linked in as a red
    /// leaf.
    pub(crate) fn insert_fixup(&mut self, node: NonNull<Node<K>>) {
        let mut current = node;

        /*
         * Loop invariant: current is red, and the only possible red-red
         * edge is the one between current and its parent.
         */
        while let Some(mut papa) = Some(current).red_parent() {
            // A red node is never the root, so papa always has a parent.
            let grandpa = Some(papa)
                .parent()
                .expect("red node without a parent: the root must be black");

            if Some(papa) == Some(grandpa).left() {
                let mut uncle = Some(grandpa).right();
                if uncle.is_red() {
                    /*
                     * Case 1 - uncle is red (color flips).
                     *
                     *       G            g
                     *      / \          / \
                     *     p   u  -->   P   U
                     *    /            /
                     *   n            n
                     *
                     * g might now have a red parent: go on from g.
                     */
                    trace!("insert fixup: red uncle on the right, recoloring");
                    Some(papa).toggle_color();
                    uncle.toggle_color();
                    Some(grandpa).toggle_color();
                    current = grandpa;
                    continue;
                }

                if Some(current) == Some(papa).right() {
                    /*
                     * Case 2 - uncle is black, current is the right child.
                     *
                     *      G             G
                     *     / \           / \
                     *    p   U  -->    n   U
                     *     \           /
                     *      n         p
                     *
                     * Falls through to Case 3 with the roles swapped.
                     */
                    trace!("insert fixup: zig-zag on the left, rotating left");
                    self.rotate_left(papa);
                    mem::swap(&mut papa, &mut current);
                }

                /*
                 * Case 3 - uncle is black, current is the left child.
                 *
                 *        G           P
                 *       / \         / \
                 *      p   U  -->  n   g
                 *     /                 \
                 *    n                   U
                 */
                trace!("insert fixup: straight line on the left, rotating right");
                self.rotate_right(grandpa);
                Some(grandpa).toggle_color();
                Some(papa).toggle_color();
            } else {
                let mut uncle = Some(grandpa).left();
                if uncle.is_red() {
                    /* Case 1 - color flips */
                    trace!("insert fixup: red uncle on the left, recoloring");
                    Some(papa).toggle_color();
                    uncle.toggle_color();
                    Some(grandpa).toggle_color();
                    current = grandpa;
                    continue;
                }

                if Some(current) == Some(papa).left() {
                    /* Case 2 - right rotate at papa */
                    trace!("insert fixup: zig-zag on the right, rotating right");
                    self.rotate_right(papa);
                    mem::swap(&mut papa, &mut current);
                }

                /* Case 3 - left rotate at grandpa */
                trace!("insert fixup: straight line on the right, rotating left");
                self.rotate_left(grandpa);
                Some(grandpa).toggle_color();
                Some(papa).toggle_color();
            }
        }

        // Either the first node, or Case 1 carried red up to the root.
        if let Some(mut root) = self.root {
            unsafe { root.as_mut() }.color = Color::Black;
        }
    }

    /// Right rotation around `node`.
    ///
    /// ```text
    ///        P                   P
    ///        |                   |
    ///      --N--               --A--
    ///     /     \    -->      /     \
    ///    A       B           AL      N
    ///   / \                         / \
    ///  AL  AR                      AR  B
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has no left child.
    pub(crate) fn rotate_right(&mut self, node: NonNull<Node<K>>) {
        let mut node = Some(node);
        let mut pivot = Some(node.left().expect("rotate_right on a node with no left child"));
        let parent = node.parent();

        let mut inner = pivot.right();
        node.set_left(inner);
        inner.set_parent(node);

        pivot.set_right(node);
        node.set_parent(pivot);
        pivot.set_parent(parent);
        self.change_child(node, pivot, parent);
        trace!("rotated right");
    }

    /// Left rotation around `node`; the mirror of [`Self::rotate_right`].
    ///
    /// ```text
    ///      P                   P
    ///      |                   |
    ///    --N--               --B--
    ///   /     \    -->      /     \
    ///  A       B           N       BR
    ///         / \         / \
    ///        BL  BR      A   BL
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has no right child.
    pub(crate) fn rotate_left(&mut self, node: NonNull<Node<K>>) {
        let mut node = Some(node);
        let mut pivot = Some(node.right().expect("rotate_left on a node with no right child"));
        let parent = node.parent();

        let mut inner = pivot.left();
        node.set_right(inner);
        inner.set_parent(node);

        pivot.set_left(node);
        node.set_parent(pivot);
        pivot.set_parent(parent);
        self.change_child(node, pivot, parent);
        trace!("rotated left");
    }

    /// Points whichever link held `old` (a child slot of `parent`, or the
    /// root) at `new`.
    fn change_child(&mut self, old: NodePtr<K>, new: NodePtr<K>, parent: NodePtr<K>) {
        if let Some(mut parent) = parent {
            let parent = unsafe { parent.as_mut() };
            if parent.left == old {
                parent.left = new;
            } else {
                parent.right = new;
            }
        } else {
            self.root = new;
        }
    }
}
