use std::ptr::NonNull;

use crate::{Color, Node};

/// Moves a fresh, unlinked node to the heap.
///
/// The node leaks unless it is linked into a tree (which frees it on clear
/// or drop) or handed to [`own_back`].
pub(crate) fn leak_alloc_node<K>(key: K, color: Color) -> NonNull<Node<K>> {
    let mut node = Node::new(key);
    node.color = color;
    NonNull::from(Box::leak(Box::new(node)))
}

/// # Safety
///
/// `node` must come from [`leak_alloc_node`], be unlinked from every other
/// node, and not be used again.
pub(crate) unsafe fn own_back<K>(node: NonNull<Node<K>>) -> Box<Node<K>> {
    unsafe { Box::from_raw(node.as_ptr()) }
}
