use std::{fmt::Debug, ptr::NonNull};

use crate::ComingFrom;

use super::{Color, Node, NodePtr};

// Public API.
impl<K> Node<K> {
    /// A detached red node with no links.
    pub fn new(key: K) -> Self {
        Node {
            parent: None,
            right: None,
            left: None,
            color: Color::Red,
            key,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Flips red to black and black to red.
    #[inline(always)]
    pub fn toggle_color(&mut self) {
        self.color = self.color.toggled();
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node<K>> {
        // SAFETY: child links point at nodes owned by the same tree as self.
        self.left.map(|n| unsafe { n.as_ref() })
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node<K>> {
        // SAFETY: child links point at nodes owned by the same tree as self.
        self.right.map(|n| unsafe { n.as_ref() })
    }

    /// The node this one hangs from; `None` for the root.
    #[inline(always)]
    pub fn parent(&self) -> Option<&Node<K>> {
        // SAFETY: the parent outlives its children.
        self.parent.map(|n| unsafe { n.as_ref() })
    }
}

impl<K> Node<K> {
    /// Hangs `node` below `parent` in the `direction` slot.
    ///
    /// # Safety
    ///
    /// Both pointers must be live nodes of the same tree and the slot must
    /// be empty; otherwise the previous child leaks.
    #[inline(always)]
    pub(crate) unsafe fn link(
        mut node: NonNull<Self>,
        mut parent: NonNull<Self>,
        direction: ComingFrom,
    ) {
        // SAFETY: delegated to the caller. The two &mut never overlap since
        // the first one is dead before the second is taken.
        {
            let node = unsafe { node.as_mut() };
            node.parent = Some(parent);
            node.left = None;
            node.right = None;
        }
        let parent = unsafe { parent.as_mut() };
        match direction {
            ComingFrom::Left => parent.left = Some(node),
            ComingFrom::Right => parent.right = Some(node),
        };
    }

    /// The in-order successor.
    #[inline(always)]
    pub(crate) fn next(&self) -> NodePtr<K> {
        // If we have a right-hand child, go down and then left as far as we
        // can.
        if let Some(mut current) = self.right {
            // SAFETY: by if guard, current is valid.
            while let Some(left) = unsafe { current.as_ref() }.left {
                current = left;
            }
            return Some(current);
        }
        // No right-hand children. Everything down and left is smaller than us,
        // so any 'next' node must be in the general direction of our parent.
        // Climb while we are a right-hand child; the first parent reached
        // from its left is the successor.
        let mut node: NodePtr<K> = self.into();
        loop {
            let parent = node.and_then(|n| unsafe { n.as_ref() }.parent)?;
            // SAFETY: parent links always point at live nodes.
            if unsafe { parent.as_ref() }.right != node {
                return Some(parent);
            }
            node = Some(parent);
        }
    }

    /// The in-order predecessor.
    #[inline(always)]
    pub(crate) fn prev(&self) -> NodePtr<K> {
        if let Some(mut current) = self.left {
            // SAFETY: by if guard, current is valid.
            while let Some(right) = unsafe { current.as_ref() }.right {
                current = right;
            }
            return Some(current);
        }
        let mut node: NodePtr<K> = self.into();
        loop {
            let parent = node.and_then(|n| unsafe { n.as_ref() }.parent)?;
            // SAFETY: parent links always point at live nodes.
            if unsafe { parent.as_ref() }.left != node {
                return Some(parent);
            }
            node = Some(parent);
        }
    }
}

impl<K> Debug for Node<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}::({:?})", self.color(), self.key))
    }
}
