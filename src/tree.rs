use std::{
    borrow::Borrow,
    cmp::Ordering::*,
    fmt::{self, Debug},
    marker::PhantomData,
};

use log::debug;

use crate::{
    Color, ComingFrom, Node, Root, Tree,
    alloc::{leak_alloc_node, own_back},
};

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    pub const fn new() -> Self {
        Tree {
            root: Root::new(),
            len: 0,
            _owns: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The top node, for callers that walk the structure themselves.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.root().map(|n| unsafe { n.as_ref() })
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.root.first().map(|n| unsafe { n.as_ref() }.key())
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.root.last().map(|n| unsafe { n.as_ref() }.key())
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<_> = self.root.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            let node = unsafe { node.as_ref() };
            pending.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
        height
    }

    /// Number of black nodes below the root on any path down to an absent
    /// child. Every such path agrees, so the left spine is enough.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.root().and_then(Node::left);
        while let Some(node) = cursor {
            count += usize::from(node.is_black());
            cursor = node.left();
        }
        count
    }

    /// Frees every node.
    pub fn clear(&mut self) {
        // Free leaves bottom-up, climbing through parent links; there is no
        // rebalancing since the whole tree goes away.
        let mut cursor = self.root.root();
        while let Some(current) = cursor {
            let current_ref = unsafe { current.as_ref() };
            if current_ref.left.is_some() {
                cursor = current_ref.left;
                continue;
            }
            if current_ref.right.is_some() {
                cursor = current_ref.right;
                continue;
            }
            cursor = current_ref.parent;
            if let Some(mut parent) = cursor {
                let parent = unsafe { parent.as_mut() };
                if parent.left == Some(current) {
                    parent.left = None;
                } else {
                    parent.right = None;
                }
            }
            // SAFETY: current is a leaf that no other node links to anymore.
            drop(unsafe { own_back(current) });
        }
        if self.len > 0 {
            debug!("cleared {} nodes", self.len);
        }
        self.root.set_root(None);
        self.len = 0;
    }
}

impl<K: Ord> Tree<K> {
    /// Adds `key`, keeping any equal keys already present.
    ///
    /// ```
    /// use redblack::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, key: K) {
        let Some(mut parent) = self.root.root() else {
            self.root.set_root(Some(leak_alloc_node(key, Color::Black)));
            self.len = 1;
            return;
        };

        // Smaller or equal keys go left.
        let direction = loop {
            let candidate = unsafe { parent.as_ref() };
            let (next, direction) = match key.cmp(candidate.key()) {
                Greater => (candidate.right, ComingFrom::Right),
                Less | Equal => (candidate.left, ComingFrom::Left),
            };
            match next {
                Some(next) => parent = next,
                None => break direction,
            }
        };

        let node = leak_alloc_node(key, Color::Red);
        // SAFETY: parent is a live node of this tree and its direction slot
        // was just found empty.
        unsafe { Node::link(node, parent, direction) };
        self.root.insert_fixup(node);
        self.len += 1;
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// A stored key equal to `key`. With several equal keys, any of them.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root();
        while let Some(candidate) = node {
            match key.cmp(candidate.key().borrow()) {
                Equal => return Some(candidate.key()),
                Greater => node = candidate.right(),
                Less => node = candidate.left(),
            }
        }
        None
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        iter.into_iter().for_each(|key| self.insert(key));
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug> Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
