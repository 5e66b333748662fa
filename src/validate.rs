use thiserror::Error;

use crate::{NodePtr, Tree};

/// A broken red-black or binary-search-tree property.
///
/// Positions count nodes in key order, starting at zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("the root is red")]
    RedRoot,
    #[error("red node at position {position} has a red child")]
    RedRedEdge { position: usize },
    #[error("path below position {position} has black height {found}, expected {expected}")]
    BlackHeightMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },
    #[error("key at position {position} is smaller than its predecessor")]
    OutOfOrder { position: usize },
    #[error("a child of the node at position {position} does not link back to it")]
    BrokenParentLink { position: usize },
    #[error("tree records {expected} keys but holds {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl<K: Ord> Tree<K> {
    /// Checks every red-black property, key order, parent links and the
    /// recorded length. Returns the black height (see
    /// [`Tree::black_height`]) on success.
    ///
    /// Only child links are followed, so a corrupted parent link is reported
    /// rather than followed.
    pub fn validate(&self) -> Result<usize, Violation> {
        let root = self.root.root();
        if let Some(root) = root {
            let root = unsafe { root.as_ref() };
            if root.is_red() {
                return Err(Violation::RedRoot);
            }
            if root.parent.is_some() {
                return Err(Violation::BrokenParentLink { position: 0 });
            }
        }

        // In-order walk with an explicit stack. Each entry carries the number
        // of black nodes from below the root down to and including itself.
        let mut stack = Vec::new();
        let mut cursor: Option<(_, usize)> = root.map(|n| (n, 0));
        let mut previous = None;
        let mut black_height = None;
        let mut position = 0;

        loop {
            while let Some((node, above)) = cursor {
                let node_ref = unsafe { node.as_ref() };
                let blacks = above + usize::from(Some(node) != root && node_ref.is_black());
                stack.push((node, blacks));
                cursor = node_ref.left.map(|left| (left, blacks));
            }
            let Some((node, blacks)) = stack.pop() else {
                break;
            };
            let node_ref = unsafe { node.as_ref() };

            if previous.is_some_and(|previous| previous > node_ref.key()) {
                return Err(Violation::OutOfOrder { position });
            }
            previous = Some(node_ref.key());

            for child in [node_ref.left, node_ref.right] {
                let Some(child) = child else {
                    // An absent child ends a path: all of them must agree.
                    match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(Violation::BlackHeightMismatch {
                                position,
                                expected,
                                found: blacks,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                };
                let child_ref = unsafe { child.as_ref() };
                if child_ref.parent != NodePtr::from(node_ref) {
                    return Err(Violation::BrokenParentLink { position });
                }
                if node_ref.is_red() && child_ref.is_red() {
                    return Err(Violation::RedRedEdge { position });
                }
            }

            position += 1;
            cursor = node_ref.right.map(|right| (right, blacks));
        }

        if position != self.len {
            return Err(Violation::LengthMismatch {
                expected: self.len,
                found: position,
            });
        }
        Ok(black_height.unwrap_or(0))
    }
}
