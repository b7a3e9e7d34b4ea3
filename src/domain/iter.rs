//! In-order cursors.
//!
//! A cursor keeps its own stack of ancestors whose right subtree is still
//! pending, so it works on trees without parent links. Each node is pushed and
//! popped at most once, making a full traversal O(n) even though a single
//! advance may descend O(h) levels.

use tracing::trace;

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::node::Node;

/// A visited node: its value and the right subtree still to be walked.
type Frame<'a, T> = (&'a T, Option<&'a Node<T>>);

type FrameMut<'a, T> = (&'a mut T, Option<&'a mut Node<T>>);

/// Read-only in-order cursor. The default cursor is the end position.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    current: Option<Frame<'a, T>>,
    stack: Vec<Frame<'a, T>>,
}

impl<T> Default for InOrder<'_, T> {
    fn default() -> Self {
        Self {
            current: None,
            stack: Vec::new(),
        }
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    /// Cursor on the leftmost node below `root`, or the end cursor for an empty tree.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = Self::default();
        if let Some(root) = root {
            let first = cursor.descend_left(root);
            cursor.current = Some(first);
        }
        cursor
    }

    fn descend_left(&mut self, mut node: &'a Node<T>) -> Frame<'a, T> {
        loop {
            let frame = (&node.value, node.right());
            match node.left() {
                Some(left) => {
                    self.stack.push(frame);
                    node = left;
                }
                None => return frame,
            }
        }
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Value under the cursor.
    pub fn value(&self) -> TreeResult<&'a T> {
        self.current
            .map(|(value, _)| value)
            .ok_or(DomainError::CursorAtEnd)
    }

    /// Moves to the in-order successor; the end cursor cannot advance.
    pub fn advance(&mut self) -> TreeResult<()> {
        let (_, right) = self.current.take().ok_or(DomainError::CursorAtEnd)?;
        self.current = match right {
            Some(right) => Some(self.descend_left(right)),
            None => self.stack.pop(),
        };
        trace!(pending = self.stack.len(), end = self.is_end(), "cursor advanced");
        Ok(())
    }

    fn position(&self) -> Option<*const T> {
        self.current.map(|(value, _)| value as *const T)
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value().ok()?;
        self.advance().ok()?;
        Some(value)
    }
}

impl<T> PartialEq for InOrder<'_, T> {
    /// Cursors are equal when they stand on the same node; all end cursors are equal.
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<T> Eq for InOrder<'_, T> {}

/// Mutable in-order cursor yielding `&mut T`.
#[derive(Debug)]
pub struct InOrderMut<'a, T> {
    current: Option<FrameMut<'a, T>>,
    stack: Vec<FrameMut<'a, T>>,
}

impl<T> Default for InOrderMut<'_, T> {
    fn default() -> Self {
        Self {
            current: None,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> InOrderMut<'a, T> {
    pub fn new(root: Option<&'a mut Node<T>>) -> Self {
        let mut cursor = Self::default();
        if let Some(root) = root {
            let first = cursor.descend_left(root);
            cursor.current = Some(first);
        }
        cursor
    }

    fn descend_left(&mut self, mut node: &'a mut Node<T>) -> FrameMut<'a, T> {
        loop {
            let Node { value, left, right } = node;
            let frame = (value, right.as_deref_mut());
            match left.as_deref_mut() {
                Some(left) => {
                    self.stack.push(frame);
                    node = left;
                }
                None => return frame,
            }
        }
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn value(&self) -> TreeResult<&T> {
        self.current
            .as_ref()
            .map(|(value, _)| &**value)
            .ok_or(DomainError::CursorAtEnd)
    }

    pub fn value_mut(&mut self) -> TreeResult<&mut T> {
        self.current
            .as_mut()
            .map(|(value, _)| &mut **value)
            .ok_or(DomainError::CursorAtEnd)
    }

    pub fn advance(&mut self) -> TreeResult<()> {
        self.step().map(|_| ())
    }

    /// Advances and hands out the value the cursor was standing on.
    fn step(&mut self) -> TreeResult<&'a mut T> {
        let (value, right) = self.current.take().ok_or(DomainError::CursorAtEnd)?;
        self.current = match right {
            Some(right) => Some(self.descend_left(right)),
            None => self.stack.pop(),
        };
        trace!(pending = self.stack.len(), end = self.is_end(), "cursor advanced");
        Ok(value)
    }

    fn position(&self) -> Option<*const T> {
        self.current
            .as_ref()
            .map(|(value, _)| &**value as *const T)
    }
}

impl<'a, T> Iterator for InOrderMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().ok()
    }
}

impl<T> PartialEq for InOrderMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<'a, T> PartialEq<InOrderMut<'a, T>> for InOrder<'_, T> {
    fn eq(&self, other: &InOrderMut<'a, T>) -> bool {
        self.position() == other.position()
    }
}

impl<'a, T> PartialEq<InOrder<'a, T>> for InOrderMut<'_, T> {
    fn eq(&self, other: &InOrder<'a, T>) -> bool {
        self.position() == other.position()
    }
}

/// One-way conversion: a mutable cursor gives up write access.
impl<'a, T> From<InOrderMut<'a, T>> for InOrder<'a, T> {
    fn from(cursor: InOrderMut<'a, T>) -> Self {
        let freeze = |(value, right): FrameMut<'a, T>| -> Frame<'a, T> {
            (&*value, right.map(|r| &*r))
        };
        Self {
            current: cursor.current.map(freeze),
            stack: cursor.stack.into_iter().map(freeze).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{leaf, make_node, BinaryTree};

    fn small_tree() -> BinaryTree<i32> {
        //     2
        //    / \
        //   1   4
        //      /
        //     3
        BinaryTree::new(make_node(2, Some(leaf(1)), Some(make_node(4, Some(leaf(3)), None))))
    }

    #[test]
    fn given_default_cursor_then_is_end() {
        let cursor: InOrder<'_, i32> = InOrder::default();
        assert!(cursor.is_end());
        assert_eq!(cursor.value(), Err(DomainError::CursorAtEnd));
    }

    #[test]
    fn given_end_cursor_when_advancing_then_cursor_at_end() {
        let mut cursor: InOrder<'_, i32> = InOrder::default();
        assert_eq!(cursor.advance(), Err(DomainError::CursorAtEnd));
    }

    #[test]
    fn given_empty_tree_when_constructing_cursor_then_equals_end() {
        let tree: BinaryTree<i32> = BinaryTree::empty();
        assert_eq!(tree.iter(), InOrder::default());
    }

    #[test]
    fn given_cursor_when_advancing_then_visits_in_order() {
        let tree = small_tree();
        let mut cursor = tree.iter();
        let mut seen = Vec::new();
        while cursor != InOrder::default() {
            seen.push(*cursor.value().unwrap());
            cursor.advance().unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn given_two_cursors_on_same_node_then_equal() {
        let tree = small_tree();
        let mut a = tree.iter();
        let mut b = tree.iter();
        a.advance().unwrap();
        assert_ne!(a, b);
        b.advance().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn given_cloned_cursor_then_walks_independently() {
        let tree = small_tree();
        let mut cursor = tree.iter();
        cursor.advance().unwrap();
        let rest: Vec<_> = cursor.clone().copied().collect();
        assert_eq!(rest, vec![2, 3, 4]);
        assert_eq!(cursor.value(), Ok(&2));
    }

    #[test]
    fn given_mutable_cursor_when_iterating_then_updates_values_in_place() {
        let mut tree = small_tree();
        for value in tree.iter_mut() {
            *value *= 10;
        }
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn given_mutable_cursor_when_converted_then_read_only_cursor_continues() {
        let mut tree = small_tree();
        let mut cursor = tree.iter_mut();
        *cursor.value_mut().unwrap() += 100;
        cursor.advance().unwrap();

        let frozen: InOrder<'_, i32> = cursor.into();

        assert_eq!(frozen.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(tree.iter().next(), Some(&101));
    }

    #[test]
    fn given_mutable_and_read_only_cursors_at_end_then_equal() {
        let mut tree = small_tree();
        let mut cursor = tree.iter_mut();
        for _ in 0..4 {
            cursor.advance().unwrap();
        }
        assert!(cursor.is_end());
        assert!(cursor == InOrder::default());
        assert_eq!(cursor.value(), Err(DomainError::CursorAtEnd));
    }
}
