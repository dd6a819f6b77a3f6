use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::error::Error;
use crate::list::hooks::Hooks;
use crate::Iter;

pub mod error;
pub mod hooks;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a
/// cyclic list around a payload-less ghost node.
///
/// Besides the usual front/back operations, it supports insertion relative to
/// an arbitrary node (via [`NodeRef`] handles), index-based and comparator
/// ordered insertion, removal at any position, and whole-chain splitting and
/// concatenation.
///
/// The `List` contains:
/// - a pointer `ghost` that points to the ghost node;
/// - a length field `len` holding the element count;
/// - the caller-supplied behavior [`Hooks`] recorded at construction.
///
/// Accessing or mutating elements at an arbitrary position takes *O*(*n*)
/// time, as does validating a [`NodeRef`] handle; head/tail surgery itself is
/// *O*(1).
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    /// the length of the list
    pub(crate) len: usize,
    pub(crate) hooks: Hooks<T>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

/// An opaque, copyable handle to a node of a [`List`].
///
/// A handle stays valid as long as its node remains in the list; removing the
/// node (or tearing the list down) leaves the handle dangling. Operations
/// taking a `NodeRef` detect a dangling or foreign handle by scanning the
/// list for it by identity before doing anything else, so a bad handle
/// produces an error (or the documented head-insert fallback), never a
/// dereference.
///
/// Handles compare equal exactly when they name the same node.
pub struct NodeRef<T> {
    pub(crate) node: NonNull<Node<T>>,
    _marker: PhantomData<*const T>,
}

impl<T> NodeRef<T> {
    pub(crate) fn new(node: NonNull<Node<T>>) -> Self {
        let _marker = PhantomData;
        Self { node, _marker }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> Debug for NodeRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef").field(&self.node).finish()
    }
}

/// Nodes fragment detached from a list, used in list splitting or
/// concatenation.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the cyclic list).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() }).cast()
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the cyclic list).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() }).cast()
    }

    pub(crate) unsafe fn connect(
        &mut self,
        mut prev: NonNull<Node<T>>,
        mut next: NonNull<Node<T>>,
    ) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), whether it belongs
    /// to the list, or whether `len` is the length of the range.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        self.connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Construct a list carrying `hooks` from detached nodes.
    ///
    /// It is safe because the detached nodes is guaranteed to be a valid range
    /// when construction.
    pub(crate) fn from_detached(detached: DetachedNodes<T>, hooks: Hooks<T>) -> Self {
        let mut list = List::with_hooks(hooks);
        unsafe {
            list.attach_nodes(list.ghost_node(), list.ghost_node(), detached);
        }
        list
    }

    /// Whether `node` currently belongs to this list.
    ///
    /// Compares node identities only; the candidate handle is never
    /// dereferenced, so it is safe to probe with a dangling handle.
    pub(crate) fn contains_node(&self, node: NodeRef<T>) -> bool {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost {
            if current == node.node {
                return true;
            }
            // SAFETY: `current` is a real node of this list.
            current = unsafe { current.as_ref().next };
        }
        false
    }
}

impl<T> List<T> {
    /// Create an empty `List` with no hooks.
    ///
    /// # Examples
    /// ```
    /// use cell_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_hooks(Hooks::new())
    }

    /// Create an empty `List` recording the given behavior hooks.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Hooks, List};
    ///
    /// let mut list = List::with_hooks(Hooks::new().with_compare(|a: &i32, b: &i32| a.cmp(b)));
    /// list.insert_ordered(2);
    /// list.insert_ordered(1);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn with_hooks(hooks: Hooks<T>) -> Self {
        let ghost = new_ghost();
        let len = 0;
        let _marker = PhantomData;
        Self {
            ghost,
            len,
            hooks,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a handle to the first node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.head().is_none());
    ///
    /// let node = list.push_front(1);
    /// assert_eq!(list.head(), Some(node));
    /// ```
    pub fn head(&self) -> Option<NodeRef<T>> {
        if self.is_empty() {
            return None;
        }
        Some(NodeRef::new(self.front_node()))
    }

    /// Returns a handle to the last node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.tail().is_none());
    ///
    /// list.push_back(1);
    /// let node = list.push_back(2);
    /// assert_eq!(list.tail(), Some(node));
    /// ```
    pub fn tail(&self) -> Option<NodeRef<T>> {
        if self.is_empty() {
            return None;
        }
        Some(NodeRef::new(self.back_node()))
    }

    /// Provides a reference to the element stored in `node`, or `None` if the
    /// handle does not belong to this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// let node = list.push_back(7);
    /// assert_eq!(list.element(node), Some(&7));
    /// ```
    pub fn element(&self, node: NodeRef<T>) -> Option<&T> {
        if !self.contains_node(node) {
            return None;
        }
        // SAFETY: membership was just verified, so `node` is a real node of
        // this list and holds a valid element.
        unsafe { Some(&node.node.as_ref().element) }
    }

    /// Provides a mutable reference to the element stored in `node`, or `None`
    /// if the handle does not belong to this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// let node = list.push_back(7);
    ///
    /// *list.element_mut(node).unwrap() = 8;
    /// assert_eq!(list.element(node), Some(&8));
    /// ```
    pub fn element_mut(&mut self, node: NodeRef<T>) -> Option<&mut T> {
        if !self.contains_node(node) {
            return None;
        }
        let mut node = node.node;
        // SAFETY: membership was just verified, and `&mut self` guarantees
        // exclusive access to the node.
        unsafe { Some(&mut node.as_mut().element) }
    }

    /// Returns a handle to the node after `node`, or `None` at the tail or
    /// for a handle that does not belong to this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let head = list.head().unwrap();
    ///
    /// let second = list.next(head).unwrap();
    /// assert_eq!(list.element(second), Some(&2));
    /// assert_eq!(list.next(second), None);
    /// ```
    pub fn next(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        if !self.contains_node(node) {
            return None;
        }
        // SAFETY: membership was just verified.
        let next = unsafe { node.node.as_ref().next };
        if next == self.ghost_node() {
            return None;
        }
        Some(NodeRef::new(next))
    }

    /// Returns a handle to the node before `node`, or `None` at the head or
    /// for a handle that does not belong to this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let tail = list.tail().unwrap();
    ///
    /// let first = list.previous(tail).unwrap();
    /// assert_eq!(list.element(first), Some(&1));
    /// assert_eq!(list.previous(first), None);
    /// ```
    pub fn previous(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        if !self.contains_node(node) {
            return None;
        }
        // SAFETY: membership was just verified.
        let prev = unsafe { node.node.as_ref().prev };
        if prev == self.ghost_node() {
            return None;
        }
        Some(NodeRef::new(prev))
    }

    /// Whether `node` is the head of this list.
    ///
    /// Unlike [`List::next`] and friends, the failure cases are reported
    /// explicitly so that "not the head" can never be conflated with "bad
    /// input": an empty list yields [`Error::Empty`] and a foreign or stale
    /// handle yields [`Error::InvalidNode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let head = list.head().unwrap();
    /// assert_eq!(list.is_head(head), Ok(true));
    /// assert_eq!(list.is_tail(head), Ok(false));
    ///
    /// let other = List::from_iter([9]);
    /// assert_eq!(list.is_head(other.head().unwrap()), Err(Error::InvalidNode));
    /// ```
    pub fn is_head(&self, node: NodeRef<T>) -> Result<bool, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if !self.contains_node(node) {
            return Err(Error::InvalidNode);
        }
        Ok(node.node == self.front_node())
    }

    /// Whether `node` is the tail of this list.
    ///
    /// Fails with [`Error::Empty`] on an empty list and [`Error::InvalidNode`]
    /// for a foreign or stale handle; see [`List::is_head`].
    pub fn is_tail(&self, node: NodeRef<T>) -> Result<bool, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if !self.contains_node(node) {
            return Err(Error::InvalidNode);
        }
        Ok(node.node == self.back_node())
    }

    /// Insert an element immediately after `anchor` and return a handle to
    /// the new node.
    ///
    /// This is the funnel all other insertions go through. The anchor rules:
    ///
    /// - `None` — or a handle that does not belong to this list — inserts at
    ///   the head;
    /// - on an empty list the element becomes the sole element regardless of
    ///   the anchor;
    /// - the tail as anchor appends, making the new node the tail;
    /// - otherwise the new node is spliced between the anchor and its
    ///   successor.
    ///
    /// # Complexity
    ///
    /// Validating the anchor is *O*(*n*); the splice itself is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    ///
    /// let one = list.head().unwrap();
    /// list.insert_after(Some(one), 2);
    /// list.insert_after(None, 0);
    /// list.insert_after(list.tail(), 4);
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn insert_after(&mut self, anchor: Option<NodeRef<T>>, element: T) -> NodeRef<T> {
        let anchor = anchor.filter(|node| self.contains_node(*node));
        let node = Node::new_detached(element);
        match anchor {
            // Head insert; on an empty list both neighbors are the ghost node
            // and the element becomes the sole element.
            None => unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) },
            // A tail anchor has the ghost node as its successor, so the same
            // splice covers appending and the interior case.
            Some(anchor) => {
                // SAFETY: membership of `anchor` was just verified.
                let next = unsafe { anchor.node.as_ref().next };
                unsafe { self.attach_node(anchor.node, next, node) }
            }
        }
        NodeRef::new(node)
    }

    /// Insert an element immediately before `anchor` and return a handle to
    /// the new node.
    ///
    /// A `None` anchor, a foreign or stale handle, an empty list, or the head
    /// as anchor all insert at the head; otherwise this delegates to
    /// [`List::insert_after`] on the anchor's predecessor, so "insert before
    /// X" and "insert after X's predecessor" agree even at the boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    ///
    /// let three = list.tail().unwrap();
    /// list.insert_before(Some(three), 2);
    /// list.insert_before(list.head(), 0);
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    pub fn insert_before(&mut self, anchor: Option<NodeRef<T>>, element: T) -> NodeRef<T> {
        match anchor.filter(|node| self.contains_node(*node)) {
            None => self.insert_after(None, element),
            Some(anchor) if anchor.node == self.front_node() => self.insert_after(None, element),
            Some(anchor) => {
                // SAFETY: membership of `anchor` was just verified, and it is
                // not the head, so its predecessor is a real node.
                let prev = unsafe { anchor.node.as_ref().prev };
                self.insert_after(Some(NodeRef::new(prev)), element)
            }
        }
    }

    /// Insert an element by position and return a handle to the new node.
    ///
    /// The index is clamped: `0` inserts at the head, and any index at or
    /// beyond the current length appends at the tail (on an empty list every
    /// index inserts the sole element). Otherwise the anchor is found by
    /// walking `index` steps forward from the head and the element is
    /// inserted after it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; positional access in a
    /// linked structure is a walk by design.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert_at(0, 0); // [0, 1, 2, 3]
    /// list.insert_at(9, 4); // [0, 1, 2, 3, 4], clamped to the tail
    /// list.insert_at(1, 5); // [0, 1, 5, 2, 3, 4], after the anchor at index 1
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 5, 2, 3, 4]);
    /// ```
    pub fn insert_at(&mut self, index: usize, element: T) -> NodeRef<T> {
        if index >= self.len {
            return self.insert_after(self.tail(), element);
        }
        if index == 0 {
            return self.insert_after(None, element);
        }
        let mut anchor = self.front_node();
        for _ in 0..index {
            // SAFETY: `index < len`, so the walk stays on real nodes.
            anchor = unsafe { anchor.as_ref().next };
        }
        self.insert_after(Some(NodeRef::new(anchor)), element)
    }

    /// Adds an element first in the list and return a handle to its node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn push_front(&mut self, element: T) -> NodeRef<T> {
        self.insert_after(None, element)
    }

    /// Appends an element to the back of the list and return a handle to its
    /// node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn push_back(&mut self, element: T) -> NodeRef<T> {
        let node = Node::new_detached(element);
        // SAFETY: the back node and the ghost node are adjacent by the cyclic
        // invariant (they coincide on an empty list).
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
        NodeRef::new(node)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// The destroy hook is *not* involved; the element is handed back to the
    /// caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is a real node.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(node.element)
    }

    /// Removes the last element from the list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is a real node.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(node.element)
    }

    /// Removes `node` from the list and returns its element.
    ///
    /// Relinking covers every topology: removing the sole element empties the
    /// list, removing the head promotes its successor, removing the tail
    /// promotes its predecessor, and an interior node's neighbors are linked
    /// directly to each other.
    ///
    /// Fails with [`Error::Empty`] on an empty list and [`Error::InvalidNode`]
    /// for a foreign or stale handle; on failure the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let node = list.find(&2).unwrap();
    /// assert_eq!(list.remove(node), Ok(2));
    /// assert_eq!(list.len(), 2);
    ///
    /// // The handle went stale with the removal.
    /// assert_eq!(list.remove(node), Err(Error::InvalidNode));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, node: NodeRef<T>) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if !self.contains_node(node) {
            return Err(Error::InvalidNode);
        }
        // SAFETY: membership was just verified.
        let node = unsafe { self.detach_node(node.node) };
        Ok(node.element)
    }

    /// Removes all elements from the `List`, passing each one through the
    /// destroy hook when one is set.
    ///
    /// Elements are torn down in head-to-tail order. Without a destroy hook
    /// they are simply dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Hooks, List};
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let destroyed = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&destroyed);
    /// let mut list =
    ///     List::with_hooks(Hooks::new().with_destroy(move |e: i32| sink.borrow_mut().push(e)));
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(*destroyed.borrow(), vec![1, 2]);
    /// ```
    pub fn clear(&mut self) {
        while let Some(element) = self.pop_front() {
            if let Some(destroy) = &self.hooks.destroy {
                destroy(element);
            }
        }
    }

    /// Tears the list down, consuming it.
    ///
    /// Every remaining element goes through the destroy hook (when set) in
    /// head-to-tail order, exactly as in [`List::clear`]. Because `destroy`
    /// takes the list by value, any later use of the handle is a compile
    /// error; there is no way to double-destroy.
    ///
    /// Dropping a list runs the same teardown, so calling `destroy` is only
    /// needed to make the point of teardown explicit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// list.destroy();
    /// ```
    pub fn destroy(mut self) {
        self.clear();
    }

    /// Invokes the print hook on every element, head to tail.
    ///
    /// Does nothing if no print hook was recorded at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Hooks, List};
    ///
    /// let mut list = List::with_hooks(Hooks::new().with_print(|e: &i32| println!("{}", e)));
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.print();
    /// ```
    pub fn print(&self) {
        if let Some(print) = &self.hooks.print {
            self.iter().for_each(|element| print(element));
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are dangling
    /// until it is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        let _marker = PhantomData;
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker,
        }
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY: the ghost node is freshly allocated; its links are initialized
    // to itself immediately, and its element is never read.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the chain in both directions and assert every structural
    /// invariant: the walks take exactly `len` steps, and `next`/`prev` are
    /// mutual inverses everywhere, ghost node included.
    pub(crate) fn check_invariants(&self) {
        let ghost = self.ghost_node();
        let mut steps = 0;
        let mut node = ghost;
        loop {
            let next = unsafe { node.as_ref().next };
            assert_eq!(unsafe { next.as_ref().prev }, node, "next/prev mismatch");
            node = next;
            if node == ghost {
                break;
            }
            steps += 1;
            assert!(steps <= self.len, "forward walk exceeds len");
        }
        assert_eq!(steps, self.len, "forward walk length");

        let mut steps = 0;
        let mut node = ghost;
        loop {
            let prev = unsafe { node.as_ref().prev };
            assert_eq!(unsafe { prev.as_ref().next }, node, "prev/next mismatch");
            node = prev;
            if node == ghost {
                break;
            }
            steps += 1;
            assert!(steps <= self.len, "backward walk exceeds len");
        }
        assert_eq!(steps, self.len, "backward walk length");
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::{Error, Hooks};
    use std::cell::RefCell;
    use std::iter::FromIterator;
    use std::rc::Rc;

    fn to_vec<T: Copy>(list: &List<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        list.check_invariants();

        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.head(), list.tail());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.check_invariants();
        assert_eq!(to_vec(&list), vec![2, 1, 3]);

        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn insert_after_all_anchor_cases() {
        // Empty list: anchor is ignored, the element becomes the sole one.
        let mut list = List::new();
        let sole = list.insert_after(None, 1);
        assert_eq!(list.head(), Some(sole));
        assert_eq!(list.tail(), Some(sole));
        assert_eq!(list.len(), 1);
        list.check_invariants();

        // Tail anchor appends.
        let two = list.insert_after(Some(sole), 2);
        assert_eq!(list.tail(), Some(two));
        assert_eq!(to_vec(&list), vec![1, 2]);

        // Interior anchor splices between the anchor and its successor.
        let mid = list.insert_after(Some(sole), 9);
        assert_eq!(to_vec(&list), vec![1, 9, 2]);
        assert_eq!(list.next(sole), Some(mid));
        assert_eq!(list.next(mid), Some(two));

        // No anchor inserts at the head.
        let zero = list.insert_after(None, 0);
        assert_eq!(list.head(), Some(zero));
        assert_eq!(to_vec(&list), vec![0, 1, 9, 2]);
        assert_eq!(list.len(), 4);
        list.check_invariants();
    }

    #[test]
    fn insert_after_foreign_anchor_falls_back_to_head() {
        let mut other = List::new();
        let foreign = other.push_back(9);

        let mut list = List::from_iter([1, 2]);
        list.insert_after(Some(foreign), 0);
        assert_eq!(to_vec(&list), vec![0, 1, 2]);
        list.check_invariants();
        assert_eq!(to_vec(&other), vec![9]);
    }

    #[test]
    fn insert_before_matches_insert_after_predecessor() {
        let mut list = List::from_iter([1, 2, 3]);
        let three = list.tail().unwrap();

        // Before an interior/tail node == after its predecessor.
        let node = list.insert_before(Some(three), 9);
        assert_eq!(to_vec(&list), vec![1, 2, 9, 3]);
        assert_eq!(list.next(node), Some(three));

        // Before the head == head insert.
        list.insert_before(list.head(), 0);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 9, 3]);

        // No anchor == head insert.
        list.insert_before(None, -1);
        assert_eq!(to_vec(&list), vec![-1, 0, 1, 2, 9, 3]);
        list.check_invariants();

        // Empty list: delegate to the sole-element case.
        let mut empty = List::new();
        empty.insert_before(None, 5);
        assert_eq!(to_vec(&empty), vec![5]);
    }

    #[test]
    fn insert_at_clamps_and_walks() {
        // Any index on an empty list inserts the sole element.
        let mut list = List::new();
        list.insert_at(7, 1);
        assert_eq!(to_vec(&list), vec![1]);

        // Index 0 is a head insert, equivalent to insert_after(None).
        list.insert_at(0, 0);
        assert_eq!(list.head(), list.find(&0));
        assert_eq!(to_vec(&list), vec![0, 1]);

        // Index >= len appends at the tail.
        list.insert_at(list.len(), 2);
        list.insert_at(99, 3);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3]);

        // An interior index anchors at that position and inserts after it.
        list.insert_at(1, 9);
        assert_eq!(to_vec(&list), vec![0, 1, 9, 2, 3]);
        list.check_invariants();
    }

    #[test]
    fn remove_sole_head_tail_interior() {
        // Sole element: the list becomes empty.
        let mut list = List::new();
        let sole = list.push_back(1);
        assert_eq!(list.remove(sole), Ok(1));
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        list.check_invariants();

        // Head: the successor is promoted.
        let mut list = List::from_iter([1, 2, 3, 4]);
        let head = list.head().unwrap();
        assert_eq!(list.remove(head), Ok(1));
        assert_eq!(to_vec(&list), vec![2, 3, 4]);
        assert_eq!(list.previous(list.head().unwrap()), None);
        list.check_invariants();

        // Tail: the predecessor is promoted.
        let tail = list.tail().unwrap();
        assert_eq!(list.remove(tail), Ok(4));
        assert_eq!(to_vec(&list), vec![2, 3]);
        assert_eq!(list.next(list.tail().unwrap()), None);
        list.check_invariants();

        // Interior: neighbors are linked to each other.
        let mut list = List::from_iter([1, 2, 3]);
        let mid = list.find(&2).unwrap();
        assert_eq!(list.remove(mid), Ok(2));
        assert_eq!(to_vec(&list), vec![1, 3]);
        assert_eq!(list.next(list.head().unwrap()), list.tail());
        list.check_invariants();
    }

    #[test]
    fn remove_rejects_bad_input_without_mutation() {
        let mut list = List::from_iter([1, 2]);
        let head = list.head().unwrap();

        let mut other = List::new();
        let foreign = other.push_back(9);
        assert_eq!(list.remove(foreign), Err(Error::InvalidNode));
        assert_eq!(to_vec(&list), vec![1, 2]);

        // A handle goes stale with its removal.
        assert_eq!(list.remove(head), Ok(1));
        assert_eq!(list.remove(head), Err(Error::InvalidNode));
        assert_eq!(to_vec(&list), vec![2]);

        // An empty list reports emptiness, not a bad handle.
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.remove(head), Err(Error::Empty));
        list.check_invariants();
    }

    #[test]
    fn is_head_is_tail_never_conflate_false_with_error() {
        let mut list = List::from_iter([1, 2]);
        let head = list.head().unwrap();
        let tail = list.tail().unwrap();

        assert_eq!(list.is_head(head), Ok(true));
        assert_eq!(list.is_head(tail), Ok(false));
        assert_eq!(list.is_tail(tail), Ok(true));
        assert_eq!(list.is_tail(head), Ok(false));

        let other = List::from_iter([9]);
        let foreign = other.head().unwrap();
        assert_eq!(list.is_head(foreign), Err(Error::InvalidNode));
        assert_eq!(list.is_tail(foreign), Err(Error::InvalidNode));

        list.clear();
        assert_eq!(list.is_head(head), Err(Error::Empty));
        assert_eq!(list.is_tail(head), Err(Error::Empty));
    }

    #[test]
    fn accessors_walk_the_chain() {
        let list = List::from_iter([1, 2, 3]);
        let mut node = list.head();
        let mut seen = Vec::new();
        while let Some(current) = node {
            seen.push(*list.element(current).unwrap());
            node = list.next(current);
        }
        assert_eq!(seen, vec![1, 2, 3]);

        let mut node = list.tail();
        let mut seen = Vec::new();
        while let Some(current) = node {
            seen.push(*list.element(current).unwrap());
            node = list.previous(current);
        }
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn element_mut_updates_in_place() {
        let mut list = List::from_iter([1, 2]);
        let head = list.head().unwrap();
        *list.element_mut(head).unwrap() = 10;
        assert_eq!(to_vec(&list), vec![10, 2]);

        let mut other: List<i32> = List::new();
        assert!(other.element_mut(head).is_none());
    }

    #[test]
    fn destroy_hook_runs_once_per_element_in_order() {
        let destroyed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&destroyed);
        let mut list =
            List::with_hooks(Hooks::new().with_destroy(move |e: i32| sink.borrow_mut().push(e)));
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        // Removal hands the element back instead of destroying it.
        let head = list.head().unwrap();
        assert_eq!(list.remove(head), Ok(1));
        assert!(destroyed.borrow().is_empty());

        list.destroy();
        assert_eq!(*destroyed.borrow(), vec![2, 3]);
    }

    #[test]
    fn drop_runs_teardown() {
        let destroyed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&destroyed);
        let mut list =
            List::with_hooks(Hooks::new().with_destroy(move |e: i32| sink.borrow_mut().push(e)));
        list.push_back(1);
        list.push_back(2);
        drop(list);
        assert_eq!(*destroyed.borrow(), vec![1, 2]);
    }

    #[test]
    fn elements_drop_without_destroy_hook() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }

        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(*dropped.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn clear_on_empty_list_is_a_no_op() {
        let mut list: List<i32> = List::new();
        list.clear();
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn print_without_hook_is_a_no_op() {
        let list = List::from_iter([1, 2, 3]);
        list.print();

        let printed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&printed);
        let mut list =
            List::with_hooks(Hooks::new().with_print(move |e: &i32| sink.borrow_mut().push(*e)));
        list.push_back(1);
        list.push_back(2);
        list.print();
        assert_eq!(*printed.borrow(), vec![1, 2]);
    }
}
