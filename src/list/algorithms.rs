use crate::list::error::Error;
use crate::list::{List, NodeRef};
use std::cmp::Ordering;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a handle to the first node whose element equals the given
    /// value, scanning from the head, or `None` if nothing matches.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 2, 3]);
    ///
    /// let node = list.find(&2).unwrap();
    /// assert_eq!(list.is_head(node), Ok(false));
    /// assert_eq!(list.element(node), Some(&2));
    /// assert_eq!(list.find(&9), None);
    /// ```
    pub fn find(&self, x: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq<T>,
    {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost {
            // SAFETY: `current` is a real node of this list.
            if unsafe { &current.as_ref().element } == x {
                return Some(NodeRef::new(current));
            }
            current = unsafe { current.as_ref().next };
        }
        None
    }

    /// Insert an element at its position under the comparator hook and
    /// return a handle to the new node.
    ///
    /// Scans from the head: at the first element comparing `Equal` the new
    /// element goes immediately after it (so new duplicates land after
    /// existing equals), at the first comparing `Greater` it goes before it,
    /// and otherwise it is appended at the tail. On an empty list the element
    /// becomes the sole element. Without a comparator hook ordered insertion
    /// degenerates to a stable append.
    ///
    /// Inserting into a list the comparator considers sorted keeps it sorted;
    /// on an unsorted list the element lands at the first admissible
    /// position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::{Hooks, List};
    ///
    /// let mut list = List::with_hooks(Hooks::new().with_compare(|a: &i32, b: &i32| a.cmp(b)));
    /// for element in [3, 1, 2] {
    ///     list.insert_ordered(element);
    /// }
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    ///
    /// list.insert_ordered(2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 2, 3]);
    /// ```
    pub fn insert_ordered(&mut self, element: T) -> NodeRef<T> {
        let compare = match self.hooks.compare.clone() {
            Some(compare) if !self.is_empty() => compare,
            // Empty list or no comparator: a plain (stable) append.
            _ => return self.push_back(element),
        };
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost {
            // SAFETY: `current` is a real node of this list.
            match compare(unsafe { &current.as_ref().element }, &element) {
                Ordering::Equal => return self.insert_after(Some(NodeRef::new(current)), element),
                Ordering::Greater => {
                    return self.insert_before(Some(NodeRef::new(current)), element)
                }
                Ordering::Less => current = unsafe { current.as_ref().next },
            }
        }
        self.push_back(element)
    }

    /// Splits the list after the first element equal to the given value.
    ///
    /// The matching node becomes this list's tail; everything strictly after
    /// it moves into the returned list, which shares this list's hooks. No
    /// node is reallocated or copied, and the two lengths sum to the
    /// original.
    ///
    /// When the match is already the tail there is nothing to move: the
    /// original is left untouched and the returned list is empty (still
    /// carrying the shared hooks).
    ///
    /// Fails with [`Error::Empty`] on an empty list and [`Error::NotFound`]
    /// when nothing matches; on failure the list is left unmodified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 8, 9, 10]);
    ///
    /// let rest = list.split(&8).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 8]);
    /// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), vec![9, 10]);
    /// ```
    pub fn split(&mut self, element: &T) -> Result<List<T>, Error>
    where
        T: PartialEq<T>,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let found = self.find(element).ok_or(Error::NotFound)?;
        if found.node == self.back_node() {
            return Ok(List::with_hooks(self.hooks.clone()));
        }
        // SAFETY: the match is not the tail, so its successor is a real node
        // and `front..=back` is a non-empty range of this list.
        let front = unsafe { found.node.as_ref().next };
        let back = self.back_node();
        let mut len = 1;
        let mut current = front;
        while current != back {
            current = unsafe { current.as_ref().next };
            len += 1;
        }
        let detached = unsafe { self.detach_nodes(front, back, len) };
        Ok(List::from_detached(detached, self.hooks.clone()))
    }

    /// Concatenates two lists into one, consuming both.
    ///
    /// The result carries `list1`'s elements followed by `list2`'s, re-owning
    /// every node without reallocating or copying; its length is the sum.
    /// Hooks come from `list1` unless it is empty, in which case `list2`'s
    /// are used. The consumed handles cannot be touched afterwards, so a
    /// use-after-merge is a compile error rather than a runtime one.
    ///
    /// Fails with [`Error::Empty`] when both inputs are empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let front = List::from_iter([1, 2]);
    /// let back = List::from_iter([3, 4]);
    ///
    /// let merged = List::concatenate(front, back).unwrap();
    /// assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// assert_eq!(merged.len(), 4);
    /// ```
    pub fn concatenate(mut list1: List<T>, mut list2: List<T>) -> Result<List<T>, Error> {
        if list1.is_empty() && list2.is_empty() {
            return Err(Error::Empty);
        }
        let hooks = if list1.is_empty() {
            list2.hooks.clone()
        } else {
            list1.hooks.clone()
        };
        let mut merged = List::with_hooks(hooks);
        if let Some(detached) = list1.detach_all_nodes() {
            unsafe { merged.attach_nodes(merged.back_node(), merged.ghost_node(), detached) };
        }
        if let Some(detached) = list2.detach_all_nodes() {
            unsafe { merged.attach_nodes(merged.back_node(), merged.ghost_node(), detached) };
        }
        // The inputs drop here already emptied, so no destroy hook fires.
        Ok(merged)
    }
}
