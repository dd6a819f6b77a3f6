//! This crate provides a doubly-linked list with owned nodes, stable node
//! handles, and caller-supplied per-element behavior hooks.
//!
//! The [`List`] supports insertion at arbitrary positions (after or before a
//! neighbor node, at an index, or in sort order), removal with correct
//! relinking in every topology case, and structural splitting and
//! concatenation that move whole chains between lists without reallocating a
//! single node.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cell_list::{Hooks, List};
//!
//! // A list ordered by an ascending comparator.
//! let mut list = List::with_hooks(Hooks::new().with_compare(|a: &i32, b: &i32| a.cmp(b)));
//!
//! list.insert_ordered(5);
//! list.insert_ordered(3);
//! list.insert_ordered(8);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
//!
//! // Node handles allow removal at any position; handle validation is O(n).
//! let node = list.find(&5).unwrap();
//! assert_eq!(list.remove(node), Ok(5));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║ len,hooks ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains a pointer to a payload-less ghost node, the element
//! count, and the three optional behavior hooks recorded at construction. In
//! an empty list the ghost node links to itself; otherwise `ghost.next` is the
//! head and `ghost.prev` is the tail. The cyclic shape means head, tail,
//! interior and sole-element surgery all go through the same relinking code.
//!
//! # Hooks
//!
//! A list carries up to three hooks, recorded once at construction via
//! [`Hooks`]:
//!
//! - `print(&T)` — used by [`List::print`] to render each element;
//! - `destroy(T)` — invoked on every remaining element during teardown
//!   ([`List::clear`], [`List::destroy`], or dropping the list). Removal via
//!   [`List::remove`] hands the element back to the caller instead;
//! - `compare(&T, &T) -> Ordering` — a total order used only by
//!   [`List::insert_ordered`]. Without it, ordered insertion degenerates to a
//!   stable append at the tail.
//!
//! Hooks are reference-counted so that lists derived by [`List::split`] and
//! [`List::concatenate`] share the originals' hooks.
//!
//! # Node Handles
//!
//! Positional access goes through [`NodeRef`], a copyable opaque handle.
//! Every handle-taking operation first verifies that the handle still names a
//! node of *this* list (an O(n) identity scan that never dereferences the
//! candidate), so a stale handle or one from another list is reported as
//! [`Error::InvalidNode`] — or treated as "no anchor" where the operation
//! documents a head-insert fallback — rather than touched.
//!
//! ```
//! use cell_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let node = list.find(&2).unwrap();
//! assert_eq!(list.remove(node), Ok(2));
//!
//! // The handle is now stale; the list refuses it instead of crashing.
//! assert_eq!(list.remove(node), Err(Error::InvalidNode));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Error`] instead of sentinel values, and a
//! failed operation leaves the list unmodified. Splitting and concatenation
//! reassign node ownership across list handles by design; concatenation
//! consumes both inputs, so using a merged-away list is a compile error rather
//! than a runtime one.
//!
//! This list is a single-threaded building block: it is neither `Send` nor
//! `Sync`, and callers sharing one across threads must impose external mutual
//! exclusion.

#[doc(inline)]
pub use list::error::Error;
#[doc(inline)]
pub use list::hooks::Hooks;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, NodeRef};

pub mod list;
