use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Caller-supplied per-element behavior, recorded once at list construction.
///
/// A list carries up to three hooks:
///
/// - `print`, used by [`List::print`] to render an element;
/// - `destroy`, invoked on every remaining element during teardown
///   ([`List::clear`], [`List::destroy`], or dropping the list);
/// - `compare`, a total order driving [`List::insert_ordered`].
///
/// All three are optional and independent. Hooks are reference-counted, so
/// lists derived by [`List::split`] and [`List::concatenate`] share the
/// originals' hooks instead of requiring the closures to be cloneable.
///
/// # Examples
///
/// ```
/// use cell_list::{Hooks, List};
///
/// let hooks = Hooks::new()
///     .with_print(|e: &u32| println!("{}", e))
///     .with_compare(|a: &u32, b: &u32| a.cmp(b));
///
/// let mut list = List::with_hooks(hooks);
/// list.insert_ordered(2);
/// list.insert_ordered(1);
/// list.print();
/// ```
///
/// [`List::print`]: crate::List::print
/// [`List::clear`]: crate::List::clear
/// [`List::destroy`]: crate::List::destroy
/// [`List::insert_ordered`]: crate::List::insert_ordered
/// [`List::split`]: crate::List::split
/// [`List::concatenate`]: crate::List::concatenate
pub struct Hooks<T> {
    pub(crate) print: Option<Rc<dyn Fn(&T)>>,
    pub(crate) destroy: Option<Rc<dyn Fn(T)>>,
    pub(crate) compare: Option<Rc<dyn Fn(&T, &T) -> Ordering>>,
}

impl<T> Hooks<T> {
    /// Create an empty hook record with all three hooks absent.
    pub fn new() -> Self {
        Self {
            print: None,
            destroy: None,
            compare: None,
        }
    }

    /// Record a print hook. It receives a shared reference, so it can render
    /// the element but never mutate it.
    pub fn with_print(mut self, print: impl Fn(&T) + 'static) -> Self {
        self.print = Some(Rc::new(print));
        self
    }

    /// Record a destroy hook. It consumes the element and runs once per
    /// element during list teardown.
    pub fn with_destroy(mut self, destroy: impl Fn(T) + 'static) -> Self {
        self.destroy = Some(Rc::new(destroy));
        self
    }

    /// Record a comparator defining a total order over elements.
    pub fn with_compare(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Rc::new(compare));
        self
    }

    /// Whether a print hook is recorded.
    pub fn has_print(&self) -> bool {
        self.print.is_some()
    }

    /// Whether a destroy hook is recorded.
    pub fn has_destroy(&self) -> bool {
        self.destroy.is_some()
    }

    /// Whether a comparator is recorded.
    pub fn has_compare(&self) -> bool {
        self.compare.is_some()
    }
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A derived Clone would demand `T: Clone`; only the Rc pointers are cloned.
impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            print: self.print.clone(),
            destroy: self.destroy.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T> Debug for Hooks<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("print", &self.has_print())
            .field("destroy", &self.has_destroy())
            .field("compare", &self.has_compare())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Hooks;
    use std::cmp::Ordering;

    #[test]
    fn builder_records_each_hook_independently() {
        let hooks: Hooks<i32> = Hooks::new();
        assert!(!hooks.has_print());
        assert!(!hooks.has_destroy());
        assert!(!hooks.has_compare());

        let hooks = hooks.with_print(|_: &i32| {});
        assert!(hooks.has_print());
        assert!(!hooks.has_destroy());

        let hooks = hooks
            .with_destroy(|_: i32| {})
            .with_compare(|a: &i32, b: &i32| a.cmp(b));
        assert!(hooks.has_print());
        assert!(hooks.has_destroy());
        assert!(hooks.has_compare());
    }

    #[test]
    fn clone_shares_the_same_closures() {
        let hooks = Hooks::new().with_compare(|a: &i32, b: &i32| b.cmp(a));
        let cloned = hooks.clone();

        let compare = hooks.compare.as_ref().unwrap();
        let cloned_compare = cloned.compare.as_ref().unwrap();
        assert_eq!(compare(&1, &2), Ordering::Greater);
        assert_eq!(cloned_compare(&1, &2), Ordering::Greater);
        assert_eq!(
            std::rc::Rc::as_ptr(compare) as *const (),
            std::rc::Rc::as_ptr(cloned_compare) as *const (),
        );
    }

    #[test]
    fn debug_shows_presence_flags() {
        let hooks: Hooks<i32> = Hooks::new().with_destroy(|_| {});
        let rendered = format!("{:?}", hooks);
        assert!(rendered.contains("print: false"));
        assert!(rendered.contains("destroy: true"));
        assert!(rendered.contains("compare: false"));
    }
}
