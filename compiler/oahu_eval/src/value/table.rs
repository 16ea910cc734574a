//! The list value: a shared table with a list part and a keyed part.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::thread::LocalKey;

use rustc_hash::FxHashMap;

use super::Value;

#[derive(Default)]
struct TableData {
    list: Vec<Value>,
    map: FxHashMap<String, Value>,
}

/// A list value.
///
/// Clones share the same storage, so `push` through one handle is visible
/// through every other. Equality is structural; the primitive cache keys
/// tables by identity through [`Table::id`].
#[derive(Clone, Default)]
pub struct Table(Rc<RefCell<TableData>>);

impl Table {
    pub fn from_list(list: Vec<Value>) -> Self {
        Table(Rc::new(RefCell::new(TableData {
            list,
            map: FxHashMap::default(),
        })))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().list.get(index).cloned()
    }

    /// Replace the element at `index`, returning `false` if out of range.
    pub fn set(&self, index: usize, value: Value) -> bool {
        match self.0.borrow_mut().list.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Value stored under a string key.
    pub fn key(&self, key: &str) -> Option<Value> {
        self.0.borrow().map.get(key).cloned()
    }

    pub fn set_key(&self, key: impl Into<String>, value: Value) {
        self.0.borrow_mut().map.insert(key.into(), value);
    }

    pub fn push(&self, value: Value) {
        self.0.borrow_mut().list.push(value);
    }

    pub fn pop(&self) -> Option<Value> {
        self.0.borrow_mut().list.pop()
    }

    /// Snapshot of the list part.
    pub fn items(&self) -> Vec<Value> {
        self.0.borrow().list.clone()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.borrow().list.iter().any(|item| item == value)
    }

    /// Identity of the shared storage.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn ptr_eq(&self, other: &Table) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Placeholder shown for a table nested inside itself.
const SELF_REFERENCE: &str = "(this Collection)";

thread_local! {
    /// Tables currently being displayed, outermost first.
    static DISPLAYING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };

    /// Pairs of tables currently being compared.
    static COMPARING: RefCell<Vec<(usize, usize)>> = const { RefCell::new(Vec::new()) };
}

/// Marks `entry` as in progress on `stack` until dropped.
///
/// Returns `None` if `entry` is already in progress, which means the walk
/// has come back around a cycle.
struct CycleGuard<T: Copy + PartialEq + 'static> {
    stack: &'static LocalKey<RefCell<Vec<T>>>,
}

impl<T: Copy + PartialEq + 'static> CycleGuard<T> {
    fn enter(stack: &'static LocalKey<RefCell<Vec<T>>>, entry: T) -> Option<Self> {
        stack.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&entry) {
                return None;
            }
            active.push(entry);
            Some(CycleGuard { stack })
        })
    }
}

impl<T: Copy + PartialEq + 'static> Drop for CycleGuard<T> {
    fn drop(&mut self) {
        self.stack.with(|active| {
            active.borrow_mut().pop();
        });
    }
}

impl PartialEq for Table {
    /// Structural equality. A pair of tables met again while comparing
    /// them is treated as equal, so cyclic lists compare without looping.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let Some(_guard) = CycleGuard::enter(&COMPARING, (self.id(), other.id())) else {
            return true;
        };
        let (a, b) = (self.0.borrow(), other.0.borrow());
        a.list == b.list && a.map == b.map
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = CycleGuard::enter(&DISPLAYING, self.id()) else {
            return f.write_str(SELF_REFERENCE);
        };
        let data = self.0.borrow();
        write!(f, "[")?;
        for (i, item) in data.list.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table({self})")
    }
}
