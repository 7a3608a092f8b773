//! Retention set for strings referenced by one compilation unit.
//!
//! Every name and string literal the lexer produces is pinned here for the
//! lifetime of the unit. The set is released in bulk when the unit
//! completes; individual names are never unpinned.

use rustc_hash::FxHashSet;

use super::Name;

/// Names pinned by a compilation unit, in first-pin order.
#[derive(Clone, Debug, Default)]
pub struct PinSet {
    seen: FxHashSet<Name>,
    order: Vec<Name>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a name. Returns `true` if it was not pinned before.
    pub fn pin(&mut self, name: Name) -> bool {
        if self.seen.insert(name) {
            self.order.push(name);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.seen.contains(&name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pinned names in the order they were first pinned.
    pub fn iter(&self) -> impl Iterator<Item = Name> + '_ {
        self.order.iter().copied()
    }

    /// Release every pin at once, returning how many were held.
    pub fn release(&mut self) -> usize {
        let count = self.order.len();
        self.seen.clear();
        self.order.clear();
        count
    }
}
