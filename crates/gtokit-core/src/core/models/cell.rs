/// Storage for a single value that is either owned by the holder or borrowed
/// from a slot inside some larger allocation.
///
/// This is the leaf of the owning/aliasing split: a `Primitive` holds
/// `Owned` cells, while a `PrimitiveViewMut` produced by a contraction or by
/// the flattening store holds `Borrowed` cells pointing into the parent's
/// arrays. Access is identical in both cases, so code above this level never
/// branches on ownership.
///
/// Duplication is deliberately per-case rather than per-type: [`detach`]
/// always produces a fresh `Owned` deep copy, while [`reborrow`] re-aliases
/// the same slot for a shorter lifetime. Collapsing these into a single copy
/// rule would break either value semantics or aliasing semantics.
///
/// [`detach`]: OwnOrBorrow::detach
/// [`reborrow`]: OwnOrBorrow::reborrow
#[derive(Debug)]
pub enum OwnOrBorrow<'a, T> {
    /// The cell owns its value.
    Owned(T),
    /// The cell aliases a value owned elsewhere; writes land in that slot.
    Borrowed(&'a mut T),
}

impl<T> OwnOrBorrow<'_, T> {
    /// Returns a shared reference to the value, wherever it lives.
    pub fn value(&self) -> &T {
        match self {
            OwnOrBorrow::Owned(v) => v,
            OwnOrBorrow::Borrowed(r) => r,
        }
    }

    /// Returns a mutable reference to the value, wherever it lives.
    ///
    /// Borrowing implies write access to the aliased slot; read-only
    /// aliasing is modeled by the shared view types, not by this cell.
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            OwnOrBorrow::Owned(v) => v,
            OwnOrBorrow::Borrowed(r) => r,
        }
    }

    /// Whether this cell aliases externally-owned storage.
    pub fn is_borrowed(&self) -> bool {
        matches!(self, OwnOrBorrow::Borrowed(_))
    }

    /// Re-aliases the same slot for a shorter lifetime.
    ///
    /// The result is always `Borrowed` and writes through it are observable
    /// through `self` afterwards.
    pub fn reborrow(&mut self) -> OwnOrBorrow<'_, T> {
        OwnOrBorrow::Borrowed(self.value_mut())
    }
}

impl<T: Clone> OwnOrBorrow<'_, T> {
    /// Deep-copies the value into a fresh `Owned` cell, severing any alias.
    pub fn detach(&self) -> OwnOrBorrow<'static, T> {
        OwnOrBorrow::Owned(self.value().clone())
    }
}

impl<T: Default> Default for OwnOrBorrow<'static, T> {
    fn default() -> Self {
        OwnOrBorrow::Owned(T::default())
    }
}

impl<T: PartialEq> PartialEq<OwnOrBorrow<'_, T>> for OwnOrBorrow<'_, T> {
    fn eq(&self, other: &OwnOrBorrow<'_, T>) -> bool {
        self.value() == other.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_cell_reads_and_writes_its_own_value() {
        let mut cell = OwnOrBorrow::Owned(1.5);
        assert!(!cell.is_borrowed());
        assert_eq!(*cell.value(), 1.5);
        *cell.value_mut() = 2.5;
        assert_eq!(*cell.value(), 2.5);
    }

    #[test]
    fn borrowed_cell_writes_land_in_the_aliased_slot() {
        let mut slot = 4.0;
        {
            let mut cell = OwnOrBorrow::Borrowed(&mut slot);
            assert!(cell.is_borrowed());
            *cell.value_mut() = 8.0;
        }
        assert_eq!(slot, 8.0);
    }

    #[test]
    fn reborrow_aliases_the_same_slot() {
        let mut cell = OwnOrBorrow::Owned(3.0);
        {
            let mut alias = cell.reborrow();
            assert!(alias.is_borrowed());
            *alias.value_mut() = 9.0;
        }
        assert_eq!(*cell.value(), 9.0);
    }

    #[test]
    fn detach_produces_an_independent_owned_copy() {
        let mut slot = 1.0;
        let cell = OwnOrBorrow::Borrowed(&mut slot);
        let mut copy = cell.detach();
        assert!(!copy.is_borrowed());
        *copy.value_mut() = 7.0;
        drop(cell);
        assert_eq!(slot, 1.0);
    }

    #[test]
    fn equality_ignores_ownership() {
        let mut slot = 2.0;
        let borrowed = OwnOrBorrow::Borrowed(&mut slot);
        let owned = OwnOrBorrow::Owned(2.0);
        assert_eq!(owned, borrowed);
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn default_cell_owns_the_default_value() {
        let cell: OwnOrBorrow<'static, f64> = OwnOrBorrow::default();
        assert!(!cell.is_borrowed());
        assert_eq!(*cell.value(), 0.0);
    }
}
