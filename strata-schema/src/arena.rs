//! Id-addressed storage for locality groups and column families.
//!
//! Entries live in a slot vector in allocation order, which is id order because ids
//! only grow. Removing an entry tombstones its slot instead of compacting. Two hash
//! indexes map ids and names to slots, so storage follows the number of entries ever
//! placed and never the magnitude of an id read back from persisted state.

use rustc_hash::FxHashMap;
use strata_result::{Error, Result, SchemaObject};

/// Implemented by the descriptor types stored in an [`Arena`].
pub(crate) trait ArenaEntry {
    const KIND: SchemaObject;

    fn entry_id(&self) -> u32;
    fn entry_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    /// Slot ids are strictly increasing.
    slots: Vec<Option<T>>,
    by_id: FxHashMap<u32, usize>,
    by_name: FxHashMap<String, usize>,
    next_id: u32,
}

impl<T: ArenaEntry> Arena<T> {
    pub(crate) fn new(first_id: u32) -> Self {
        Self {
            slots: Vec::new(),
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            next_id: first_id,
        }
    }

    /// Rebuild an arena from persisted entries and the persisted id counter.
    ///
    /// Entries may arrive in any order; they are slotted by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogError`] for an id at or past `next_id`, a repeated id, or a
    /// repeated name.
    pub(crate) fn restore(next_id: u32, mut entries: Vec<T>) -> Result<Self> {
        entries.sort_by_key(|entry| entry.entry_id());
        let mut arena = Self::new(next_id);
        arena.slots.reserve(entries.len());
        for entry in entries {
            let id = entry.entry_id();
            if id >= next_id {
                return Err(Error::CatalogError(format!(
                    "{} '{}' has id {} but the next id to allocate is {}",
                    T::KIND,
                    entry.entry_name(),
                    id,
                    next_id
                )));
            }
            if arena.by_id.contains_key(&id) {
                return Err(Error::CatalogError(format!(
                    "duplicate {} id {} in descriptor state",
                    T::KIND,
                    id
                )));
            }
            if arena.by_name.contains_key(entry.entry_name()) {
                return Err(Error::CatalogError(format!(
                    "duplicate {} name '{}' in descriptor state",
                    T::KIND,
                    entry.entry_name()
                )));
            }
            arena.place(entry);
        }
        Ok(arena)
    }

    /// Id the next [`insert`](Self::insert) must carry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] once the id space is exhausted.
    pub(crate) fn peek_id(&self) -> Result<u32> {
        if self.next_id == u32::MAX {
            return Err(Error::Internal(format!("{} id overflow", T::KIND)));
        }
        Ok(self.next_id)
    }

    #[inline]
    pub(crate) fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Store an entry built with the id returned by [`peek_id`](Self::peek_id) and
    /// advance the counter. Caller has already checked the name is free.
    pub(crate) fn insert(&mut self, entry: T) -> &mut T {
        debug_assert_eq!(entry.entry_id(), self.next_id);
        debug_assert!(!self.by_name.contains_key(entry.entry_name()));
        self.next_id += 1;
        self.place(entry)
    }

    fn place(&mut self, entry: T) -> &mut T {
        let idx = self.slots.len();
        self.by_id.insert(entry.entry_id(), idx);
        self.by_name.insert(entry.entry_name().to_string(), idx);
        self.slots.push(None);
        self.slots[idx].insert(entry)
    }

    /// Remove by name, leaving a tombstone. The id counter is untouched.
    pub(crate) fn remove(&mut self, name: &str) -> Option<T> {
        let idx = self.by_name.remove(name)?;
        let removed = self.slots.get_mut(idx).and_then(Option::take)?;
        self.by_id.remove(&removed.entry_id());
        Some(removed)
    }

    #[inline]
    pub(crate) fn get(&self, id: u32) -> Option<&T> {
        let idx = *self.by_id.get(&id)?;
        self.slots.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        let idx = *self.by_id.get(&id)?;
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    #[inline]
    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub(crate) fn get_by_name(&self, name: &str) -> Option<&T> {
        let idx = *self.by_name.get(name)?;
        self.slots.get(idx).and_then(Option::as_ref)
    }

    pub(crate) fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        let idx = *self.by_name.get(name)?;
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Live entries in id order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}

// Tombstones are local history and not persisted, so compare live entries only.
impl<T: ArenaEntry + PartialEq> PartialEq for Arena<T> {
    fn eq(&self, other: &Self) -> bool {
        self.next_id == other.next_id && self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: ArenaEntry + Eq> Eq for Arena<T> {}
