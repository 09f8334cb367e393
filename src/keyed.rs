use std::collections::HashMap;

/// Something that carries its own string key
pub trait Keyed {
    /// Key the entry is stored under
    fn key(&self) -> &str;
}

/// Insertion-ordered entries with a key index on the side.
///
/// Entries live in a `Vec` so iteration follows insertion order; `index`
/// maps each key to its slot and is rebuilt for the tail on removal.
#[derive(Debug, Clone)]
pub struct KeyedVec<T> {
    /// Entries in insertion order
    entries: Vec<T>,
    /// Key to position in `entries`
    index: HashMap<String, usize>,
}

impl<T> Default for KeyedVec<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }
}

impl<T: Keyed> KeyedVec<T> {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is stored under `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Append `entry` under its own key
    ///
    /// # Errors
    ///
    /// Hands the entry back if the key is taken; the stored entry is left
    /// alone.
    pub fn insert(&mut self, entry: T) -> Result<(), T> {
        if self.index.contains_key(entry.key()) {
            return Err(entry);
        }
        let slot = self.entries.len();
        self.index.insert(entry.key().to_string(), slot);
        self.entries.push(entry);
        self.debug_check_index();
        Ok(())
    }

    /// Entry stored under `entry`'s key, storing `entry` first if the key is
    /// free. The flag is `true` when `entry` was stored; otherwise it is
    /// dropped and the existing entry is returned.
    #[allow(clippy::indexing_slicing)]
    pub fn get_or_insert(&mut self, entry: T) -> (&mut T, bool) {
        let (slot, inserted) = match self.index.get(entry.key()) {
            Some(&slot) => (slot, false),
            None => {
                let slot = self.entries.len();
                self.index.insert(entry.key().to_string(), slot);
                self.entries.push(entry);
                self.debug_check_index();
                (slot, true)
            }
        };
        (&mut self.entries[slot], inserted)
    }

    /// Entry stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).and_then(|&slot| self.entries.get(slot))
    }

    /// Mutable entry stored under `key`.
    ///
    /// Owners only expose this through handles that cannot reach the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let slot = *self.index.get(key)?;
        self.entries.get_mut(slot)
    }

    /// Remove and return the entry stored under `key`, keeping the order of
    /// the rest
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let slot = self.index.remove(key)?;
        if slot >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(slot);
        for (position, entry) in self.entries.iter().enumerate().skip(slot) {
            self.index.insert(entry.key().to_string(), position);
        }
        self.debug_check_index();
        Some(removed)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.key())
    }

    /// Index and entries must describe the same key set and positions
    fn debug_check_index(&self) {
        debug_assert_eq!(self.index.len(), self.entries.len(), "key index out of sync");
        debug_assert!(
            self.entries
                .iter()
                .enumerate()
                .all(|(position, entry)| self.index.get(entry.key()) == Some(&position)),
            "key index points at the wrong slot"
        );
    }
}
