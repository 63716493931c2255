use std::fmt;
use std::mem;
use std::convert::TryFrom;
use std::num::NonZeroU32;

#[cfg(test)]
use static_assertions::const_assert_eq;

/// A generational index into a slab
///
/// The generation is bumped every time a slot is released, so a `Ptr` handed out before a removal
/// will never resolve to the value that later reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ptr {
    index: u32,
    generation: NonZeroU32,
}

// Links are stored as `Option<Ptr>`, so keep the niche in `generation` to avoid paying for the tag
#[cfg(test)]
const_assert_eq!(mem::size_of::<Ptr>(), 8);
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<Ptr>>(), 8);

impl Ptr {
    #[inline(always)]
    fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied {
        generation: NonZeroU32,
        value: T,
    },
    Vacant {
        /// The generation the next value stored in this slot will get
        generation: NonZeroU32,
        /// The next entry in the free list, if any
        next_free: Option<u32>,
    },
}

/// An allocation primitive similar to `Vec`, but implemented to reuse space from removed entries.
///
/// Indexes are not shifted when an individual item is removed. Instead of always pushing items after
/// the previously pushed item, this data structure will reuse space from previously removed entries
/// when possible.
///
/// Every access is checked: a `Ptr` to a removed entry yields `None` rather than reading memory
/// that belongs to something else.
#[derive(Clone)]
pub struct Slab<T> {
    entries: Vec<Entry<T>>,
    /// The index of the first entry in the free list
    ///
    /// The free list is a linked list threaded through the vacant entries and used as a stack.
    free_head: Option<u32>,
    /// The number of occupied entries
    len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            entries: Vec::default(),
            free_head: None,
            len: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of entries in the slab that contain values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the slab is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the slab can hold without reallocating.
    ///
    /// Vacant entries count towards the capacity since they will be reused first.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns true if `ptr` refers to a value currently stored in the slab
    pub fn contains(&self, ptr: Ptr) -> bool {
        self.get(ptr).is_some()
    }

    /// Returns a reference to the value at `ptr`, or `None` if that value has been removed
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.entries.get(ptr.index())? {
            Entry::Occupied {generation, value} if *generation == ptr.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `ptr`, or `None` if that value has been removed
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.entries.get_mut(ptr.index())? {
            Entry::Occupied {generation, value} if *generation == ptr.generation => Some(value),
            _ => None,
        }
    }

    /// Pushes a value into the slab and returns a pointer to it
    ///
    /// Space from previously removed entries is reused before the slab grows.
    ///
    /// # Panics
    ///
    /// Panics if the slab would need more than `u32::MAX` entries.
    pub fn push(&mut self, value: T) -> Ptr {
        if let Some(index) = self.free_head {
            let entry = &mut self.entries[index as usize];
            let (generation, next_free) = match *entry {
                Entry::Vacant {generation, next_free} => (generation, next_free),
                Entry::Occupied {..} => unreachable!("free list points at an occupied entry"),
            };

            self.free_head = next_free;
            *entry = Entry::Occupied {generation, value};
            self.len += 1;
            return Ptr {index, generation};
        }

        // Checked before anything is modified, so a failed push leaves the slab as it was
        let index = next_index(self.entries.len());
        let generation = NonZeroU32::MIN;
        self.entries.push(Entry::Occupied {generation, value});
        self.len += 1;

        Ptr {index, generation}
    }

    /// Removes the value at `ptr` and returns it, or `None` if it was already removed
    ///
    /// The slot is placed on the free list and its generation is advanced, so `ptr` (and any copy of
    /// it) stops resolving.
    pub fn remove(&mut self, ptr: Ptr) -> Option<T> {
        let entry = self.entries.get_mut(ptr.index())?;
        match entry {
            Entry::Occupied {generation, ..} if *generation == ptr.generation => {},
            _ => return None,
        }

        let next_generation = NonZeroU32::new(ptr.generation.get().wrapping_add(1))
            .unwrap_or(NonZeroU32::MIN);
        let vacant = Entry::Vacant {
            generation: next_generation,
            next_free: self.free_head,
        };

        let value = match mem::replace(entry, vacant) {
            Entry::Occupied {value, ..} => value,
            Entry::Vacant {..} => unreachable!("entry was checked to be occupied"),
        };

        self.free_head = Some(ptr.index);
        self.len -= 1;

        Some(value)
    }

    /// Clears the slab, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab. Every pointer
    /// handed out before the call stops resolving.
    pub fn clear(&mut self) {
        // Releasing the slots one by one keeps the generations moving forward. Simply truncating
        // `entries` would restart them and let old pointers resolve again.
        let mut free_head = None;
        for (index, entry) in self.entries.iter_mut().enumerate().rev() {
            let generation = match entry {
                Entry::Occupied {generation, ..} => {
                    NonZeroU32::new(generation.get().wrapping_add(1)).unwrap_or(NonZeroU32::MIN)
                },
                Entry::Vacant {generation, ..} => *generation,
            };

            *entry = Entry::Vacant {generation, next_free: free_head};
            // `push` guarantees that every index fits in a u32
            free_head = Some(index as u32);
        }

        self.free_head = free_head;
        self.len = 0;
    }

    /// Reserves capacity for at least `additional` more elements to be pushed into the slab.
    ///
    /// Vacant entries are not taken into account, so this may over-reserve.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns an iterator over every occupied entry and its pointer, in index order
    pub fn iter(&self) -> impl Iterator<Item=(Ptr, &T)> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| match entry {
            &Entry::Occupied {generation, ref value} => {
                Some((Ptr {index: index as u32, generation}, value))
            },
            Entry::Vacant {..} => None,
        })
    }
}

/// Returns the index a new entry appended after `len` entries would get
///
/// # Panics
///
/// Panics if that index does not fit in a `Ptr`. `u32::MAX` is never handed out.
fn next_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(index) if index != u32::MAX => index,
        _ => panic!("slab cannot hold more than {} entries", u32::MAX - 1),
    }
}
