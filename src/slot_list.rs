const NIL: u32 = u32::MAX;

/// Stable handle to an occupied slot. It stays valid until the element
/// is removed; afterwards the slot, and with it the index, may be
/// recycled for a later insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotIdx(pub u32);

struct Slot<T> {
    value: Option<T>,
    prev: u32,
    next: u32,
}

/// Doubly linked list kept in a slot arena: O(1) insertion at either
/// end, O(1) removal from any position through a [`SlotIdx`], and
/// removal of the current element while walking the list. Freed slots
/// are recycled through a free stack, so long-lived lists do not leak
/// arena space.
pub struct SlotList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: u32,
    tail: u32,
    len: usize,
}

impl<T> SlotList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: T) -> u32 {
        if let Some(i) = self.free.pop() {
            let slot = &mut self.slots[i as usize];
            debug_assert!(slot.value.is_none());
            slot.value = Some(value);
            slot.prev = NIL;
            slot.next = NIL;
            i
        } else {
            self.slots.push(Slot {
                value: Some(value),
                prev: NIL,
                next: NIL,
            });
            (self.slots.len() - 1) as u32
        }
    }

    pub fn push_back(&mut self, value: T) -> SlotIdx {
        let i = self.alloc(value);
        self.slots[i as usize].prev = self.tail;
        if self.tail != NIL {
            self.slots[self.tail as usize].next = i;
        } else {
            self.head = i;
        }
        self.tail = i;
        self.len += 1;
        SlotIdx(i)
    }

    pub fn push_front(&mut self, value: T) -> SlotIdx {
        let i = self.alloc(value);
        self.slots[i as usize].next = self.head;
        if self.head != NIL {
            self.slots[self.head as usize].prev = i;
        } else {
            self.tail = i;
        }
        self.head = i;
        self.len += 1;
        SlotIdx(i)
    }

    /// Unlinks the element and frees its slot. `None` when the index is
    /// vacant or out of range.
    pub fn remove(&mut self, idx: SlotIdx) -> Option<T> {
        let i = idx.0 as usize;
        if i >= self.slots.len() {
            return None;
        }
        let value = self.slots[i].value.take()?;
        let (prev, next) = (self.slots[i].prev, self.slots[i].next);
        if prev != NIL {
            self.slots[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.slots[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
        self.free.push(idx.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, idx: SlotIdx) -> Option<&T> {
        self.slots.get(idx.0 as usize)?.value.as_ref()
    }

    pub fn get_mut(&mut self, idx: SlotIdx) -> Option<&mut T> {
        self.slots.get_mut(idx.0 as usize)?.value.as_mut()
    }

    pub fn front(&self) -> Option<SlotIdx> {
        (self.head != NIL).then_some(SlotIdx(self.head))
    }

    pub fn back(&self) -> Option<SlotIdx> {
        (self.tail != NIL).then_some(SlotIdx(self.tail))
    }

    /// Index of the element after `idx`, for cursor walks that may
    /// remove the element they are standing on. Fetch the successor
    /// before removing.
    pub fn next(&self, idx: SlotIdx) -> Option<SlotIdx> {
        let slot = self.slots.get(idx.0 as usize)?;
        slot.value.as_ref()?;
        (slot.next != NIL).then_some(SlotIdx(slot.next))
    }

    pub fn prev(&self, idx: SlotIdx) -> Option<SlotIdx> {
        let slot = self.slots.get(idx.0 as usize)?;
        slot.value.as_ref()?;
        (slot.prev != NIL).then_some(SlotIdx(slot.prev))
    }

    /// Front-to-back walk keeping only the elements the predicate
    /// approves of.
    pub fn retain<F: FnMut(SlotIdx, &mut T) -> bool>(&mut self, mut keep: F) {
        let mut cur = self.head;
        while cur != NIL {
            let next = self.slots[cur as usize].next;
            let value = self.slots[cur as usize]
                .value
                .as_mut()
                .expect("free slot on the live list");
            if !keep(SlotIdx(cur), value) {
                self.remove(SlotIdx(cur));
            }
            cur = next;
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a SlotList<T>,
    cur: u32,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotIdx, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == NIL {
            return None;
        }
        let idx = SlotIdx(self.cur);
        let slot = &self.list.slots[self.cur as usize];
        self.cur = slot.next;
        Some((idx, slot.value.as_ref().expect("free slot on the live list")))
    }
}
