//! Singly linked FIFO queue with head/tail links and O(1) enqueue/dequeue.
//!
//! Entries live in a slot vector and link to each other by slot index, so the
//! list needs no unsafe tail pointer. Dequeued slots go on a free list and are
//! reused by later enqueues.

struct Entry<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// First-in first-out queue.
///
/// Invariant: `len == 0` iff `head` is none iff `tail` is none, and the tail
/// entry's `next` is always none.
pub struct Queue<T> {
    slots: Vec<Entry<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Queue<T> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append a value at the tail.
    pub fn enqueue(&mut self, value: T) {
        let entry = Entry {
            value: Some(value),
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = entry;
                slot
            }
            None => {
                self.slots.push(entry);
                self.slots.len() - 1
            }
        };

        if let Some(tail) = self.tail {
            self.slots[tail].next = Some(slot);
        }
        self.tail = Some(slot);
        if self.head.is_none() {
            self.head = Some(slot);
        }
        self.len += 1;
    }

    /// Remove and return the value at the head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let entry = &mut self.slots[head];
        let value = entry.value.take();
        self.head = entry.next.take();
        self.free.push(head);
        self.len -= 1;
        if self.len == 0 {
            self.tail = None;
        }
        value
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue").field("len", &self.len).finish()
    }
}
