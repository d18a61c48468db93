use thiserror::Error;

/// Anything the heap can order. Only the weight takes part in comparisons,
/// equal weights keep whatever array position the sift operations leave them in.
pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapErr {
    #[error("heap overflow: capacity of {0} reached")]
    HeapOverflow(usize),
    #[error("heap underflow: extract from an empty heap")]
    HeapUnderflow,
}

/// Array-backed binary min-heap with a capacity fixed at creation.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> MinHeap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Weighted> MinHeap<T> {
    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size())
            .all(|i| self.elements[Self::parent(i)].weight() <= self.elements[i].weight())
    }

    fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l].weight() < self.elements[smallest].weight() {
                smallest = l;
            }
            if r < n && self.elements[r].weight() < self.elements[smallest].weight() {
                smallest = r;
            }

            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i].weight() >= self.elements[p].weight() {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn insert(&mut self, value: T) -> Result<(), HeapErr> {
        if self.heap_size() >= self.capacity {
            return Err(HeapErr::HeapOverflow(self.capacity));
        }
        self.elements.push(value);
        self.sift_up(self.heap_size() - 1);
        debug_assert!(self.valid_min_heap());
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let result = self.elements.swap_remove(0);
        self.min_heapify(0);
        debug_assert!(self.valid_min_heap());
        Ok(result)
    }
}
