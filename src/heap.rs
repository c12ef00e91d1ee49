use std::cmp::Ordering;

/// Array-backed binary min-heap ordered by a caller-supplied comparison. Unlike
/// [std::collections::BinaryHeap] the ordering is a value, so the element type does not need
/// to implement [Ord] and can order by a float key.
pub struct MinHeap<T, F> {
    items: Vec<T>,
    compare: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> MinHeap<T, F> {
        MinHeap {
            items: Vec::new(),
            compare,
        }
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn clear(&mut self) {
        self.items.clear();
    }
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }
    /// Removes and returns the smallest element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Some(min)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) == Ordering::Less
    }
    fn sift_up(&mut self, mut ix: usize) {
        while ix > 0 {
            let parent = (ix - 1) / 2;
            if !self.less(ix, parent) {
                break;
            }
            self.items.swap(ix, parent);
            ix = parent;
        }
    }
    fn sift_down(&mut self, mut ix: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * ix + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let smaller = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smaller, ix) {
                break;
            }
            self.items.swap(ix, smaller);
            ix = smaller;
        }
    }
}
