use super::weighted::Weighted;

/// Keeps the `capacity` heaviest items seen so far, heaviest first.
///
/// On equal weights the earlier item keeps the higher rank: a newcomer only
/// moves up past strictly lighter neighbours.
#[derive(Debug, Clone)]
pub struct TopN<T> {
    capacity: usize,
    values: Vec<T>,
}

impl<T: Weighted> TopN<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, item: T) {
        let w = item.weight();
        let mut pos = self.values.len();
        while pos > 0 && w > self.values[pos - 1].weight() {
            pos -= 1;
        }
        if pos >= self.capacity {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop();
        }
        self.values.insert(pos, item);
    }

    /// Filled prefix in rank order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
