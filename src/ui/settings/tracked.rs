/// A single editable value with the baseline it is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tracked<T> {
    current: T,
    committed: T,
}

impl<T: Clone + PartialEq> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self {
            committed: value.clone(),
            current: value,
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.committed
    }

    /// Make the current value the new baseline.
    pub fn commit(&mut self) {
        self.committed = self.current.clone();
    }

    /// Drop the current value in favour of the baseline.
    pub fn reset(&mut self) {
        self.current = self.committed.clone();
    }
}
