use crate::id::NanoId;

/// Settings for an [`IdGenerator`](crate::IdGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdConfig {
    pub size: usize,
}

impl IdConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: NanoId::DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self::new()
    }
}
