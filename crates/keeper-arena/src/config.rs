//! Arena configuration parameters.

/// Configuration for the thing arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Slots reserved up front.
    ///
    /// Default: 2048, enough for a typical hand-built level without
    /// reallocating.
    pub initial_capacity: usize,
}

impl ArenaConfig {
    /// Default number of pre-reserved slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2048;

    /// Config reserving `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(
            ArenaConfig::default().initial_capacity,
            ArenaConfig::DEFAULT_INITIAL_CAPACITY
        );
    }
}
