//! Sweep configuration.

/// Switches for the optional passes of a sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Delete things standing on a slab they do not belong to before the
    /// tile's rule runs. Default: `true`.
    pub remove_misplaced: bool,
    /// Run the height/sub-position pass over the swept region afterwards.
    /// Default: `true`.
    pub position_things: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remove_misplaced: true,
            position_things: true,
        }
    }
}
