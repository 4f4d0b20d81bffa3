/// Container nesting the scanner will descend into
pub const DEFAULT_MAX_DEPTH: usize = 8;
/// Largest leaf payload read into memory (64KB); mvhd is ~100 bytes
pub const DEFAULT_MAX_LEAF_PAYLOAD: u64 = 64 * 1024;

/// Safety limits applied while walking a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Boxes examined in a single level before the scan gives up. Off by
    /// default; the level length already bounds the walk.
    pub max_boxes_per_level: Option<usize>,
    pub max_depth: usize,
    pub max_leaf_payload: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_boxes_per_level: None,
            max_depth: DEFAULT_MAX_DEPTH,
            max_leaf_payload: DEFAULT_MAX_LEAF_PAYLOAD,
        }
    }
}
