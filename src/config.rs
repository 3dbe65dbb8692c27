//! Configuration for a search run.

/// Search run configuration.
///
/// The defaults reproduce the standard context window: 50 points either side
/// horizontally, and vertical padding of half the match height with a floor
/// of 5 points.
///
/// # Example
///
/// ```
/// use pdf_multisearch::config::SearchConfig;
///
/// let config = SearchConfig::new().with_follow_links(true).with_max_depth(4);
/// assert_eq!(config.context_margin_x, 50.0);
/// assert_eq!(config.max_depth, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Horizontal expansion applied to each side of a match (never clamped).
    pub context_margin_x: f32,

    /// Minimum vertical padding above and below a match.
    pub min_pad_y: f32,

    /// Vertical padding as a fraction of the match height.
    pub pad_y_ratio: f32,

    /// Follow symbolic links while walking the directory tree.
    ///
    /// Symlink cycles are detected and skipped when enabled.
    pub follow_links: bool,

    /// Maximum directory depth below the root (None = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            context_margin_x: 50.0,
            min_pad_y: 5.0,
            pad_y_ratio: 0.5,
            follow_links: false,
            max_depth: None,
        }
    }

    /// Set the horizontal context margin.
    pub fn with_context_margin_x(mut self, margin: f32) -> Self {
        self.context_margin_x = margin;
        self
    }

    /// Set the vertical padding floor.
    pub fn with_min_pad_y(mut self, pad: f32) -> Self {
        self.min_pad_y = pad;
        self
    }

    /// Set the vertical padding ratio.
    pub fn with_pad_y_ratio(mut self, ratio: f32) -> Self {
        self.pad_y_ratio = ratio;
        self
    }

    /// Follow symbolic links.
    pub fn with_follow_links(mut self, enable: bool) -> Self {
        self.follow_links = enable;
        self
    }

    /// Limit the traversal depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
