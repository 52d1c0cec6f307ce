//! Render-time settings

use crate::clock::{Clock, SystemClock};
use std::sync::Arc;

/// Generator string used when the feed does not name one
pub const DEFAULT_GENERATOR: &str = "https://github.com/sw-yx/react-static-typescript-starter";

/// Indentation of the rendered document, in spaces per level
pub const DEFAULT_INDENT: usize = 4;

/// Defaults supplied at render time
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fallback for `<generator>` when the feed options leave it unset
    pub generator: String,
    /// Spaces per nesting level; `0` renders on a single line
    pub indent: usize,
    /// Source of "now" for `pubDate` and `lastBuildDate` when `updated` is unset
    pub clock: Arc<dyn Clock>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            indent: DEFAULT_INDENT,
            clock: Arc::new(SystemClock),
        }
    }
}
