pub use crate::config::*;
use crate::{parse_names, Roster};

/// A builder for assembling a roster from several inputs.
///
/// Useful for callers that ingest raw text chunks and explicit name lists
/// from different sources before the first operation runs.
///
/// ```
/// use roster_draw::builder::Builder;
///
/// let roster = Builder::new()
///     .text("Anna, Bob\nClara")
///     .names(&["Dora".to_string()])
///     .build();
///
/// assert_eq!(roster.len(), 4);
/// ```
pub struct Builder {
    pub(crate) _names: Vec<String>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    pub fn new() -> Builder {
        Builder { _names: Vec::new() }
    }

    /// Adds a raw text chunk, parsed as comma/newline-delimited names.
    pub fn text(mut self, raw: &str) -> Builder {
        self._names.extend(parse_names(raw));
        self
    }

    /// Adds already-tokenized names as they are.
    pub fn names(mut self, names: &[String]) -> Builder {
        self._names.extend(names.iter().cloned());
        self
    }

    pub fn build(self) -> Roster {
        Roster::new().add_names(&self._names)
    }
}
