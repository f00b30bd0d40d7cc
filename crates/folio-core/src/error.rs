//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Typewriter was built without anything to type
    #[error("Typewriter needs at least one phrase")]
    EmptyPhrases,

    /// Theme switcher was built with an empty palette list
    #[error("Theme list is empty")]
    EmptyThemes,

    /// Requested theme does not exist
    #[error("Theme index {index} out of range (have {count})")]
    ThemeOutOfRange { index: usize, count: usize },

    /// Requested tab does not exist
    #[error("Tab index out of range: {0}")]
    TabOutOfRange(usize),

    /// Tab control points at a pane selector that matches nothing
    #[error("Education tab content not found for selector: {0}")]
    PaneNotFound(String),

    /// `data-target` on a counter is not a finite number
    #[error("Invalid counter target: {0:?}")]
    InvalidCounterTarget(String),

    /// Preference storage rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Embedded page configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
