//! # common-utils
//!
//! Small, independent helpers shared across ML tooling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use common_utils::prelude::*;
//!
//! fn main() -> common_utils::Result<()> {
//!     let settings = Settings::load(None)?;
//!     let config: serde_json::Value = open_json("config.json")?;
//!
//!     let tokenizer = Tokenizer::from_settings(&settings)?;
//!     let tokens = tokenizer.tokenize(&normalize_text("  Hello   World "))?;
//!
//!     let backend = select_device(&settings.device_order, &CandleProbe);
//!     dump_to_text(&format!("{} tokens on {}", tokens.len(), backend), "out/summary.txt")?;
//!
//!     if let Some(map) = config.as_object() {
//!         let flat = flatten_dict_with_settings(map, &settings);
//!         dump_to_json("out/flat.json", &flat)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`utils`]: File operations, text processing, numeric and data helpers
//! - [`ml`]: Tokenizer, compute device selection, cosine similarity
//! - [`storage`]: Optional TOML settings
//! - [`error`]: Hierarchical error system with troubleshooting hints
//!
//! Logging goes through the [`log`] facade; this crate never installs a logger.

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // File operations
    pub use crate::utils::file::{dump_to_json, dump_to_text, open_json, open_yaml};

    // Text processing
    pub use crate::ml::tokenizer::{Encoding, Tokenizer};
    pub use crate::utils::text::{ends_with, normalize_text, remove_stopwords};

    // ML helpers
    pub use crate::ml::device::{
        Backend, BackendProbe, CandleProbe, device_from_settings, get_device, select_device,
    };
    pub use crate::ml::similarity::compute_similarity;

    // Generic utilities
    pub use crate::utils::data::{
        chunk_list, flatten_dict, flatten_dict_with, flatten_dict_with_settings,
    };
    pub use crate::utils::numeric::{moving_average, safe_divide};

    // Settings
    pub use crate::storage::config::Settings;
}

/// Utilities layer - file, text, numeric and data helpers.
///
/// - [`utils::file`]: YAML/JSON loading, JSON and text dumps
/// - [`utils::text`]: Suffix matching, normalization, stopword removal
/// - [`utils::numeric`]: Safe division, moving average
/// - [`utils::data`]: Mapping flattening, list chunking
pub mod utils;

/// ML helpers layer.
///
/// - [`ml::tokenizer`]: `cl100k_base` and related BPE vocabularies
/// - [`ml::device`]: CUDA / Metal / CPU selection
/// - [`ml::similarity`]: Cosine similarity
pub mod ml;

/// Storage layer - settings persistence.
pub mod storage;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
