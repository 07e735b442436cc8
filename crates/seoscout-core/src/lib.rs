//! SeoScout Core — shared keyword types, errors, configuration, validation.

pub mod config;
pub mod error;
pub mod settings;
pub mod types;
pub mod validate;

pub use config::{DataPaths, SeoScoutConfig};
pub use error::{Error, Result};
pub use settings::Settings;
pub use types::{
    Competition, Intent, KeywordEntry, KeywordFocus, KeywordResultSet, SearchParams, TipEntry,
};
