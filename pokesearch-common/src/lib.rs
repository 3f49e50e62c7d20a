//! pokesearch-common - pure card search logic
//!
//! Card model, search controller, overlay lifecycle and display helpers.
//! Nothing here performs I/O, so it all runs and tests natively.

pub mod card;
pub mod config;
pub mod details;
pub mod error;
pub mod overlay;
pub mod query;
pub mod search;

pub use card::{Card, CardPage};
pub use config::{ApiConfig, ConfigError};
pub use error::SearchError;
pub use overlay::OverlayLifecycle;
pub use search::{
    FetchRequest, LoadStatus, PageState, RequestTicket, SearchAction, SearchController, PAGE_SIZE,
};
