//! Live total: background refresh of the result count.
//!
//! A form that opts in gets a [`LiveTotal`] listener. On every change event it
//! asks the [`should_refresh`] gate whether the count can move and, if so,
//! hands a refresh URL to its [`RefreshFetcher`]. The server side of that URL
//! is parsed by [`LiveTotalRequest`].
//!
//! Fetches are fire-and-forget. Nothing cancels an in-flight refresh, so a
//! slow response may overwrite the count of a newer filter state.

pub mod gate;
pub mod listener;
pub mod request;
pub mod url;

pub use gate::should_refresh;
pub use listener::{LiveTotal, RefreshFetcher};
pub use request::LiveTotalRequest;
pub use self::url::build_url;

/// Path of the live total endpoint, relative to the site base path
pub const DEFAULT_ROUTE: &str = "facets-form-live-total";

/// The only facets source plugin the endpoint serves
pub const SUPPORTED_BASE_PLUGIN: &str = "search_api";
