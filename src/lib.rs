pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Re-exports the surface a host plugin shell needs.
pub use application::fetcher_service::FetcherService;
pub use config::{load_config, FetcherConfig, SearchConfig};
pub use domain::collection::{CollectionSearch, SearchCriteria, SearchError, VectorQuery};
pub use domain::document::{Document, Hit};
pub use domain::host::{EditorSurface, Notifier};
pub use domain::index::CollectionIndex;
pub use infrastructure::typesense::TypesenseClient;
