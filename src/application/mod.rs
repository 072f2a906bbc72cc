pub mod fetcher_service;

pub use fetcher_service::FetcherService;
