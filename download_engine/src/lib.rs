pub mod batch;
pub mod column_select;
pub mod download_config;
pub mod errors;
pub mod extension;
pub mod fetcher;
pub mod sanitize;
pub mod types;
pub mod utils;

pub use batch::Batch;
pub use fetcher::Fetcher;
