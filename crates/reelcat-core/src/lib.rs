//! reelcat-core: Format reconciliation for extracted media

pub mod catalog;
pub mod classify;
pub mod config;
pub mod dedup;
pub mod descriptor;
pub mod display;
pub mod error;
pub mod extractor;
pub mod links;
pub mod report;
pub mod select;
pub mod sort;

pub use catalog::{reconcile, Catalog};
pub use config::Config;
pub use descriptor::{FormatDescriptor, MediaInfo};
pub use error::{ReelcatError, Result};
pub use report::CatalogReport;
