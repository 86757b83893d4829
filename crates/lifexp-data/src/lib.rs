//! lifexp-data — Country-year indicator dataset.
//!
//! Loads the bundled CSV once per process, derives GDP per capita for every
//! row, and answers the year + continent filter used by every page render.
//!
//! ```rust,no_run
//! use lifexp_data::DatasetCache;
//!
//! let cache = DatasetCache::new("data/wdi.csv");
//! let dataset = cache.get()?;
//! let view = dataset.filter(2000, &["Africa".to_string()]);
//! println!("{} African records in 2000", view.len());
//! # Ok::<(), lifexp_common::LifexpError>(())
//! ```

pub mod cache;
pub mod loader;
pub mod record;
pub mod view;

pub use cache::DatasetCache;
pub use loader::{load_csv, read_records, REQUIRED_COLUMNS};
pub use record::{per_capita, Dataset, Record};
pub use view::FilteredView;
