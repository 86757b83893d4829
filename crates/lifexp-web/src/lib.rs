//! lifexp-web — Life Expectancy Explorer web server.
//! Serves one dashboard page that re-renders in full on every control change:
//!   - Sidebar filters (year, continents) and x-axis controls
//!   - Vega-Lite scatter plot of the chosen indicator against life expectancy
//!   - Narrative summary and the filtered table
//!   - JSON / CSV endpoints for the same filtered view

pub mod handlers;
pub mod router;
pub mod state;
pub mod telemetry;
pub mod templates;
