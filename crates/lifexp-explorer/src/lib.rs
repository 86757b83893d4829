//! lifexp-explorer — Everything one page render needs, as pure functions.
//!   - Filter state: the four sidebar controls and their option constraints
//!   - Chart renderer: Vega-Lite scatter spec
//!   - Narrative sentence and the filtered table
//!   - `render()`: selection + dataset → chart, narrative, table

pub mod chart;
pub mod controls;
pub mod panel;
pub mod pipeline;
pub mod selection;

pub use chart::ChartSpec;
pub use controls::ControlPanel;
pub use panel::{Narrative, Table};
pub use pipeline::{render, RenderedPage};
pub use selection::{Selection, SelectionError, SelectionQuery, XScale, XVariable};
