//! Sidebar control model: option lists plus the currently selected values,
//! shaped for the page template.

use lifexp_data::Dataset;
use serde::Serialize;

use crate::selection::{Selection, XVariable, YEAR_MAX, YEAR_MIN};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ControlPanel {
    pub year: i32,
    pub year_min: i32,
    pub year_max: i32,
    /// Every continent in the data; `selected` marks the current picks.
    pub continents: Vec<Choice>,
    /// Current picks in the order they were made.
    pub selected_continents: Vec<String>,
    pub x_vars: Vec<Choice>,
    pub x_scales: Vec<Choice>,
}

impl ControlPanel {
    pub fn new(selection: &Selection, dataset: &Dataset) -> Self {
        let continents = dataset
            .continents()
            .into_iter()
            .map(|c| Choice {
                value: c.to_string(),
                label: c.to_string(),
                selected: selection.continents().iter().any(|s| s == c),
            })
            .collect();

        let x_vars = XVariable::ALL
            .iter()
            .map(|v| Choice {
                value: v.as_str().to_string(),
                label: v.as_str().to_string(),
                selected: *v == selection.x_var(),
            })
            .collect();

        let x_scales = selection
            .scale_options()
            .iter()
            .map(|s| Choice {
                value: s.as_str().to_string(),
                label: s.as_str().to_string(),
                selected: *s == selection.x_scale(),
            })
            .collect();

        Self {
            year: selection.year(),
            year_min: YEAR_MIN,
            year_max: YEAR_MAX,
            continents,
            selected_continents: selection.continents().to_vec(),
            x_vars,
            x_scales,
        }
    }
}
