//! Filter state: year, continents, x-variable and x-scale.
//!
//! The scale options depend on the x-variable (population is log only).
//! `Selection` re-derives the valid options whenever the variable changes and
//! clamps the current scale into them, so an invalid pair is unrepresentable.

use lifexp_config::SelectionDefaults;
use lifexp_data::{Dataset, Record};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const YEAR_MIN: i32 = 1980;
pub const YEAR_MAX: i32 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XVariable {
    #[default]
    GdpCapita,
    Population,
    Fertility,
    HealthExpenditureShare,
}

impl XVariable {
    /// Radio order in the sidebar.
    pub const ALL: [XVariable; 4] = [
        XVariable::GdpCapita,
        XVariable::Population,
        XVariable::Fertility,
        XVariable::HealthExpenditureShare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            XVariable::GdpCapita => "gdp_capita",
            XVariable::Population => "population",
            XVariable::Fertility => "fertility",
            XVariable::HealthExpenditureShare => "health_expenditure_share",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Axis title shown on the chart and in the narrative.
    pub fn title(&self) -> &'static str {
        match self {
            XVariable::GdpCapita => "GDP per capita in USD",
            XVariable::Population => "Population",
            XVariable::Fertility => "Average number of children per woman",
            XVariable::HealthExpenditureShare => "Health expenditure share of GDP",
        }
    }

    /// Scales the x-scale control offers for this variable.
    pub fn scale_options(&self) -> &'static [XScale] {
        match self {
            XVariable::Population => &[XScale::Log],
            _ => &[XScale::Linear, XScale::Log],
        }
    }

    pub fn value(&self, record: &Record) -> Option<f64> {
        match self {
            XVariable::GdpCapita => record.gdp_capita,
            XVariable::Population => record.population,
            XVariable::Fertility => record.fertility,
            XVariable::HealthExpenditureShare => record.health_expenditure_share,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XScale {
    #[default]
    Linear,
    Log,
}

impl XScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            XScale::Linear => "linear",
            XScale::Log => "log",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(XScale::Linear),
            "log" => Some(XScale::Log),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    year: i32,
    continents: Vec<String>,
    x_var: XVariable,
    x_scale: XScale,
}

impl Selection {
    /// Year is clamped into the slider range, duplicate continents dropped
    /// (first occurrence wins), and the scale clamped into the options valid
    /// for `x_var`.
    pub fn new(year: i32, continents: Vec<String>, x_var: XVariable, x_scale: XScale) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(continents.len());
        for continent in continents {
            if !unique.contains(&continent) {
                unique.push(continent);
            }
        }
        Self {
            year: year.clamp(YEAR_MIN, YEAR_MAX),
            continents: unique,
            x_var,
            x_scale: clamp_scale(x_var, x_scale),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    pub fn x_var(&self) -> XVariable {
        self.x_var
    }

    pub fn x_scale(&self) -> XScale {
        self.x_scale
    }

    pub fn scale_options(&self) -> &'static [XScale] {
        self.x_var.scale_options()
    }

    pub fn with_x_var(self, x_var: XVariable) -> Self {
        Self::new(self.year, self.continents, x_var, self.x_scale)
    }

    pub fn with_x_scale(self, x_scale: XScale) -> Self {
        Self::new(self.year, self.continents, self.x_var, x_scale)
    }

    /// First-visit selection: configured year and the configured continents
    /// that actually occur in the data.
    pub fn initial(defaults: &SelectionDefaults, dataset: &Dataset) -> Self {
        let continents = defaults
            .continents
            .iter()
            .filter(|c| dataset.has_continent(c))
            .cloned()
            .collect();
        Self::new(defaults.year, continents, XVariable::default(), XScale::default())
    }

    /// Decode the sidebar form. Without the `submitted` marker this is a first
    /// visit and the defaults apply; with it, an absent `continent` list means
    /// the user cleared the selection.
    pub fn from_query(
        query: &SelectionQuery,
        defaults: &SelectionDefaults,
        dataset: &Dataset,
    ) -> Result<Self, SelectionError> {
        let initial = Self::initial(defaults, dataset);

        let year = match query.year.as_deref().map(str::trim) {
            None | Some("") => initial.year,
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| SelectionError::InvalidYear(raw.to_string()))?,
        };

        let continents = if query.submitted.is_some() || !query.continent.is_empty() {
            query
                .continent
                .iter()
                .filter(|c| dataset.has_continent(c))
                .cloned()
                .collect()
        } else {
            initial.continents
        };

        let x_var = query
            .x_var
            .as_deref()
            .and_then(XVariable::parse)
            .unwrap_or_default();
        // An unknown scale name is treated like an invalid one: first valid option.
        let x_scale = query
            .x_scale
            .as_deref()
            .and_then(XScale::parse)
            .unwrap_or(x_var.scale_options()[0]);

        Ok(Self::new(year, continents, x_var, x_scale))
    }
}

fn clamp_scale(x_var: XVariable, x_scale: XScale) -> XScale {
    let options = x_var.scale_options();
    if options.contains(&x_scale) {
        x_scale
    } else {
        options[0]
    }
}

/// Raw sidebar form fields as they arrive in the query string.
/// `continent` repeats once per checked box.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub year: Option<String>,
    #[serde(default)]
    pub continent: Vec<String>,
    pub x_var: Option<String>,
    pub x_scale: Option<String>,
    pub submitted: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("year must be an integer, got {0:?}")]
    InvalidYear(String),
}
