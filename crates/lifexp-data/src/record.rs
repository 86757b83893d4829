//! Record and Dataset types.

use serde::{Deserialize, Serialize};

use crate::view::FilteredView;

/// One country-year observation.
///
/// Numeric cells that are empty or unparseable deserialize to `None`
/// instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 0-based position in the source file.
    #[serde(skip_deserializing)]
    pub row: usize,
    pub name: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub continent: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub population: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub gdp: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub fertility: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub health_expenditure_share: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub life_expectancy: Option<f64>,
    /// Derived at load time: gdp / population.
    #[serde(skip_deserializing)]
    pub gdp_capita: Option<f64>,
}

impl Record {
    /// Treat NaN/inf cells as missing and attach the derived column.
    pub(crate) fn finish(mut self, row: usize) -> Self {
        self.row = row;
        self.continent = self.continent.filter(|c| !c.is_empty());
        for value in [
            &mut self.population,
            &mut self.gdp,
            &mut self.fertility,
            &mut self.health_expenditure_share,
            &mut self.life_expectancy,
        ] {
            *value = value.filter(|v| v.is_finite());
        }
        self.gdp_capita = per_capita(self.gdp, self.population);
        self
    }
}

/// GDP per capita; missing when either input is missing or population is zero.
pub fn per_capita(gdp: Option<f64>, population: Option<f64>) -> Option<f64> {
    match (gdp, population) {
        (Some(gdp), Some(population)) if population != 0.0 => {
            Some(gdp / population).filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Immutable collection of records in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-missing continents, in order of first appearance.
    pub fn continents(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for continent in self.records.iter().filter_map(|r| r.continent.as_deref()) {
            if !seen.contains(&continent) {
                seen.push(continent);
            }
        }
        seen
    }

    pub fn has_continent(&self, continent: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.continent.as_deref() == Some(continent))
    }

    /// Records from `year` whose continent is one of `continents`.
    pub fn filter<'a>(&'a self, year: i32, continents: &[String]) -> FilteredView<'a> {
        let records = self
            .records
            .iter()
            .filter(|r| r.year == Some(year))
            .filter(|r| {
                r.continent
                    .as_deref()
                    .is_some_and(|c| continents.iter().any(|s| s == c))
            })
            .collect();
        FilteredView::new(records)
    }
}
