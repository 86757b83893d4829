//! Narrative sentence and filtered table shown under the chart.

use lifexp_data::{FilteredView, Record};
use serde::Serialize;

use crate::selection::Selection;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Narrative {
    pub x_title: &'static str,
    pub year: i32,
    /// Selected continents joined with ", " in selection order.
    pub continents: String,
}

impl Narrative {
    pub fn new(selection: &Selection) -> Self {
        Self {
            x_title: selection.x_var().title(),
            year: selection.year(),
            continents: selection.continents().join(", "),
        }
    }

    /// Markdown rendition.
    pub fn to_text(&self) -> String {
        format!(
            "This app shows the relationship between **{}** and **life expectancy**. \
             Currently, you have applied filters to only show: \n\n\
             - _year_: {}\n\
             - countries of the following _continents_: {}",
            self.x_title, self.year, self.continents
        )
    }
}

pub const TABLE_COLUMNS: [&str; 10] = [
    "row",
    "name",
    "continent",
    "year",
    "population",
    "gdp",
    "fertility",
    "health_expenditure_share",
    "life_expectancy",
    "gdp_capita",
];

/// Display-ready table. Missing values are empty cells.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(view: &FilteredView<'_>) -> Self {
        Self {
            columns: TABLE_COLUMNS.to_vec(),
            rows: view.iter().map(row_cells).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row_cells(record: &Record) -> Vec<String> {
    vec![
        record.row.to_string(),
        record.name.clone(),
        record.continent.clone().unwrap_or_default(),
        record.year.map(|y| y.to_string()).unwrap_or_default(),
        format_number(record.population),
        format_number(record.gdp),
        format_number(record.fertility),
        format_number(record.health_expenditure_share),
        format_number(record.life_expectancy),
        format_number(record.gdp_capita),
    ]
}

/// Whole numbers print without decimals, everything else with three.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.3}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{XScale, XVariable};
    use lifexp_data::read_records;
    use lifexp_test_utils::fixtures::SAMPLE_CSV;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_narrative_joins_in_selection_order() {
        let selection = Selection::new(
            2010,
            vec!["Europe".into(), "Africa".into()],
            XVariable::HealthExpenditureShare,
            XScale::Linear,
        );
        let text = Narrative::new(&selection).to_text();
        assert!(text.starts_with(
            "This app shows the relationship between **Health expenditure share of GDP** and **life expectancy**."
        ));
        assert!(text.contains("- _year_: 2010\n"));
        assert!(text.ends_with("countries of the following _continents_: Europe, Africa"));
    }

    #[test]
    fn test_narrative_empty_selection() {
        let selection = Selection::new(2000, vec![], XVariable::GdpCapita, XScale::Linear);
        let narrative = Narrative::new(&selection);
        assert_eq!(narrative.continents, "");
        assert!(narrative.to_text().ends_with("of the following _continents_: "));
    }

    #[test]
    fn test_table_rows_in_dataset_order() {
        let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        let view = dataset.filter(2000, &["Europe".to_string()]);
        let table = Table::new(&view);

        assert_eq!(table.columns.len(), 10);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][..4].to_vec(), vec!["5", "Germany", "Europe", "2000"]);
        assert_eq!(table.rows[1][..5].to_vec(), vec!["11", "Atlantis", "Europe", "2000", "0"]);
        // fertility, health share and gdp_capita are missing for Atlantis
        assert_eq!(table.rows[1][6], "");
        assert_eq!(table.rows[1][7], "");
        assert_eq!(table.rows[1][9], "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(None), "");
        assert_eq!(format_number(Some(122851984.0)), "122851984");
        assert_eq!(format_number(Some(1.36)), "1.360");
        assert_eq!(format_number(Some(565.303)), "565.303");
        assert_eq!(format_number(Some(1e15)), "1000000000000000");
        assert_eq!(format_number(Some(2.5e16)), "25000000000000000");
    }
}
