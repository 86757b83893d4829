//! One full page render: filter → chart → narrative → table.
//!
//! Runs synchronously on every interaction. Nothing is kept between calls.

use lifexp_data::{Dataset, FilteredView};
use serde::Serialize;
use tracing::debug;

use crate::chart::ChartSpec;
use crate::controls::ControlPanel;
use crate::panel::{Narrative, Table};
use crate::selection::Selection;

#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage<'a> {
    pub selection: Selection,
    pub controls: ControlPanel,
    #[serde(skip)]
    pub view: FilteredView<'a>,
    pub chart: ChartSpec<'a>,
    pub narrative: Narrative,
    pub table: Table,
}

pub fn render<'a>(selection: &Selection, dataset: &'a Dataset) -> RenderedPage<'a> {
    let view = dataset.filter(selection.year(), selection.continents());
    debug!(
        year = selection.year(),
        continents = ?selection.continents(),
        x_var = selection.x_var().as_str(),
        rows = view.len(),
        "render"
    );

    RenderedPage {
        selection: selection.clone(),
        controls: ControlPanel::new(selection, dataset),
        chart: ChartSpec::render(&view, selection.x_var(), selection.x_scale()),
        narrative: Narrative::new(selection),
        table: Table::new(&view),
        view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionQuery, XScale, XVariable};
    use lifexp_config::SelectionDefaults;
    use lifexp_data::read_records;
    use lifexp_test_utils::fixtures::SAMPLE_CSV;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn dataset() -> Dataset {
        read_records(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_default_scenario() {
        let dataset = dataset();
        let selection = Selection::new(2000, vec!["Africa".into()], XVariable::GdpCapita, XScale::Linear);
        let page = render(&selection, &dataset);

        assert_eq!(page.view.len(), 3);
        assert!(page
            .view
            .iter()
            .all(|r| r.year == Some(2000) && r.continent.as_deref() == Some("Africa")));

        let chart = serde_json::to_value(&page.chart).unwrap();
        assert_eq!(chart["encoding"]["x"]["title"], json!("GDP per capita in USD"));
        assert_eq!(chart["encoding"]["y"]["scale"]["domain"], json!([40.0, 90.0]));
        assert_eq!(page.table.len(), 3);
        assert!(page.narrative.to_text().ends_with("_continents_: Africa"));
    }

    #[test]
    fn test_switch_to_population_while_linear() {
        let dataset = dataset();
        let query = SelectionQuery {
            year: Some("2000".into()),
            continent: vec!["Africa".into()],
            x_var: Some("population".into()),
            x_scale: Some("linear".into()),
            submitted: Some("1".into()),
        };
        let selection =
            Selection::from_query(&query, &SelectionDefaults::default(), &dataset).unwrap();
        let page = render(&selection, &dataset);

        assert_eq!(page.selection.x_scale(), XScale::Log);
        let offered: Vec<&str> = page.controls.x_scales.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(offered, vec!["log"]);
        let chart = serde_json::to_value(&page.chart).unwrap();
        assert_eq!(chart["encoding"]["x"]["scale"]["type"], json!("log"));
    }

    #[test]
    fn test_cleared_continents() {
        let dataset = dataset();
        let selection = Selection::new(2000, vec![], XVariable::GdpCapita, XScale::Linear);
        let page = render(&selection, &dataset);

        assert!(page.view.is_empty());
        assert!(page.chart.data.values.is_empty());
        assert!(page.table.is_empty());
        assert!(page
            .narrative
            .to_text()
            .ends_with("countries of the following _continents_: "));
    }

    #[test]
    fn test_empty_dataset_renders() {
        let dataset = Dataset::default();
        let selection = Selection::initial(&SelectionDefaults::default(), &dataset);
        let page = render(&selection, &dataset);
        assert!(page.controls.continents.is_empty());
        assert!(page.table.is_empty());
    }
}
