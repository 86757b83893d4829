//! Filtered view over a dataset. Borrowed, recomputed on every render.

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::loader::read_records;
    use lifexp_test_utils::fixtures::SAMPLE_CSV;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_africa_2000() {
        let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        let view = dataset.filter(2000, &["Africa".to_string()]);
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Nigeria", "Kenya", "Egypt"]);
    }

    #[test]
    fn test_empty_selection_is_empty_view() {
        let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        let view = dataset.filter(2000, &[]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_year_without_data() {
        let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert!(dataset.filter(1985, &["Africa".to_string()]).is_empty());
    }

    #[test]
    fn test_missing_continent_never_matches() {
        let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        let all: Vec<String> = dataset.continents().iter().map(|c| c.to_string()).collect();
        let view = dataset.filter(2000, &all);
        assert!(view.iter().all(|r| r.continent.is_some()));
        assert!(!view.iter().any(|r| r.name == "Kosovo"));
    }

    proptest! {
        #[test]
        fn filter_only_keeps_matching_records(
            year in 1980i32..=2020,
            mask in proptest::collection::vec(any::<bool>(), 5),
        ) {
            let dataset = read_records(SAMPLE_CSV.as_bytes()).unwrap();
            let selected: Vec<String> = dataset
                .continents()
                .into_iter()
                .zip(mask)
                .filter(|(_, keep)| *keep)
                .map(|(c, _)| c.to_string())
                .collect();

            let view = dataset.filter(year, &selected);
            for record in view.iter() {
                prop_assert_eq!(record.year, Some(year));
                let continent = record.continent.clone().unwrap();
                prop_assert!(selected.contains(&continent));
            }

            let expected = dataset
                .records()
                .iter()
                .filter(|r| r.year == Some(year))
                .filter(|r| r.continent.as_ref().is_some_and(|c| selected.contains(c)))
                .count();
            prop_assert_eq!(view.len(), expected);
        }
    }
}
