//! Vega-Lite scatter plot specification.
//!
//! Points carry every record column so the tooltip and color channels can
//! reference them. Missing values serialize as `null`, which Vega-Lite drops
//! from point marks.

use lifexp_data::{FilteredView, Record};
use serde::Serialize;

use crate::selection::{XScale, XVariable};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
pub const CHART_HEIGHT: u32 = 500;
pub const Y_FIELD: &str = "life_expectancy";
pub const Y_TITLE: &str = "Life Expectancy in years";
pub const Y_DOMAIN: [f64; 2] = [40.0, 90.0];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec<'a> {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub data: InlineData<'a>,
    pub mark: Mark,
    pub encoding: Encoding,
    pub height: u32,
    /// "container": fill the parent element's width.
    pub width: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineData<'a> {
    pub values: Vec<&'a Record>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Encoding {
    pub x: PositionChannel,
    pub y: PositionChannel,
    pub color: FieldChannel,
    pub tooltip: Vec<FieldChannel>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionChannel {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub scale: Scale,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldChannel {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldType,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<XScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
}

impl<'a> ChartSpec<'a> {
    pub fn render(view: &FilteredView<'a>, x_var: XVariable, x_scale: XScale) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA,
            data: InlineData { values: view.records().to_vec() },
            mark: Mark { kind: "point" },
            encoding: Encoding {
                x: PositionChannel {
                    field: x_var.as_str(),
                    kind: FieldType::Quantitative,
                    scale: Scale { kind: Some(x_scale), ..Default::default() },
                    title: x_var.title(),
                },
                y: PositionChannel {
                    field: Y_FIELD,
                    kind: FieldType::Quantitative,
                    scale: Scale { kind: None, zero: Some(false), domain: Some(Y_DOMAIN) },
                    title: Y_TITLE,
                },
                color: FieldChannel { field: "continent", kind: FieldType::Nominal },
                tooltip: vec![FieldChannel { field: "name", kind: FieldType::Nominal }],
            },
            height: CHART_HEIGHT,
            width: "container",
        }
    }

    /// Number of records that will actually produce a point.
    pub fn plotted_points(&self, x_var: XVariable) -> usize {
        self.data
            .values
            .iter()
            .filter(|r| x_var.value(r).is_some() && r.life_expectancy.is_some())
            .count()
    }
}
