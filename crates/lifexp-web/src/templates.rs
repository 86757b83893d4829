//! Page templates, compiled into the binary.

use lifexp_common::{LifexpError, Result};
use lifexp_explorer::RenderedPage;
use minijinja::{context, Environment};

pub const PAGE_TITLE: &str = "Life Expectancy Explorer";

const BASE_HTML: &str = include_str!("../templates/base.html");
const EXPLORER_HTML: &str = include_str!("../templates/explorer.html");

pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("base.html", BASE_HTML).map_err(template_error)?;
    env.add_template("explorer.html", EXPLORER_HTML).map_err(template_error)?;
    Ok(env)
}

/// Render the full dashboard page for one selection.
pub fn render_explorer(env: &Environment<'_>, page: &RenderedPage<'_>) -> Result<String> {
    let template = env.get_template("explorer.html").map_err(template_error)?;
    template
        .render(context! {
            title => PAGE_TITLE,
            controls => &page.controls,
            chart => &page.chart,
            narrative => &page.narrative,
            table => &page.table,
        })
        .map_err(template_error)
}

fn template_error(err: minijinja::Error) -> LifexpError {
    LifexpError::Template(err.to_string())
}
