// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static page layout.
//!
//! The layout is fixed once the category options are known; every update
//! afterwards only replaces the contents of the placeholders.

use crate::models::Schema;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Element ids shared by the layout and the update script.
pub const FILTER_ID: &str = "type-filter";
pub const SUMMARY_ID: &str = "summary-stats";
pub const TABLE_ID: &str = "activity-table";
pub const ERROR_ID: &str = "dashboard-error";

/// Fetches `/api/dashboard` with the current selection and swaps in the result.
const UPDATE_SCRIPT: &str = r#"
(function () {
  const filter = document.getElementById("type-filter");
  const errorBox = document.getElementById("dashboard-error");

  async function update() {
    const params = new URLSearchParams();
    if (filter) {
      for (const option of filter.selectedOptions) {
        params.append(filter.dataset.param, option.value);
      }
    }

    const response = await fetch("/api/dashboard?" + params.toString());
    let body = null;
    try {
      body = await response.json();
    } catch (e) {
      body = null;
    }
    if (!response.ok || body === null) {
      errorBox.textContent =
        (body && (body.details || body.error)) ||
        response.statusText ||
        "HTTP " + response.status;
      errorBox.hidden = false;
      return;
    }

    errorBox.hidden = true;
    body.figures.forEach(function (figure, i) {
      Plotly.react("chart-" + i, figure.data, figure.layout, figure.config || {});
    });
    document.getElementById("summary-stats").innerHTML = body.summary_html;
    document.getElementById("activity-table").innerHTML = body.table_html;
  }

  if (filter) {
    filter.addEventListener("change", update);
  }
  update();
})();
"#;

/// Render the dashboard page with the category options found at startup.
pub fn dashboard_page(schema: &Schema, categories: &[String]) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="no" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (schema.title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                script src=(PLOTLY_JS) {}
            }
            body {
                div.container {
                    h1 class="text-center my-4" { (schema.title) }

                    @if let Some(column) = &schema.category_column {
                        (filter_row(schema, column, categories))
                    }

                    div.row {
                        div.col {
                            div id=(ERROR_ID) class="alert alert-danger" role="alert" hidden {}
                            div id=(SUMMARY_ID) class="mb-4" {}
                        }
                    }

                    div.row {
                        @for (i, chart) in schema.charts.iter().enumerate() {
                            div.col {
                                h3 { (chart.heading) }
                                div id=(format!("chart-{}", i)) {}
                            }
                        }
                    }

                    h3 class="mt-4" { (schema.table_heading) }
                    div id=(TABLE_ID) {}
                }
                script { (PreEscaped(UPDATE_SCRIPT)) }
            }
        }
    };

    markup.into_string()
}

fn filter_row(schema: &Schema, column: &str, categories: &[String]) -> Markup {
    html! {
        div class="row mb-4" {
            div.col {
                label for=(FILTER_ID) { (schema.filter_label) }
                select id=(FILTER_ID) class="form-select" multiple
                    data-param=(column) aria-label=(schema.filter_placeholder) {
                    @for category in categories {
                        option value=(category) { (category) }
                    }
                }
                small class="form-text text-muted" { (schema.filter_placeholder) }
            }
        }
    }
}
