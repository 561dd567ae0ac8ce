// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary card and activity table markup.

use crate::models::{Summary, TableView};
use maud::{html, Markup};

/// Render the summary card.
pub fn summary_card(summary: &Summary) -> Markup {
    html! {
        div.card {
            div."card-body" {
                h4 { (summary.heading) }
                p { (summary.count_label) ": " (summary.count) }
                @for total in &summary.totals {
                    p {
                        (total.label) ": " (total.display_value())
                        @if !total.unit.is_empty() {
                            " " (total.unit)
                        }
                    }
                }
            }
        }
    }
}

/// Render the bordered, striped, hover-enabled table.
///
/// An empty view renders the header row only.
pub fn data_table(table: &TableView) -> Markup {
    html! {
        table class="table table-striped table-bordered table-hover" {
            thead {
                tr {
                    @for header in &table.headers {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in &row.cells {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TableRow, Total};
    use crate::time_utils::parse_timestamp;

    #[test]
    fn test_summary_card_text() {
        let summary = Summary {
            heading: "Oppsummering".to_string(),
            count_label: "Totalt antall aktiviteter".to_string(),
            count: 2,
            totals: vec![
                Total {
                    label: "Total distanse".to_string(),
                    value: 25.23,
                    decimals: 1,
                    unit: "km".to_string(),
                },
                Total {
                    label: "Sum verdi".to_string(),
                    value: 3.0,
                    decimals: 1,
                    unit: String::new(),
                },
            ],
        };

        let html = summary_card(&summary).into_string();
        assert!(html.contains("<p>Totalt antall aktiviteter: 2</p>"));
        assert!(html.contains("<p>Total distanse: 25.2 km</p>"));
        assert!(html.contains("<p>Sum verdi: 3.0</p>"));
    }

    #[test]
    fn test_table_escapes_cells() {
        let table = TableView {
            headers: vec!["Type".to_string()],
            rows: vec![TableRow {
                timestamp: parse_timestamp("2024-01-01").unwrap(),
                cells: vec!["<script>".to_string()],
            }],
        };

        let html = data_table(&table).into_string();
        assert!(html.contains("table table-striped table-bordered table-hover"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let table = TableView {
            headers: vec!["Dato".to_string(), "Type".to_string()],
            rows: vec![],
        };

        let html = data_table(&table).into_string();
        assert!(html.contains("<th>Dato</th><th>Type</th>"));
        assert!(html.contains("<tbody></tbody>"));
    }
}
