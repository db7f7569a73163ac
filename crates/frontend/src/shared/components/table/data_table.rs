//! Generic read-only table over serialisable rows
//!
//! ```text
//! <DataTable
//!     title="Carrier Performance"
//!     rows=Signal::derive(move || ctx.bundle.get().carrier_performance)
//!     columns=vec![
//!         ColumnSpec::new("name", "Carrier Name"),
//!         ColumnSpec::new("on_time_performance", "On-Time (%)")
//!             .format(|c: &CarrierData| format_percent(c.on_time_performance, 1)),
//!     ]
//!     key_fn=|c: &CarrierData| c.id.clone()
//! />
//! ```

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thaw::*;

pub const EMPTY_MESSAGE: &str = "No data available.";

pub type CellFormatter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// One table column: the serialised field it reads and how to print it
pub struct ColumnSpec<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub formatter: Option<CellFormatter<T>>,
    pub class: Option<&'static str>,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            formatter: self.formatter.clone(),
            class: self.class,
        }
    }
}

impl<T> ColumnSpec<T> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            formatter: None,
            class: None,
        }
    }

    pub fn format(mut self, formatter: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellModel {
    pub text: String,
    pub class: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub key: String,
    pub cells: Vec<CellModel>,
}

/// Rendered text of every cell, computed ahead of the view
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowModel>,
}

impl TableModel {
    pub fn build<T, K>(rows: &[T], columns: &[ColumnSpec<T>], key_fn: K) -> Self
    where
        T: Serialize,
        K: Fn(&T) -> String,
    {
        let rows = rows
            .iter()
            .map(|row| {
                // Serialised once per row, only when some column needs a raw field
                let raw = columns
                    .iter()
                    .any(|c| c.formatter.is_none())
                    .then(|| serde_json::to_value(row).unwrap_or(Value::Null));

                let cells = columns
                    .iter()
                    .map(|col| {
                        let text = match (&col.formatter, &raw) {
                            (Some(format), _) => format(row),
                            (None, Some(value)) => raw_field(value, col.key),
                            (None, None) => String::new(),
                        };
                        CellModel {
                            text,
                            class: col.class,
                        }
                    })
                    .collect();

                RowModel {
                    key: key_fn(row),
                    cells,
                }
            })
            .collect();

        Self {
            headers: columns.iter().map(|c| c.header).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Span of the placeholder cell shown when there are no rows
    pub fn colspan(&self) -> usize {
        self.headers.len()
    }
}

/// Field `key` of a serialised row as display text; missing or null is empty
fn raw_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn DataTable<T, K>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<ColumnSpec<T>>,
    key_fn: K,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
    K: Fn(&T) -> String + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let model = Memo::new(move |_| {
        columns.with_value(|cols| rows.with(|r| TableModel::build(r, cols, &key_fn)))
    });

    view! {
        <div class="data-table">
            {title.map(|t| view! { <h4 class="data-table__title">{t}</h4> })}
            <Table>
                <TableHeader>
                    <TableRow>
                        {move || model.get().headers.into_iter().map(|h| view! {
                            <TableHeaderCell>{h}</TableHeaderCell>
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let model = model.get();
                        if model.is_empty() {
                            view! {
                                <TableRow>
                                    <TableCell
                                        class="data-table__empty"
                                        attr:colspan=model.colspan().to_string()
                                    >
                                        {EMPTY_MESSAGE}
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        } else {
                            model
                                .rows
                                .into_iter()
                                .map(|row| view! {
                                    <TableRow attr:data-key=row.key>
                                        {row.cells.into_iter().map(|cell| view! {
                                            <TableCell class=cell.class.unwrap_or("")>
                                                {cell.text}
                                            </TableCell>
                                        }).collect_view()}
                                    </TableRow>
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_executive::{CarrierData, ClientData};

    fn carrier(id: &str, otp: f64) -> CarrierData {
        CarrierData {
            id: id.to_string(),
            name: format!("Carrier {id}"),
            on_time_performance: otp,
            cost_per_shipment: 12.5,
            damage_rate: 0.8,
        }
    }

    fn columns() -> Vec<ColumnSpec<CarrierData>> {
        vec![
            ColumnSpec::new("name", "Carrier Name"),
            ColumnSpec::new("on_time_performance", "On-Time (%)")
                .format(|c: &CarrierData| format!("{:.1}%", c.on_time_performance))
                .class("data-table__cell--good"),
            ColumnSpec::new("cost_per_shipment", "Cost/Shipment"),
        ]
    }

    #[test]
    fn test_formatter_and_raw_cells() {
        let model = TableModel::build(&[carrier("T1", 96.24)], &columns(), |c| c.id.clone());
        assert_eq!(model.headers, vec!["Carrier Name", "On-Time (%)", "Cost/Shipment"]);
        let row = &model.rows[0];
        assert_eq!(row.key, "T1");
        let texts: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Carrier T1", "96.2%", "12.5"]);
        assert_eq!(row.cells[1].class, Some("data-table__cell--good"));
    }

    #[test]
    fn test_empty_rows_keep_colspan() {
        let model = TableModel::build(&[], &columns(), |c: &CarrierData| c.id.clone());
        assert!(model.is_empty());
        assert_eq!(model.colspan(), 3);
    }

    #[test]
    fn test_raw_field_values() {
        let client = ClientData {
            id: "C100".to_string(),
            name: "Client A Corp".to_string(),
            revenue: 120_000.0,
            satisfaction_score: 4.5,
            nps: 42.0,
            last_feedback: None,
            subsidiary_id: "gfs".to_string(),
        };
        let cols = vec![
            ColumnSpec::new("nps", "NPS"),
            ColumnSpec::new("last_feedback", "Feedback"),
            ColumnSpec::new("missing", "Missing"),
        ];
        let model = TableModel::build(&[client], &cols, |c| c.id.clone());
        let texts: Vec<&str> = model.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["42", "", ""]);
    }
}
