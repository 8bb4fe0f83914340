//! Record collection to table composition.

use ranktable_report::types::{ContainerView, Placeholder, RowView, TableView};
use serde_json::Value;
use tracing::{error, warn};

use crate::boundary;
use crate::error::RowError;
use crate::row::{RenderContext, build_row};
use crate::validators::is_non_empty_collection;

/// Result of a table pass: the container content plus the input indices that
/// produced no row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
    pub view: ContainerView,
    pub skipped: Vec<usize>,
}

impl TableOutcome {
    fn placeholder(placeholder: Placeholder) -> Self {
        Self {
            view: ContainerView::Placeholder(placeholder),
            skipped: Vec::new(),
        }
    }
}

/// Build the table for `records`.
///
/// Absent, non-array or empty input yields the "no data" placeholder. Rows
/// keep input order; bad records are skipped without reindexing the rest.
pub fn build_table(records: &Value, ctx: &RenderContext<'_>) -> TableOutcome {
    build_table_with(records, ctx, build_row)
}

fn build_table_with<F>(records: &Value, ctx: &RenderContext<'_>, row: F) -> TableOutcome
where
    F: Fn(&Value, &RenderContext<'_>) -> Result<RowView, RowError>,
{
    let items = match records.as_array() {
        Some(items) if is_non_empty_collection(records) => items,
        _ => return TableOutcome::placeholder(Placeholder::NoData),
    };

    match boundary::catch(|| collect_rows(items, ctx, &row)) {
        Ok((rows, skipped)) => TableOutcome {
            view: ContainerView::Table(TableView { rows }),
            skipped,
        },
        Err(message) => {
            error!(%message, "critical error while building table");
            TableOutcome::placeholder(Placeholder::TableError)
        }
    }
}

fn collect_rows<F>(items: &[Value], ctx: &RenderContext<'_>, row: &F) -> (Vec<RowView>, Vec<usize>)
where
    F: Fn(&Value, &RenderContext<'_>) -> Result<RowView, RowError>,
{
    let mut rows = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match row(item, ctx) {
            Ok(view) => rows.push(view),
            Err(_) => {
                warn!(index, "skipped table row due to invalid data");
                skipped.push(index);
            }
        }
    }

    (rows, skipped)
}
