//! Rating table and container content

use super::{
    BookmakerCell, LinksCellView, PlaceholderMessage, RatingCellView, ReliabilityCellView,
    ReviewsCellView,
};
use crate::types::{ContainerView, RowView, TableView};
use leptos::prelude::*;

/// Accessible name of the rating table
pub const TABLE_ARIA_LABEL: &str = "Рейтинг букмекеров";

/// One operator row
#[component]
pub fn RatingRow(row: RowView) -> impl IntoView {
    view! {
        <tr class="rating-table__row">
            <BookmakerCell cell=row.identity />
            <RatingCellView cell=row.rating />
            <ReviewsCellView cell=row.reviews />
            <ReliabilityCellView cell=row.reliability />
            <LinksCellView cell=row.links />
        </tr>
    }
}

/// Table of operators in input order
#[component]
pub fn RatingTable(table: TableView) -> impl IntoView {
    view! {
        <table class="rating-table" aria-label=TABLE_ARIA_LABEL>
            <tbody class="rating-table__body">
                {table
                    .rows
                    .into_iter()
                    .map(|row| view! { <RatingRow row=row /> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Whatever currently occupies the container: a table or a placeholder.
#[component]
pub fn ContainerContent(content: ContainerView) -> impl IntoView {
    match content {
        ContainerView::Table(table) => view! { <RatingTable table=table /> }.into_any(),
        ContainerView::Placeholder(placeholder) => {
            view! { <PlaceholderMessage placeholder=placeholder /> }.into_any()
        }
    }
}
