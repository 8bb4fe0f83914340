//! Loading / error / no-data messages

use crate::types::Placeholder;
use leptos::prelude::*;

/// Paragraph standing in for the table.
#[component]
pub fn PlaceholderMessage(placeholder: Placeholder) -> impl IntoView {
    view! { <p class=placeholder.css_class()>{placeholder.message()}</p> }
}
