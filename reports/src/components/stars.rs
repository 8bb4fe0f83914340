//! Star rating visual

use super::{StarEmptyIcon, StarFilledIcon};
use crate::types::StarUnit;
use leptos::prelude::*;

/// Row of star icons, filled units first.
#[component]
pub fn Stars(stars: Vec<StarUnit>) -> impl IntoView {
    view! {
        <span class="stars">
            {stars
                .into_iter()
                .map(|unit| match unit {
                    StarUnit::Filled => view! { <StarFilledIcon /> }.into_any(),
                    StarUnit::Empty => view! { <StarEmptyIcon /> }.into_any(),
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
