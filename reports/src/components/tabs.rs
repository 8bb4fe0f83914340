//! Tab navigation components

use crate::types::TabControlView;
use leptos::prelude::*;

/// Tab bar. Control order is the tab position used by the browser module.
#[component]
pub fn TabBar(tabs: Vec<TabControlView>) -> impl IntoView {
    view! {
        <div class="tabs">
            <div class="tabs__row" role="tablist">
                {tabs.into_iter().map(|tab| view! { <TabControl tab=tab /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Single tab control; `selected` class and `aria-selected` always agree.
#[component]
pub fn TabControl(tab: TabControlView) -> impl IntoView {
    let class = if tab.selected {
        "tabs__cell tabs__cell--header selected"
    } else {
        "tabs__cell tabs__cell--header"
    };

    view! {
        <button
            type="button"
            class=class
            role="tab"
            aria-selected=tab.selected.to_string()
            data-type=tab.id
        >
            {tab.label}
        </button>
    }
}
