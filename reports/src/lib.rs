//! # ranktable-report
//!
//! Leptos SSR renderer for the operator rating table.
//!
//! This crate is the presentation half of ranktable: it owns the view-model
//! types produced by the `ranktable` pipeline and serializes them to HTML using
//! [Leptos](https://leptos.dev/) server-side rendering. Swapping this crate for
//! another renderer leaves the formatting logic untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use ranktable_report::{render_container, types::{ContainerView, Placeholder}};
//!
//! let html = render_container(&ContainerView::Placeholder(Placeholder::NoData));
//! assert!(html.contains("no-data-message"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - View-model structures (rows, cells, placeholders, tabs)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.
//! The browser module replaces the container's `innerHTML` with the output of
//! [`render_container`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{ContainerContent, RatingDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ContainerView, PageView};

/// Render a complete HTML page: tab bar, container and stylesheet.
///
/// # Example
///
/// ```rust
/// use ranktable_report::{render_page, PageAssets, types::PageView};
///
/// let page = PageView {
///     title: "Рейтинг".into(),
///     container_id: "rating-table-container".into(),
///     ..Default::default()
/// };
/// let html = render_page(&page, &PageAssets::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(page: &PageView, assets: &PageAssets) -> String {
    let doc = view! {
        <RatingDocument page=page.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the container content (table or placeholder).
///
/// The result replaces the container wholesale; it is never merged with
/// previous content.
pub fn render_container(content: &ContainerView) -> String {
    view! { <ContainerContent content=content.clone() /> }.to_html()
}

/// Script assets referenced by the static page.
///
/// # Example
///
/// ```rust
/// use ranktable_report::PageAssets;
///
/// // Boot the wasm-bindgen bundle produced for `ranktable-web`
/// let assets = PageAssets {
///     web_module_path: Some("./pkg/ranktable_web.js".into()),
/// };
/// # let _ = assets;
/// ```
#[derive(Clone, Default, Debug)]
pub struct PageAssets {
    /// Path of the `ranktable-web` JS glue module; `None` renders a static page
    pub web_module_path: Option<String>,
}
