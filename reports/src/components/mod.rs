//! Leptos UI components for rendering the rating page.
//!
//! Each component is a Leptos `#[component]` function over the view-model
//! types in [`crate::types`]; none of them compute anything.
//!
//! # Component Hierarchy
//!
//! ```text
//! RatingDocument
//! ├── TabBar
//! │   └── TabControl (per tab)
//! └── ContainerContent
//!     ├── PlaceholderMessage
//!     └── RatingTable
//!         └── RatingRow
//!             ├── BookmakerCell
//!             ├── RatingCellView ── Stars
//!             ├── ReviewsCellView
//!             ├── ReliabilityCellView ── ReliabilityBadge
//!             └── LinksCellView
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`] and
//! [`crate::render_container`], but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use ranktable_report::components::{RatingTable, TabBar};
//!
//! view! {
//!     <TabBar tabs=tabs />
//!     <RatingTable table=table />
//! }
//! ```

mod cells;
mod document;
mod icons;
mod placeholder;
mod stars;
mod table;
mod tabs;

pub use cells::{
    BookmakerCell, DETAILS_LINK_LABEL, LinksCellView, RatingCellView, ReliabilityBadge,
    ReliabilityCellView, ReviewsCellView, SITE_LINK_LABEL,
};
pub use document::RatingDocument;
pub use icons::*;
pub use placeholder::PlaceholderMessage;
pub use stars::Stars;
pub use table::{ContainerContent, RatingRow, RatingTable, TABLE_ARIA_LABEL};
pub use tabs::{TabBar, TabControl};
