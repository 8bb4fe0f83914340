//! View-model types for the rating table.
//!
//! These types are the structured output of the rendering pipeline. They're
//! designed to be:
//!
//! - **Serializable** - the CLI can dump them as JSON via serde
//! - **Clone-friendly** - components take them by value
//! - **Presentation-free** - no markup lives here, only display-ready values
//!
//! # Example
//!
//! ```rust
//! use ranktable_report::types::{ContainerView, Placeholder};
//!
//! let view = ContainerView::Placeholder(Placeholder::Loading);
//! assert!(!view.is_table());
//! ```

use serde::{Deserialize, Serialize};

/// One visual unit of a star rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarUnit {
    /// Filled (gold) star
    Filled,
    /// Empty (grey) star
    Empty,
}

/// Stand-in content that replaces the table.
///
/// Every variant fully replaces the container; placeholders are never mixed
/// with table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Data request in flight
    Loading,
    /// The record collection is absent or empty
    NoData,
    /// The dataset has no subset for the selected tab
    NoDataForSelection,
    /// Table construction failed unexpectedly
    TableError,
    /// The dataset could not be fetched or decoded
    LoadError,
}

impl Placeholder {
    /// User-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Placeholder::Loading => "Загрузка данных...",
            Placeholder::NoData => "Нет данных для отображения",
            Placeholder::NoDataForSelection => "Нет данных для выбранного типа рейтинга",
            Placeholder::TableError => "Произошла ошибка при создании таблицы",
            Placeholder::LoadError => {
                "Не удалось загрузить данные рейтинга. Пожалуйста, попробуйте позже."
            }
        }
    }

    /// CSS class of the message paragraph.
    pub fn css_class(self) -> &'static str {
        match self {
            Placeholder::Loading => "loading-message",
            Placeholder::NoData | Placeholder::NoDataForSelection => "no-data-message",
            Placeholder::TableError | Placeholder::LoadError => "error-message",
        }
    }
}

/// Identity cell: operator logo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityCell {
    /// Logo URL, empty when the record has none
    pub logo_url: String,
    /// Alt text for the logo image
    pub logo_alt: String,
    /// Whether the operator has a positive bonus (styling hook only)
    pub has_bonus: bool,
}

/// Rating cell: numeric rating plus star visual.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingCell {
    /// Validated rating value
    pub rating: f64,
    /// Rating formatted for display, e.g. `"4.5"`
    pub formatted: String,
    /// Star units, filled first
    pub stars: Vec<StarUnit>,
    /// Accessible label for the rating link
    pub aria_label: String,
}

/// Reviews cell: number of user reviews.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsCell {
    /// Validated review count
    pub count: f64,
    /// Review count as displayed
    pub label: String,
}

/// Reliability badge shown above the bonus amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeView {
    /// Raw badge code, used as CSS modifier
    pub code: String,
    /// Display text
    pub text: String,
}

/// Reliability cell: optional badge and optional bonus amount.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityCell {
    /// Badge, omitted for absent/empty/`none` codes
    pub badge: Option<BadgeView>,
    /// Formatted bonus, omitted unless strictly positive
    pub bonus: Option<String>,
}

/// Links cell: review page and operator site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksCell {
    /// Internal review link
    pub details_href: String,
    /// External operator site
    pub site_href: String,
    /// `rel` policy for the external link
    pub site_rel: String,
}

impl Default for LinksCell {
    fn default() -> Self {
        Self {
            details_href: "#".into(),
            site_href: "#".into(),
            site_rel: EXTERNAL_LINK_REL.into(),
        }
    }
}

/// Navigation policy carried by every external link.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

/// One table row: five cells in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    /// Logo cell
    pub identity: IdentityCell,
    /// Rating + stars cell
    pub rating: RatingCell,
    /// Review count cell
    pub reviews: ReviewsCell,
    /// Badge + bonus cell
    pub reliability: ReliabilityCell,
    /// Links cell
    pub links: LinksCell,
}

/// A rendered table: surviving rows in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    /// Rows in input order
    pub rows: Vec<RowView>,
}

/// Content of the single rendered container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum ContainerView {
    /// A placeholder message
    Placeholder(Placeholder),
    /// A rating table
    Table(TableView),
}

impl ContainerView {
    /// True when the container holds a table rather than a placeholder.
    pub fn is_table(&self) -> bool {
        matches!(self, ContainerView::Table(_))
    }

    /// Placeholder shown, if any.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            ContainerView::Placeholder(p) => Some(*p),
            ContainerView::Table(_) => None,
        }
    }
}

impl Default for ContainerView {
    fn default() -> Self {
        ContainerView::Placeholder(Placeholder::Loading)
    }
}

/// One tab control in the tab bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabControlView {
    /// Tab identifier (`byuser`, `bybonus`, ...)
    pub id: String,
    /// Human label
    pub label: String,
    /// Selection marker; mirrored to `aria-selected`
    pub selected: bool,
}

/// Full static page: tab bar plus container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    /// Page title
    pub title: String,
    /// Tab controls in position order
    pub tabs: Vec<TabControlView>,
    /// Container id the browser module renders into
    pub container_id: String,
    /// Current container content
    pub container: ContainerView,
}
