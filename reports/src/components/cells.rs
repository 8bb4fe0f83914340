//! The five cells of a rating table row

use super::{BonusIcon, ReviewIcon, Stars};
use crate::types::{BadgeView, IdentityCell, LinksCell, RatingCell, ReliabilityCell, ReviewsCell};
use leptos::prelude::*;

/// Label of the internal review link
pub const DETAILS_LINK_LABEL: &str = "Обзор";
/// Label of the external site link
pub const SITE_LINK_LABEL: &str = "Сайт";

/// Operator logo.
#[component]
pub fn BookmakerCell(cell: IdentityCell) -> impl IntoView {
    // `after-none` hides the bonus ribbon drawn by the stylesheet
    let name_class = if cell.has_bonus {
        "bookmaker-name"
    } else {
        "bookmaker-name after-none"
    };

    view! {
        <td class="rating-table__cell rating-table__cell--bookmaker">
            <div class=name_class>
                <picture>
                    <source srcset=cell.logo_url.clone() type="image/svg+xml" />
                    <img
                        src=cell.logo_url
                        alt=cell.logo_alt
                        loading="lazy"
                        width="100"
                        height="20"
                    />
                </picture>
            </div>
        </td>
    }
}

/// Stars plus numeric rating, wrapped in a labelled link.
#[component]
pub fn RatingCellView(cell: RatingCell) -> impl IntoView {
    view! {
        <td class="rating-table__cell rating-table__cell--rating">
            <a href="#" aria-label=cell.aria_label>
                <Stars stars=cell.stars />
                <span class="rating-value">{cell.formatted}</span>
            </a>
        </td>
    }
}

/// Review counter.
#[component]
pub fn ReviewsCellView(cell: ReviewsCell) -> impl IntoView {
    view! {
        <td class="rating-table__cell rating-table__cell--bonus">
            <ReviewIcon />
            <span class="reviews-count">{cell.label}</span>
        </td>
    }
}

/// Badge with a per-code CSS modifier.
#[component]
pub fn ReliabilityBadge(badge: BadgeView) -> impl IntoView {
    let class = format!("reliability-badge reliability-badge--{}", badge.code);
    view! { <span class=class>{badge.text}</span> }
}

/// Reliability badge and bonus amount; either part may be absent.
#[component]
pub fn ReliabilityCellView(cell: ReliabilityCell) -> impl IntoView {
    view! {
        <td class="rating-table__cell rating-table__cell--reliability">
            {cell.badge.map(|badge| view! { <ReliabilityBadge badge=badge /> })}
            {cell.bonus.map(|bonus| {
                view! {
                    <div class="reliability-amount">
                        <BonusIcon />
                        <span class="reliability-amount__value">{bonus}</span>
                    </div>
                }
            })}
        </td>
    }
}

/// Review page and operator site buttons.
#[component]
pub fn LinksCellView(cell: LinksCell) -> impl IntoView {
    view! {
        <td class="rating-table__cell rating-table__cell--links">
            <a href=cell.details_href class="btn btn--more">
                {DETAILS_LINK_LABEL}
            </a>
            <a href=cell.site_href class="btn btn--site" target="_blank" rel=cell.site_rel>
                {SITE_LINK_LABEL}
            </a>
        </td>
    }
}
