//! Record to row composition.
//!
//! Each cell builder is total over a validated [`BookmakerRecord`]; the only
//! ways a row is lost are a non-object record or a panic inside a builder,
//! both reported as [`RowError`].

use ranktable_report::types::{
    EXTERNAL_LINK_REL, IdentityCell, LinksCell, RatingCell, ReliabilityCell, ReviewsCell, RowView,
};
use serde_json::Value;
use tracing::{error, warn};

use crate::badge::reliability_badge;
use crate::boundary;
use crate::config::RenderConfig;
use crate::error::RowError;
use crate::format::{format_currency, format_rating};
use crate::record::BookmakerRecord;
use crate::stars::render_stars;

/// Alt text prefix of operator logos
pub const LOGO_ALT_PREFIX: &str = "Логотип букмекера";

/// Everything a row needs besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a RenderConfig,
    pub viewport_width: u32,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a RenderConfig, viewport_width: u32) -> Self {
        Self {
            config,
            viewport_width,
        }
    }
}

/// Build one row from an untrusted record.
pub fn build_row(value: &Value, ctx: &RenderContext<'_>) -> Result<RowView, RowError> {
    guarded_row(value, ctx, compose_row)
}

fn guarded_row(
    value: &Value,
    ctx: &RenderContext<'_>,
    compose: impl FnOnce(&BookmakerRecord, &RenderContext<'_>) -> RowView,
) -> Result<RowView, RowError> {
    let record = BookmakerRecord::from_value(value, ctx.config).inspect_err(|err| {
        warn!(error = %err, "invalid record for table row");
    })?;

    boundary::catch(|| compose(&record, ctx)).map_err(|message| {
        error!(id = record.display_id(), %message, "failed to build table row");
        RowError::Panicked(message)
    })
}

fn compose_row(record: &BookmakerRecord, ctx: &RenderContext<'_>) -> RowView {
    RowView {
        identity: identity_cell(record),
        rating: rating_cell(record, ctx),
        reviews: reviews_cell(record),
        reliability: reliability_cell(record, ctx.config),
        links: links_cell(record),
    }
}

fn identity_cell(record: &BookmakerRecord) -> IdentityCell {
    IdentityCell {
        logo_url: record.logo_url().to_owned(),
        logo_alt: format!("{} {}", LOGO_ALT_PREFIX, record.display_id()),
        has_bonus: record.has_bonus(),
    }
}

fn rating_cell(record: &BookmakerRecord, ctx: &RenderContext<'_>) -> RatingCell {
    let formatted = format_rating(record.rating, ctx.config);
    RatingCell {
        rating: record.rating,
        stars: render_stars(record.rating, ctx.viewport_width, ctx.config),
        aria_label: format!("Рейтинг: {} из 5", formatted),
        formatted,
    }
}

fn reviews_cell(record: &BookmakerRecord) -> ReviewsCell {
    ReviewsCell {
        count: record.review_count,
        label: record.review_count.to_string(),
    }
}

fn reliability_cell(record: &BookmakerRecord, config: &RenderConfig) -> ReliabilityCell {
    ReliabilityCell {
        badge: reliability_badge(record.badge.as_deref()),
        bonus: record
            .bonus_amount
            .map(|amount| format_currency(amount, config)),
    }
}

fn links_cell(record: &BookmakerRecord) -> LinksCell {
    LinksCell {
        details_href: record.details_href().to_owned(),
        site_href: record.site_href().to_owned(),
        site_rel: EXTERNAL_LINK_REL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ranktable_report::types::{BadgeView, StarUnit};
    use serde_json::json;

    fn row(value: Value, width: u32) -> Result<RowView, RowError> {
        let config = RenderConfig::default();
        build_row(&value, &RenderContext::new(&config, width))
    }

    #[test]
    fn builds_all_five_cells() {
        let view = row(
            json!({
                "id": "fonbet",
                "logo": "/logos/fonbet.svg",
                "rating": 4.6,
                "review_count": 1280,
                "bonus_amount": 15000,
                "badge": "no-deposit",
                "internal_link": "/review/fonbet",
                "external_link": "https://fon.bet"
            }),
            1280,
        )
        .expect("row");

        assert_eq!(
            view.identity,
            IdentityCell {
                logo_url: "/logos/fonbet.svg".into(),
                logo_alt: "Логотип букмекера fonbet".into(),
                has_bonus: true,
            }
        );
        assert_eq!(view.rating.formatted, "4.6");
        assert_eq!(view.rating.aria_label, "Рейтинг: 4.6 из 5");
        assert_eq!(view.rating.stars, vec![StarUnit::Filled; 5]);
        assert_eq!(view.reviews.label, "1280");
        assert_eq!(
            view.reliability,
            ReliabilityCell {
                badge: Some(BadgeView {
                    code: "no-deposit".into(),
                    text: "Без депозита".into(),
                }),
                bonus: Some("15.0K ₽".into()),
            }
        );
        assert_eq!(view.links.details_href, "/review/fonbet");
        assert_eq!(view.links.site_href, "https://fon.bet");
        assert_eq!(view.links.site_rel, "noopener noreferrer");
    }

    #[test]
    fn empty_record_degrades_to_placeholders() {
        let view = row(json!({}), 1280).expect("row");

        assert_eq!(view.identity.logo_url, "");
        assert_eq!(view.identity.logo_alt, "Логотип букмекера Неизвестный");
        assert!(!view.identity.has_bonus);
        assert_eq!(view.rating.formatted, "0.0");
        assert_eq!(view.rating.stars, vec![StarUnit::Empty; 5]);
        assert_eq!(view.reviews.label, "0");
        assert_eq!(view.reliability, ReliabilityCell::default());
        assert_eq!(view.links, LinksCell::default());
    }

    #[test]
    fn out_of_range_rating_shows_default_everywhere() {
        let view = row(json!({"rating": 9.1}), 1280).expect("row");
        assert_eq!(view.rating.rating, 0.0);
        assert_eq!(view.rating.formatted, "0.0");
        assert_eq!(view.rating.aria_label, "Рейтинг: 0.0 из 5");
    }

    #[test]
    fn mobile_width_uses_compact_star() {
        let view = row(json!({"rating": 4.9}), 375).expect("row");
        assert_eq!(view.rating.stars, vec![StarUnit::Filled]);
    }

    #[test]
    fn non_object_record_is_malformed() {
        assert_eq!(row(Value::Null, 1280), Err(RowError::Malformed { kind: "null" }));
        assert_eq!(row(json!(3), 1280), Err(RowError::Malformed { kind: "number" }));
    }

    #[test]
    fn panicking_cell_skips_row() {
        let config = RenderConfig::default();
        let ctx = RenderContext::new(&config, 1280);
        let result = guarded_row(&json!({"id": "x"}), &ctx, |_, _| panic!("boom"));
        assert_eq!(result, Err(RowError::Panicked("boom".into())));
    }
}
