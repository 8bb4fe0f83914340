//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use ranktable_report::types::{
    ContainerView, IdentityCell, LinksCell, PageView, RatingCell, ReliabilityCell, ReviewsCell,
    RowView, StarUnit, TabControlView, TableView,
};
use ranktable_report::{PageAssets, render_page};

fn main() {
    // One hand-built row; real rows come from the ranktable pipeline
    let row = RowView {
        identity: IdentityCell {
            logo_url: "logos/demo.svg".into(),
            logo_alt: "Логотип букмекера demo".into(),
            has_bonus: false,
        },
        rating: RatingCell {
            rating: 3.7,
            formatted: "3.7".into(),
            stars: vec![
                StarUnit::Filled,
                StarUnit::Filled,
                StarUnit::Filled,
                StarUnit::Filled,
                StarUnit::Empty,
            ],
            aria_label: "Рейтинг: 3.7 из 5".into(),
        },
        reviews: ReviewsCell {
            count: 12.0,
            label: "12".into(),
        },
        reliability: ReliabilityCell::default(),
        links: LinksCell::default(),
    };

    let page = PageView {
        title: "Рейтинг букмекеров".into(),
        tabs: vec![TabControlView {
            id: "byuser".into(),
            label: "Рейтинг пользователей".into(),
            selected: true,
        }],
        container_id: "rating-table-container".into(),
        container: ContainerView::Table(TableView { rows: vec![row] }),
    };

    let html = render_page(&page, &PageAssets::default());

    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
