//! Render orchestration: tab state, container content and the address bar.
//!
//! [`RatingApp`] owns all mutable state. Loading is split into
//! [`RatingApp::begin_load`] and [`RatingApp::finish_load`] so a caller that
//! shares the app (the browser module) can drop its borrow while the fetch is
//! pending. The `async` helpers chain both halves for callers that own the
//! app outright.

use ranktable_report::types::{ContainerView, PageView, Placeholder};
use tracing::{debug, error, warn};

use crate::config::RenderConfig;
use crate::error::LoadError;
use crate::location::AddressBar;
use crate::row::RenderContext;
use crate::source::{DataSource, Dataset};
use crate::table::build_table;
use crate::tabs::{TAB_QUERY_PARAM, TabController, TabId, requested_tab};

/// Rating page state.
#[derive(Debug)]
pub struct RatingApp<A: AddressBar> {
    config: RenderConfig,
    viewport_width: u32,
    tabs: TabController,
    container: ContainerView,
    skipped: Vec<usize>,
    address: A,
}

impl<A: AddressBar> RatingApp<A> {
    pub fn new(config: RenderConfig, viewport_width: u32, address: A) -> Self {
        Self {
            config,
            viewport_width,
            tabs: TabController::default(),
            container: ContainerView::default(),
            skipped: Vec::new(),
            address,
        }
    }

    /// Show the loading placeholder.
    pub fn begin_load(&mut self) {
        self.container = ContainerView::Placeholder(Placeholder::Loading);
        self.skipped.clear();
    }

    /// Apply the outcome of a fetch requested for `tab`.
    ///
    /// Completions are applied in arrival order; the last one wins.
    pub fn finish_load(&mut self, tab: &str, result: Result<Dataset, LoadError>) {
        let dataset = match result {
            Ok(dataset) => dataset,
            Err(err) => {
                error!(error = %err, tab, "failed to load or process rating data");
                self.container = ContainerView::Placeholder(Placeholder::LoadError);
                return;
            }
        };

        // Unknown ids are logged by the controller; the lookup still runs.
        if self.tabs.select_tab(tab).is_err() {
            debug!(tab, "tab markers left unchanged");
        }

        match dataset.subset(tab) {
            Some(records) => {
                let ctx = RenderContext::new(&self.config, self.viewport_width);
                let outcome = build_table(records, &ctx);
                self.container = outcome.view;
                self.skipped = outcome.skipped;
            }
            None => {
                debug!(tab, "dataset has no subset for tab");
                self.container = ContainerView::Placeholder(Placeholder::NoDataForSelection);
            }
        }
    }

    /// Start a load for the tab named by the current address. Returns the
    /// requested identifier.
    pub fn request_from_address(&mut self) -> String {
        let tab = requested_tab(&self.address.current());
        self.begin_load();
        tab
    }

    /// Start a load for the control at `position` and push an address entry
    /// with its identifier. Positions outside the tab bar are ignored.
    pub fn request_position(&mut self, position: usize) -> Option<TabId> {
        let Some(tab) = TabId::from_position(position) else {
            warn!(position, "no tab at position");
            return None;
        };
        self.begin_load();
        let next = self
            .address
            .current()
            .with_query_param(TAB_QUERY_PARAM, tab.as_str());
        self.address.push(next);
        Some(tab)
    }

    /// Loading placeholder, fetch, then the outcome for `tab`.
    pub async fn load_and_render<S: DataSource>(&mut self, source: &S, tab: &str) {
        self.begin_load();
        let result = source.fetch().await;
        self.finish_load(tab, result);
    }

    /// Render the tab named by the current address. Used at start-up and
    /// after history navigation; the address is not rewritten.
    pub async fn load_from_address<S: DataSource>(&mut self, source: &S) {
        let tab = self.request_from_address();
        let result = source.fetch().await;
        self.finish_load(&tab, result);
    }

    /// Activate the control at `position`.
    pub async fn click_tab<S: DataSource>(&mut self, source: &S, position: usize) {
        if let Some(tab) = self.request_position(position) {
            let result = source.fetch().await;
            self.finish_load(tab.as_str(), result);
        }
    }

    /// Width used by the next table pass.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn container(&self) -> &ContainerView {
        &self.container
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    /// Input indices skipped by the last table pass.
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut A {
        &mut self.address
    }

    /// Static page view of the current state.
    pub fn page_view(&self) -> PageView {
        PageView {
            title: self.config.page_title.clone(),
            tabs: self.tabs.tab_bar(),
            container_id: self.config.container_id.clone(),
            container: self.container.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{History, Location};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use ranktable_report::types::TableView;
    use serde_json::json;

    struct Unreachable;

    impl DataSource for Unreachable {
        async fn fetch(&self) -> Result<Dataset, LoadError> {
            Err(LoadError::Http { status: 503 })
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_value(json!({
            "byuser": [{"id": "alpha", "rating": 4.2}, {"id": "beta", "rating": 3.0}],
            "byeditors": [{"id": "gamma", "rating": 4.9}],
            "bybonus": [],
            "bysubrating": null,
        }))
        .unwrap()
    }

    fn app_at(address: &str) -> RatingApp<History> {
        RatingApp::new(
            RenderConfig::default(),
            1280,
            History::new(Location::parse(address)),
        )
    }

    fn row_ids(app: &RatingApp<History>) -> Vec<String> {
        match app.container() {
            ContainerView::Table(TableView { rows }) => rows
                .iter()
                .map(|r| r.identity.logo_alt.replace("Логотип букмекера ", ""))
                .collect(),
            ContainerView::Placeholder(p) => panic!("expected table, got {:?}", p),
        }
    }

    #[test]
    fn starts_on_byuser_without_type_param() {
        let mut app = app_at("/rating");
        block_on(app.load_from_address(&dataset()));

        assert_eq!(app.tabs().active(), TabId::ByUser);
        assert_eq!(row_ids(&app), vec!["alpha", "beta"]);
        assert_eq!(app.address().len(), 1);
    }

    #[test]
    fn direct_address_selects_tab() {
        let mut app = app_at("/rating?type=byeditors");
        block_on(app.load_from_address(&dataset()));

        assert_eq!(app.tabs().selected_position(), 1);
        assert_eq!(row_ids(&app), vec!["gamma"]);
    }

    #[test]
    fn click_pushes_address_and_back_restores() {
        let data = dataset();
        let mut app = app_at("/rating");
        block_on(app.load_from_address(&data));

        block_on(app.click_tab(&data, 1));
        assert_eq!(
            app.address().current().to_string(),
            "/rating?type=byeditors"
        );
        assert_eq!(app.address().len(), 2);
        assert_eq!(row_ids(&app), vec!["gamma"]);

        assert!(app.address_mut().back());
        block_on(app.load_from_address(&data));
        assert_eq!(app.tabs().active(), TabId::ByUser);
        assert_eq!(row_ids(&app), vec!["alpha", "beta"]);
        assert_eq!(app.address().len(), 2);

        assert!(app.address_mut().forward());
        block_on(app.load_from_address(&data));
        assert_eq!(app.tabs().active(), TabId::ByEditors);
    }

    #[test]
    fn click_bybonus_writes_type_param() {
        let mut app = app_at("/");
        block_on(app.click_tab(&dataset(), 2));

        assert_eq!(app.tabs().selected_position(), 2);
        assert_eq!(
            app.address().current().query_param("type"),
            Some("bybonus")
        );
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::NoData)
        );
    }

    #[test]
    fn click_outside_tab_bar_is_ignored() {
        let mut app = app_at("/");
        block_on(app.click_tab(&dataset(), 7));

        assert_eq!(app.address().len(), 1);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::Loading)
        );
    }

    #[test]
    fn null_subset_shows_selection_placeholder() {
        let mut app = app_at("/?type=bysubrating");
        block_on(app.load_from_address(&dataset()));

        assert_eq!(app.tabs().active(), TabId::BySubrating);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::NoDataForSelection)
        );
    }

    #[test]
    fn unknown_type_keeps_selection() {
        let data = dataset();
        let mut app = app_at("/");
        block_on(app.click_tab(&data, 3));

        app.address_mut().push(Location::parse("/?type=weekly"));
        block_on(app.load_from_address(&data));

        assert_eq!(app.tabs().active(), TabId::BySubrating);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::NoDataForSelection)
        );
    }

    #[test]
    fn failed_fetch_shows_error_and_keeps_tab() {
        let mut app = app_at("/?type=byeditors");
        block_on(app.load_from_address(&Unreachable));

        assert_eq!(app.tabs().active(), TabId::ByUser);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::LoadError)
        );
    }

    #[test]
    fn begin_load_replaces_previous_table() {
        let mut app = app_at("/");
        block_on(app.load_from_address(&dataset()));
        assert!(app.container().is_table());

        app.begin_load();
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::Loading)
        );
    }

    #[test]
    fn late_completion_wins() {
        let data = dataset();
        let mut app = app_at("/");
        let first = app.request_position(1);
        let second = app.request_position(0);

        app.finish_load(second.unwrap().as_str(), Ok(data.clone()));
        app.finish_load(first.unwrap().as_str(), Ok(data));

        assert_eq!(app.tabs().active(), TabId::ByEditors);
        assert_eq!(app.address().current().query_param("type"), Some("byuser"));
    }

    #[test]
    fn load_and_render_known_tab_selects_it() {
        let mut app = app_at("/");
        block_on(app.load_and_render(&dataset(), "byeditors"));

        assert_eq!(app.tabs().active(), TabId::ByEditors);
        assert_eq!(row_ids(&app), vec!["gamma"]);
        assert_eq!(app.address().len(), 1);
    }

    #[test]
    fn load_and_render_missing_tab_keeps_markers() {
        let data = dataset();
        let mut app = app_at("/");
        block_on(app.load_and_render(&data, "bybonus"));
        let before = app.tabs().tab_bar();

        block_on(app.load_and_render(&data, "weekly"));

        assert_eq!(app.tabs().tab_bar(), before);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::NoDataForSelection)
        );
    }

    #[test]
    fn load_and_render_failed_fetch_keeps_markers() {
        let mut app = app_at("/");
        block_on(app.load_and_render(&dataset(), "bysubrating"));

        block_on(app.load_and_render(&Unreachable, "byuser"));

        assert_eq!(app.tabs().active(), TabId::BySubrating);
        assert_eq!(
            app.container(),
            &ContainerView::Placeholder(Placeholder::LoadError)
        );
    }

    #[test]
    fn page_view_reflects_state() {
        let mut app = app_at("/?type=bybonus");
        block_on(app.load_from_address(&dataset()));
        let page = app.page_view();

        assert_eq!(page.container_id, "rating-table-container");
        assert_eq!(page.title, "Рейтинг букмекеров");
        assert_eq!(
            page.tabs.iter().position(|t| t.selected),
            Some(TabId::ByBonus.position())
        );
    }
}
