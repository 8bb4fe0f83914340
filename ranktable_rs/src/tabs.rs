//! Tab identifiers and the selection state of the tab bar.
//!
//! Exactly one control is selected at any time. Selection changes only
//! through [`TabController::select_tab`], which ignores unknown identifiers.

use std::fmt;
use std::str::FromStr;

use ranktable_report::types::TabControlView;
use tracing::warn;

use crate::error::UnknownTab;
use crate::location::Location;

/// Query parameter carrying the selected tab
pub const TAB_QUERY_PARAM: &str = "type";

/// A known rating tab, ordered by control position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TabId {
    #[default]
    ByUser,
    ByEditors,
    ByBonus,
    BySubrating,
}

impl TabId {
    /// All tabs in position order.
    pub const ALL: [TabId; 4] = [
        TabId::ByUser,
        TabId::ByEditors,
        TabId::ByBonus,
        TabId::BySubrating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TabId::ByUser => "byuser",
            TabId::ByEditors => "byeditors",
            TabId::ByBonus => "bybonus",
            TabId::BySubrating => "bysubrating",
        }
    }

    /// Zero-based position of the control in the tab bar.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Label of the tab control.
    pub fn label(self) -> &'static str {
        match self {
            TabId::ByUser => "Рейтинг пользователей",
            TabId::ByEditors => "Рейтинг редакции",
            TabId::ByBonus => "По бонусам",
            TabId::BySubrating => "По подрейтингу",
        }
    }
}

impl FromStr for TabId {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_owned()))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tab requested by an address: the raw `type` value, or `byuser` when the
/// parameter is absent or empty.
///
/// The value is not validated here; an unknown identifier reaches
/// [`TabController::select_tab`] and the dataset lookup unchanged.
pub fn requested_tab(location: &Location) -> String {
    location
        .query_param(TAB_QUERY_PARAM)
        .filter(|value| !value.is_empty())
        .unwrap_or(TabId::ByUser.as_str())
        .to_owned()
}

/// Selection marker of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabControl {
    pub id: TabId,
    pub selected: bool,
}

impl TabControl {
    /// Value of the control's `aria-selected` attribute.
    pub fn aria_selected(&self) -> &'static str {
        if self.selected { "true" } else { "false" }
    }
}

/// Selection state of the tab bar.
#[derive(Debug, Clone)]
pub struct TabController {
    controls: Vec<TabControl>,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(TabId::default())
    }
}

impl TabController {
    pub fn new(initial: TabId) -> Self {
        let controls = TabId::ALL
            .into_iter()
            .map(|id| TabControl {
                id,
                selected: id == initial,
            })
            .collect();
        Self { controls }
    }

    /// Select the control for `id`. Unknown identifiers leave every marker
    /// untouched.
    pub fn select_tab(&mut self, id: &str) -> Result<TabId, UnknownTab> {
        let tab = id.parse::<TabId>().inspect_err(|_| {
            warn!(tab = id, "unknown tab type");
        })?;
        self.select(tab);
        Ok(tab)
    }

    pub fn select(&mut self, tab: TabId) {
        for control in &mut self.controls {
            control.selected = control.id == tab;
        }
    }

    pub fn active(&self) -> TabId {
        self.controls
            .iter()
            .find(|control| control.selected)
            .map(|control| control.id)
            .unwrap_or_default()
    }

    pub fn selected_position(&self) -> usize {
        self.active().position()
    }

    pub fn controls(&self) -> &[TabControl] {
        &self.controls
    }

    /// View model of the tab bar in position order.
    pub fn tab_bar(&self) -> Vec<TabControlView> {
        self.controls
            .iter()
            .map(|control| TabControlView {
                id: control.id.as_str().to_owned(),
                label: control.id.label().to_owned(),
                selected: control.selected,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_positions(tabs: &TabController) -> Vec<usize> {
        tabs.controls()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.selected)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn identifiers_map_to_positions() {
        let ids: Vec<(&str, usize)> = TabId::ALL
            .iter()
            .map(|t| (t.as_str(), t.position()))
            .collect();
        assert_eq!(
            ids,
            vec![("byuser", 0), ("byeditors", 1), ("bybonus", 2), ("bysubrating", 3)]
        );
        assert_eq!(TabId::from_position(3), Some(TabId::BySubrating));
        assert_eq!(TabId::from_position(4), None);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("bybonus".parse::<TabId>(), Ok(TabId::ByBonus));
        assert_eq!(
            "ByBonus".parse::<TabId>(),
            Err(UnknownTab("ByBonus".into()))
        );
    }

    #[test]
    fn select_bybonus_marks_position_two() {
        let mut tabs = TabController::default();
        assert_eq!(tabs.select_tab("bybonus"), Ok(TabId::ByBonus));

        assert_eq!(selected_positions(&tabs), vec![2]);
        let aria: Vec<&str> = tabs.controls().iter().map(|c| c.aria_selected()).collect();
        assert_eq!(aria, vec!["false", "false", "true", "false"]);
    }

    #[test]
    fn unknown_selection_changes_nothing() {
        let mut tabs = TabController::new(TabId::ByEditors);
        let before = tabs.tab_bar();

        assert!(tabs.select_tab("weekly").is_err());
        assert_eq!(tabs.tab_bar(), before);
        assert_eq!(tabs.active(), TabId::ByEditors);
    }

    #[test]
    fn tab_bar_carries_labels_and_markers() {
        let tabs = TabController::new(TabId::BySubrating);
        let bar = tabs.tab_bar();
        assert_eq!(bar.len(), 4);
        assert_eq!(bar.iter().filter(|t| t.selected).count(), 1);
        assert_eq!(bar[3].id, "bysubrating");
        assert_eq!(tabs.selected_position(), 3);
    }

    #[test]
    fn requested_tab_defaults_to_byuser() {
        assert_eq!(requested_tab(&Location::parse("/rating")), "byuser");
        assert_eq!(requested_tab(&Location::parse("/rating?type=")), "byuser");
        assert_eq!(
            requested_tab(&Location::parse("/rating?type=byeditors")),
            "byeditors"
        );
        assert_eq!(requested_tab(&Location::parse("/?type=weekly")), "weekly");
    }
}
