// Tab Controller
// Keyboard navigation and click selection for an ARIA tab widget

use crossterm::event::KeyCode;

use super::document::{ElementId, HostDocument};

/// Drives one tab-list inside a host document.
///
/// The tab set is captured once at attach time and never re-queried.
/// `active_index` is the tab that owns `tabindex="0"`; it moves only with
/// arrow-key navigation. Selection (`aria-selected` and panel visibility)
/// is tracked by the document itself, so clicking a tab does not move
/// `active_index`.
#[derive(Debug, Clone)]
pub struct TabController {
    tab_list: ElementId,
    tabs: Vec<ElementId>,
    active_index: usize,
}

impl TabController {
    /// Bind to the document's tab-list.
    ///
    /// Returns `None` when the document has no tab-list or the tab-list has
    /// no tabs; no behavior is bound in that case.
    pub fn attach<D: HostDocument>(doc: &mut D) -> Option<Self> {
        let Some(tab_list) = doc.tab_list() else {
            tracing::warn!("no tab-list in document, tab behavior not bound");
            return None;
        };

        let tabs = doc.tabs(tab_list);
        if tabs.is_empty() {
            tracing::warn!("tab-list has no tabs, tab behavior not bound");
            return None;
        }

        // Exactly one tab is reachable with Tab-key focus
        for (idx, &tab) in tabs.iter().enumerate() {
            doc.set_tab_index(tab, if idx == 0 { 0 } else { -1 });
        }

        tracing::info!(tabs = tabs.len(), "tab controller attached");
        Some(Self {
            tab_list,
            tabs,
            active_index: 0,
        })
    }

    /// Index of the tab holding `tabindex="0"`
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The tab holding `tabindex="0"`
    pub fn active_tab(&self) -> ElementId {
        self.tabs[self.active_index]
    }

    /// Tabs in document order
    pub fn tabs(&self) -> &[ElementId] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab_list(&self) -> ElementId {
        self.tab_list
    }

    /// Position of an element in the tab set
    pub fn position_of(&self, element: ElementId) -> Option<usize> {
        self.tabs.iter().position(|&t| t == element)
    }

    /// Move keyboard focus between tab headers.
    ///
    /// Only Left and Right act; every other key leaves the document untouched.
    /// Navigation relocates focus and `tabindex` only. It never selects.
    /// Returns whether the key was handled.
    pub fn navigate<D: HostDocument>(&mut self, doc: &mut D, key: KeyCode) -> bool {
        let next = match key {
            KeyCode::Left => {
                if self.active_index == 0 {
                    self.tabs.len() - 1
                } else {
                    self.active_index - 1
                }
            }
            KeyCode::Right => (self.active_index + 1) % self.tabs.len(),
            _ => return false,
        };

        doc.set_tab_index(self.tabs[self.active_index], -1);
        self.active_index = next;

        let tab = self.tabs[self.active_index];
        doc.set_tab_index(tab, 0);
        doc.focus(tab);

        tracing::debug!(active_index = self.active_index, "tab focus moved");
        true
    }

    /// Select a tab as if it had been clicked.
    ///
    /// Marks it `aria-selected`, shows its panel and hides the others, and
    /// swaps the auxiliary image when the tab declares one. Elements outside
    /// the tab set and tabs whose panel is missing leave the document
    /// untouched. Returns whether the selection was applied.
    pub fn select<D: HostDocument>(&self, doc: &mut D, tab: ElementId) -> bool {
        if self.position_of(tab).is_none() {
            tracing::debug!(element = tab.index(), "click target is not a tab");
            return false;
        }

        let Some(panel) = doc.panel_for(tab) else {
            tracing::warn!(element = tab.index(), "tab controls no existing panel, ignoring click");
            return false;
        };

        if let Some(previous) = doc.selected_tab(self.tab_list) {
            doc.set_selected(previous, false);
        }
        doc.set_selected(tab, true);

        for other in doc.panels(tab) {
            doc.set_visible(other, false);
        }
        doc.set_visible(panel, true);

        if let Some(image) = doc.image_for(tab) {
            for other in doc.images(tab) {
                doc.set_visible(other, false);
            }
            doc.set_visible(image, true);
        }

        tracing::debug!(element = tab.index(), "tab selected");
        true
    }
}
