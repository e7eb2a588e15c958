// Host Document Abstraction
// Capabilities the tab controller needs from whatever document hosts the tabs

/// Handle to an element inside a host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Create a handle from a raw index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index of this handle
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Operations the tab controller performs against its host document.
///
/// The controller never owns the document. It holds `ElementId` handles
/// obtained at attach time and calls back through this trait, so the same
/// controller drives the markup tree in `core::markup` or a test double.
pub trait HostDocument {
    /// The tab-list container (`role="tablist"`), if the document has one
    fn tab_list(&self) -> Option<ElementId>;

    /// Tabs (`role="tab"`) inside the tab-list, in document order
    fn tabs(&self, tab_list: ElementId) -> Vec<ElementId>;

    /// The tab currently marked `aria-selected="true"` inside the tab-list
    fn selected_tab(&self, tab_list: ElementId) -> Option<ElementId>;

    /// The panel named by the tab's `aria-controls`
    fn panel_for(&self, tab: ElementId) -> Option<ElementId>;

    /// Every panel in the container shared by the tab's panels
    fn panels(&self, tab: ElementId) -> Vec<ElementId>;

    /// The auxiliary image named by the tab's `data-image`
    fn image_for(&self, tab: ElementId) -> Option<ElementId>;

    /// Every image referenced by a tab in the same tab-list
    fn images(&self, tab: ElementId) -> Vec<ElementId>;

    /// Clear (`true`) or set (`false`) the hidden marker
    fn set_visible(&mut self, element: ElementId, visible: bool);

    /// Write `aria-selected`
    fn set_selected(&mut self, tab: ElementId, selected: bool);

    /// Write `tabindex`
    fn set_tab_index(&mut self, tab: ElementId, tab_index: i32);

    /// Move input focus to an element
    fn focus(&mut self, element: ElementId);
}
