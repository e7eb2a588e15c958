// Application State
// Host document, tab controller and lifecycle flags

use super::{AppConfig, AppEvent, Document, HostDocument, TabController};
use super::document::ElementId;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (compiled defaults plus CLI overrides)
    pub config: AppConfig,

    /// The host document the tabs live in
    pub document: Document,

    /// Bound tab behavior; `None` when the document has no usable tab-list
    pub controller: Option<TabController>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create an application around an already loaded document
    pub fn new(config: AppConfig, mut document: Document) -> Self {
        let controller = TabController::attach(&mut document);
        Self {
            config,
            document,
            controller,
            should_quit: false,
        }
    }

    /// Apply an event; `hit_test` maps a click position to the element under it
    pub fn handle_event<F>(&mut self, event: AppEvent, hit_test: F)
    where
        F: FnOnce(u16, u16) -> Option<ElementId>,
    {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::Navigate(key) => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.navigate(&mut self.document, key);
                }
            }
            AppEvent::Activate => {
                if let Some(focused) = self.document.focused() {
                    self.click(focused);
                }
            }
            AppEvent::Click { column, row } => {
                if let Some(target) = hit_test(column, row) {
                    self.click(target);
                }
            }
            AppEvent::None => {}
        }
    }

    /// Dispatch a click to the tab controller
    pub fn click(&mut self, target: ElementId) -> bool {
        match &self.controller {
            Some(controller) => controller.select(&mut self.document, target),
            None => false,
        }
    }

    /// The tab currently marked selected
    pub fn selected_tab(&self) -> Option<ElementId> {
        let controller = self.controller.as_ref()?;
        self.document.selected_tab(controller.tab_list())
    }

    /// Text of the first visible panel
    pub fn visible_panel_text(&self) -> Option<&str> {
        let controller = self.controller.as_ref()?;
        let first = *controller.tabs().first()?;
        self.document
            .panels(first)
            .into_iter()
            .find(|&p| !self.document.is_hidden(p))
            .and_then(|p| self.document.text(p))
    }

    /// Text of the first visible auxiliary image
    pub fn visible_image_text(&self) -> Option<&str> {
        let controller = self.controller.as_ref()?;
        let first = *controller.tabs().first()?;
        self.document
            .images(first)
            .into_iter()
            .find(|&i| !self.document.is_hidden(i))
            .and_then(|i| self.document.text(i))
    }

    /// Whether any tab declares an auxiliary image
    pub fn has_images(&self) -> bool {
        self.controller
            .as_ref()
            .and_then(|c| c.tabs().first().copied())
            .map(|first| !self.document.images(first).is_empty())
            .unwrap_or(false)
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
