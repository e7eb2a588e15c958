// Tab Bar Component
// Renders the tab headers on one line and maps mouse positions back to tabs

use ratatui::{
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::{App, ElementId};
use super::Styles;

/// Separator drawn between tab headers
const SEPARATOR: &str = "│";

#[derive(Debug, Clone)]
pub struct TabBarItem {
    pub element: ElementId,
    pub name: String,
    /// `aria-selected="true"`
    pub selected: bool,
    /// Holds input focus
    pub focused: bool,
}

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct TabBar {
    pub items: Vec<TabBarItem>,
    pub color: Color,
}

impl TabBar {
    pub fn new(items: Vec<TabBarItem>, color: Color) -> Self {
        Self { items, color }
    }

    /// Build the tab bar from the controller's tab set and the document's state
    pub fn from_app(app: &App, color: Color) -> Self {
        let Some(controller) = &app.controller else {
            return Self::new(Vec::new(), color);
        };

        let doc = &app.document;
        let items = controller
            .tabs()
            .iter()
            .map(|&tab| {
                let name = doc
                    .text(tab)
                    .filter(|t| !t.trim().is_empty())
                    .or_else(|| doc.attribute(tab, "id"))
                    .unwrap_or("?")
                    .trim()
                    .to_string();
                TabBarItem {
                    element: tab,
                    name,
                    selected: doc.attribute(tab, "aria-selected") == Some("true"),
                    focused: doc.focused() == Some(tab),
                }
            })
            .collect();

        Self::new(items, color)
    }

    fn label(item: &TabBarItem) -> String {
        format!(" {} ", item.name)
    }

    /// Calculate the bounds of each tab inside `area`.
    /// Tabs pushed past the right edge are clipped or dropped.
    pub fn calculate_tab_bounds(&self, area: Rect) -> Vec<TabBounds> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let right = area.x.saturating_add(area.width);
        let separator_width = Span::raw(SEPARATOR).width() as u16;
        let mut bounds = Vec::new();
        // One leading space
        let mut current_x = area.x.saturating_add(1);

        for item in &self.items {
            if current_x >= right {
                break;
            }
            // Display width, so double-width names line up with what is drawn
            let tab_width = Span::raw(Self::label(item)).width() as u16;
            bounds.push(TabBounds {
                x: current_x,
                y: area.y,
                width: tab_width.min(right - current_x),
                height: 1,
            });
            current_x = current_x.saturating_add(tab_width + separator_width);
        }

        bounds
    }

    /// Get the index of the tab at the given coordinates
    pub fn get_tab_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        self.calculate_tab_bounds(area)
            .iter()
            .position(|b| b.contains(x, y))
    }

    /// Element under the given coordinates
    pub fn element_at(&self, area: Rect, x: u16, y: u16) -> Option<ElementId> {
        self.get_tab_at(area, x, y).map(|idx| self.items[idx].element)
    }

    pub fn build_tab_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];

        for (idx, item) in self.items.iter().enumerate() {
            let mut style = if item.selected {
                Styles::tab_selected(self.color)
            } else {
                Styles::tab_normal()
            };
            if item.focused {
                style = style.patch(Styles::tab_focused());
            }
            spans.push(Span::styled(Self::label(item), style));

            if idx + 1 < self.items.len() {
                spans.push(Span::styled(SEPARATOR, Styles::tab_separator()));
            }
        }

        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.build_tab_line()), area);
    }
}
