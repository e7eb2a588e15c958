// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{App, ElementId};
use super::{parse_color, Styles, TabBar};

/// Screen regions from the last render, kept for click hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewLayout {
    pub tab_bar: Rect,
}

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) -> ViewLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab headers
            Constraint::Min(0),    // Panel (and image)
            Constraint::Length(4), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let tab_bar = TabBar::from_app(app, parse_color(&app.config.ui.tab_color));
    tab_bar.render(f, chunks[1]);

    render_main_content(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    ViewLayout { tab_bar: chunks[1] }
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.document.title().unwrap_or("Tab Panels");
    let header = Paragraph::new(title)
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the visible panel, with the visible image beside it when there is one
fn render_main_content(f: &mut Frame, app: &App, area: Rect) {
    if app.controller.is_none() {
        let notice = Paragraph::new("This document has no tab-list; nothing to switch.")
            .style(Styles::placeholder())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(notice, area);
        return;
    }

    let (panel_area, image_area) = if app.config.ui.show_images && app.has_images() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);
        (split[0], Some(split[1]))
    } else {
        (area, None)
    };

    let title = app
        .selected_tab()
        .and_then(|tab| app.document.text(tab))
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let panel = match app.visible_panel_text() {
        Some(text) => Paragraph::new(text.to_string()),
        None => Paragraph::new("No panel is visible").style(Styles::placeholder()),
    };
    f.render_widget(
        panel.wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_panel())
                .title(title),
        ),
        panel_area,
    );

    if let Some(image_area) = image_area {
        let image = Paragraph::new(app.visible_image_text().unwrap_or("").to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_image()),
        );
        f.render_widget(image, image_area);
    }
}

/// Render key help and the widget's focus/selection status
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.config.ui.mouse_enabled {
        "←/→: Move focus | Enter/Space: Select focused | Click: Select | q: Quit"
    } else {
        "←/→: Move focus | Enter/Space: Select focused | q: Quit"
    };

    let status = match &app.controller {
        Some(controller) => {
            let name = |tab: ElementId| {
                app.document
                    .text(tab)
                    .map(|t| t.trim().to_string())
                    .unwrap_or_default()
            };
            let focused = app
                .document
                .focused()
                .map(name)
                .unwrap_or_else(|| "-".to_string());
            let selected = app.selected_tab().map(name).unwrap_or_else(|| "-".to_string());
            format!(
                "active {}/{} · focus: {} · selected: {}",
                controller.active_index() + 1,
                controller.tab_count(),
                focused,
                selected
            )
        }
        None => "no tab-list".to_string(),
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(help_text, Styles::footer())),
        Line::from(Span::styled(status, Styles::status())),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppConfig, AppEvent, Document};
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    const MARKUP: &str = r#"
title: Planets
root:
  tag: main
  children:
    - tag: div
      attributes: { role: tablist }
      children:
        - tag: button
          text: Mercury
          attributes: { role: tab, id: t1, aria-controls: p1, aria-selected: true }
        - tag: button
          text: Venus
          attributes: { role: tab, id: t2, aria-controls: p2, aria-selected: false }
    - tag: article
      text: Closest to the sun
      attributes: { role: tabpanel, id: p1 }
    - tag: article
      text: Hottest planet
      attributes: { role: tabpanel, id: p2, hidden: true }
"#;

    fn draw(app: &App) -> (String, ViewLayout) {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut layout = ViewLayout::default();
        terminal.draw(|f| layout = render_app(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let screen = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (screen, layout)
    }

    #[test]
    fn test_renders_selected_panel_only() {
        let app = App::new(AppConfig::default(), Document::from_yaml(MARKUP).unwrap());
        let (screen, layout) = draw(&app);
        assert!(screen.contains("Planets"));
        assert!(screen.contains("Mercury"));
        assert!(screen.contains("Closest to the sun"));
        assert!(!screen.contains("Hottest planet"));
        assert_eq!(layout.tab_bar.y, 3);
    }

    #[test]
    fn test_click_on_rendered_tab_switches_panel() {
        let mut app = App::new(AppConfig::default(), Document::from_yaml(MARKUP).unwrap());
        let (_, layout) = draw(&app);

        let bar = TabBar::from_app(&app, parse_color("cyan"));
        let bounds = bar.calculate_tab_bounds(layout.tab_bar);
        let (column, row) = (bounds[1].x, bounds[1].y);

        app.handle_event(AppEvent::Click { column, row }, |c, r| {
            bar.element_at(layout.tab_bar, c, r)
        });

        let (screen, _) = draw(&app);
        assert!(screen.contains("Hottest planet"));
        assert!(!screen.contains("Closest to the sun"));
    }

    #[test]
    fn test_footer_reports_focus() {
        let mut app = App::new(AppConfig::default(), Document::from_yaml(MARKUP).unwrap());
        app.handle_event(AppEvent::Navigate(KeyCode::Right), |_, _| None);
        let (screen, _) = draw(&app);
        assert!(screen.contains("active 2/2"));
        assert!(screen.contains("focus: Venus"));
        assert!(screen.contains("selected: Mercury"));
    }
}
