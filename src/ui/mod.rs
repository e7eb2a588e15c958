// UI module
// TUI components and views for the tab widget host

pub mod app_view;
pub mod styles;
pub mod tab_bar;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::core::{App, EventHandler};

pub use app_view::{render_app, ViewLayout};
pub use styles::{parse_color, Styles};
pub use tab_bar::{TabBar, TabBarItem, TabBounds};

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_interval = Duration::from_millis(app.config.ui.poll_interval_ms);
    let accent = parse_color(&app.config.ui.tab_color);
    let mut layout = ViewLayout::default();

    loop {
        terminal.draw(|f| layout = render_app(f, app))?;

        if event::poll(poll_interval)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);
            tracing::trace!(?app_event, "event");

            // Hit-test against the tab headers as they were last drawn
            let tab_bar = TabBar::from_app(app, accent);
            app.handle_event(app_event, |column, row| {
                tab_bar.element_at(layout.tab_bar, column, row)
            });
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
