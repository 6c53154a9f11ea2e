//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Rendering is a pure read of the
//! app: the view state decides which of the three screens is drawn, and
//! nothing here mutates state.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, ViewState};
use crate::feed::snippet;

/// Display cut-offs, matching the card layout this viewer paginates.
const TITLE_CHARS: usize = 55;
const DESCRIPTION_CHARS: usize = 100;

/// Draw the complete UI for one frame.
///
/// `Loading` shows only the busy line, `Error` only the message; the feed
/// and pagination bar appear exclusively in `Ready`.
pub fn draw(app: &App, frame: &mut Frame) {
    match &app.view {
        ViewState::Loading => draw_loading(frame, frame.area()),
        ViewState::Error(message) => draw_error(message, frame, frame.area()),
        ViewState::Ready => {
            let [main_area, status_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                    .areas(frame.area());

            draw_article_list(app, frame, main_area);
            draw_status_bar(app, frame, status_area);
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let busy = Paragraph::new(Line::from(Span::styled(
        " Fetching latest news…",
        Style::default().fg(Color::Yellow),
    )))
    .block(Block::default().title(" Latest News ").borders(Borders::ALL));
    frame.render_widget(busy, area);
}

fn draw_error(message: &str, frame: &mut Frame, area: Rect) {
    let error = Paragraph::new(Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]))
    .block(Block::default().title(" Latest News ").borders(Borders::ALL));
    frame.render_widget(error, area);
}

/// Render the current page of articles.
fn draw_article_list(app: &App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .visible()
        .iter()
        .map(|article| {
            let meta = Line::from(vec![
                Span::styled(
                    format!("{:<20}", article.published_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(&article.author, Style::default().fg(Color::Cyan)),
            ]);
            let title = Line::from(Span::styled(
                snippet(&article.title, TITLE_CHARS),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            let description = Line::from(Span::styled(
                snippet(&article.description, DESCRIPTION_CHARS),
                Style::default().fg(Color::Gray),
            ));
            let link = Line::from(Span::styled(
                article.url.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));

            ListItem::new(vec![meta, title, description, link, Line::raw("")])
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .title(" Latest News ")
            .borders(Borders::ALL),
    );

    frame.render_widget(list, area);
}

/// Render the bottom status bar with the page position and key help.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!(
                "page {}/{}",
                app.pager.current_page(),
                app.pager.total_pages()
            ),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  ←/→: page  r: refresh"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests — smoke renders against a TestBackend
// ---------------------------------------------------------------------------
