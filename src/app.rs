//! Application state.
//!
//! `App` owns the filtered feed, the pager, and the view lifecycle.  The
//! lifecycle is a single tagged enum — `Loading`, `Ready`, or `Error` — so
//! that "loading with an error" and similar contradictory combinations are
//! unrepresentable.
//!
//! Every fetch carries a generation number.  [`App::begin_fetch`] bumps the
//! counter and [`App::apply_fetch`] drops any result from an older
//! generation, so a slow response from a superseded fetch can never
//! overwrite newer state.

use crate::feed::{self, Article};
use crate::fetch::FetchMsg;
use crate::pager::{page_slice, Pager};

/// Where the viewer is in its lifecycle.
///
/// Starts at `Loading`; one fetch outcome moves it to `Ready` or `Error`,
/// where it stays until the next [`App::begin_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is in flight; show a busy indicator and nothing else.
    Loading,
    /// The feed is populated; show articles and pagination controls.
    Ready,
    /// The fetch failed; show only the message.
    Error(String),
}

pub struct App {
    /// Lifecycle gate for the renderer.
    pub view: ViewState,
    /// The canonical feed: filtered articles in source order, replaced
    /// wholesale on each successful fetch.
    articles: Vec<Article>,
    /// Page counters over `articles`.
    pub pager: Pager,
    /// Generation of the most recent fetch this app asked for.
    generation: u64,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last operational message for the status bar.
    pub status: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            articles: Vec::new(),
            pager: Pager::default(),
            generation: 0,
            quit: false,
            status: "Fetching latest news…".into(),
        }
    }

    /// Start a new fetch cycle: reset to `Loading`, clear the feed, and
    /// return the generation the spawned fetch must tag its result with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.view = ViewState::Loading;
        self.articles.clear();
        self.pager = Pager::default();
        self.status = "Fetching latest news…".into();
        self.generation
    }

    /// Apply one fetch outcome.
    ///
    /// Results from generations older than the current one are discarded
    /// unchanged.  A success replaces the feed with the image-filtered
    /// articles and rebuilds the pager; a failure carries its message into
    /// [`ViewState::Error`].
    pub fn apply_fetch(&mut self, msg: FetchMsg) {
        if msg.generation != self.generation {
            return;
        }
        match msg.result {
            Ok(raw) => {
                self.articles = feed::with_images(raw);
                self.pager = Pager::new(self.articles.len());
                self.view = ViewState::Ready;
                self.status = format!("Fetched {} articles", self.articles.len());
            }
            Err(e) => {
                self.view = ViewState::Error(e.to_string());
            }
        }
    }

    /// The slice of the feed visible on the current page.
    ///
    /// Empty unless the view is `Ready`.
    pub fn visible(&self) -> &[Article] {
        match self.view {
            ViewState::Ready => page_slice(&self.articles, self.pager.current_page()),
            _ => &[],
        }
    }

    /// Total filtered articles, for the status bar.
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    // -- pagination ----------------------------------------------------------
    //
    // Page controls only exist in the Ready state; in Loading/Error they are
    // not rendered and key presses fall through.

    pub fn next_page(&mut self) {
        if self.view == ViewState::Ready {
            self.pager.advance();
        }
    }

    pub fn prev_page(&mut self) {
        if self.view == ViewState::Ready {
            self.pager.retreat();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;

    fn make_article(title: &str, image: &str) -> Article {
        Article {
            title: title.to_string(),
            image: image.to_string(),
            ..Article::default()
        }
    }

    /// `count` articles with images, titled `t0..t{count-1}`.
    fn feed_of(count: usize) -> Vec<Article> {
        (0..count)
            .map(|i| make_article(&format!("t{i}"), "https://img.example/x.jpg"))
            .collect()
    }

    fn msg(generation: u64, result: Result<Vec<Article>, FetchError>) -> FetchMsg {
        FetchMsg { generation, result }
    }

    // -- lifecycle -----------------------------------------------------------

    #[test]
    fn new_app_starts_loading_and_empty() {
        let app = App::new();
        assert_eq!(app.view, ViewState::Loading);
        assert!(app.visible().is_empty());
        assert!(!app.quit);
    }

    #[test]
    fn successful_fetch_transitions_to_ready() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        app.apply_fetch(msg(generation, Ok(feed_of(3))));

        assert_eq!(app.view, ViewState::Ready);
        assert_eq!(app.article_count(), 3);
        assert_eq!(app.visible().len(), 3);
    }

    #[test]
    fn failed_fetch_transitions_to_error_with_message() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        app.apply_fetch(msg(generation, Err(FetchError::NoData)));

        assert_eq!(app.view, ViewState::Error("No news data found".into()));
        assert!(app.visible().is_empty());
    }

    #[test]
    fn begin_fetch_resets_to_loading() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        app.apply_fetch(msg(generation, Ok(feed_of(3))));

        app.begin_fetch();
        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(app.article_count(), 0);
        assert_eq!(app.pager.current_page(), 1);
    }

    // -- generation guard ----------------------------------------------------

    #[test]
    fn stale_result_is_discarded() {
        let mut app = App::new();
        let stale = app.begin_fetch();
        let _current = app.begin_fetch();

        app.apply_fetch(msg(stale, Ok(feed_of(10))));

        assert_eq!(app.view, ViewState::Loading, "stale success must not apply");
        assert_eq!(app.article_count(), 0);
    }

    #[test]
    fn stale_error_does_not_clobber_ready_state() {
        let mut app = App::new();
        let stale = app.begin_fetch();
        let current = app.begin_fetch();
        app.apply_fetch(msg(current, Ok(feed_of(2))));

        app.apply_fetch(msg(stale, Err(FetchError::NoData)));

        assert_eq!(app.view, ViewState::Ready);
        assert_eq!(app.article_count(), 2);
    }

    // -- filtering on apply --------------------------------------------------

    #[test]
    fn apply_fetch_filters_imageless_articles() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        let raw = vec![
            make_article("kept", "img"),
            make_article("dropped", ""),
            make_article("also kept", "img"),
        ];
        app.apply_fetch(msg(generation, Ok(raw)));

        assert_eq!(app.article_count(), 2);
        let titles: Vec<&str> = app.visible().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["kept", "also kept"]);
    }

    #[test]
    fn feed_is_replaced_wholesale_on_refetch() {
        let mut app = App::new();
        let first = app.begin_fetch();
        app.apply_fetch(msg(first, Ok(feed_of(40))));
        app.next_page();

        let second = app.begin_fetch();
        app.apply_fetch(msg(second, Ok(feed_of(4))));

        assert_eq!(app.article_count(), 4);
        assert_eq!(app.pager.current_page(), 1, "pager resets with the new feed");
        assert_eq!(app.pager.total_pages(), 1);
    }

    // -- pagination through the app ------------------------------------------

    #[test]
    fn paging_walks_the_feed_in_fifteens() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        app.apply_fetch(msg(generation, Ok(feed_of(42))));

        assert_eq!(app.pager.total_pages(), 3);
        assert_eq!(app.visible().len(), 15);
        assert_eq!(app.visible()[0].title, "t0");

        app.next_page();
        assert_eq!(app.visible()[0].title, "t15");

        app.next_page();
        assert_eq!(app.visible().len(), 12);
        assert_eq!(app.visible()[0].title, "t30");

        app.next_page();
        assert_eq!(app.pager.current_page(), 3, "clamped at the last page");
    }

    #[test]
    fn empty_feed_is_ready_with_zero_pages() {
        let mut app = App::new();
        let generation = app.begin_fetch();
        app.apply_fetch(msg(generation, Ok(Vec::new())));

        assert_eq!(app.view, ViewState::Ready);
        assert_eq!(app.pager.total_pages(), 0);
        assert_eq!(app.pager.current_page(), 1);
        assert!(app.visible().is_empty());

        app.next_page();
        assert_eq!(app.pager.current_page(), 1);
    }

    #[test]
    fn page_keys_are_ignored_outside_ready() {
        let mut app = App::new();
        app.begin_fetch();
        app.next_page();
        app.prev_page();
        assert_eq!(app.pager.current_page(), 1);
        assert_eq!(app.view, ViewState::Loading);
    }
}
