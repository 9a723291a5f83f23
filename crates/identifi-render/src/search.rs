use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use identifi_identity::IdentityIndex;

use crate::card::CardRenderer;
use crate::error::RenderError;

/// `id` of the search input element.
pub const INPUT_ID: &str = "identifiSearchInput";
/// `id` of the results container.
pub const RESULTS_ID: &str = "identifiSearchResults";

#[derive(Debug, Default)]
struct Results {
    /// Ticket of the response currently shown.
    applied: u64,
    html: String,
}

/// Search box that re-renders its result list on every keystroke.
///
/// Each keystroke takes a ticket before awaiting the index. A response is
/// only shown if no later ticket has been shown already, so a slow search
/// cannot overwrite a newer one.
pub struct SearchWidget<I: IdentityIndex + ?Sized> {
    index: Arc<I>,
    cards: CardRenderer,
    issued: AtomicU64,
    results: Mutex<Results>,
}

impl<I: IdentityIndex + ?Sized> SearchWidget<I> {
    pub fn new(index: Arc<I>, cards: CardRenderer) -> Self {
        Self {
            index,
            cards,
            issued: AtomicU64::new(0),
            results: Mutex::new(Results::default()),
        }
    }

    /// Handle a keystroke with the input's current text.
    ///
    /// Returns `false` when the response was stale and discarded.
    pub async fn on_keyup(&self, query: &str) -> Result<bool, RenderError> {
        let ticket = self.issued.fetch_add(1, Ordering::AcqRel) + 1;
        let mut found = self.index.search(query).await?;
        found.sort_by_key(|identity| identity.trust_distance());

        let mut html = String::new();
        for identity in &found {
            html.push_str(&self.cards.render(identity)?);
        }

        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        if ticket < results.applied {
            tracing::debug!(ticket, applied = results.applied, query, "discarding stale search response");
            return Ok(false);
        }
        results.applied = ticket;
        results.html = html;
        tracing::debug!(ticket, hits = found.len(), query, "search results rendered");
        Ok(true)
    }

    /// Markup of the current result list.
    pub fn results_html(&self) -> String {
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .html
            .clone()
    }

    /// Full widget markup: the form, the input and the current results.
    pub fn mount(&self) -> String {
        format!(
            "<form><input type=\"text\" placeholder=\"Search\" id=\"{}\"><div id=\"{}\">{}</div></form>",
            INPUT_ID,
            RESULTS_ID,
            self.results_html()
        )
    }
}
