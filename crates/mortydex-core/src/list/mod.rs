//! Merged, incrementally loaded character list.
//!
//! [`CharacterList`] combines locally stored characters with pages from the
//! remote catalog. A search shows local matches followed by the first remote
//! page; [`CharacterList::load_more`] appends further remote pages. Local
//! create/update/remove go to the store and then refresh the search.

mod state;

pub use state::{Applied, Cursor, ListState, SearchReply, Ticket};

use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::editor::DetailOutcome;
use crate::notice::{Notice, Notifier, NullNotifier};
use crate::traits::{CharacterSource, RecordStore};
use crate::types::{Character, CharacterFilter};

/// The list aggregator.
///
/// Operations take `&self` and may interleave at await points. Replies to
/// superseded queries are discarded, and a second `load_more` is refused
/// while one is in flight.
pub struct CharacterList<S, R> {
    source: S,
    store: R,
    notifier: Arc<dyn Notifier>,
    state: RwLock<ListState>,
}

impl<S, R> CharacterList<S, R>
where
    S: CharacterSource,
    R: RecordStore,
{
    pub fn new(source: S, store: R) -> Self {
        Self::with_notifier(source, store, Arc::new(NullNotifier))
    }

    pub fn with_notifier(source: S, store: R, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            store,
            notifier,
            state: RwLock::new(ListState::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ListState {
        self.read_state().clone()
    }

    pub fn visible(&self) -> Vec<Character> {
        self.read_state().visible().to_vec()
    }

    pub fn cursor(&self) -> Cursor {
        self.read_state().cursor()
    }

    /// True while a query is in flight. Scroll-driven callers check this
    /// before calling [`load_more`](Self::load_more).
    pub fn is_busy(&self) -> bool {
        self.read_state().is_loading()
    }

    /// Search with a fresh cursor.
    ///
    /// A remote `NotFound` falls back to local matches only. Any other
    /// failure leaves the visible list unchanged, raises
    /// [`Notice::SearchFailed`] and is returned.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: Option<CharacterFilter>) -> Result<()> {
        let ticket = self.transition(|s| s.begin_search(filter.clone()));
        debug!(generation = ticket.generation(), "Searching characters");

        let mut failure = None;
        let reply = match self.source.query(filter.as_ref(), None).await {
            Ok(page) => match self.store.find_all(filter.as_ref()) {
                Ok(local) => SearchReply::Found { page, local },
                Err(e) => {
                    failure = Some(e);
                    SearchReply::Failed
                }
            },
            Err(e) if e.is_not_found() => {
                debug!("No remote matches, showing local characters only");
                match self.store.find_all(filter.as_ref()) {
                    Ok(local) => SearchReply::NotFound { local },
                    Err(e) => {
                        failure = Some(e);
                        SearchReply::Failed
                    }
                }
            }
            Err(e) => {
                failure = Some(e);
                SearchReply::Failed
            }
        };

        if self.transition(|s| s.finish_search(ticket, reply)) == Applied::Stale {
            warn!(generation = ticket.generation(), "Discarding superseded search reply");
            return Ok(());
        }

        match failure {
            Some(err) => {
                warn!(error = %err, "Search failed");
                self.notifier.notify(Notice::SearchFailed);
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Load the next remote page and append it.
    ///
    /// Returns `false` without querying when there is nothing more to load
    /// or a query is in flight. On failure the page stays advanced and
    /// [`Notice::LoadMoreFailed`] is raised.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> Result<bool> {
        let (ticket, filter) = {
            let mut state = self.write_state();
            let (next, ticket) = std::mem::take(&mut *state).begin_load_more();
            *state = next;
            match ticket {
                Some(ticket) => (ticket, state.filter().cloned()),
                None => return Ok(false),
            }
        };
        debug!(page = ticket.page(), "Loading more characters");

        let result = self.source.query(filter.as_ref(), Some(ticket.page())).await;
        let (page, failure) = match result {
            Ok(page) => (Some(page), None),
            Err(e) => (None, Some(e)),
        };

        if self.transition(|s| s.finish_load_more(ticket, page)) == Applied::Stale {
            warn!(page = ticket.page(), "Discarding superseded page");
            return Ok(true);
        }

        match failure {
            Some(err) => {
                warn!(error = %err, page = ticket.page(), "Loading more failed");
                self.notifier.notify(Notice::LoadMoreFailed);
                Err(err)
            }
            None => Ok(true),
        }
    }

    /// Store a new character and refresh.
    #[instrument(skip(self, character), fields(id = character.id))]
    pub async fn add_record(&self, character: Character) -> Result<Character> {
        let stored = self.store.insert(character)?;
        info!("Character created");
        self.refresh().await;
        self.notifier.notify(Notice::Created);
        Ok(stored)
    }

    /// Update a visible character, or add it when it is not visible.
    #[instrument(skip(self, character), fields(id = character.id))]
    pub async fn update_record(&self, character: Character) -> Result<()> {
        let visible = self.read_state().find(character.id).is_some();
        if !visible {
            debug!("Character not in view, adding it instead");
            self.add_record(character).await?;
            return Ok(());
        }

        self.store.update_by_id(&character)?;
        info!("Character updated");
        self.refresh().await;
        self.notifier.notify(Notice::Updated);
        Ok(())
    }

    /// Delete a character from the store and refresh.
    #[instrument(skip(self, character), fields(id = character.id))]
    pub async fn remove_record(&self, character: &Character) -> Result<()> {
        self.store.delete_by_id(character.id)?;
        info!("Character removed");
        self.refresh().await;
        self.notifier.notify(Notice::Removed);
        Ok(())
    }

    /// Apply the outcome of an editor session opened on a listed character.
    pub async fn apply_outcome(&self, outcome: DetailOutcome) -> Result<()> {
        match outcome {
            DetailOutcome::Dismissed => Ok(()),
            DetailOutcome::Saved(character) => self.update_record(character).await,
            DetailOutcome::Removed(character) => self.remove_record(&character).await,
        }
    }

    /// Apply the outcome of an editor session opened on a new draft.
    pub async fn apply_create(&self, outcome: DetailOutcome) -> Result<Option<Character>> {
        match outcome {
            DetailOutcome::Saved(character) => self.add_record(character).await.map(Some),
            DetailOutcome::Dismissed | DetailOutcome::Removed(_) => Ok(None),
        }
    }

    /// Re-run the active search. Failures are already reported by `search`.
    async fn refresh(&self) {
        let filter = self.read_state().filter().cloned();
        if let Err(e) = self.search(filter).await {
            debug!(error = %e, "Refresh after store change failed");
        }
    }

    fn transition<T>(&self, f: impl FnOnce(ListState) -> (ListState, T)) -> T {
        let mut state = self.write_state();
        let (next, out) = f(std::mem::take(&mut *state));
        *state = next;
        out
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S, R> std::fmt::Debug for CharacterList<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("CharacterList")
            .field("cursor", &state.cursor())
            .field("visible", &state.visible().len())
            .finish()
    }
}
