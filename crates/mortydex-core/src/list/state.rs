//! Pure list state transitions.
//!
//! Every query is started by a `begin_*` transition that hands out a
//! [`Ticket`], and its reply is applied by the matching `finish_*`
//! transition. A reply whose ticket no longer matches the state is stale and
//! leaves the state untouched.

use serde::Serialize;

use crate::types::{Character, CharacterFilter, Page};

/// Pagination bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    /// Last remote page requested. 1 after every fresh search.
    pub page: u32,
    /// Remote page count reported by the last successful search.
    pub total_pages: u32,
    /// Remote count plus local matches.
    pub total_characters: u64,
}

impl Cursor {
    /// Whether another remote page can be requested.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Identity of one in-flight query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    page: u32,
}

impl Ticket {
    /// Search generation the query belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Remote page the query asks for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Whether a reply was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

/// Reply to a search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchReply {
    /// The remote page, plus local matches read after it arrived.
    Found { page: Page, local: Vec<Character> },
    /// The remote matched nothing; local matches only.
    NotFound { local: Vec<Character> },
    /// Any other failure.
    Failed,
}

/// The merged list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    visible: Vec<Character>,
    cursor: Cursor,
    filter: Option<CharacterFilter>,
    generation: u64,
    loading: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters currently shown: local matches first, then remote pages
    /// in the order they were loaded.
    pub fn visible(&self) -> &[Character] {
        &self.visible
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Filter of the most recent search.
    pub fn filter(&self) -> Option<&CharacterFilter> {
        self.filter.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a query is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Find a visible character by id.
    pub fn find(&self, id: i64) -> Option<&Character> {
        self.visible.iter().find(|c| c.id == id)
    }

    /// Start a fresh search: page 1, new generation.
    pub fn begin_search(self, filter: Option<CharacterFilter>) -> (Self, Ticket) {
        let generation = self.generation + 1;
        let state = Self {
            cursor: Cursor {
                page: 1,
                ..self.cursor
            },
            filter,
            generation,
            loading: true,
            ..self
        };
        (state, Ticket { generation, page: 1 })
    }

    /// Apply a search reply.
    pub fn finish_search(self, ticket: Ticket, reply: SearchReply) -> (Self, Applied) {
        if ticket.generation != self.generation {
            return (self, Applied::Stale);
        }

        let state = match reply {
            SearchReply::Found { page, local } => {
                let total_characters = page.info.count + local.len() as u64;
                let mut visible = local;
                visible.extend(page.results);
                Self {
                    visible,
                    cursor: Cursor {
                        page: 1,
                        total_pages: page.info.pages,
                        total_characters,
                    },
                    loading: false,
                    ..self
                }
            }
            SearchReply::NotFound { local } => Self {
                cursor: Cursor {
                    page: 1,
                    total_pages: 1,
                    total_characters: local.len() as u64,
                },
                visible: local,
                loading: false,
                ..self
            },
            SearchReply::Failed => Self {
                loading: false,
                ..self
            },
        };
        (state, Applied::Current)
    }

    /// Advance to the next remote page.
    ///
    /// Returns no ticket when every page is loaded or a query is already in
    /// flight.
    pub fn begin_load_more(self) -> (Self, Option<Ticket>) {
        if self.loading || !self.cursor.has_more() {
            return (self, None);
        }

        let page = self.cursor.page + 1;
        let ticket = Ticket {
            generation: self.generation,
            page,
        };
        let state = Self {
            cursor: Cursor { page, ..self.cursor },
            loading: true,
            ..self
        };
        (state, Some(ticket))
    }

    /// Apply a load-more reply; `None` means the query failed.
    ///
    /// A failed load keeps the advanced page.
    pub fn finish_load_more(self, ticket: Ticket, page: Option<Page>) -> (Self, Applied) {
        if ticket.generation != self.generation || ticket.page != self.cursor.page {
            return (self, Applied::Stale);
        }

        let mut state = self;
        if let Some(page) = page {
            state.visible.extend(page.results);
        }
        state.loading = false;
        (state, Applied::Current)
    }
}
