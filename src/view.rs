//! Product listing view state
//!
//! Holds what the page currently shows and decides how each fetch result
//! changes it. Every request gets a sequence number; only the most recent
//! one is allowed to touch the state.

use crate::error::{Result, GENERIC_FAILURE_MESSAGE};
use crate::notify::Notification;
use crate::product::{CardProduct, Product};

pub const LOADING_MESSAGE: &str = "Loading Products...";
pub const EMPTY_MESSAGE: &str = "No products found";

/// Which catalog call a request is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    LoadAll,
    Search(String),
}

/// Monotonic request number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What applying a fetch result did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// List replaced with this many products
    Replaced(usize),
    /// Search found nothing; list cleared without notifying
    NoMatches,
    /// Request failed; list unchanged
    Failed(Notification),
    /// A newer request was issued; result dropped
    Stale,
}

#[derive(Debug, Default)]
pub struct ViewState {
    products: Vec<Product>,
    search_text: String,
    is_loading: bool,
    issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Register a new request. Supersedes anything still in flight.
    pub fn begin(&mut self, kind: &RequestKind) -> RequestSeq {
        self.issued += 1;
        self.is_loading = true;
        tracing::debug!(seq = self.issued, ?kind, "request issued");
        RequestSeq(self.issued)
    }

    /// Apply the result of request `seq`.
    pub fn resolve(
        &mut self,
        seq: RequestSeq,
        kind: &RequestKind,
        result: Result<Vec<Product>>,
    ) -> Resolution {
        if seq.0 != self.issued {
            tracing::debug!(seq = seq.0, latest = self.issued, "discarding stale result");
            return Resolution::Stale;
        }

        self.is_loading = false;

        match (kind, result) {
            (_, Ok(products)) => {
                let count = products.len();
                self.products = products;
                Resolution::Replaced(count)
            }
            (RequestKind::Search(_), Err(e)) if e.is_not_found() => {
                self.products = Vec::new();
                Resolution::NoMatches
            }
            (RequestKind::LoadAll, Err(e)) => {
                tracing::error!(error = %e, "catalog load failed");
                Resolution::Failed(Notification::error(e.user_message()))
            }
            (RequestKind::Search(query), Err(e)) => {
                tracing::error!(error = %e, query = %query, "search failed");
                Resolution::Failed(Notification::error(GENERIC_FAILURE_MESSAGE))
            }
        }
    }

    /// What the product area should show right now
    pub fn screen(&self) -> Screen<'_> {
        select_screen(self.is_loading, &self.products)
    }
}

/// What the product area renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Empty,
    Grid(&'a [Product]),
}

impl Screen<'_> {
    /// Cards to draw, one per product, in response order
    pub fn cards(&self) -> Vec<CardProduct> {
        match self {
            Screen::Grid(products) => products.iter().map(CardProduct::from).collect(),
            _ => Vec::new(),
        }
    }
}

/// Loading wins over empty: a list that is empty because the first
/// response has not arrived yet is not "no products".
pub fn select_screen(is_loading: bool, products: &[Product]) -> Screen<'_> {
    if is_loading {
        Screen::Loading
    } else if products.is_empty() {
        Screen::Empty
    } else {
        Screen::Grid(products)
    }
}
