//! QKart - terminal storefront
//!
//! Fetches the product catalog from the QKart backend, shows it as a grid
//! of product cards and narrows it with a debounced search.
//!
//! # Features
//!
//! - **Catalog loading**: `GET /products` on startup
//! - **Debounced search**: `GET /products/search?value=` once typing pauses
//! - **Stale result protection**: only the latest request may update the page
//! - **Error toasts**: backend messages or a generic hint, never a crash
//!
//! # Example
//!
//! ```no_run
//! use qkart::{CatalogSource, Config, HttpCatalog, ViewState, RequestKind};
//!
//! fn main() -> qkart::Result<()> {
//!     let config = Config::default();
//!     let catalog = HttpCatalog::new(&config)?;
//!
//!     let mut view = ViewState::new();
//!     let kind = RequestKind::Search("phone".into());
//!     let seq = view.begin(&kind);
//!     view.resolve(seq, &kind, catalog.search("phone"));
//!
//!     for card in view.screen().cards() {
//!         println!("{} - {}", card.name, qkart::format_cost(card.cost));
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod notify;
pub mod product;
pub mod tui;
pub mod view;

// Re-export main types
pub use catalog::{CatalogSource, HttpCatalog};
pub use config::{Config, Overrides};
pub use debounce::Debouncer;
pub use error::{QkartError, Result, GENERIC_FAILURE_MESSAGE};
pub use notify::{Notification, Toasts, Variant};
pub use product::{format_cost, CardProduct, Product, Rating};
pub use view::{select_screen, RequestKind, RequestSeq, Resolution, Screen, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
