//! snipbin — a small pastebin-style web app.
//!
//! This crate is the HTTP shell around the snippet store in `snipbin-core`.
//! It owns routing, HTML rendering, and form validation; snippet lifecycle
//! semantics (expiry, ordering, error kinds) live in the store.
//!
//! # Routes
//!
//! - `GET /` - Ten most recent non-expired snippets
//! - `GET /snippet/{id}` - View one snippet (404 once expired)
//! - `GET /snippet/create` - New snippet form
//! - `POST /snippet/create` - Create a snippet, redirect to its page
//! - `GET /health` - Health check (JSON)
//! - `GET /static/*` - Static assets
//!
//! All dynamic content is HTML-escaped by maud. Store errors surface as
//! exactly two user-visible outcomes: 404 (absent or expired) and 500
//! (everything else, logged with context).

pub mod error;
pub mod forms;
pub mod render;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
