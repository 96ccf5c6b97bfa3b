//! Home page — the ten most recent non-expired snippets.

use axum::extract::State;
use maud::{Markup, html};

use crate::error::PageError;
use crate::render;
use crate::state::AppState;

/// Render the home page with the latest snippets.
pub async fn home_page(State(state): State<AppState>) -> Result<Markup, PageError> {
    let snippets = state.db.latest().await?;

    let inner = html! {
        h2 { "Latest Snippets" }
        @if snippets.is_empty() {
            p class="empty" { "There's nothing to see here... yet!" }
        } @else {
            table {
                thead {
                    tr { th { "Title" } th { "Created" } th { "ID" } }
                }
                tbody {
                    @for snippet in &snippets {
                        tr {
                            td { a href={ "/snippet/" (snippet.id) } { (snippet.title) } }
                            td { (render::human_ts(&snippet.created)) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        }
    };

    Ok(render::base("Home", inner))
}
