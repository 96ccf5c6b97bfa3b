//! Snippet view and create handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use maud::{Markup, html};

use crate::error::PageError;
use crate::forms::{EXPIRY_CHOICES, FieldErrors, SnippetForm};
use crate::render;
use crate::state::AppState;

/// Render one snippet.
///
/// The id arrives as a raw path segment; anything that isn't a positive
/// integer is treated the same as an id that doesn't exist.
pub async fn view(State(state): State<AppState>, Path(id): Path<String>) -> Result<Markup, PageError> {
    let id: i64 = id.parse().map_err(|_| PageError::NotFound)?;
    if id < 1 {
        return Err(PageError::NotFound);
    }

    let snippet = state.db.get(id).await?;

    let inner = html! {
        article class="snippet" {
            div class="snippet-meta" {
                strong { (snippet.title) }
                span { "#" (snippet.id) }
            }
            pre { code { (snippet.content) } }
            div class="snippet-footer" {
                span { "Created: " (render::human_ts(&snippet.created)) }
                span { "Expires: " (render::human_ts(&snippet.expires)) }
            }
        }
    };

    Ok(render::base(&snippet.title, inner))
}

/// Render the empty create form.
pub async fn create_form() -> Markup {
    snippet_form_page(&SnippetForm::default(), &FieldErrors::new())
}

/// Handle a create form submission.
///
/// Invalid input re-renders the form with field errors and a 422; valid
/// input persists the snippet and redirects to its page.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<SnippetForm>,
) -> Result<Response, PageError> {
    let errors = form.validate();
    if !errors.is_empty() {
        let page = snippet_form_page(&form, &errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let id = state.db.insert(form.title.trim(), &form.content, form.expires).await?;
    tracing::info!(id, expires_days = form.expires, "snippet created");

    Ok(Redirect::to(&format!("/snippet/{id}")).into_response())
}

/// The create form, pre-filled with prior input and any validation errors.
fn snippet_form_page(form: &SnippetForm, errors: &FieldErrors) -> Markup {
    let inner = html! {
        h2 { "New Snippet" }
        form method="post" action="/snippet/create" {
            div {
                label for="title" { "Title" }
                input type="text" id="title" name="title" value=(form.title);
                @if let Some(msg) = errors.get("title") {
                    p class="field-error" { (msg) }
                }
            }
            div {
                label for="content" { "Content" }
                textarea id="content" name="content" { (form.content) }
                @if let Some(msg) = errors.get("content") {
                    p class="field-error" { (msg) }
                }
            }
            div {
                label { "Delete in" }
                @for (days, label) in EXPIRY_CHOICES {
                    label class="expiry-choice" {
                        input type="radio" name="expires" value=(days) checked[*days == form.expires];
                        " " (label)
                    }
                }
                @if let Some(msg) = errors.get("expires") {
                    p class="field-error" { (msg) }
                }
            }
            div {
                button type="submit" { "Publish snippet" }
            }
        }
    };

    render::base("New Snippet", inner)
}
