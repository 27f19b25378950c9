//! Librarian form for adding a book (`/books/new`) or editing one
//! (`/books/:id/edit`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::net::types::{Book, BookInput};
use crate::state::books::BooksState;
use crate::state::session::Session;
use crate::util::validate::{current_year, validate_book};

#[derive(Clone, Copy)]
struct BookFields {
    title: RwSignal<String>,
    author: RwSignal<String>,
    published_year: RwSignal<String>,
    genre: RwSignal<String>,
    stock: RwSignal<String>,
}

impl BookFields {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            published_year: RwSignal::new(String::new()),
            genre: RwSignal::new(String::new()),
            stock: RwSignal::new("1".to_owned()),
        }
    }

    fn fill(self, book: &Book) {
        self.title.set(book.title.clone());
        self.author.set(book.author.clone());
        self.published_year.set(book.published_year.to_string());
        self.genre.set(book.genre.clone());
        self.stock.set(book.stock.to_string());
    }

    fn validate(self) -> Result<BookInput, &'static str> {
        validate_book(
            &self.title.get_untracked(),
            &self.author.get_untracked(),
            &self.published_year.get_untracked(),
            &self.genre.get_untracked(),
            &self.stock.get_untracked(),
            current_year(),
        )
    }
}

#[component]
pub fn BookFormPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let fields = BookFields::new();
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing_id = move || params.with(|p| p.get("id"));

    let load_config = config.clone();
    Effect::new(move || {
        if let Some(id) = editing_id() {
            load_for_edit(&load_config, session, fields, loading, error, id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match fields.validate() {
            Ok(input) => {
                error.set(None);
                busy.set(true);
                save_book(config.clone(), session, books, busy, error, editing_id(), input, navigate.clone());
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let heading = move || if editing_id().is_some() { "Edit book" } else { "Add a book" };
    let text_input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="form-page">
            <h1>{heading}</h1>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading book..."/> }>
                <form class="form" on:submit=on_submit.clone()>
                    {text_input("Title", "text", fields.title)}
                    {text_input("Author", "text", fields.author)}
                    {text_input("Published year", "number", fields.published_year)}
                    {text_input("Genre", "text", fields.genre)}
                    {text_input("Copies in stock", "number", fields.stock)}
                    <div class="form__actions">
                        <button class="button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                        <a class="button button--secondary" href="/books">"Cancel"</a>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn load_for_edit(
    config: &ClientConfig,
    session: RwSignal<Session>,
    fields: BookFields,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    id: String,
) {
    loading.set(true);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::get_book(&config, &id).await {
                Ok(book) => fields.fill(&book),
                Err(err) => error.set(Some(super::report_failure(session, &err))),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, fields, error, id);
}

#[allow(clippy::too_many_arguments)]
fn save_book<F>(
    config: ClientConfig,
    session: RwSignal<Session>,
    books: RwSignal<BooksState>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    editing_id: Option<String>,
    input: BookInput,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = match editing_id.as_deref() {
            Some(id) => crate::net::api::update_book(&config, id, &input).await,
            None => crate::net::api::create_book(&config, &input).await,
        };
        busy.set(false);
        match result {
            Ok(book) => {
                log::info!("saved book {} ({})", book.title, book.id);
                let target = format!("/books/{}", book.id);
                books.update(|b| b.upsert(book));
                navigate(&target, NavigateOptions::default());
            }
            Err(err) => {
                let message = super::report_form_failure(session, &err, crate::util::validate::BOOK_FIELDS);
                error.set(Some(message));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, books, busy, error, editing_id, input, navigate);
}
