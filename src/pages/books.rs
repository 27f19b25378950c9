//! Book catalog page with debounced title/author/genre search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter edits go through a [`DebouncedSearch`] and are mirrored into
//! `BooksState::filters`, which outlives this page. When the page remounts
//! with filters still set, the first load replays them immediately via
//! `force_trigger`; otherwise it lists the whole catalog.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::state::books::BooksState;
use crate::state::search::{SearchField, SearchFilters};
use crate::state::session::Session;
use crate::util::debounce::DebouncedSearch;

#[component]
pub fn BooksPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let books = expect_context::<RwSignal<BooksState>>();

    let restored = books.with_untracked(|b| b.filters.clone());
    let search_config = config.clone();
    let on_search = Callback::new(move |filters: SearchFilters| {
        fetch_books(&search_config, books, session, filters);
    });
    let search = DebouncedSearch::new(config.search_delay, restored.clone(), on_search);

    if restored.has_constraint() {
        search.force_trigger();
    } else {
        fetch_books(&config, books, session, SearchFilters::default());
    }

    let on_clear = move |_: leptos::ev::MouseEvent| {
        books.update(BooksState::clear_filters);
        search.clear();
    };

    let search_input = move |field: SearchField| {
        view! {
            <input
                class="search-bar__input"
                type="search"
                placeholder=field.placeholder()
                prop:value=move || search.field(field)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    books.update(|b| b.set_filter(field, value.clone()));
                    search.update(field, value);
                }
            />
        }
    };

    let error = Signal::derive(move || books.with(|b| b.error.clone()));
    let searching = move || search.is_typing() || books.with(|b| b.loading);
    let is_librarian = move || session.with(Session::is_librarian);

    view! {
        <div class="books-page">
            <header class="books-page__header">
                <h1>"Catalog"</h1>
                <Show when=is_librarian>
                    <a class="button" href="/books/new">"Add book"</a>
                </Show>
            </header>
            <div class="search-bar">
                {SearchField::ALL.into_iter().map(search_input).collect::<Vec<_>>()}
                <Show when=move || search.has_constraint()>
                    <button class="search-bar__clear" on:click=on_clear>
                        "Clear"
                    </button>
                </Show>
                <Show when=searching>
                    <span class="search-bar__status">"Searching..."</span>
                </Show>
            </div>
            <ErrorBanner message=error/>
            <Show
                when=move || books.with(|b| !(b.loading && b.items.is_empty()))
                fallback=|| view! { <Loading label="Loading books..."/> }
            >
                <Show
                    when=move || books.with(|b| !b.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"No books match your search."</p> }
                >
                    <div class="book-grid">
                        {move || {
                            books
                                .get()
                                .items
                                .into_iter()
                                .map(|book| view! { <BookCard book=book/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// Issue a catalog request; only the newest request's response is applied.
fn fetch_books(config: &ClientConfig, books: RwSignal<BooksState>, session: RwSignal<Session>, filters: SearchFilters) {
    let Some(ticket) = books.try_update(BooksState::begin_fetch) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_books(&config, &filters)
                .await
                .map_err(|err| super::report_failure(session, &err));
            books.update(|b| {
                b.finish_fetch(ticket, result);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, filters, ticket);
}
