//! Book detail page.
//!
//! Students can borrow an in-stock copy; librarians can edit or delete the
//! title. The loaded book lives in `BooksState::selected` so a checkout's
//! stock change also shows up in the list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::book_card::stock_label;
use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::net::types::Book;
use crate::state::books::BooksState;
use crate::state::checkouts::CheckoutsState;
use crate::state::session::Session;

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let checkouts = expect_context::<RwSignal<CheckoutsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let book_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let load_config = config.clone();
    Effect::new(move || {
        let id = book_id();
        if id.is_empty() {
            return;
        }
        load_book(&load_config, session, books, loading, error, id);
    });

    let checkout_config = config.clone();
    let navigate_checkouts = navigate.clone();
    let on_checkout = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(book) = books.with_untracked(|b| b.selected.clone()) else {
            return;
        };
        borrow_book(
            checkout_config.clone(),
            session,
            books,
            checkouts,
            ActionStatus { busy, error },
            book,
            navigate_checkouts.clone(),
        );
    });

    let delete_config = config;
    let on_delete = Callback::new(move |()| {
        if busy.get_untracked() || !super::confirm("Delete this book? This cannot be undone.") {
            return;
        }
        remove_book(
            delete_config.clone(),
            session,
            books,
            ActionStatus { busy, error },
            book_id(),
            navigate.clone(),
        );
    });

    let selected = move || books.with(|b| b.selected.clone().filter(|book| book.id == book_id()));
    let is_student = move || session.with(Session::is_student);
    let is_librarian = move || session.with(Session::is_librarian);
    let in_stock = move || selected().is_some_and(|b| b.in_stock());

    view! {
        <div class="book-detail">
            <a class="book-detail__back" href="/books">"Back to catalog"</a>
            <ErrorBanner message=error/>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loading label="Loading book..."/> }
            >
                <Show
                    when=move || selected().is_some()
                    fallback=|| view! { <p class="empty-state">"Book not found."</p> }
                >
                    {move || selected().map(|book| view! { <BookSummary book=book/> })}
                    <div class="book-detail__actions">
                        <Show when=is_student>
                            <Show
                                when=in_stock
                                fallback=|| view! { <span class="book-detail__unavailable">"Currently unavailable"</span> }
                            >
                                <button
                                    class="button"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_checkout.run(())
                                >
                                    {move || if busy.get() { "Checking out..." } else { "Check out" }}
                                </button>
                            </Show>
                        </Show>
                        <Show when=is_librarian>
                            <a class="button" href=move || format!("/books/{}/edit", book_id())>"Edit"</a>
                            <button
                                class="button button--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_delete.run(())
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn BookSummary(book: Book) -> impl IntoView {
    view! {
        <article class="book-detail__summary">
            <h1>{book.title}</h1>
            <dl>
                <dt>"Author"</dt>
                <dd>{book.author}</dd>
                <dt>"Genre"</dt>
                <dd>{book.genre}</dd>
                <dt>"Published"</dt>
                <dd>{book.published_year}</dd>
                <dt>"Availability"</dt>
                <dd>{stock_label(book.stock)}</dd>
            </dl>
        </article>
    }
}

#[derive(Clone, Copy)]
struct ActionStatus {
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

fn load_book(
    config: &ClientConfig,
    session: RwSignal<Session>,
    books: RwSignal<BooksState>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    id: String,
) {
    loading.set(true);
    error.set(None);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::get_book(&config, &id).await {
                Ok(book) => books.update(|b| b.selected = Some(book)),
                Err(err) => error.set(Some(super::report_failure(session, &err))),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, books, id);
}

fn borrow_book<F>(
    config: ClientConfig,
    session: RwSignal<Session>,
    books: RwSignal<BooksState>,
    checkouts: RwSignal<CheckoutsState>,
    status: ActionStatus,
    book: Book,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    status.busy.set(true);
    status.error.set(None);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::checkout_book(&config, &book.id).await {
            Ok(checkout) => {
                log::info!("checked out {}", book.title);
                checkouts.update(|c| c.add(checkout));
                books.update(|b| b.upsert(Book { stock: book.stock - 1, ..book }));
                status.busy.set(false);
                navigate("/my-checkouts", NavigateOptions::default());
            }
            Err(err) => {
                status.error.set(Some(super::report_failure(session, &err)));
                status.busy.set(false);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, books, checkouts, book, navigate);
}

fn remove_book<F>(
    config: ClientConfig,
    session: RwSignal<Session>,
    books: RwSignal<BooksState>,
    status: ActionStatus,
    id: String,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    status.busy.set(true);
    status.error.set(None);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_book(&config, &id).await {
            Ok(()) => {
                log::info!("deleted book {id}");
                books.update(|b| b.remove(&id));
                status.busy.set(false);
                navigate("/books", NavigateOptions::default());
            }
            Err(err) => {
                status.error.set(Some(super::report_failure(session, &err)));
                status.busy.set(false);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session, books, id, navigate);
}
