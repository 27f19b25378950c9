use super::*;

fn book(id: &str, stock: i32) -> Book {
    Book {
        id: id.to_owned(),
        title: format!("Title {id}"),
        author: "Author".to_owned(),
        published_year: 1999,
        genre: "Fiction".to_owned(),
        stock,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Request sequencing
// =============================================================

#[test]
fn latest_response_is_applied() {
    let mut state = BooksState::default();
    let ticket = state.begin_fetch();
    assert!(state.loading);
    assert!(state.finish_fetch(ticket, Ok(vec![book("b1", 1)])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_response_arriving_late_is_dropped() {
    let mut state = BooksState::default();
    let older = state.begin_fetch();
    let newer = state.begin_fetch();

    assert!(state.finish_fetch(newer, Ok(vec![book("new", 1)])));
    assert!(!state.finish_fetch(older, Ok(vec![book("old", 1), book("old2", 1)])));
    assert_eq!(state.items, vec![book("new", 1)]);
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = BooksState::default();
    let older = state.begin_fetch();
    let _newer = state.begin_fetch();
    assert!(!state.finish_fetch(older, Ok(Vec::new())));
    assert!(state.loading);
}

#[test]
fn failed_fetch_keeps_items_and_sets_error() {
    let mut state = BooksState::default();
    let t = state.begin_fetch();
    state.finish_fetch(t, Ok(vec![book("b1", 1)]));
    let t = state.begin_fetch();
    assert!(state.error.is_none());
    state.finish_fetch(t, Err("connection error: offline".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("connection error: offline"));
}

// =============================================================
// Filters and edits
// =============================================================

#[test]
fn filters_persist_until_cleared() {
    let mut state = BooksState::default();
    state.set_filter(SearchField::Author, "Le Guin".to_owned());
    assert_eq!(state.filters.author, "Le Guin");
    state.clear_filters();
    assert_eq!(state.filters, SearchFilters::default());
}

#[test]
fn upsert_updates_list_and_selection() {
    let mut state = BooksState { items: vec![book("b1", 2)], selected: Some(book("b1", 2)), ..BooksState::default() };
    state.upsert(book("b1", 1));
    assert_eq!(state.items[0].stock, 1);
    assert_eq!(state.selected.as_ref().map(|b| b.stock), Some(1));
}

#[test]
fn remove_drops_book_and_selection() {
    let mut state = BooksState { items: vec![book("b1", 2), book("b2", 0)], selected: Some(book("b1", 2)), ..BooksState::default() };
    state.remove("b1");
    assert_eq!(state.items, vec![book("b2", 0)]);
    assert!(state.selected.is_none());
}
