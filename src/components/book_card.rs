//! Card for one catalog entry in the book list.

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use leptos::prelude::*;

use crate::net::types::Book;

/// A clickable card linking to the book's detail page.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let href = format!("/books/{}", book.id);
    let in_stock = book.in_stock();
    let stock_label = stock_label(book.stock);

    view! {
        <a class="book-card" href=href>
            <span class="book-card__title">{book.title}</span>
            <span class="book-card__author">{book.author}</span>
            <span class="book-card__meta">{format!("{} · {}", book.genre, book.published_year)}</span>
            <span class="book-card__stock" class:book-card__stock--out=!in_stock>{stock_label}</span>
        </a>
    }
}

pub(crate) fn stock_label(stock: i32) -> String {
    match stock {
        s if s <= 0 => "Out of stock".to_owned(),
        1 => "1 copy available".to_owned(),
        s => format!("{s} copies available"),
    }
}
