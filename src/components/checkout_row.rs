//! Table row for one checkout, shared by the student and librarian views.

#[cfg(test)]
#[path = "checkout_row_test.rs"]
mod checkout_row_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{Checkout, User};

/// One checkout. `on_return` adds a return button while the book is out.
#[component]
pub fn CheckoutRow(
    checkout: Checkout,
    #[prop(optional)] show_borrower: bool,
    #[prop(optional)] on_return: Option<Callback<String>>,
) -> impl IntoView {
    let title = book_title(&checkout);
    let borrower = borrower_name(&checkout);
    let checked_out = short_date(&checkout.checkout_date).to_owned();
    let returned_on = checkout.return_date.as_deref().map(short_date).unwrap_or("-").to_owned();
    let status = if checkout.returned { "Returned" } else { "Active" };
    let can_return = !checkout.returned && on_return.is_some();
    let id = checkout.id;

    view! {
        <tr class="checkout-row" class:checkout-row--returned=checkout.returned>
            <td>{title}</td>
            <Show when=move || show_borrower>
                <td>{borrower.clone()}</td>
            </Show>
            <td>{checked_out}</td>
            <td>{returned_on}</td>
            <td>{status}</td>
            <td>
                <Show when=move || can_return>
                    <button
                        class="checkout-row__return"
                        on:click={
                            let id = id.clone();
                            move |_| {
                                if let Some(on_return) = on_return {
                                    on_return.run(id.clone());
                                }
                            }
                        }
                    >
                        "Return"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

/// Checkout table. The borrower column is shown only with `show_borrower`.
#[component]
pub fn CheckoutTable(
    #[prop(into)] rows: Signal<Vec<Checkout>>,
    #[prop(optional)] show_borrower: bool,
    #[prop(optional)] on_return: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <table class="checkout-table">
            <thead>
                <tr>
                    <th>"Book"</th>
                    <Show when=move || show_borrower>
                        <th>"Borrower"</th>
                    </Show>
                    <th>"Checked out"</th>
                    <th>"Returned"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|checkout| match on_return {
                            Some(on_return) => {
                                view! {
                                    <CheckoutRow checkout=checkout show_borrower=show_borrower on_return=on_return/>
                                }
                                    .into_any()
                            }
                            None => view! { <CheckoutRow checkout=checkout show_borrower=show_borrower/> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

/// Title of the borrowed book, or its id when the API didn't populate it.
pub(crate) fn book_title(checkout: &Checkout) -> String {
    checkout.book.full().map_or_else(|| checkout.book.id().to_owned(), |book| book.title.clone())
}

pub(crate) fn borrower_name(checkout: &Checkout) -> String {
    checkout.user.full().map_or_else(|| checkout.user.id().to_owned(), User::full_name)
}

/// Date part of an ISO-8601 timestamp.
pub(crate) fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
