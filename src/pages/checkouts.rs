//! Librarian view of every checkout, filterable by return status.

use leptos::prelude::*;

use crate::components::checkout_row::CheckoutTable;
use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::state::checkouts::{CheckoutFilter, CheckoutsState};
use crate::state::session::Session;

#[component]
pub fn CheckoutsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let checkouts = expect_context::<RwSignal<CheckoutsState>>();

    load_all_checkouts(&config, session, checkouts);

    let filter = RwSignal::new(CheckoutFilter::default());
    let action_error = RwSignal::new(None::<String>);
    let on_return = Callback::new(move |checkout_id: String| {
        super::return_checkout(config.clone(), session, checkouts, action_error, checkout_id);
    });

    let error = Signal::derive(move || action_error.get().or_else(|| checkouts.with(|c| c.error.clone())));
    let rows = Signal::derive(move || {
        let filter = filter.get();
        checkouts.with(|c| c.filtered(filter).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="checkouts-page">
            <header class="checkouts-page__header">
                <h1>"All checkouts"</h1>
                <div class="filter-tabs">
                    {CheckoutFilter::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="filter-tabs__tab"
                                    class:filter-tabs__tab--active=move || filter.get() == option
                                    on:click=move |_| filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            <ErrorBanner message=error/>
            <Show
                when=move || !checkouts.with(|c| c.loading)
                fallback=|| view! { <Loading label="Loading checkouts..."/> }
            >
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty-state">"No checkouts found."</p> }
                >
                    <CheckoutTable rows=rows show_borrower=true on_return=on_return/>
                </Show>
            </Show>
        </div>
    }
}

fn load_all_checkouts(config: &ClientConfig, session: RwSignal<Session>, checkouts: RwSignal<CheckoutsState>) {
    checkouts.update(CheckoutsState::begin_fetch);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_checkouts(&config)
                .await
                .map_err(|err| super::report_failure(session, &err));
            checkouts.update(|c| c.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session);
}
