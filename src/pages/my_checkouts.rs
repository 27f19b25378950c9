//! Student view of their own checkouts with a return action.

use leptos::prelude::*;

use crate::components::checkout_row::CheckoutTable;
use crate::components::loading::{ErrorBanner, Loading};
use crate::config::ClientConfig;
use crate::state::checkouts::CheckoutsState;
use crate::state::session::Session;

#[component]
pub fn MyCheckoutsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let checkouts = expect_context::<RwSignal<CheckoutsState>>();

    load_my_checkouts(&config, session, checkouts);

    let action_error = RwSignal::new(None::<String>);
    let on_return = Callback::new(move |checkout_id: String| {
        super::return_checkout(config.clone(), session, checkouts, action_error, checkout_id);
    });

    let error = Signal::derive(move || action_error.get().or_else(|| checkouts.with(|c| c.error.clone())));
    let active = move || checkouts.with(|c| c.active().into_iter().cloned().collect::<Vec<_>>());
    let history = move || checkouts.with(|c| c.history().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="checkouts-page">
            <h1>"My checkouts"</h1>
            <ErrorBanner message=error/>
            <Show
                when=move || !checkouts.with(|c| c.loading)
                fallback=|| view! { <Loading label="Loading your checkouts..."/> }
            >
                <section>
                    <h2>"Currently borrowed"</h2>
                    <Show
                        when=move || !active().is_empty()
                        fallback=|| view! { <p class="empty-state">"You have no books checked out."</p> }
                    >
                        <CheckoutTable rows=Signal::derive(active) on_return=on_return/>
                    </Show>
                </section>
                <section>
                    <h2>"History"</h2>
                    <Show
                        when=move || !history().is_empty()
                        fallback=|| view! { <p class="empty-state">"No returned books yet."</p> }
                    >
                        <CheckoutTable rows=Signal::derive(history)/>
                    </Show>
                </section>
            </Show>
        </div>
    }
}

fn load_my_checkouts(config: &ClientConfig, session: RwSignal<Session>, checkouts: RwSignal<CheckoutsState>) {
    checkouts.update(CheckoutsState::begin_fetch);
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::my_checkouts(&config)
                .await
                .map_err(|err| super::report_failure(session, &err));
            checkouts.update(|c| c.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, session);
}
