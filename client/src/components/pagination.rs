//! Previous/next paging controls for the event list.

use leptos::prelude::*;

use crate::state::events::EventsState;

/// Hidden when there is a single page.
#[component]
pub fn Pagination(on_reload: Callback<()>) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let step = move |forward: bool| {
        let moved = events.try_update(|s| {
            let target = if forward { s.query.page.saturating_add(1) } else { s.query.page.saturating_sub(1) };
            s.go_to_page(target)
        });
        if moved.unwrap_or(false) {
            on_reload.run(());
        }
    };

    move || {
        events.with(EventsState::page_label).map(|label| {
            view! {
                <div class="pagination" id="pagination">
                    <button
                        id="prev-page"
                        class="btn btn-secondary"
                        disabled=move || !events.with(EventsState::can_go_back)
                        on:click=move |_| step(false)
                    >
                        "← Zurück"
                    </button>
                    <span id="page-info">{label}</span>
                    <button
                        id="next-page"
                        class="btn btn-secondary"
                        disabled=move || !events.with(EventsState::can_go_forward)
                        on:click=move |_| step(true)
                    >
                        "Weiter →"
                    </button>
                </div>
            }
        })
    }
}
