//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{event_detail::EventDetailPage, events::EventsPage, my_events::MyEventsPage};
use crate::state::auth::AuthState;
use crate::state::events::{EventsState, ListQuery};
use crate::util::membership::MembershipHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, auth, event and membership contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let events = RwSignal::new(EventsState {
        query: ListQuery { per_page: config.page_size, ..ListQuery::default() },
        loading: true,
        ..EventsState::default()
    });
    let membership = MembershipHandle::new(&config, events, auth);

    provide_context(config.clone());
    provide_context(auth);
    provide_context(events);
    provide_context(membership);

    // The token is only readable in the browser.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::storage::{BrowserStorage, KeyValueStore as _};

        let state = AuthState::with_token(BrowserStorage.get(&config.auth_token_key));
        let token = state.token.clone();
        auth.set(state);
        if let Some(token) = token {
            let api_base = config.api_base.clone();
            leptos::task::spawn_local(async move {
                let profile = crate::net::api::fetch_profile(&api_base, &token).await;
                auth.update(|a| {
                    a.profile = profile;
                    a.loading = false;
                });
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/ravetracker.css"/>
        <Title text="RaveTracker"/>

        <Router>
            <Routes fallback=|| "Seite nicht gefunden.".into_view()>
                <Route path=StaticSegment("") view=EventsPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                <Route path=StaticSegment("my-events") view=MyEventsPage/>
            </Routes>
        </Router>
    }
}
