//! Full detail page for a single event at `/events/:id`.
//!
//! The event is loaded into the `detail` slot of [`EventsState`], so toggles
//! made here reconcile with any list card or modal still holding a copy.
//! Only the response for the id currently in the route is applied or
//! counted as a view.
//! Signed-out visitors can read the page; the toggles send them to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::membership_buttons::MembershipButtons;
use crate::config::ClientConfig;
use crate::net::types::{EventId, EventSummary};
use crate::state::events::{EventsState, Slot};
use crate::state::preferences::ToggleKind;
use crate::util::format;
use crate::util::membership::MembershipHandle;
use crate::util::share::{ShareLinks, page_url};

#[derive(Clone, Debug, PartialEq)]
enum DetailLoad {
    Loading,
    Ready,
    Failed(String),
}

/// Detail page for one event.
#[component]
pub fn EventDetailPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let events = expect_context::<RwSignal<EventsState>>();
    let membership = expect_context::<MembershipHandle>();
    let params = use_params_map();

    let status = RwSignal::new(DetailLoad::Loading);
    let copied = RwSignal::new(false);

    let api_base = config.api_base.clone();
    Effect::new(move || {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        let Ok(id) = EventId::new(raw) else {
            events.update(EventsState::clear_detail);
            status.set(DetailLoad::Failed("Event nicht gefunden".to_owned()));
            return;
        };
        status.set(DetailLoad::Loading);
        events.update(|s| s.begin_detail(id.clone()));

        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            let prefs = membership.prefs();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_event(&api_base, &id).await {
                    Ok(summary) => {
                        let applied = prefs.with_untracked(|p| {
                            events.try_update(|s| s.finish_detail(&id, summary, p)).unwrap_or(false)
                        });
                        if !applied {
                            return;
                        }
                        status.set(DetailLoad::Ready);
                        crate::net::api::record_view(&api_base, &id).await;
                    }
                    Err(e) => {
                        log::error!("error loading event {id}: {e}");
                        if events.with_untracked(|s| s.wants_detail(&id)) {
                            status.set(DetailLoad::Failed("Event konnte nicht geladen werden".to_owned()));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_base, id, membership);
        }
    });
    on_cleanup(move || events.update(EventsState::clear_detail));

    let opened = Memo::new(move |_| events.with(|s| s.detail.as_ref().map(|v| v.id().clone())));

    view! {
        <div class="event-detail-page">
            {move || match status.get() {
                DetailLoad::Loading => view! { <div class="loading-state"><div class="spinner"></div></div> }.into_any(),
                DetailLoad::Failed(message) => {
                    view! {
                        <div class="error-state">
                            <p>{message}</p>
                            <a class="btn btn-primary" href="/events">"Zurück zu den Events"</a>
                        </div>
                    }
                        .into_any()
                }
                DetailLoad::Ready => {
                    opened.track();
                    match events.with_untracked(|s| s.detail.clone()) {
                        Some(view) => detail_view(view.summary, events, copied).into_any(),
                        None => ().into_any(),
                    }
                }
            }}
        </div>
    }
}

fn detail_view(summary: EventSummary, events: RwSignal<EventsState>, copied: RwSignal<bool>) -> impl IntoView {
    let id = summary.id.clone();
    let count = |kind: ToggleKind| {
        let id = id.clone();
        move || events.with(|s| s.instance(Slot::Detail, &id).map_or(0, |v| v.count(kind)))
    };
    let interested = count(ToggleKind::Interest);
    let attending = count(ToggleKind::Attendance);

    let path = format!("/events/{id}");
    let url = page_url(&current_origin(), &path);
    let share = ShareLinks::new(&url, &summary.title);
    let genre = summary.genre.as_deref().map(format::genre_display_name);
    let artists = summary.artists.join(", ");

    let on_copy = move |_| copy_link(url.clone(), copied);

    view! {
        <article class="event-detail">
            <header class="event-detail-header">
                {genre.map(|g| view! { <span class="event-genre">{g}</span> })}
                <h1 class="event-title">{summary.title.clone()}</h1>
                <p class="event-date">{format::long_date(summary.date_start.as_deref())}</p>
                <p class="event-time">
                    {format::time_range(summary.date_start.as_deref(), summary.date_end.as_deref())}
                </p>
            </header>

            <div class="event-actions-row">
                <MembershipButtons id=id.clone() slot=Slot::Detail verbose=true require_auth=true/>
            </div>

            <section class="event-info">
                <div class="detail-item">
                    <strong>"📍 Ort:"</strong>
                    <span>{format::place(summary.location.as_deref(), summary.city.as_deref())}</span>
                </div>
                {format::price(summary.price).map(|price| view! {
                    <div class="detail-item">
                        <strong>"💰 Preis:"</strong>
                        <span>{price}</span>
                    </div>
                })}
                {summary.organizer_name.clone().map(|name| view! {
                    <div class="detail-item">
                        <strong>"👤 Veranstalter:"</strong>
                        <span>{name}</span>
                    </div>
                })}
                {summary.headliner.clone().map(|headliner| view! {
                    <div class="detail-item">
                        <strong>"⭐ Headliner:"</strong>
                        <span>{headliner}</span>
                    </div>
                })}
                {(!artists.is_empty()).then(|| view! {
                    <div class="detail-item">
                        <strong>"🎧 Artists:"</strong>
                        <span>{artists}</span>
                    </div>
                })}
            </section>

            {summary.description.clone().map(|text| view! {
                <section class="event-description-full">
                    <h3>"Beschreibung"</h3>
                    <p>{text}</p>
                </section>
            })}

            <section class="event-stats-full">
                <div class="stat-item">
                    <span class="stat-number">{interested}</span>
                    <span class="stat-label">"Interessiert"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{attending}</span>
                    <span class="stat-label">"Teilnehmer"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{summary.views}</span>
                    <span class="stat-label">"Aufrufe"</span>
                </div>
            </section>

            <section class="event-links">
                {summary.ticket_url.clone().map(|href| view! {
                    <a class="btn btn-primary" href=href target="_blank" rel="noopener">"🎫 Tickets"</a>
                })}
                {summary.website.clone().map(|href| view! {
                    <a class="btn btn-secondary" href=href target="_blank" rel="noopener">"🌐 Website"</a>
                })}
            </section>

            <section class="event-share">
                <h3>"Teilen"</h3>
                <a class="share-btn facebook" href=share.facebook target="_blank" rel="noopener">"Facebook"</a>
                <a class="share-btn twitter" href=share.twitter target="_blank" rel="noopener">"Twitter"</a>
                <a class="share-btn whatsapp" href=share.whatsapp target="_blank" rel="noopener">"WhatsApp"</a>
                <button class="share-btn copy" on:click=on_copy>
                    {move || if copied.get() { "Kopiert!" } else { "Link kopieren" }}
                </button>
            </section>
        </article>
    }
}

fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Copy `url` to the clipboard and show "Kopiert!" for two seconds.
fn copy_link(url: String, copied: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&url);
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("clipboard write failed: {e:?}");
            return;
        }
        copied.set(true);
        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
        copied.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, copied);
    }
}
