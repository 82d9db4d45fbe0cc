//! Quick-view modal for an event opened from the list.

use leptos::prelude::*;

use super::membership_buttons::MembershipButtons;
use crate::state::events::{EventsState, Slot};
use crate::state::preferences::ToggleKind;
use crate::util::format;

/// Modal over the list; renders nothing while `EventsState::modal` is empty.
#[component]
pub fn EventModal() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let close = move |_| events.update(EventsState::close_modal);

    // Re-render only when a different event is opened; live counters come
    // from the buttons and stats below.
    let opened = Memo::new(move |_| events.with(|s| s.modal.as_ref().map(|v| v.id().clone())));

    move || {
        opened.track();
        events.with_untracked(|s| s.modal.clone()).map(|view| {
            let summary = view.summary;
            let id = summary.id.clone();
            let count = {
                let id = id.clone();
                move |kind: ToggleKind| {
                    let id = id.clone();
                    move || events.with(|s| s.instance(Slot::Modal, &id).map_or(0, |v| v.count(kind)))
                }
            };
            let interested = count(ToggleKind::Interest);
            let attending = count(ToggleKind::Attendance);
            let start = summary.date_start.as_deref().map(format::date_time);
            let end = summary.date_end.as_deref().map(format::date_time);
            let price = format::price(summary.price);
            let href = format!("/events/{id}");

            view! {
                <div class="event-modal-overlay" on:click=close>
                    <div class="event-modal" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                        <button class="event-modal-close" on:click=close aria-label="Schließen">"✕"</button>

                        <div class="event-actions-row">
                            <MembershipButtons id=id.clone() slot=Slot::Modal/>
                        </div>

                        <div class="event-modal-body">
                            <h2>{summary.title.clone()}</h2>
                            {summary.description.clone().map(|text| view! {
                                <div class="event-description-full">
                                    <h3>"Beschreibung"</h3>
                                    <p>{text}</p>
                                </div>
                            })}
                            <div class="event-details-full">
                                <h3>"Details"</h3>
                                <div class="detail-grid">
                                    <div class="detail-item">
                                        <strong>"📍 Ort:"</strong>
                                        <span>{format::place(summary.location.as_deref(), summary.city.as_deref())}</span>
                                    </div>
                                    <div class="detail-item">
                                        <strong>"🕒 Start:"</strong>
                                        <span>{start.unwrap_or_else(|| format::TBA.to_owned())}</span>
                                    </div>
                                    {end.map(|end| view! {
                                        <div class="detail-item">
                                            <strong>"🏁 Ende:"</strong>
                                            <span>{end}</span>
                                        </div>
                                    })}
                                    {price.map(|price| view! {
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
                                </div>
                            </div>
                            <div class="event-stats-full">
                                <div class="stat-item">
                                    <span class="stat-number">{interested}</span>
                                    <span class="stat-label">"Interessiert"</span>
                                </div>
                                <div class="stat-item">
                                    <span class="stat-number">{attending}</span>
                                    <span class="stat-label">"Teilnehmer"</span>
                                </div>
                            </div>
                        </div>

                        <div class="event-modal-actions">
                            <MembershipButtons id=id slot=Slot::Modal verbose=true/>
                            <a class="btn btn-secondary" href=href>"Alle Details"</a>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
