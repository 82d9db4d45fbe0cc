//! Card for one event in the list grid.
//!
//! DESIGN
//! ======
//! Static fields render from the summary the card was built with. The stats
//! row and buttons read the live list copy so toggles from any surface show
//! up here without re-rendering the card.

use leptos::prelude::*;

use super::membership_buttons::MembershipButtons;
use crate::state::events::{EventView, EventsState, Slot};
use crate::state::preferences::ToggleKind;
use crate::util::format;

/// A clickable event card; clicking anywhere but a button opens the modal.
#[component]
pub fn EventCard(view: EventView, on_open: Callback<crate::net::types::EventId>) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let summary = view.summary;
    let id = summary.id.clone();

    let (day, month) = format::date_badge(summary.date_start.as_deref());
    let genre = summary.genre.as_deref().map(format::genre_display_name).unwrap_or_default();
    let when = format::time_range(summary.date_start.as_deref(), summary.date_end.as_deref());
    let place = format::place(summary.location.as_deref(), summary.city.as_deref());
    let price = format::price(summary.price);
    let free = summary.price.is_some_and(|p| p <= 0.0);
    let href = format!("/events/{id}");

    let stat = {
        let id = id.clone();
        move |kind: ToggleKind| {
            let id = id.clone();
            Memo::new(move |_| {
                events.with(|s| s.instance(Slot::List, &id).map_or((false, 0), |v| (v.is_active(kind), v.count(kind))))
            })
        }
    };
    let interest = stat(ToggleKind::Interest);
    let attendance = stat(ToggleKind::Attendance);

    let open_id = id.clone();
    view! {
        <div class="event-card" on:click=move |_| on_open.run(open_id.clone())>
            <div class="event-header">
                <div class="event-date">
                    <span class="date-day">{day}</span>
                    <span class="date-month">{month}</span>
                </div>
                <div class="event-genre">{genre}</div>
            </div>

            <div class="event-content">
                <h3 class="event-title">
                    <a href=href on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>{summary.title}</a>
                </h3>
                <p class="event-description">{summary.description.unwrap_or_default()}</p>
                <div class="event-details">
                    <div class="event-detail">
                        <span class="detail-icon">"📍"</span>
                        <span>{place}</span>
                    </div>
                    <div class="event-detail">
                        <span class="detail-icon">"🕒"</span>
                        <span>{when}</span>
                    </div>
                    {summary.organizer_name.map(|name| view! {
                        <div class="event-detail">
                            <span class="detail-icon">"👤"</span>
                            <span>{format!("von {name}")}</span>
                        </div>
                    })}
                </div>
            </div>

            <div class="event-footer">
                <div class="event-price" class:free=free>{price}</div>
                <div class="event-stats">
                    <div class="stat" class:user-marked=move || interest.get().0>
                        <span>"❤️"</span>
                        <span>{move || interest.get().1}</span>
                    </div>
                    <div class="stat" class:user-marked=move || attendance.get().0>
                        <span>"🎉"</span>
                        <span>{move || attendance.get().1}</span>
                    </div>
                </div>
                <div class="event-actions">
                    <MembershipButtons id=id slot=Slot::List/>
                </div>
            </div>
        </div>
    }
}
