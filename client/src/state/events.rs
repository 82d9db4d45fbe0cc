//! Rendered event state shared by the list, modal, detail and my-events views.
//!
//! DESIGN
//! ======
//! Every place an event is on screen holds its own `EventView` copy: list
//! cards live in `items`, the open modal in `modal`, the detail page in
//! `detail`. The reconciler walks all three so a toggle never leaves two
//! visible copies of the same event disagreeing.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use url::form_urlencoded;

use super::preferences::{Preferences, ToggleKind};
use crate::net::types::{EventId, EventList, EventSummary};

/// One rendered instance of an event with the viewer's marks.
#[derive(Clone, Debug, PartialEq)]
pub struct EventView {
    pub summary: EventSummary,
    pub interested: bool,
    pub attending: bool,
}

impl EventView {
    /// Build a view, taking marks from the local sets.
    pub fn new(summary: EventSummary, prefs: &Preferences) -> Self {
        let interested = prefs.contains(ToggleKind::Interest, &summary.id);
        let attending = prefs.contains(ToggleKind::Attendance, &summary.id);
        Self { summary, interested, attending }
    }

    pub fn id(&self) -> &EventId {
        &self.summary.id
    }

    pub fn is_active(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Interest => self.interested,
            ToggleKind::Attendance => self.attending,
        }
    }

    pub fn count(&self, kind: ToggleKind) -> u32 {
        match kind {
            ToggleKind::Interest => self.summary.interested_count,
            ToggleKind::Attendance => self.summary.attendees_count,
        }
    }

    /// Set the mark and shift the counter by `delta`, flooring at zero.
    pub fn apply(&mut self, kind: ToggleKind, active: bool, delta: i32) {
        let (mark, count) = match kind {
            ToggleKind::Interest => (&mut self.interested, &mut self.summary.interested_count),
            ToggleKind::Attendance => (&mut self.attending, &mut self.summary.attendees_count),
        };
        *mark = active;
        *count = count.saturating_add_signed(delta);
    }
}

/// Sort orders the list endpoint understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    DateAsc,
    DateDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::DateAsc, Self::DateDesc, Self::PriceAsc, Self::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateAsc => "date_asc",
            Self::DateDesc => "date_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DateAsc => "Datum (aufsteigend)",
            Self::DateDesc => "Datum (absteigend)",
            Self::PriceAsc => "Preis (aufsteigend)",
            Self::PriceDesc => "Preis (absteigend)",
        }
    }

    /// Parse a `<select>` value; unknown values keep the default order.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

/// Filter inputs on the list page. Empty strings mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub genre: String,
    pub location: String,
    pub date: String,
    pub price_range: String,
}

impl EventFilters {
    fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("genre", self.genre.as_str()),
            ("location", self.location.as_str()),
            ("date", self.date.as_str()),
            ("price_range", self.price_range.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().iter().all(|(_, v)| v.trim().is_empty())
    }
}

/// Query parameters for `GET /api/events`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    pub sort: SortOrder,
    pub filters: EventFilters,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, per_page: crate::config::DEFAULT_PAGE_SIZE, sort: SortOrder::default(), filters: EventFilters::default() }
    }
}

impl ListQuery {
    /// URL-encoded query string; blank filters are omitted.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("page", &self.page.to_string());
        out.append_pair("per_page", &self.per_page.to_string());
        out.append_pair("sort", self.sort.as_str());
        for (key, value) in self.filters.pairs() {
            let value = value.trim();
            if !value.is_empty() {
                out.append_pair(key, value);
            }
        }
        out.finish()
    }
}

/// Card arrangement on the list page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Where a rendered copy of an event lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    List,
    Modal,
    Detail,
}

/// Event data currently on screen plus list-page controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    pub items: Vec<EventView>,
    pub modal: Option<EventView>,
    pub detail: Option<EventView>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_pages: u32,
    pub query: ListQuery,
    pub layout: Layout,
    /// Ticket of the newest list load; older results are dropped.
    pub load_ticket: u64,
    /// Event the detail page is currently loading or showing.
    pub detail_request: Option<EventId>,
}

impl EventsState {
    /// Replace the list with a fresh server page, marked from `prefs`.
    pub fn set_items(&mut self, events: Vec<EventSummary>, total_pages: u32, prefs: &Preferences) {
        self.items = events.into_iter().map(|e| EventView::new(e, prefs)).collect();
        self.total_pages = total_pages;
        self.loading = false;
        self.error = None;
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Start a list load. The returned ticket must accompany its result.
    pub fn begin_load(&mut self) -> u64 {
        self.load_ticket = self.load_ticket.wrapping_add(1);
        self.loading = true;
        self.error = None;
        self.load_ticket
    }

    /// Apply a finished load unless a newer one started since.
    /// Returns whether the result was applied.
    pub fn finish_load(&mut self, ticket: u64, list: EventList, prefs: &Preferences) -> bool {
        if ticket != self.load_ticket {
            log::debug!("dropping stale event list (ticket {ticket}, current {})", self.load_ticket);
            return false;
        }
        self.set_items(list.events, list.total_pages, prefs);
        true
    }

    /// Record a failed load unless a newer one started since.
    pub fn fail_load(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if ticket != self.load_ticket {
            return false;
        }
        self.set_failed(message);
        true
    }

    /// Point the detail slot at `id` and clear whatever it showed.
    pub fn begin_detail(&mut self, id: EventId) {
        self.detail = None;
        self.detail_request = Some(id);
    }

    /// Whether `id` is still the event the detail page wants.
    pub fn wants_detail(&self, id: &EventId) -> bool {
        self.detail_request.as_ref() == Some(id)
    }

    /// Fill the detail slot if `requested` is still wanted.
    pub fn finish_detail(&mut self, requested: &EventId, summary: EventSummary, prefs: &Preferences) -> bool {
        if !self.wants_detail(requested) {
            log::debug!("dropping stale detail for {requested}");
            return false;
        }
        self.detail = Some(EventView::new(summary, prefs));
        true
    }

    pub fn clear_detail(&mut self) {
        self.detail = None;
        self.detail_request = None;
    }

    /// Open the modal on a copy of the listed event.
    pub fn open_modal(&mut self, id: &EventId) {
        self.modal = self.items.iter().find(|v| v.id() == id).cloned();
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Every rendered copy of `id`, across list, modal and detail.
    pub fn instances_mut<'a>(&'a mut self, id: &'a EventId) -> impl Iterator<Item = &'a mut EventView> + 'a {
        self.items
            .iter_mut()
            .chain(self.modal.iter_mut())
            .chain(self.detail.iter_mut())
            .filter(move |v| v.id() == id)
    }

    /// The copy of `id` rendered in `slot`, if any.
    pub fn instance(&self, slot: Slot, id: &EventId) -> Option<&EventView> {
        match slot {
            Slot::List => self.items.iter().find(|v| v.id() == id),
            Slot::Modal => self.modal.as_ref().filter(|v| v.id() == id),
            Slot::Detail => self.detail.as_ref().filter(|v| v.id() == id),
        }
    }

    /// New filter set; restarts at page 1.
    pub fn set_filters(&mut self, filters: EventFilters) {
        self.query.filters = filters;
        self.query.page = 1;
    }

    /// New sort order; restarts at page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
        self.query.page = 1;
    }

    /// Move to `page` if it exists. Returns whether a reload is needed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages.max(1) || page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.query.page < self.total_pages
    }

    /// "Seite X von Y", or `None` when pagination is hidden.
    pub fn page_label(&self) -> Option<String> {
        (self.total_pages > 1).then(|| format!("Seite {} von {}", self.query.page, self.total_pages))
    }

    /// Results-count label for the list header.
    pub fn results_label(&self) -> String {
        let count = self.items.len();
        if count == 1 { "1 Event gefunden".to_owned() } else { format!("{count} Events gefunden") }
    }
}
