use chrono::{Datelike, NaiveDate};
use shared::Event;
use yew::prelude::*;

use super::event_detail_modal::EventDetailModal;
use super::event_modal::EventModal;
use super::week_cell::{all_day_region_px, WeekCell};
use crate::hooks::use_calendar::use_calendar;
use crate::services::date_utils::{self, hour_labels, week_dates};
use crate::services::logging::Logger;

/// Modal and selection state of the week view, folded into one tagged value
/// so that "both modals open" or "editing with no event" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq)]
pub enum WeekViewState {
    Idle,
    Creating {
        date: NaiveDate,
        time: Option<String>,
    },
    Editing {
        event: Event,
    },
    Viewing {
        event: Event,
    },
}

impl WeekViewState {
    /// Empty-slot click: start creating an event at that date and time.
    pub fn slot_clicked(date: NaiveDate, time: String) -> Self {
        WeekViewState::Creating {
            date,
            time: Some(time),
        }
    }

    /// Event click: view that event, whatever was open before.
    pub fn event_clicked(event: Event) -> Self {
        WeekViewState::Viewing { event }
    }

    /// Edit action from the detail modal. The viewed event moves into the
    /// editing state by value, so editing without an event is unreachable
    /// rather than a checked (or unchecked) precondition.
    pub fn begin_edit(self) -> Self {
        match self {
            WeekViewState::Viewing { event } => WeekViewState::Editing { event },
            other => other,
        }
    }

    /// The event currently shown in the detail modal, if any.
    pub fn viewed_event(&self) -> Option<&Event> {
        match self {
            WeekViewState::Viewing { event } => Some(event),
            _ => None,
        }
    }

    /// Closing either modal drops the whole selection; no selected date,
    /// time, or event survives into the next open.
    pub fn closed(self) -> Self {
        WeekViewState::Idle
    }
}

/// True when any event in the FULL list is all-day. Not scoped to the
/// visible week, unlike `max_all_day_events`: the header row stays reserved
/// even when the only all-day event sits in another week. See DESIGN.md
/// before changing the scoping.
pub fn has_all_day_event(events: &[Event]) -> bool {
    events.iter().any(|event| event.is_all_day())
}

/// Maximum number of all-day events falling on any single visible day.
pub fn max_all_day_events(events: &[Event], days: &[NaiveDate]) -> usize {
    days.iter()
        .map(|day| {
            events
                .iter()
                .filter(|event| event.date == *day && event.is_all_day())
                .count()
        })
        .max()
        .unwrap_or(0)
}

#[function_component(WeekView)]
pub fn week_view() -> Html {
    let calendar = use_calendar();
    let view_state = use_state(|| WeekViewState::Idle);

    // Derived fresh on every render; the anchor date lives in the context
    let days = week_dates(calendar.current_date);
    let today = date_utils::today();
    let has_all_day = has_all_day_event(&calendar.events);
    let max_all_day = max_all_day_events(&calendar.events, &days);

    let on_time_click = {
        let view_state = view_state.clone();
        Callback::from(move |(date, time): (NaiveDate, String)| {
            Logger::debug_with_component("week_view", &format!("slot clicked: {} {}", date, time));
            view_state.set(WeekViewState::slot_clicked(date, time));
        })
    };

    let on_event_click = {
        let view_state = view_state.clone();
        Callback::from(move |event: Event| {
            Logger::debug_with_component("week_view", &format!("event clicked: {}", event.id));
            view_state.set(WeekViewState::event_clicked(event));
        })
    };

    let on_edit_event = {
        let view_state = view_state.clone();
        Callback::from(move |_| {
            view_state.set((*view_state).clone().begin_edit());
        })
    };

    let on_delete_event = {
        let view_state = view_state.clone();
        let delete_event = calendar.actions.delete_event.clone();
        Callback::from(move |_| {
            if let Some(event) = view_state.viewed_event() {
                delete_event.emit(event.id.clone());
            }
            view_state.set(WeekViewState::Idle);
        })
    };

    let on_close_modal = {
        let view_state = view_state.clone();
        Callback::from(move |_| {
            view_state.set((*view_state).clone().closed());
        })
    };

    let axis_class = if has_all_day {
        format!("time-axis all-day-active count-{}", max_all_day)
    } else {
        "time-axis".to_string()
    };
    let axis_header_style = format!(
        "height: {}px;",
        all_day_region_px(has_all_day, max_all_day)
    );

    html! {
        <div class="week-view">
            // Weekday label row
            <div class="week-header-row">
                <div class="time-axis-spacer"></div>
                { for days.iter().map(|day| {
                    let class = classes!(
                        "weekday-label",
                        (*day == today).then_some("today"),
                    );
                    html! {
                        <div key={day.to_string()} {class}>
                            { format!("{} {}", date_utils::weekday_label(day.weekday()), day.day()) }
                        </div>
                    }
                }) }
            </div>

            // Hour grid: time axis plus one cell per day
            <div class="week-grid">
                <div class={axis_class}>
                    <div class="time-axis-header" style={axis_header_style}></div>
                    { for hour_labels().into_iter().map(|label| html! {
                        <div key={label.clone()} class="time-axis-hour">
                            <span class="time-axis-label">{ label }</span>
                        </div>
                    }) }
                </div>
                { for days.iter().map(|day| html! {
                    <WeekCell
                        key={day.to_string()}
                        date={*day}
                        is_today={*day == today}
                        events={calendar.events.clone()}
                        has_all_day_event={has_all_day}
                        max_all_day_events={max_all_day}
                        on_time_click={on_time_click.clone()}
                        on_event_click={on_event_click.clone()}
                    />
                }) }
            </div>

            // Exactly one modal is mounted, derived from the tagged state
            {
                match &*view_state {
                    WeekViewState::Idle => html! {},
                    WeekViewState::Creating { date, time } => html! {
                        <EventModal
                            is_open={true}
                            on_close={on_close_modal.clone()}
                            selected_date={*date}
                            selected_time={time.clone()}
                            event={None::<Event>}
                            on_save={calendar.actions.add_event.clone()}
                            on_update={calendar.actions.update_event.clone()}
                            on_delete={calendar.actions.delete_event.clone()}
                        />
                    },
                    WeekViewState::Editing { event } => html! {
                        <EventModal
                            is_open={true}
                            on_close={on_close_modal.clone()}
                            selected_date={event.date}
                            selected_time={Some(event.start_time.clone())}
                            event={Some(event.clone())}
                            on_save={calendar.actions.add_event.clone()}
                            on_update={calendar.actions.update_event.clone()}
                            on_delete={calendar.actions.delete_event.clone()}
                        />
                    },
                    WeekViewState::Viewing { event } => html! {
                        <EventDetailModal
                            is_open={true}
                            on_close={on_close_modal.clone()}
                            event={event.clone()}
                            on_edit={on_edit_event.clone()}
                            on_delete={on_delete_event.clone()}
                        />
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event_on(id: &str, day: NaiveDate, start: &str, end: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: None,
            color: None,
        }
    }

    // Week of Sunday June 15 .. Saturday June 21, 2025
    fn test_week() -> Vec<NaiveDate> {
        week_dates(date(2025, 6, 16))
    }

    #[test]
    fn test_has_all_day_event_ignores_week_scope() {
        let far_away = event_on("1", date(2025, 1, 1), "00:00", "23:59");
        // The flag is global: an all-day event months outside the visible
        // week still reserves the header row
        assert!(has_all_day_event(&[far_away.clone()]));

        let timed = event_on("2", date(2025, 6, 16), "09:00", "10:00");
        assert!(!has_all_day_event(&[timed]));
        assert!(has_all_day_event(&[
            event_on("3", date(2025, 6, 16), "09:00", "10:00"),
            far_away,
        ]));
    }

    #[test]
    fn test_max_all_day_events_is_week_scoped() {
        let days = test_week();
        // An out-of-week all-day event counts for the flag but not the max
        let out_of_week = event_on("1", date(2025, 1, 1), "00:00", "23:59");
        assert!(has_all_day_event(&[out_of_week.clone()]));
        assert_eq!(max_all_day_events(&[out_of_week], &days), 0);
    }

    #[test]
    fn test_all_day_aggregation_scenario() {
        // Two all-day events on Monday, one timed on Tuesday
        let monday = date(2025, 6, 16);
        let tuesday = date(2025, 6, 17);
        let events = vec![
            event_on("1", monday, "00:00", "23:59"),
            event_on("2", monday, "00:00", "23:59"),
            event_on("3", tuesday, "09:00", "10:00"),
        ];
        let days = test_week();

        assert!(has_all_day_event(&events));
        assert_eq!(max_all_day_events(&events, &days), 2);
    }

    #[test]
    fn test_slot_click_enters_creating() {
        let day = date(2025, 6, 16);
        let state = WeekViewState::slot_clicked(day, "09:00".to_string());
        assert_eq!(
            state,
            WeekViewState::Creating {
                date: day,
                time: Some("09:00".to_string()),
            }
        );
        // No event is carried into the create state
        assert_eq!(state.viewed_event(), None);
    }

    #[test]
    fn test_event_click_enters_viewing_from_any_state() {
        let event = event_on("1", date(2025, 6, 16), "09:00", "10:00");

        let from_idle = WeekViewState::event_clicked(event.clone());
        assert_eq!(from_idle.viewed_event(), Some(&event));

        // Clicking another event while one is viewed replaces the selection
        let other = event_on("2", date(2025, 6, 17), "11:00", "12:00");
        let replaced = WeekViewState::event_clicked(other.clone());
        assert_eq!(replaced.viewed_event(), Some(&other));
    }

    #[test]
    fn test_edit_only_reachable_from_viewing() {
        let event = event_on("1", date(2025, 6, 16), "09:00", "10:00");

        let editing = WeekViewState::Viewing {
            event: event.clone(),
        }
        .begin_edit();
        assert_eq!(editing, WeekViewState::Editing { event });

        // Outside Viewing there is no event to edit, so nothing happens
        assert_eq!(WeekViewState::Idle.begin_edit(), WeekViewState::Idle);
        let creating = WeekViewState::Creating {
            date: date(2025, 6, 16),
            time: None,
        };
        assert_eq!(creating.clone().begin_edit(), creating);
    }

    #[test]
    fn test_close_clears_all_selection() {
        // Close always returns to Idle: no stale selected date, time, or
        // event is carried into the next open (see DESIGN.md)
        let event = event_on("1", date(2025, 6, 16), "09:00", "10:00");

        assert_eq!(
            WeekViewState::Creating {
                date: date(2025, 6, 16),
                time: Some("09:00".to_string()),
            }
            .closed(),
            WeekViewState::Idle
        );
        assert_eq!(
            WeekViewState::Editing {
                event: event.clone(),
            }
            .closed(),
            WeekViewState::Idle
        );
        assert_eq!(WeekViewState::Viewing { event }.closed(), WeekViewState::Idle);
    }
}
