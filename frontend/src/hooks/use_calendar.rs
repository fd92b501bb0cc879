use chrono::NaiveDate;
use shared::Event;
use yew::prelude::*;

use crate::context::calendar::{CalendarAction, CalendarContext};
use crate::services::date_utils;
use crate::services::logging::Logger;

pub struct UseCalendarResult {
    pub current_date: NaiveDate,
    pub events: Vec<Event>,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub add_event: Callback<Event>,
    pub update_event: Callback<Event>,
    pub delete_event: Callback<String>,
    pub previous_week: Callback<()>,
    pub next_week: Callback<()>,
    pub go_to_today: Callback<()>,
}

/// Read access to the calendar context plus mutation callbacks. The
/// callbacks are fire-and-forget: in-memory mutations cannot fail, so
/// callers never inspect a result.
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let context = use_context::<CalendarContext>()
        .expect("use_calendar must be called under a CalendarProvider");

    let add_event = {
        let context = context.clone();
        Callback::from(move |event: Event| {
            Logger::info_with_component("calendar", &format!("add event \"{}\"", event.title));
            context.dispatch(CalendarAction::AddEvent(event));
        })
    };

    let update_event = {
        let context = context.clone();
        Callback::from(move |event: Event| {
            Logger::info_with_component("calendar", &format!("update event {}", event.id));
            context.dispatch(CalendarAction::UpdateEvent(event));
        })
    };

    let delete_event = {
        let context = context.clone();
        Callback::from(move |id: String| {
            Logger::info_with_component("calendar", &format!("delete event {}", id));
            context.dispatch(CalendarAction::DeleteEvent(id));
        })
    };

    let previous_week = {
        let context = context.clone();
        Callback::from(move |_| {
            context.dispatch(CalendarAction::PreviousWeek);
        })
    };

    let next_week = {
        let context = context.clone();
        Callback::from(move |_| {
            context.dispatch(CalendarAction::NextWeek);
        })
    };

    let go_to_today = {
        let context = context.clone();
        Callback::from(move |_| {
            context.dispatch(CalendarAction::GoToDate(date_utils::today()));
        })
    };

    UseCalendarResult {
        current_date: context.current_date,
        events: context.events.clone(),
        actions: UseCalendarActions {
            add_event,
            update_event,
            delete_event,
            previous_week,
            next_week,
            go_to_today,
        },
    }
}
