use std::rc::Rc;

use chrono::{Days, NaiveDate};
use shared::Event;
use yew::prelude::*;

use crate::services::date_utils;

/// State owned by the calendar context: the current date the views are
/// anchored on, and the full event list. Views never mutate either directly;
/// they dispatch `CalendarAction`s.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    pub current_date: NaiveDate,
    pub events: Vec<Event>,
}

/// Mutations accepted by the calendar context. Navigation actions carry no
/// clock reads; `GoToDate` takes the target date so the reducer stays pure.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    AddEvent(Event),
    UpdateEvent(Event),
    DeleteEvent(String),
    GoToDate(NaiveDate),
    PreviousWeek,
    NextWeek,
}

impl CalendarState {
    pub fn new(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            events: Vec::new(),
        }
    }

    fn apply(&self, action: CalendarAction) -> CalendarState {
        let mut next = self.clone();
        match action {
            CalendarAction::AddEvent(event) => {
                next.events.push(event);
            }
            CalendarAction::UpdateEvent(updated) => {
                // Replace by id; unknown ids leave the list untouched
                if let Some(existing) =
                    next.events.iter_mut().find(|event| event.id == updated.id)
                {
                    *existing = updated;
                }
            }
            CalendarAction::DeleteEvent(id) => {
                next.events.retain(|event| event.id != id);
            }
            CalendarAction::GoToDate(date) => {
                next.current_date = date;
            }
            CalendarAction::PreviousWeek => {
                next.current_date = self
                    .current_date
                    .checked_sub_days(Days::new(7))
                    .unwrap_or(self.current_date);
            }
            CalendarAction::NextWeek => {
                next.current_date = self
                    .current_date
                    .checked_add_days(Days::new(7))
                    .unwrap_or(self.current_date);
            }
        }
        next
    }
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub type CalendarContext = UseReducerHandle<CalendarState>;

#[derive(Properties, PartialEq)]
pub struct CalendarProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(CalendarProvider)]
pub fn calendar_provider(props: &CalendarProviderProps) -> Html {
    let state = use_reducer(|| CalendarState::new(date_utils::today()));

    html! {
        <ContextProvider<CalendarContext> context={state}>
            { props.children.clone() }
        </ContextProvider<CalendarContext>>
    }
}
