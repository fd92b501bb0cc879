use chrono::NaiveDate;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{format_week_range, week_dates};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_date: NaiveDate,
    pub on_previous_week: Callback<()>,
    pub on_next_week: Callback<()>,
    pub on_today: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let range_label = format_week_range(&week_dates(props.current_date));

    let on_prev_click = {
        let on_previous_week = props.on_previous_week.clone();
        Callback::from(move |_: MouseEvent| {
            on_previous_week.emit(());
        })
    };

    let on_next_click = {
        let on_next_week = props.on_next_week.clone();
        Callback::from(move |_: MouseEvent| {
            on_next_week.emit(());
        })
    };

    let on_today_click = {
        let on_today = props.on_today.clone();
        Callback::from(move |_: MouseEvent| {
            on_today.emit(());
        })
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Week Planner"}</h1>
                <div class="header-right">
                    <div class="week-nav">
                        <button class="week-nav-btn" onclick={on_prev_click}>{"‹"}</button>
                        <span class="week-range-label">{ range_label }</span>
                        <button class="week-nav-btn" onclick={on_next_click}>{"›"}</button>
                    </div>
                    <button class="btn btn-secondary today-btn" onclick={on_today_click}>
                        {"Today"}
                    </button>
                </div>
            </div>
        </header>
    }
}
