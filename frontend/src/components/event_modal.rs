use chrono::NaiveDate;
use shared::{validate_event_form, Event, ALL_DAY_END, ALL_DAY_START};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::services::date_utils::default_end_time;

/// Colors offered in the event form; the empty value keeps the default
/// styling.
const COLOR_CHOICES: [(&str, &str); 6] = [
    ("", "Default"),
    ("#4a90d9", "Blue"),
    ("#5cb85c", "Green"),
    ("#e6739f", "Pink"),
    ("#f0a34e", "Orange"),
    ("#9b59b6", "Purple"),
];

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub selected_date: NaiveDate,
    #[prop_or_default]
    pub selected_time: Option<String>,
    /// Present when editing an existing event, absent when creating
    #[prop_or_default]
    pub event: Option<Event>,
    pub on_save: Callback<Event>,
    pub on_update: Callback<Event>,
    pub on_delete: Callback<String>,
}

/// The times actually written to the event: the all-day toggle overrides the
/// time fields with the sentinel pair.
pub fn effective_times(all_day: bool, start_time: &str, end_time: &str) -> (String, String) {
    if all_day {
        (ALL_DAY_START.to_string(), ALL_DAY_END.to_string())
    } else {
        (start_time.to_string(), end_time.to_string())
    }
}

#[function_component(EventModal)]
pub fn event_modal(props: &EventModalProps) -> Html {
    let title = use_state(String::new);
    let date_input = use_state(String::new);
    let start_time = use_state(String::new);
    let end_time = use_state(String::new);
    let all_day = use_state(|| false);
    let color = use_state(String::new);
    let description = use_state(String::new);
    let error_messages = use_state(Vec::<String>::new);

    // Reset the form each time the modal opens, from the edited event or
    // from the clicked slot
    use_effect_with(
        (
            props.is_open,
            props.event.clone(),
            props.selected_date,
            props.selected_time.clone(),
        ),
        {
            let title = title.clone();
            let date_input = date_input.clone();
            let start_time = start_time.clone();
            let end_time = end_time.clone();
            let all_day = all_day.clone();
            let color = color.clone();
            let description = description.clone();
            let error_messages = error_messages.clone();
            move |(is_open, event, selected_date, selected_time): &(
                bool,
                Option<Event>,
                NaiveDate,
                Option<String>,
            )| {
                if *is_open {
                    match event {
                        Some(event) => {
                            title.set(event.title.clone());
                            date_input.set(event.date.format("%Y-%m-%d").to_string());
                            if event.is_all_day() {
                                all_day.set(true);
                                start_time.set("09:00".to_string());
                                end_time.set("10:00".to_string());
                            } else {
                                all_day.set(false);
                                start_time.set(event.start_time.clone());
                                end_time.set(event.end_time.clone());
                            }
                            color.set(event.color.clone().unwrap_or_default());
                            description.set(event.description.clone().unwrap_or_default());
                        }
                        None => {
                            let start = selected_time
                                .clone()
                                .unwrap_or_else(|| "09:00".to_string());
                            title.set(String::new());
                            date_input.set(selected_date.format("%Y-%m-%d").to_string());
                            end_time.set(default_end_time(&start));
                            start_time.set(start);
                            all_day.set(false);
                            color.set(String::new());
                            description.set(String::new());
                        }
                    }
                    error_messages.set(Vec::new());
                }
                || ()
            }
        },
    );

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_date_change = {
        let date_input = date_input.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date_input.set(input.value());
        })
    };

    let on_start_change = {
        let start_time = start_time.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_time.set(input.value());
        })
    };

    let on_end_change = {
        let end_time = end_time.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            end_time.set(input.value());
        })
    };

    let on_all_day_change = {
        let all_day = all_day.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            all_day.set(input.checked());
        })
    };

    let on_color_change = {
        let color = color.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            color.set(select.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let existing_id = props.event.as_ref().map(|event| event.id.clone());

    let on_submit = {
        let title = title.clone();
        let date_input = date_input.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let all_day = all_day.clone();
        let color = color.clone();
        let description = description.clone();
        let error_messages = error_messages.clone();
        let existing_id = existing_id.clone();
        let on_save = props.on_save.clone();
        let on_update = props.on_update.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (start, end) = effective_times(*all_day, &start_time, &end_time);

            let validation = validate_event_form(&title, &start, &end);
            if !validation.is_valid {
                error_messages.set(validation.errors.iter().map(ToString::to_string).collect());
                return;
            }

            let date = match NaiveDate::parse_from_str(&date_input, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    error_messages.set(vec!["Please pick a valid date".to_string()]);
                    return;
                }
            };

            let trimmed_description = description.trim().to_string();
            let event = Event {
                id: existing_id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                title: title.trim().to_string(),
                date,
                start_time: start,
                end_time: end,
                description: (!trimmed_description.is_empty()).then_some(trimmed_description),
                color: (!color.is_empty()).then(|| (*color).clone()),
            };

            // Exactly one of save/update fires per confirm
            match &existing_id {
                Some(_) => on_update.emit(event),
                None => on_save.emit(event),
            }
            on_close.emit(());
        })
    };

    let on_delete_click = {
        let existing_id = existing_id.clone();
        let on_delete = props.on_delete.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = existing_id.clone() {
                on_delete.emit(id);
            }
            on_close.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let is_editing = props.event.is_some();

    html! {
        <div class="event-modal-backdrop" onclick={on_backdrop_click}>
            <div class="event-modal" onclick={on_modal_click}>
                <div class="event-modal-content">
                    <h3 class="event-modal-title">
                        { if is_editing { "Edit Event" } else { "New Event" } }
                    </h3>

                    { if !error_messages.is_empty() {
                        html! {
                            <div class="event-modal-errors">
                                <ul>
                                    { for error_messages.iter().map(|message| html! {
                                        <li>{ message }</li>
                                    }) }
                                </ul>
                            </div>
                        }
                    } else {
                        html! {}
                    } }

                    <form class="event-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="event-title">{"Title"}</label>
                            <input
                                id="event-title"
                                type="text"
                                placeholder="What's happening?"
                                value={(*title).clone()}
                                onchange={on_title_change}
                                autofocus=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="event-date">{"Date"}</label>
                            <input
                                id="event-date"
                                type="date"
                                value={(*date_input).clone()}
                                onchange={on_date_change}
                            />
                        </div>

                        <div class="form-group form-group-inline">
                            <label for="event-all-day">{"All day"}</label>
                            <input
                                id="event-all-day"
                                type="checkbox"
                                checked={*all_day}
                                onchange={on_all_day_change}
                            />
                        </div>

                        <div class="form-group form-group-inline">
                            <label for="event-start">{"From"}</label>
                            <input
                                id="event-start"
                                type="time"
                                value={(*start_time).clone()}
                                onchange={on_start_change}
                                disabled={*all_day}
                            />
                            <label for="event-end">{"To"}</label>
                            <input
                                id="event-end"
                                type="time"
                                value={(*end_time).clone()}
                                onchange={on_end_change}
                                disabled={*all_day}
                            />
                        </div>

                        <div class="form-group">
                            <label for="event-color">{"Color"}</label>
                            <select id="event-color" value={(*color).clone()} onchange={on_color_change}>
                                { for COLOR_CHOICES.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={*color == *value}>{ label }</option>
                                }) }
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="event-description">{"Notes"}</label>
                            <textarea
                                id="event-description"
                                rows="3"
                                value={(*description).clone()}
                                onchange={on_description_change}
                            />
                        </div>

                        <div class="event-modal-buttons">
                            <button type="submit" class="btn btn-primary">
                                { if is_editing { "Save Changes" } else { "Create Event" } }
                            </button>
                            { if is_editing {
                                html! {
                                    <button
                                        type="button"
                                        class="btn btn-danger"
                                        onclick={on_delete_click}
                                    >
                                        {"Delete"}
                                    </button>
                                }
                            } else {
                                html! {}
                            } }
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
