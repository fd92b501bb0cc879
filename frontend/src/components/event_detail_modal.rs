use shared::Event;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::format_display_date;

#[derive(Properties, PartialEq)]
pub struct EventDetailModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// The event being viewed
    pub event: Event,
    /// Switch the viewed event into the edit form. Only rendered here, so
    /// editing is unreachable without a viewed event.
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
}

/// Time range shown in the detail view; the sentinel pair reads as all-day.
pub fn time_range_label(event: &Event) -> String {
    if event.is_all_day() {
        "All day".to_string()
    } else {
        format!("{} – {}", event.start_time, event.end_time)
    }
}

#[function_component(EventDetailModal)]
pub fn event_detail_modal(props: &EventDetailModalProps) -> Html {
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

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| {
            on_edit.emit(());
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| {
            on_delete.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let event = &props.event;

    html! {
        <div class="event-detail-backdrop" onclick={on_backdrop_click}>
            <div class="event-detail-modal" onclick={on_modal_click}>
                <div class="event-detail-content">
                    <div class="event-detail-heading">
                        { if let Some(color) = &event.color {
                            html! {
                                <span
                                    class="event-color-dot"
                                    style={format!("background-color: {};", color)}
                                ></span>
                            }
                        } else {
                            html! {}
                        } }
                        <h3 class="event-detail-title">{ &event.title }</h3>
                    </div>

                    <div class="event-detail-info">
                        <div class="event-detail-field">
                            <label class="event-detail-label">{"Date"}</label>
                            <div class="event-detail-value">{ format_display_date(event.date) }</div>
                        </div>

                        <div class="event-detail-field">
                            <label class="event-detail-label">{"Time"}</label>
                            <div class="event-detail-value">{ time_range_label(event) }</div>
                        </div>

                        { if let Some(description) = &event.description {
                            html! {
                                <div class="event-detail-field">
                                    <label class="event-detail-label">{"Notes"}</label>
                                    <div class="event-detail-value">{ description }</div>
                                </div>
                            }
                        } else {
                            html! {}
                        } }
                    </div>

                    <div class="event-detail-buttons">
                        <button type="button" class="btn btn-primary" onclick={on_edit_click}>
                            {"Edit"}
                        </button>
                        <button type="button" class="btn btn-danger" onclick={on_delete_click}>
                            {"Delete"}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event_with_times(start: &str, end: &str) -> Event {
        Event {
            id: "event-1".to_string(),
            title: "Picnic".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: None,
            color: None,
        }
    }

    #[test]
    fn test_time_range_label() {
        assert_eq!(time_range_label(&event_with_times("09:00", "10:30")), "09:00 – 10:30");
        assert_eq!(time_range_label(&event_with_times("00:00", "23:59")), "All day");
        // Near misses of the sentinel still show as a range
        assert_eq!(time_range_label(&event_with_times("00:00", "23:00")), "00:00 – 23:00");
    }
}
