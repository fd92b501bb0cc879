use chrono::NaiveDate;
use shared::Event;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{ALL_DAY_ROW_PX, DAY_HEADER_PX, MIN_EVENT_BLOCK_PX, PX_PER_HOUR};
use crate::services::date_utils::slot_time;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct WeekCellProps {
    pub date: NaiveDate,
    pub is_today: bool,
    /// Full event list; the cell filters its own day
    pub events: Vec<Event>,
    pub has_all_day_event: bool,
    pub max_all_day_events: usize,
    pub on_time_click: Callback<(NaiveDate, String)>,
    pub on_event_click: Callback<Event>,
}

/// This day's events, split into (all-day, timed).
pub fn split_day_events(events: &[Event], date: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    let mut all_day = Vec::new();
    let mut timed = Vec::new();
    for event in events.iter().filter(|event| event.date == date) {
        if event.is_all_day() {
            all_day.push(event.clone());
        } else {
            timed.push(event.clone());
        }
    }
    (all_day, timed)
}

/// Height of the header region above the hour grid. Every column reserves
/// the same height, sized by the week-wide maximum so the grids line up.
pub fn all_day_region_px(has_all_day_event: bool, max_all_day_events: usize) -> f32 {
    if has_all_day_event {
        DAY_HEADER_PX + max_all_day_events as f32 * ALL_DAY_ROW_PX
    } else {
        DAY_HEADER_PX
    }
}

/// Pixel offset and height of a timed event block on the hour grid, or None
/// when the event's times do not parse.
pub fn event_block_geometry(event: &Event) -> Option<(f32, f32)> {
    let start = event.start_minutes().ok()?;
    let end = event.end_minutes().ok()?;
    let top = start as f32 * PX_PER_HOUR / 60.0;
    let height = end.saturating_sub(start) as f32 * PX_PER_HOUR / 60.0;
    Some((top, height.max(MIN_EVENT_BLOCK_PX)))
}

#[function_component(WeekCell)]
pub fn week_cell(props: &WeekCellProps) -> Html {
    let (all_day_events, timed_events) = split_day_events(&props.events, props.date);

    let header_style = format!(
        "height: {}px;",
        all_day_region_px(props.has_all_day_event, props.max_all_day_events)
    );

    let all_day_chips = all_day_events.into_iter().map(|event| {
        let on_event_click = props.on_event_click.clone();
        let clicked = event.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_event_click.emit(clicked.clone());
        });
        let style = event
            .color
            .as_ref()
            .map(|color| format!("background-color: {};", color))
            .unwrap_or_default();
        html! {
            <div key={event.id.clone()} class="all-day-chip" {style} {onclick}>
                { &event.title }
            </div>
        }
    });

    let slots = (0..24).map(|hour| {
        let on_time_click = props.on_time_click.clone();
        let date = props.date;
        let onclick = Callback::from(move |_: MouseEvent| {
            on_time_click.emit((date, slot_time(hour)));
        });
        html! {
            <div key={hour} class="week-cell-slot" {onclick}></div>
        }
    });

    let blocks = timed_events.into_iter().map(|event| {
        let Some((top, height)) = event_block_geometry(&event) else {
            Logger::warn_with_component(
                "week_cell",
                &format!(
                    "skipping event {} with unparseable times {}–{}",
                    event.id, event.start_time, event.end_time
                ),
            );
            return html! {};
        };
        let on_event_click = props.on_event_click.clone();
        let clicked = event.clone();
        // One callback per interaction: keep the slot underneath quiet
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_event_click.emit(clicked.clone());
        });
        let color = event
            .color
            .as_ref()
            .map(|color| format!(" background-color: {};", color))
            .unwrap_or_default();
        let style = format!("top: {}px; height: {}px;{}", top, height, color);
        html! {
            <div key={event.id.clone()} class="week-cell-event" {style} {onclick}>
                <span class="event-time">
                    { format!("{} – {}", event.start_time, event.end_time) }
                </span>
                <span class="event-title">{ &event.title }</span>
            </div>
        }
    });

    html! {
        <div class={classes!("week-cell", props.is_today.then_some("today"))}>
            <div class="week-cell-header" style={header_style}>
                { for all_day_chips }
            </div>
            <div class="week-cell-grid">
                { for slots }
                { for blocks }
            </div>
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

    #[test]
    fn test_split_day_events() {
        let monday = date(2025, 6, 16);
        let tuesday = date(2025, 6, 17);
        let events = vec![
            event_on("all-day", monday, "00:00", "23:59"),
            event_on("timed", monday, "09:00", "10:00"),
            event_on("other-day", tuesday, "09:00", "10:00"),
        ];

        let (all_day, timed) = split_day_events(&events, monday);
        assert_eq!(all_day.len(), 1);
        assert_eq!(all_day[0].id, "all-day");
        assert_eq!(timed.len(), 1);
        assert_eq!(timed[0].id, "timed");
    }

    #[test]
    fn test_event_block_geometry() {
        let event = event_on("1", date(2025, 6, 16), "09:30", "10:30");
        // 60px per hour: 9:30 sits 570px down, one hour spans 60px
        assert_eq!(event_block_geometry(&event), Some((570.0, 60.0)));

        let midnight = event_on("2", date(2025, 6, 16), "00:00", "01:00");
        assert_eq!(event_block_geometry(&midnight), Some((0.0, 60.0)));
    }

    #[test]
    fn test_event_block_geometry_clamps_tiny_blocks() {
        let short = event_on("1", date(2025, 6, 16), "09:00", "09:05");
        let (_, height) = event_block_geometry(&short).unwrap();
        assert_eq!(height, MIN_EVENT_BLOCK_PX);

        // Inverted ranges do not underflow
        let inverted = event_on("2", date(2025, 6, 16), "10:00", "09:00");
        let (top, height) = event_block_geometry(&inverted).unwrap();
        assert_eq!(top, 600.0);
        assert_eq!(height, MIN_EVENT_BLOCK_PX);
    }

    #[test]
    fn test_event_block_geometry_rejects_malformed_times() {
        let broken = event_on("1", date(2025, 6, 16), "morning", "10:00");
        assert_eq!(event_block_geometry(&broken), None);
    }

    #[test]
    fn test_all_day_region_px() {
        assert_eq!(all_day_region_px(false, 0), DAY_HEADER_PX);
        // The flag alone reserves no extra rows
        assert_eq!(all_day_region_px(true, 0), DAY_HEADER_PX);
        assert_eq!(
            all_day_region_px(true, 2),
            DAY_HEADER_PX + 2.0 * ALL_DAY_ROW_PX
        );
    }
}
