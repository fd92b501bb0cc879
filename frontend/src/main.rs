mod components;
mod config;
mod context;
mod hooks;
mod services;

use yew::prelude::*;

use components::header::Header;
use components::week_view::WeekView;
use context::calendar::CalendarProvider;
use hooks::use_calendar::use_calendar;

#[function_component(AppContent)]
fn app_content() -> Html {
    let calendar = use_calendar();

    html! {
        <>
            <Header
                current_date={calendar.current_date}
                on_previous_week={calendar.actions.previous_week.clone()}
                on_next_week={calendar.actions.next_week.clone()}
                on_today={calendar.actions.go_to_today.clone()}
            />
            <main class="main">
                <div class="container">
                    <WeekView />
                </div>
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <CalendarProvider>
            <AppContent />
        </CalendarProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
