use chrono::{Datelike, Duration, NaiveDate, Utc};
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::events;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::Route;
use shared::dto::event::group_by_day;
use shared::EventDto;

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// First day of the month `offset` months away from `(year, month)`.
fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + offset;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((start, end))
}

#[function_component(Calendar)]
pub fn calendar() -> Html {
    let today = Utc::now().date_naive();
    let month = use_state(|| (today.year(), today.month()));
    let selected_day = use_state(|| Option::<NaiveDate>::None);
    let data = use_state(|| Option::<Result<Vec<EventDto>, String>>::None);

    {
        let data = data.clone();
        let selected_day = selected_day.clone();
        use_effect_with(*month, move |(year, month)| {
            data.set(None);
            selected_day.set(None);
            let bounds = month_bounds(*year, *month);
            spawn_local(async move {
                let result = match bounds {
                    None => Err("Invalid month".to_string()),
                    Some((start, end)) => {
                        events::events_between(
                            &format!("{}T00:00:00Z", start),
                            &format!("{}T00:00:00Z", end),
                        )
                        .await
                    }
                };
                if let Err(e) = &result {
                    error!("Error loading calendar: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let (year, month_number) = *month;
    let go = |offset: i32| {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month_number) = *month;
            month.set(shift_month(year, month_number, offset));
        })
    };

    let body = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(events)) => {
            let by_day = group_by_day(events);
            let grid = render_grid(year, month_number, today, &by_day, &selected_day);
            let day_list = match *selected_day {
                Some(day) => render_day(day, by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])),
                None => html! {},
            };
            html! { <>{grid}{day_list}</> }
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <button onclick={go(-1)} class="px-3 py-1 text-gray-600">{"←"}</button>
                <h1 class="text-lg font-bold text-gray-800">
                    {format!("{} {}", MONTH_NAMES[(month_number - 1) as usize], year)}
                </h1>
                <button onclick={go(1)} class="px-3 py-1 text-gray-600">{"→"}</button>
            </div>
            {body}
        </div>
    }
}

fn render_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    by_day: &std::collections::BTreeMap<NaiveDate, Vec<EventDto>>,
    selected: &UseStateHandle<Option<NaiveDate>>,
) -> Html {
    let Some((first, end)) = month_bounds(year, month) else {
        return html! {};
    };
    // Monday-first grid with leading blanks.
    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<Html> = (0..leading).map(|_| html! { <div></div> }).collect();

    let mut day = first;
    while day < end {
        let has_events = by_day.contains_key(&day);
        let is_today = day == today;
        let is_selected = **selected == Some(day);
        let base = if is_selected {
            "bg-emerald-600 text-white"
        } else if is_today {
            "bg-emerald-100 text-emerald-800"
        } else {
            "text-gray-700"
        };
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(day)))
        };
        cells.push(html! {
            <button onclick={onclick}
                class={format!("relative rounded-full h-9 w-9 mx-auto text-sm {}", base)}>
                {day.day()}
                if has_events {
                    <span class="absolute bottom-0.5 left-1/2 -translate-x-1/2 h-1 w-1 rounded-full bg-emerald-500"></span>
                }
            </button>
        });
        day += Duration::days(1);
    }

    let headers = ["L", "M", "X", "J", "V", "S", "D"];
    html! {
        <div class="bg-white rounded-xl shadow p-3">
            <div class="grid grid-cols-7 text-center text-xs text-gray-400 mb-2">
                { for headers.iter().map(|w| html! { <span>{*w}</span> }) }
            </div>
            <div class="grid grid-cols-7 gap-y-1 text-center">
                { for cells }
            </div>
        </div>
    }
}

fn render_day(day: NaiveDate, events: &[EventDto]) -> Html {
    html! {
        <section>
            <h2 class="font-semibold text-gray-800 mb-2">
                {day.format("%d/%m/%Y").to_string()}
            </h2>
            if events.is_empty() {
                <EmptyState title={"No hay eventos este día".to_string()} />
            } else {
                <div class="space-y-2">
                    { for events.iter().map(|event| html! {
                        <Link<Route> to={Route::EventDetail { event_id: event.id.clone() }}
                            classes="block bg-white rounded-xl shadow p-4">
                            <div class="flex items-center justify-between">
                                <div>
                                    <p class="font-medium text-gray-800">{&event.title}</p>
                                    <p class="text-sm text-gray-500">{event.event_type.label()}</p>
                                </div>
                                <span class="text-sm text-gray-500">
                                    {event.start_time.format("%H:%M").to_string()}
                                </span>
                            </div>
                        </Link<Route>>
                    })}
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 3, -15), (2022, 12));
    }

    #[test]
    fn test_month_bounds_are_half_open() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
