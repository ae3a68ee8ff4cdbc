use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{events, teams};
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use crate::Route;
use shared::dto::event::CreateEventRequest;
use shared::{EventDto, EventType, TeamRef};

/// `datetime-local` input value to a fixed-offset timestamp, read as UTC.
fn parse_local_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()?;
    Some(Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Admin and coach view for scheduling: upcoming events plus creation.
#[function_component(EventsAdmin)]
pub fn events_admin() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<EventDto>, String>>::None);
    let reload = use_state(|| 0u32);

    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = events::upcoming_events(20).await;
                if let Err(e) = &result {
                    error!("Error loading events: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let on_created = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let list = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"No hay eventos programados".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|event| html! {
                    <Link<Route> to={Route::EventDetail { event_id: event.id.clone() }}
                        classes="block bg-white rounded-xl shadow p-4">
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="font-medium text-gray-800">{&event.title}</p>
                                <p class="text-sm text-gray-500">
                                    { event.team_name().unwrap_or_else(|| event.event_type.label()).to_string() }
                                </p>
                            </div>
                            <span class="text-sm text-gray-500">
                                { event.start_time.format("%d/%m %H:%M").to_string() }
                            </span>
                        </div>
                    </Link<Route>>
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Eventos"}</h1>
            if let Some(club_id) = club_id {
                <CreateEventForm club_id={club_id} on_created={on_created} />
            }
            {list}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CreateEventFormProps {
    club_id: String,
    on_created: Callback<()>,
}

#[function_component(CreateEventForm)]
fn create_event_form(props: &CreateEventFormProps) -> Html {
    let open = use_state(|| false);
    let club_teams = use_state(Vec::<TeamRef>::new);
    let team_id = use_state(String::new);
    let title = use_state(String::new);
    let event_type = use_state(|| EventType::Training);
    let start = use_state(String::new);
    let end = use_state(String::new);
    let location = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    {
        let club_teams = club_teams.clone();
        use_effect_with(props.club_id.clone(), move |club_id| {
            let club_id = club_id.clone();
            spawn_local(async move {
                match teams::team_refs_for_club(&club_id).await {
                    Ok(list) => club_teams.set(list),
                    Err(e) => error!("Error loading teams: {}", e),
                }
            });
            || ()
        });
    }

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo evento"}
            </button>
        };
    }

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_team = {
        let team_id = team_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            team_id.set(select.value());
        })
    };
    let on_type = {
        let event_type = event_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            event_type.set(match select.value().as_str() {
                "match" => EventType::Match,
                "meeting" => EventType::Meeting,
                "other" => EventType::Other,
                _ => EventType::Training,
            });
        })
    };

    let on_submit = {
        let open = open.clone();
        let team_id = team_id.clone();
        let title = title.clone();
        let event_type = event_type.clone();
        let start = start.clone();
        let end = end.clone();
        let location = location.clone();
        let error = error.clone();
        let saving = saving.clone();
        let club_id = props.club_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            if team_id.is_empty() {
                error.set(Some("Elige un equipo.".to_string()));
                return;
            }
            let (Some(start_time), Some(end_time)) =
                (parse_local_datetime(&start), parse_local_datetime(&end))
            else {
                error.set(Some("Fechas de inicio y fin obligatorias.".to_string()));
                return;
            };
            if end_time <= start_time {
                error.set(Some("El fin debe ser posterior al inicio.".to_string()));
                return;
            }
            let request = CreateEventRequest {
                club_id: club_id.clone(),
                team_id: (*team_id).clone(),
                title: (*title).clone(),
                event_type: *event_type,
                start_time,
                end_time,
                location: Some((*location).clone()).filter(|l| !l.is_empty()),
            };
            if request.validate().is_err() {
                error.set(Some("El título es obligatorio.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let title = title.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match events::create_event(&request).await {
                    Ok(()) => {
                        title.set(String::new());
                        open.set(false);
                        saving.set(false);
                        on_created.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <form onsubmit={on_submit} class="bg-white rounded-xl shadow p-4 space-y-3">
            <select class="w-full border border-gray-300 rounded-lg px-3 py-2" onchange={on_team}>
                <option value="" selected={team_id.is_empty()}>{"Elige un equipo"}</option>
                { for club_teams.iter().map(|team| html! {
                    <option value={team.id.clone()} selected={*team_id == team.id}>{&team.name}</option>
                })}
            </select>
            <input
                type="text"
                placeholder="Título"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*title).clone()}
                oninput={text_input(&title)}
            />
            <select class="w-full border border-gray-300 rounded-lg px-3 py-2" onchange={on_type}>
                <option value="training" selected={*event_type == EventType::Training}>{"Entrenamiento"}</option>
                <option value="match" selected={*event_type == EventType::Match}>{"Partido"}</option>
                <option value="meeting" selected={*event_type == EventType::Meeting}>{"Reunión"}</option>
                <option value="other" selected={*event_type == EventType::Other}>{"Otro"}</option>
            </select>
            <input
                type="datetime-local"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*start).clone()}
                oninput={text_input(&start)}
            />
            <input
                type="datetime-local"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*end).clone()}
                oninput={text_input(&end)}
            />
            <input
                type="text"
                placeholder="Lugar (opcional)"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*location).clone()}
                oninput={text_input(&location)}
            />
            if let Some(error) = error.as_ref() {
                <p class="text-sm text-red-600">{error.clone()}</p>
            }
            <div class="flex gap-2">
                <button type="button" onclick={on_cancel}
                    class="flex-1 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg py-2">
                    {"Cancelar"}
                </button>
                <button type="submit" disabled={*saving}
                    class="flex-1 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg py-2 disabled:opacity-50">
                    { if *saving { "Creando..." } else { "Crear" } }
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_datetime() {
        let parsed = parse_local_datetime("2024-05-10T18:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-10T18:30:00+00:00");
        assert!(parse_local_datetime("not-a-date").is_none());
        assert!(parse_local_datetime("").is_none());
    }
}
