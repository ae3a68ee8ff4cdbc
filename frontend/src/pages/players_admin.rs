use chrono::NaiveDate;
use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::players;
use crate::components::activate_access::ActivateAccessForm;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::dto::player::CreatePlayerRequest;
use shared::PlayerListing;

/// Admin roster: every player with club, team and access status, plus
/// registration and access activation.
#[function_component(PlayersAdmin)]
pub fn players_admin() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<PlayerListing>, String>>::None);
    let reload = use_state(|| 0u32);

    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = players::list_players_admin().await;
                if let Err(e) = &result {
                    error!("Error loading players: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let on_changed = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let list = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"Todavía no hay jugadores".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|player| html! {
                    <PlayerCard player={player.clone()} on_changed={on_changed.clone()} />
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Jugadores"}</h1>
            if let Some(club_id) = club_id {
                <CreatePlayerForm club_id={club_id} on_created={on_changed.clone()} />
            }
            {list}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct PlayerCardProps {
    player: PlayerListing,
    on_changed: Callback<()>,
}

#[function_component(PlayerCard)]
fn player_card(props: &PlayerCardProps) -> Html {
    let activating = use_state(|| false);
    let player = &props.player;

    let badges = html! {
        <div class="flex gap-1 mt-1">
            if player.has_access {
                <span class="text-xs bg-emerald-100 text-emerald-700 rounded-full px-2 py-0.5">{"Acceso"}</span>
            } else {
                <span class="text-xs bg-gray-100 text-gray-500 rounded-full px-2 py-0.5">{"Sin acceso"}</span>
            }
            if player.team_name.is_none() {
                <span class="text-xs bg-amber-100 text-amber-700 rounded-full px-2 py-0.5">{"Sin equipo"}</span>
            }
        </div>
    };

    let subtitle = match (&player.club_name, &player.team_name) {
        (Some(club), Some(team)) => format!("{} · {}", club, team),
        (Some(club), None) => club.clone(),
        (None, Some(team)) => team.clone(),
        (None, None) => "Sin club".to_string(),
    };

    let toggle = {
        let activating = activating.clone();
        Callback::from(move |_: MouseEvent| activating.set(!*activating))
    };

    html! {
        <div class="bg-white rounded-xl shadow p-4">
            <div class="flex items-center justify-between">
                <div>
                    <p class="font-medium text-gray-800">{&player.full_name}</p>
                    <p class="text-sm text-gray-500">{subtitle}</p>
                    {badges}
                </div>
                if !player.has_access {
                    <button onclick={toggle} class="text-sm text-emerald-600">
                        { if *activating { "Cerrar" } else { "Activar acceso" } }
                    </button>
                }
            </div>
            if *activating {
                <ActivateAccessForm
                    player_id={player.id.clone()}
                    full_name={player.full_name.clone()}
                    on_activated={props.on_changed.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CreatePlayerFormProps {
    club_id: String,
    on_created: Callback<()>,
}

#[function_component(CreatePlayerForm)]
fn create_player_form(props: &CreatePlayerFormProps) -> Html {
    let open = use_state(|| false);
    let full_name = use_state(String::new);
    let birth_date = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo jugador"}
            </button>
        };
    }

    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };
    let on_birth_date = {
        let birth_date = birth_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            birth_date.set(input.value());
        })
    };

    let on_submit = {
        let open = open.clone();
        let full_name = full_name.clone();
        let birth_date = birth_date.clone();
        let error = error.clone();
        let saving = saving.clone();
        let club_id = props.club_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let Ok(parsed_birth_date) = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d") else {
                error.set(Some("Fecha de nacimiento inválida.".to_string()));
                return;
            };
            let request = CreatePlayerRequest {
                full_name: (*full_name).clone(),
                birth_date: parsed_birth_date,
                club_id: club_id.clone(),
            };
            if request.validate().is_err() {
                error.set(Some("El nombre es obligatorio.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let full_name = full_name.clone();
            let birth_date = birth_date.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match players::create_player(&request).await {
                    Ok(_player_id) => {
                        full_name.set(String::new());
                        birth_date.set(String::new());
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
            <input
                type="text"
                placeholder="Nombre completo"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*full_name).clone()}
                oninput={on_full_name}
            />
            <input
                type="date"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*birth_date).clone()}
                oninput={on_birth_date}
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
