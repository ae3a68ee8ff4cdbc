use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::teams;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use crate::Route;
use shared::dto::team::CreateTeamRequest;
use shared::{TeamDto, TeamRef, TeamWithPlayers, UserRole};

/// Role-scoped team listing: admins see and manage every team, coaches
/// see the teams they run, parents see their children's teams.
#[function_component(Teams)]
pub fn teams_page() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let role = session.state.roles.role();
    let user_id = session
        .state
        .identity
        .as_ref()
        .map(|identity| identity.id.clone())
        .unwrap_or_default();
    let club_id = session.state.roles.club_id().map(str::to_string);

    let body = match role {
        Some(UserRole::SuperAdmin) => html! { <AdminTeams club_id={club_id} /> },
        Some(UserRole::Coach) => html! { <CoachTeams coach_user_id={user_id} /> },
        Some(UserRole::Parent) => html! { <ParentTeams parent_user_id={user_id} /> },
        _ => html! {
            <EmptyState title={"No hay equipos que mostrar".to_string()} />
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Equipos"}</h1>
            {body}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct AdminTeamsProps {
    club_id: Option<String>,
}

#[function_component(AdminTeams)]
fn admin_teams(props: &AdminTeamsProps) -> Html {
    let data = use_state(|| Option::<Result<Vec<TeamDto>, String>>::None);
    let reload = use_state(|| 0u32);

    {
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = teams::list_teams().await;
                if let Err(e) = &result {
                    error!("Error loading teams: {}", e);
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
            <EmptyState title={"Todavía no hay equipos".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|team| html! {
                    <Link<Route> to={Route::AdminTeamDetail { team_id: team.id.clone() }}
                        classes="block bg-white rounded-xl shadow p-4">
                        <p class="font-medium text-gray-800">{&team.name}</p>
                        if let Some(season) = &team.season {
                            <p class="text-sm text-gray-500">{season}</p>
                        }
                    </Link<Route>>
                })}
            </div>
        },
    };

    html! {
        <>
            if let Some(club_id) = &props.club_id {
                <CreateTeamForm club_id={club_id.clone()} on_created={on_created} />
            }
            {list}
        </>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CreateTeamFormProps {
    club_id: String,
    on_created: Callback<()>,
}

#[function_component(CreateTeamForm)]
fn create_team_form(props: &CreateTeamFormProps) -> Html {
    let open = use_state(|| false);
    let name = use_state(String::new);
    let season = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo equipo"}
            </button>
        };
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_season = {
        let season = season.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            season.set(input.value());
        })
    };

    let on_submit = {
        let open = open.clone();
        let name = name.clone();
        let season = season.clone();
        let error = error.clone();
        let saving = saving.clone();
        let club_id = props.club_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let request = CreateTeamRequest {
                club_id: club_id.clone(),
                name: (*name).clone(),
                season: Some((*season).clone()).filter(|s| !s.is_empty()),
            };
            if request.validate().is_err() {
                error.set(Some("El nombre es obligatorio.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let name = name.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match teams::create_team(&request).await {
                    Ok(()) => {
                        name.set(String::new());
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
                placeholder="Nombre del equipo"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                type="text"
                placeholder="Temporada (opcional)"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*season).clone()}
                oninput={on_season}
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

#[derive(Properties, Clone, PartialEq)]
struct CoachTeamsProps {
    coach_user_id: String,
}

#[function_component(CoachTeams)]
fn coach_teams(props: &CoachTeamsProps) -> Html {
    let data = use_state(|| Option::<Result<Vec<TeamRef>, String>>::None);

    {
        let data = data.clone();
        use_effect_with(props.coach_user_id.clone(), move |coach_user_id| {
            let coach_user_id = coach_user_id.clone();
            spawn_local(async move {
                let result = teams::teams_for_coach(&coach_user_id).await;
                if let Err(e) = &result {
                    error!("Error loading coach teams: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"No tienes equipos asignados".to_string()}
                hint={Some("El administrador del club asigna los equipos.".to_string())} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|team| html! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <p class="font-medium text-gray-800">{&team.name}</p>
                        if let Some(season) = &team.season {
                            <p class="text-sm text-gray-500">{season}</p>
                        }
                    </div>
                })}
            </div>
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ParentTeamsProps {
    parent_user_id: String,
}

#[function_component(ParentTeams)]
fn parent_teams(props: &ParentTeamsProps) -> Html {
    let data = use_state(|| Option::<Result<Vec<TeamWithPlayers>, String>>::None);

    {
        let data = data.clone();
        use_effect_with(props.parent_user_id.clone(), move |parent_user_id| {
            let parent_user_id = parent_user_id.clone();
            spawn_local(async move {
                let result = teams::roster_for_parent(&parent_user_id).await;
                if let Err(e) = &result {
                    error!("Error loading family teams: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"Tus hijos aún no están en ningún equipo".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|team| html! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <p class="font-medium text-gray-800">{&team.name}</p>
                        if let Some(season) = &team.season {
                            <p class="text-sm text-gray-500">{season}</p>
                        }
                        <p class="text-sm text-gray-600 mt-1">
                            { team.players.iter().map(|p| p.full_name.as_str()).collect::<Vec<_>>().join(", ") }
                        </p>
                    </div>
                })}
            </div>
        },
    }
}
