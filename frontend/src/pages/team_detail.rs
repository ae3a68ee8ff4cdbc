use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api::{coaches, players, teams};
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::{CoachDto, PlayerDto, TeamDto};

#[derive(Properties, Clone, PartialEq)]
pub struct TeamDetailProps {
    pub team_id: String,
}

/// Drops a freshly assigned player from the still-available list.
fn without_player(list: Vec<PlayerDto>, player_id: &str) -> Vec<PlayerDto> {
    list.into_iter().filter(|p| p.id != player_id).collect()
}

/// Admin view of a single team: details, roster with player assignment,
/// and coach assignment.
#[function_component(TeamDetail)]
pub fn team_detail(props: &TeamDetailProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let team = use_state(|| Option::<Result<Option<TeamDto>, String>>::None);
    let roster = use_state(|| Option::<Result<Vec<PlayerDto>, String>>::None);
    let roster_reload = use_state(|| 0u32);
    let adding = use_state(|| false);
    let club_coaches = use_state(|| Vec::<CoachDto>::new());
    let selected_coach = use_state(String::new);
    let status = use_state(|| Option::<Result<String, String>>::None);
    let saving = use_state(|| false);

    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let team = team.clone();
        use_effect_with(props.team_id.clone(), move |team_id| {
            let team_id = team_id.clone();
            spawn_local(async move {
                let result = teams::get_team(&team_id).await;
                if let Err(e) = &result {
                    error!("Error loading team: {}", e);
                }
                team.set(Some(result));
            });
            || ()
        });
    }

    {
        let roster = roster.clone();
        use_effect_with(
            (props.team_id.clone(), *roster_reload),
            move |(team_id, _)| {
                let team_id = team_id.clone();
                spawn_local(async move {
                    let result = teams::roster_for_team(&team_id).await;
                    if let Err(e) = &result {
                        error!("Error loading roster: {}", e);
                    }
                    roster.set(Some(result));
                });
                || ()
            },
        );
    }

    {
        let club_coaches = club_coaches.clone();
        use_effect_with(club_id.clone(), move |club_id| {
            if let Some(club_id) = club_id.clone() {
                spawn_local(async move {
                    match coaches::list_coaches(&club_id).await {
                        Ok(list) => club_coaches.set(list),
                        Err(e) => error!("Error loading coaches: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let on_coach_select = {
        let selected_coach = selected_coach.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_coach.set(select.value());
        })
    };

    let on_assign = {
        let team_id = props.team_id.clone();
        let selected_coach = selected_coach.clone();
        let status = status.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            let coach_user_id = (*selected_coach).clone();
            if coach_user_id.is_empty() || *saving {
                return;
            }
            saving.set(true);
            let team_id = team_id.clone();
            let status = status.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let result = teams::assign_coach(&team_id, &coach_user_id)
                    .await
                    .map(|()| "Entrenador asignado.".to_string());
                status.set(Some(result));
                saving.set(false);
            });
        })
    };

    let toggle_add = {
        let adding = adding.clone();
        Callback::from(move |_: MouseEvent| adding.set(!*adding))
    };

    let on_assigned = {
        let roster_reload = roster_reload.clone();
        Callback::from(move |_: ()| roster_reload.set(*roster_reload + 1))
    };

    let roster_section = match roster.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"No hay jugadores en este equipo".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|player| html! {
                    <div class="bg-white rounded-xl shadow p-4 flex items-center justify-between">
                        <div>
                            <p class="font-medium text-gray-800">{&player.full_name}</p>
                            if let Some(birth_date) = player.birth_date {
                                <p class="text-sm text-gray-500">{birth_date.format("%d/%m/%Y").to_string()}</p>
                            }
                        </div>
                        if player.has_access() {
                            <span class="text-xs bg-emerald-100 text-emerald-700 rounded-full px-2 py-0.5">{"Acceso"}</span>
                        }
                    </div>
                })}
            </div>
        },
    };

    match team.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(None)) => html! {
            <EmptyState title={"Equipo no encontrado".to_string()} />
        },
        Some(Ok(Some(team))) => {
            let team_club_id = team.club_id.clone().or(club_id.clone());
            html! {
                <div class="space-y-4">
                    <h1 class="text-xl font-bold text-gray-800">{&team.name}</h1>
                    if let Some(season) = &team.season {
                        <p class="text-sm text-gray-500">{season}</p>
                    }
                    <section class="space-y-2">
                        <div class="flex items-center justify-between">
                            <h2 class="font-semibold text-gray-800">{"Jugadores"}</h2>
                            if team_club_id.is_some() {
                                <button onclick={toggle_add} class="text-sm text-emerald-600">
                                    { if *adding { "Cerrar" } else { "Añadir jugador" } }
                                </button>
                            }
                        </div>
                        if *adding {
                            if let Some(team_club_id) = team_club_id {
                                <AddPlayerPanel
                                    club_id={team_club_id}
                                    team_id={props.team_id.clone()}
                                    on_assigned={on_assigned.clone()}
                                />
                            }
                        }
                        {roster_section}
                    </section>
                    <div class="bg-white rounded-xl shadow p-4 space-y-3">
                        <h2 class="font-semibold text-gray-800">{"Asignar entrenador"}</h2>
                        if club_coaches.is_empty() {
                            <p class="text-sm text-gray-500">{"No hay entrenadores en el club."}</p>
                        } else {
                            <select class="w-full border border-gray-300 rounded-lg px-3 py-2" onchange={on_coach_select}>
                                <option value="" selected={selected_coach.is_empty()}>{"Elige un entrenador"}</option>
                                { for club_coaches.iter().map(|coach| html! {
                                    <option value={coach.user_id.clone()}
                                        selected={*selected_coach == coach.user_id}>
                                        {&coach.full_name}
                                    </option>
                                })}
                            </select>
                            <button onclick={on_assign} disabled={*saving || selected_coach.is_empty()}
                                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg py-2 disabled:opacity-50">
                                { if *saving { "Asignando..." } else { "Asignar" } }
                            </button>
                        }
                        {match status.as_ref() {
                            Some(Ok(message)) => html! { <p class="text-sm text-emerald-600">{message.clone()}</p> },
                            Some(Err(e)) => html! { <p class="text-sm text-red-600">{e.clone()}</p> },
                            None => html! {},
                        }}
                    </div>
                </div>
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct AddPlayerPanelProps {
    club_id: String,
    team_id: String,
    on_assigned: Callback<()>,
}

/// Club players not yet on the team; clicking one assigns it and removes it
/// from the list.
#[function_component(AddPlayerPanel)]
fn add_player_panel(props: &AddPlayerPanelProps) -> Html {
    let available = use_state(|| Option::<Result<Vec<PlayerDto>, String>>::None);
    let assigning = use_state(|| false);
    let assign_error = use_state(|| Option::<String>::None);

    {
        let available = available.clone();
        use_effect_with(
            (props.club_id.clone(), props.team_id.clone()),
            move |(club_id, team_id)| {
                let club_id = club_id.clone();
                let team_id = team_id.clone();
                spawn_local(async move {
                    let result = players::available_players_for_team(&club_id, &team_id).await;
                    if let Err(e) = &result {
                        error!("Error loading available players: {}", e);
                    }
                    available.set(Some(result));
                });
                || ()
            },
        );
    }

    let assign = {
        let available = available.clone();
        let assigning = assigning.clone();
        let assign_error = assign_error.clone();
        let team_id = props.team_id.clone();
        let on_assigned = props.on_assigned.clone();
        Callback::from(move |player_id: String| {
            if *assigning {
                return;
            }
            assigning.set(true);
            let available = available.clone();
            let assigning = assigning.clone();
            let assign_error = assign_error.clone();
            let team_id = team_id.clone();
            let on_assigned = on_assigned.clone();
            spawn_local(async move {
                match players::assign_player_to_team(&player_id, &team_id).await {
                    Ok(()) => {
                        if let Some(Ok(list)) = available.as_ref() {
                            available.set(Some(Ok(without_player(list.clone(), &player_id))));
                        }
                        assign_error.set(None);
                        on_assigned.emit(());
                    }
                    Err(e) => assign_error.set(Some(e)),
                }
                assigning.set(false);
            });
        })
    };

    let body = match available.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <p class="text-sm text-gray-500">{"No hay jugadores disponibles en el club."}</p>
        },
        Some(Ok(list)) => html! {
            <div class="space-y-1">
                { for list.iter().map(|player| {
                    let assign = assign.clone();
                    let player_id = player.id.clone();
                    let onclick = Callback::from(move |_: MouseEvent| assign.emit(player_id.clone()));
                    html! {
                        <button {onclick} disabled={*assigning}
                            class="w-full flex items-center justify-between px-3 py-2 rounded-lg hover:bg-gray-50 disabled:opacity-50">
                            <span class="text-sm font-medium text-gray-800">{&player.full_name}</span>
                            if let Some(birth_date) = player.birth_date {
                                <span class="text-xs text-gray-500">{birth_date.format("%Y").to_string()}</span>
                            }
                        </button>
                    }
                })}
            </div>
        },
    };

    html! {
        <div class="bg-white rounded-xl shadow p-4 space-y-2">
            <h3 class="text-sm font-medium text-gray-700">{"Jugadores del club"}</h3>
            if let Some(e) = assign_error.as_ref() {
                <p class="text-sm text-red-600">{e.clone()}</p>
            }
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(id: &str, name: &str) -> PlayerDto {
        PlayerDto {
            id: id.to_string(),
            full_name: name.to_string(),
            birth_date: None,
            user_id: None,
            parent_user_id: None,
        }
    }

    #[test]
    fn test_assigned_player_leaves_the_available_list() {
        let list = vec![player("p-1", "Ana Diaz"), player("p-2", "Luis Vega")];
        let remaining = without_player(list, "p-1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "p-2");
    }

    #[test]
    fn test_unknown_player_leaves_the_list_untouched() {
        let list = vec![player("p-1", "Ana Diaz"), player("p-2", "Luis Vega")];
        let remaining = without_player(list, "p-9");
        assert_eq!(remaining.len(), 2);
    }
}
