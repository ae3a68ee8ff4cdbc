use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{events, messages, players, teams};
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use crate::Route;
use shared::{EventDto, MessageDto, PlayerDto};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    children: Vec<PlayerDto>,
    upcoming: Vec<EventDto>,
    recent: Vec<MessageDto>,
}

/// Children first, then the events of the teams those children play in.
async fn load_dashboard(parent_user_id: &str) -> Result<DashboardData, String> {
    let children = players::players_for_parent(parent_user_id).await?;
    let player_ids: Vec<String> = children.iter().map(|p| p.id.clone()).collect();
    let team_ids = teams::team_ids_for_players(&player_ids).await?;
    Ok(DashboardData {
        children,
        upcoming: events::upcoming_events_for_teams(&team_ids, 5).await?,
        recent: messages::recent_messages(3).await?,
    })
}

#[function_component(ParentDashboard)]
pub fn parent_dashboard() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<DashboardData, String>>::None);

    let parent_user_id = session
        .state
        .identity
        .as_ref()
        .map(|identity| identity.id.clone())
        .unwrap_or_default();

    {
        let data = data.clone();
        use_effect_with(parent_user_id, move |parent_user_id| {
            let parent_user_id = parent_user_id.clone();
            spawn_local(async move {
                let result = load_dashboard(&parent_user_id).await;
                if let Err(e) = &result {
                    error!("Error loading parent dashboard: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let body = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(data)) => {
            let without_access = data.children.iter().filter(|p| !p.has_access()).count();
            html! {
            <>
                <section class="grid grid-cols-2 gap-3">
                    <div class="bg-white rounded-xl shadow p-4 text-center">
                        <p class="text-2xl font-bold text-gray-800">{data.children.len()}</p>
                        <p class="text-sm text-gray-500">{"Jugadores"}</p>
                    </div>
                    <div class="bg-white rounded-xl shadow p-4 text-center">
                        <p class="text-2xl font-bold text-gray-800">{without_access}</p>
                        <p class="text-sm text-gray-500">{"Sin acceso propio"}</p>
                    </div>
                </section>
                <section>
                    <div class="flex items-center justify-between mb-2">
                        <h2 class="font-semibold text-gray-800">{"Mis jugadores"}</h2>
                        <Link<Route> to={Route::ParentPlayers} classes="text-sm text-emerald-600">
                            {"Ver todos"}
                        </Link<Route>>
                    </div>
                    if data.children.is_empty() {
                        <EmptyState title={"No hay jugadores vinculados".to_string()} />
                    } else {
                        <div class="space-y-2">
                            { for data.children.iter().map(|player| html! {
                                <div class="bg-white rounded-xl shadow p-4">
                                    <p class="font-medium text-gray-800">{&player.full_name}</p>
                                </div>
                            })}
                        </div>
                    }
                </section>
                <section>
                    <h2 class="font-semibold text-gray-800 mb-2">{"Próximos eventos"}</h2>
                    if data.upcoming.is_empty() {
                        <EmptyState title={"No hay eventos próximos".to_string()} />
                    } else {
                        <div class="space-y-2">
                            { for data.upcoming.iter().map(|event| html! {
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
                    }
                </section>
                <section>
                    <h2 class="font-semibold text-gray-800 mb-2">{"Últimos mensajes"}</h2>
                    if data.recent.is_empty() {
                        <EmptyState title={"No hay mensajes".to_string()} />
                    } else {
                        <div class="space-y-2">
                            { for data.recent.iter().map(|message| html! {
                                <div class="bg-white rounded-xl shadow p-4">
                                    <p class="font-medium text-gray-800">{&message.title}</p>
                                    <p class="text-sm text-gray-600 line-clamp-2">{&message.body}</p>
                                </div>
                            })}
                        </div>
                    }
                </section>
            </>
            }
        }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-xl font-bold text-gray-800">{"Inicio"}</h1>
            {body}
        </div>
    }
}
