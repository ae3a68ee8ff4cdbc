use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{events, messages, players, teams};
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use crate::Route;
use shared::{EventDto, MessageDto};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    upcoming: Vec<EventDto>,
    recent: Vec<MessageDto>,
}

/// The signed-in player's own schedule: their record, their teams, the
/// events of those teams.
async fn load_dashboard(user_id: &str) -> Result<DashboardData, String> {
    let team_ids = match players::player_for_user(user_id).await? {
        Some(player) => teams::team_ids_for_players(&[player.id]).await?,
        None => Vec::new(),
    };
    Ok(DashboardData {
        upcoming: events::upcoming_events_for_teams(&team_ids, 5).await?,
        recent: messages::recent_messages(3).await?,
    })
}

#[function_component(PlayerDashboard)]
pub fn player_dashboard() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<DashboardData, String>>::None);

    let user_id = session
        .state
        .identity
        .as_ref()
        .map(|identity| identity.id.clone())
        .unwrap_or_default();

    {
        let data = data.clone();
        use_effect_with(user_id, move |user_id| {
            let user_id = user_id.clone();
            spawn_local(async move {
                let result = load_dashboard(&user_id).await;
                if let Err(e) = &result {
                    error!("Error loading player dashboard: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let body = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(data)) => html! {
            <>
                <section>
                    <h2 class="font-semibold text-gray-800 mb-2">{"Próximos eventos"}</h2>
                    if data.upcoming.is_empty() {
                        <EmptyState title={"No tienes eventos próximos".to_string()} />
                    } else {
                        <div class="space-y-2">
                            { for data.upcoming.iter().map(|event| html! {
                                <Link<Route> to={Route::EventDetail { event_id: event.id.clone() }}
                                    classes="block bg-white rounded-xl shadow p-4">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="font-medium text-gray-800">{&event.title}</p>
                                            <p class="text-sm text-gray-500">{event.event_type.label()}</p>
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
        },
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-xl font-bold text-gray-800">{"Inicio"}</h1>
            {body}
        </div>
    }
}
