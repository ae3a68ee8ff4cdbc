use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{events, messages, players, teams};
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use crate::Route;
use shared::{EventDto, MessageDto, UserRole};

/// Operational counters shown on the admin home.
#[derive(Clone, Debug, Default, PartialEq)]
struct AdminStats {
    players: u64,
    teams: u64,
    players_without_access: u64,
    players_without_team: u64,
    teams_without_coach: u64,
}

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    stats: Option<AdminStats>,
    upcoming: Vec<EventDto>,
    recent: Vec<MessageDto>,
}

async fn load_admin_stats() -> Result<AdminStats, String> {
    Ok(AdminStats {
        players: players::count_players().await?,
        teams: teams::count_teams().await?,
        players_without_access: players::count_players_without_access().await?,
        players_without_team: players::count_players_without_team().await?,
        teams_without_coach: teams::count_teams_without_coach().await?,
    })
}

async fn load_home(is_admin: bool) -> Result<HomeData, String> {
    let stats = if is_admin {
        Some(load_admin_stats().await?)
    } else {
        None
    };
    Ok(HomeData {
        stats,
        upcoming: events::upcoming_events(3).await?,
        recent: messages::recent_messages(2).await?,
    })
}

/// Home for admins and coaches. Parents and players have their own
/// dashboards; the bottom nav never sends them here.
#[function_component(Home)]
pub fn home() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<HomeData, String>>::None);

    let is_admin = session.state.roles.role() == Some(UserRole::SuperAdmin);

    {
        let data = data.clone();
        use_effect_with(is_admin, move |is_admin| {
            let is_admin = *is_admin;
            spawn_local(async move {
                let result = load_home(is_admin).await;
                if let Err(e) = &result {
                    error!("Error loading home: {}", e);
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
            let alerts = data.stats.as_ref().map(render_alerts).unwrap_or_default();
            let stats = data.stats.as_ref().map(render_stats).unwrap_or_default();
            let shortcuts = if data.stats.is_some() {
                render_admin_shortcuts()
            } else {
                html! {}
            };
            html! {
                <>
                    {alerts}
                    {stats}
                    {shortcuts}
                    <section>
                        <div class="flex items-center justify-between mb-2">
                            <h2 class="font-semibold text-gray-800">{"Próximos eventos"}</h2>
                            <Link<Route> to={Route::Calendar} classes="text-sm text-emerald-600">
                                {"Ver todos"}
                            </Link<Route>>
                        </div>
                        if data.upcoming.is_empty() {
                            <EmptyState title={"No hay eventos próximos".to_string()} />
                        } else {
                            <div class="space-y-2">
                                { for data.upcoming.iter().map(event_card) }
                            </div>
                        }
                    </section>
                    <section>
                        <div class="flex items-center justify-between mb-2">
                            <h2 class="font-semibold text-gray-800">{"Últimos mensajes"}</h2>
                            <Link<Route> to={Route::Messages} classes="text-sm text-emerald-600">
                                {"Ver todos"}
                            </Link<Route>>
                        </div>
                        if data.recent.is_empty() {
                            <EmptyState title={"No hay mensajes".to_string()} />
                        } else {
                            <div class="space-y-2">
                                { for data.recent.iter().map(message_card) }
                            </div>
                        }
                    </section>
                </>
            }
        }
    };

    let greeting = session
        .state
        .identity
        .as_ref()
        .map(|identity| format!("Hola, {}", identity.first_name))
        .unwrap_or_else(|| "Inicio".to_string());
    let role_label = session.state.roles.role().map(|role| role.label());

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-xl font-bold text-gray-800">{greeting}</h1>
                if let Some(role_label) = role_label {
                    <span class="text-xs bg-gray-100 text-gray-600 rounded-full px-2 py-0.5">{role_label}</span>
                }
            </div>
            {body}
        </div>
    }
}

fn render_alerts(stats: &AdminStats) -> Html {
    let mut alerts: Vec<Html> = Vec::new();
    if stats.players_without_access > 0 {
        alerts.push(alert_row(
            format!("{} jugadores sin acceso activado", stats.players_without_access),
            Route::AdminPlayers,
        ));
    }
    if stats.players_without_team > 0 {
        alerts.push(alert_row(
            format!("{} jugadores sin equipo", stats.players_without_team),
            Route::AdminPlayers,
        ));
    }
    if stats.teams_without_coach > 0 {
        alerts.push(alert_row(
            format!("{} equipos sin entrenador", stats.teams_without_coach),
            Route::Teams,
        ));
    }
    if alerts.is_empty() {
        return html! {};
    }
    html! {
        <section class="space-y-2">
            { for alerts }
        </section>
    }
}

fn alert_row(text: String, route: Route) -> Html {
    html! {
        <Link<Route> to={route} classes="block bg-amber-50 border border-amber-200 text-amber-800 rounded-lg px-4 py-3 text-sm">
            {text}
        </Link<Route>>
    }
}

fn render_stats(stats: &AdminStats) -> Html {
    html! {
        <section class="grid grid-cols-2 gap-3">
            <div class="bg-white rounded-xl shadow p-4 text-center">
                <p class="text-2xl font-bold text-gray-800">{stats.players}</p>
                <p class="text-sm text-gray-500">{"Jugadores"}</p>
            </div>
            <div class="bg-white rounded-xl shadow p-4 text-center">
                <p class="text-2xl font-bold text-gray-800">{stats.teams}</p>
                <p class="text-sm text-gray-500">{"Equipos"}</p>
            </div>
        </section>
    }
}

fn render_admin_shortcuts() -> Html {
    let entries = [
        (Route::AdminPlayers, "Jugadores"),
        (Route::AdminEvents, "Eventos"),
        (Route::Coaches, "Entrenadores"),
        (Route::Centers, "Centros"),
    ];
    html! {
        <section class="grid grid-cols-2 gap-3">
            { for entries.into_iter().map(|(route, label)| html! {
                <Link<Route> to={route}
                    classes="bg-white rounded-xl shadow p-4 text-center font-medium text-gray-700">
                    {label}
                </Link<Route>>
            })}
        </section>
    }
}

fn event_card(event: &EventDto) -> Html {
    html! {
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
    }
}

fn message_card(message: &MessageDto) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow p-4">
            <div class="flex items-center justify-between mb-1">
                <p class="font-medium text-gray-800">{&message.title}</p>
                if message.priority == shared::MessagePriority::Important {
                    <span class="text-xs bg-red-100 text-red-700 rounded-full px-2 py-0.5">{"Importante"}</span>
                }
            </div>
            <p class="text-sm text-gray-600 line-clamp-2">{&message.body}</p>
            <p class="text-xs text-gray-400 mt-2">
                {format!("{} · {}", message.author_name, message.created_at.format("%d/%m/%Y"))}
            </p>
        </div>
    }
}
