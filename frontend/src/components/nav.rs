use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;
use shared::UserRole;

/// Home tab target per role; the app has no single home screen.
fn home_route(role: Option<UserRole>) -> Route {
    match role {
        Some(UserRole::Parent) => Route::ParentDashboard,
        Some(UserRole::Player) => Route::PlayerDashboard,
        _ => Route::Home,
    }
}

#[function_component(BottomNav)]
pub fn bottom_nav() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let role = session.state.roles.role();

    let items: Vec<(Route, &str, &str)> = vec![
        (home_route(role), "Inicio", "🏠"),
        (Route::Calendar, "Calendario", "📅"),
        (Route::Messages, "Mensajes", "💬"),
        (Route::Teams, "Equipos", "👥"),
        (Route::Profile, "Perfil", "👤"),
    ];

    html! {
        <nav class="fixed bottom-0 inset-x-0 z-40 bg-white border-t border-gray-200">
            <div class="max-w-lg mx-auto flex justify-around">
                { for items.into_iter().map(|(route, label, icon)| {
                    let active = current_route == route;
                    let classes = if active {
                        "flex flex-col items-center py-2 px-3 text-emerald-600"
                    } else {
                        "flex flex-col items-center py-2 px-3 text-gray-400"
                    };
                    html! {
                        <Link<Route> to={route} classes={classes}>
                            <span class="text-xl">{icon}</span>
                            <span class="text-xs mt-0.5">{label}</span>
                        </Link<Route>>
                    }
                })}
            </div>
        </nav>
    }
}
