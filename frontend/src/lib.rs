use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::club::ClubProvider;
use crate::components::layout::AppLayout;
use crate::guard::RouteGuard;
use crate::i18n::I18nProvider;
use crate::session::SessionProvider;

pub mod api;
pub mod club;
pub mod components;
pub mod config;
pub mod guard;
pub mod i18n;
pub mod pages;
pub mod redirect;
pub mod session;

use pages::{
    calendar::Calendar, centers::Centers, coaches::Coaches, event_detail::EventDetail,
    events_admin::EventsAdmin, home::Home, login::Login, messages::Messages, not_found::NotFound,
    parent_dashboard::ParentDashboard, player_dashboard::PlayerDashboard,
    player_onboarding::PlayerOnboarding, players_admin::PlayersAdmin,
    players_parent::PlayersParent, profile::Profile, reset_password::ResetPassword,
    team_detail::TeamDetail, teams::Teams,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/home")]
    Home,
    #[at("/calendar")]
    Calendar,
    #[at("/messages")]
    Messages,
    #[at("/teams")]
    Teams,
    #[at("/centers")]
    Centers,
    #[at("/coaches")]
    Coaches,
    #[at("/profile")]
    Profile,
    #[at("/dashboard/parent")]
    ParentDashboard,
    #[at("/dashboard/player")]
    PlayerDashboard,
    #[at("/player/onboarding")]
    PlayerOnboarding,
    #[at("/players")]
    ParentPlayers,
    #[at("/event/:event_id")]
    EventDetail { event_id: String },
    #[at("/admin/events")]
    AdminEvents,
    #[at("/admin/players")]
    AdminPlayers,
    #[at("/admin/team/:team_id")]
    AdminTeamDetail { team_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <I18nProvider>
            <SessionProvider>
                <BrowserRouter>
                    <ClubProvider>
                        <Switch<Route> render={switch} />
                    </ClubProvider>
                </BrowserRouter>
            </SessionProvider>
        </I18nProvider>
    }
}

/// Guarded page with the standard shell (branding header + bottom nav).
fn shell(page: Html) -> Html {
    html! {
        <RouteGuard>
            <AppLayout>
                {page}
            </AppLayout>
        </RouteGuard>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Landing => html! { <Login /> },
        // The reset screen is guarded but deliberately shell-less; a
        // locked account gets no navigation until the password changes.
        Route::ResetPassword => html! {
            <RouteGuard>
                <ResetPassword />
            </RouteGuard>
        },
        Route::Home => shell(html! { <Home /> }),
        Route::Calendar => shell(html! { <Calendar /> }),
        Route::Messages => shell(html! { <Messages /> }),
        Route::Teams => shell(html! { <Teams /> }),
        Route::Centers => shell(html! { <Centers /> }),
        Route::Coaches => shell(html! { <Coaches /> }),
        Route::Profile => shell(html! { <Profile /> }),
        Route::ParentDashboard => shell(html! { <ParentDashboard /> }),
        Route::PlayerDashboard => shell(html! { <PlayerDashboard /> }),
        Route::PlayerOnboarding => shell(html! { <PlayerOnboarding /> }),
        Route::ParentPlayers => shell(html! { <PlayersParent /> }),
        Route::EventDetail { event_id } => shell(html! { <EventDetail event_id={event_id} /> }),
        Route::AdminEvents => shell(html! { <EventsAdmin /> }),
        Route::AdminPlayers => shell(html! { <PlayersAdmin /> }),
        Route::AdminTeamDetail { team_id } => shell(html! { <TeamDetail team_id={team_id} /> }),
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
