use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::clubs;
use crate::components::common::Spinner;
use shared::ClubRef;

/// Shown to a player account with no club affiliation yet. Affiliation
/// happens club-side; this screen tells the player who to talk to.
#[function_component(PlayerOnboarding)]
pub fn player_onboarding() -> Html {
    let available_clubs = use_state(|| Option::<Vec<ClubRef>>::None);

    {
        let available_clubs = available_clubs.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match clubs::list_clubs().await {
                    Ok(list) => available_clubs.set(Some(list)),
                    Err(e) => {
                        error!("Error loading clubs: {}", e);
                        available_clubs.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="space-y-4">
            <div class="bg-white rounded-xl shadow p-6 text-center">
                <h1 class="text-xl font-bold text-gray-800 mb-2">{"¡Ya casi está!"}</h1>
                <p class="text-sm text-gray-600">
                    {"Tu cuenta todavía no está vinculada a ningún club. \
                      Pide a tu club que complete tu alta para ver tu equipo y calendario."}
                </p>
            </div>
            {match available_clubs.as_ref() {
                None => html! { <Spinner /> },
                Some(list) if list.is_empty() => html! {},
                Some(list) => html! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <h2 class="font-semibold text-gray-800 mb-2">{"Clubes en la plataforma"}</h2>
                        <ul class="text-sm text-gray-600 space-y-1">
                            { for list.iter().map(|club| html! { <li>{&club.name}</li> }) }
                        </ul>
                    </div>
                },
            }}
        </div>
    }
}
