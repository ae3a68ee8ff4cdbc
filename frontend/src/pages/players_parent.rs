use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::players;
use crate::components::activate_access::ActivateAccessForm;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::PlayerDto;

/// A parent's children, with access status and self-serve activation.
#[function_component(PlayersParent)]
pub fn players_parent() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<PlayerDto>, String>>::None);
    let reload = use_state(|| 0u32);

    let parent_user_id = session
        .state
        .identity
        .as_ref()
        .map(|identity| identity.id.clone())
        .unwrap_or_default();

    {
        let data = data.clone();
        use_effect_with((parent_user_id, *reload), move |(parent_user_id, _)| {
            let parent_user_id = parent_user_id.clone();
            spawn_local(async move {
                let result = players::players_for_parent(&parent_user_id).await;
                if let Err(e) = &result {
                    error!("Error loading children: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let on_activated = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let body = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"No hay jugadores vinculados a tu cuenta".to_string()}
                hint={Some("El club vincula los jugadores a las familias.".to_string())} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|player| html! {
                    <ChildCard player={player.clone()} on_activated={on_activated.clone()} />
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Mis jugadores"}</h1>
            {body}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ChildCardProps {
    player: PlayerDto,
    on_activated: Callback<()>,
}

#[function_component(ChildCard)]
fn child_card(props: &ChildCardProps) -> Html {
    let activating = use_state(|| false);
    let player = &props.player;

    let toggle = {
        let activating = activating.clone();
        Callback::from(move |_: MouseEvent| activating.set(!*activating))
    };

    html! {
        <div class="bg-white rounded-xl shadow p-4">
            <div class="flex items-center justify-between">
                <div>
                    <p class="font-medium text-gray-800">{&player.full_name}</p>
                    if let Some(birth_date) = player.birth_date {
                        <p class="text-sm text-gray-500">{birth_date.format("%d/%m/%Y").to_string()}</p>
                    }
                    if player.has_access() {
                        <span class="text-xs bg-emerald-100 text-emerald-700 rounded-full px-2 py-0.5">{"Acceso propio"}</span>
                    } else {
                        <span class="text-xs bg-gray-100 text-gray-500 rounded-full px-2 py-0.5">{"Sin acceso"}</span>
                    }
                </div>
                if !player.has_access() {
                    <button onclick={toggle} class="text-sm text-emerald-600">
                        { if *activating { "Cerrar" } else { "Activar acceso" } }
                    </button>
                }
            </div>
            if *activating {
                <ActivateAccessForm
                    player_id={player.id.clone()}
                    full_name={player.full_name.clone()}
                    on_activated={props.on_activated.clone()}
                />
            }
        </div>
    }
}
