use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::players;

#[derive(Properties, Clone, PartialEq)]
pub struct ActivateAccessFormProps {
    pub player_id: String,
    pub full_name: String,
    pub on_activated: Callback<()>,
}

/// Creates login credentials for a player through the activation edge
/// function. The password entered here is temporary; the player is forced
/// to change it on first login.
#[function_component(ActivateAccessForm)]
pub fn activate_access_form(props: &ActivateAccessFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let saving = saving.clone();
        let player_id = props.player_id.clone();
        let full_name = props.full_name.clone();
        let on_activated = props.on_activated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            if !email.contains('@') || password.len() < 8 {
                error.set(Some(
                    "Email válido y contraseña temporal de al menos 8 caracteres.".to_string(),
                ));
                return;
            }
            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            let on_activated = on_activated.clone();
            let player_id = player_id.clone();
            let full_name = full_name.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            spawn_local(async move {
                match players::activate_access(
                    &player_id,
                    &email_value,
                    &password_value,
                    &full_name,
                    "player",
                )
                .await
                {
                    Ok(()) => {
                        saving.set(false);
                        on_activated.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="mt-3 pt-3 border-t border-gray-100 space-y-2">
            <input
                type="email"
                placeholder="Email del jugador"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*email).clone()}
                oninput={on_email}
            />
            <input
                type="text"
                placeholder="Contraseña temporal"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*password).clone()}
                oninput={on_password}
            />
            if let Some(error) = error.as_ref() {
                <p class="text-sm text-red-600">{error.clone()}</p>
            }
            <button type="submit" disabled={*saving}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg py-2 disabled:opacity-50">
                { if *saving { "Activando..." } else { "Activar" } }
            </button>
        </form>
    }
}
