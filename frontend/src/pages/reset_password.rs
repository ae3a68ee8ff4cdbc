use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth;
use crate::session::SessionContext;
use crate::Route;
use shared::UpdatePasswordRequest;

/// Forced stop for accounts provisioned with a temporary password. The
/// rest of the app stays locked until the change succeeds.
#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm.set(input.value());
        })
    };

    let on_submit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let saving = saving.clone();
        let password_updated = session.password_updated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let request = UpdatePasswordRequest {
                password: (*password).clone(),
            };
            if request.validate().is_err() {
                error.set(Some(
                    "La contraseña debe tener al menos 8 caracteres.".to_string(),
                ));
                return;
            }
            if *password != *confirm {
                error.set(Some("Las contraseñas no coinciden.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            let password_updated = password_updated.clone();
            let navigator = navigator.clone();
            let new_password = (*password).clone();
            spawn_local(async move {
                match auth::update_password(&new_password).await {
                    Ok(()) => {
                        // Unlock first, then leave; the guard would bounce
                        // us back otherwise.
                        password_updated.emit(());
                        navigator.replace(&Route::Landing);
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
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-sm bg-white rounded-xl shadow p-6">
                <h1 class="text-xl font-bold text-gray-800 mb-2">{"Cambia tu contraseña"}</h1>
                <p class="text-sm text-gray-500 mb-6">
                    {"Tu cuenta usa una contraseña temporal. Elige una nueva para continuar."}
                </p>
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Nueva contraseña"}</label>
                        <input
                            type="password"
                            class="w-full border border-gray-300 rounded-lg px-3 py-2"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Repite la contraseña"}</label>
                        <input
                            type="password"
                            class="w-full border border-gray-300 rounded-lg px-3 py-2"
                            value={(*confirm).clone()}
                            oninput={on_confirm}
                        />
                    </div>
                    if let Some(error) = error.as_ref() {
                        <p class="text-sm text-red-600">{error.clone()}</p>
                    }
                    <button
                        type="submit"
                        disabled={*saving}
                        class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2 disabled:opacity-50"
                    >
                        { if *saving { "Guardando..." } else { "Guardar" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
