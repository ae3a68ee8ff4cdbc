use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::profiles;
use crate::i18n::{I18nContext, Language};
use crate::session::SessionContext;
use crate::Route;
#[cfg(debug_assertions)]
use shared::UserRole;

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let i18n = use_context::<I18nContext>().expect("I18n context not found");
    let navigator = use_navigator().expect("Navigator not found");

    let identity = match &session.state.identity {
        Some(identity) => identity.clone(),
        None => return html! {},
    };

    let on_language_change = {
        let i18n = i18n.clone();
        let user_id = identity.id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let next = Language::from_code(&select.value());
            i18n.set_language.emit(next);
            let user_id = user_id.clone();
            spawn_local(async move {
                // Preference also lives on the profile so other devices
                // pick it up; failure here only costs the sync.
                if let Err(e) = profiles::update_language(&user_id, next.code()).await {
                    warn!("Could not persist language preference: {}", e);
                }
            });
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigator.replace(&Route::Landing);
        })
    };

    #[cfg(debug_assertions)]
    let role_override = {
        let set_role = session.set_role.clone();
        let on_role_change = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(role) = select.value().parse::<UserRole>() {
                set_role.emit(role);
            }
        });
        html! {
            <div class="bg-amber-50 border border-amber-200 rounded-lg p-4">
                <label class="block text-sm font-medium text-amber-800 mb-1">{"Rol (solo demo)"}</label>
                <select class="w-full border border-amber-300 rounded-lg px-3 py-2" onchange={on_role_change}>
                    <option value="super_admin">{"Administrador"}</option>
                    <option value="coach">{"Entrenador"}</option>
                    <option value="parent">{"Familia"}</option>
                    <option value="player">{"Jugador"}</option>
                </select>
            </div>
        }
    };
    #[cfg(not(debug_assertions))]
    let role_override = html! {};

    let role_label = session
        .state
        .roles
        .role()
        .map(|role| role.label())
        .unwrap_or("Sin rol asignado");

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Perfil"}</h1>
            <div class="bg-white rounded-xl shadow p-4 space-y-1">
                <p class="font-semibold text-gray-800">
                    {format!("{} {}", identity.first_name, identity.last_name)}
                </p>
                <p class="text-sm text-gray-500">{&identity.email}</p>
                <p class="text-sm text-gray-500">{role_label}</p>
            </div>
            <div class="bg-white rounded-xl shadow p-4">
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Idioma"}</label>
                <select class="w-full border border-gray-300 rounded-lg px-3 py-2" onchange={on_language_change}>
                    <option value="es" selected={i18n.language == Language::Es}>{"Español"}</option>
                    <option value="en" selected={i18n.language == Language::En}>{"English"}</option>
                </select>
            </div>
            {role_override}
            <button
                onclick={on_logout}
                class="w-full bg-gray-100 hover:bg-gray-200 text-gray-700 font-medium rounded-lg py-2"
            >
                {"Cerrar sesión"}
            </button>
        </div>
    }
}
