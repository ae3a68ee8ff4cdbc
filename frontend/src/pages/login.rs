use validator::Validate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::common::Spinner;
use crate::redirect::LandingRedirect;
use crate::session::SessionContext;
use shared::SignInRequest;

/// Landing screen: the login form, or the post-login redirect once a
/// session exists.
#[function_component(Login)]
pub fn login() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);

    if session.state.loading && !session.state.is_authenticated {
        return html! { <Spinner /> };
    }
    if session.state.is_authenticated {
        return html! { <LandingRedirect /> };
    }

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
        let form_error = form_error.clone();
        let login = session.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SignInRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            if request.validate().is_err() {
                form_error.set(Some(
                    "Introduce un email válido y una contraseña de al menos 8 caracteres."
                        .to_string(),
                ));
                return;
            }
            form_error.set(None);
            login.emit((request.email, request.password));
        })
    };

    let error = form_error
        .as_ref()
        .cloned()
        .or_else(|| session.state.error.clone());

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-sm bg-white rounded-xl shadow p-6">
                <h1 class="text-2xl font-bold text-center text-gray-800 mb-6">{"ClubKit"}</h1>
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full border border-gray-300 rounded-lg px-3 py-2"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Contraseña"}</label>
                        <input
                            type="password"
                            class="w-full border border-gray-300 rounded-lg px-3 py-2"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    if let Some(error) = error {
                        <p class="text-sm text-red-600">{error}</p>
                    }
                    <button
                        type="submit"
                        disabled={session.state.loading}
                        class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2 disabled:opacity-50"
                    >
                        { if session.state.loading { "Entrando..." } else { "Entrar" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
