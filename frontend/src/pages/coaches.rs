use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::coaches;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::{CoachDto, CreateCoachRequest};

/// Admin listing of the club's coaches, with account creation. New coach
/// accounts are provisioned with a temporary password and forced through
/// the reset screen on first login.
#[function_component(Coaches)]
pub fn coaches_page() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<CoachDto>, String>>::None);
    let reload = use_state(|| 0u32);

    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let data = data.clone();
        use_effect_with((club_id.clone(), *reload), move |(club_id, _)| {
            let club_id = club_id.clone();
            spawn_local(async move {
                let result = match club_id {
                    Some(club_id) => coaches::list_coaches(&club_id).await,
                    None => Ok(Vec::new()),
                };
                if let Err(e) = &result {
                    error!("Error loading coaches: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let on_created = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let list = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"Todavía no hay entrenadores".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|coach| html! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <p class="font-medium text-gray-800">{&coach.full_name}</p>
                        <p class="text-sm text-gray-500">{&coach.email}</p>
                    </div>
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Entrenadores"}</h1>
            <CreateCoachForm on_created={on_created} />
            {list}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CreateCoachFormProps {
    on_created: Callback<()>,
}

#[function_component(CreateCoachForm)]
fn create_coach_form(props: &CreateCoachFormProps) -> Html {
    let open = use_state(|| false);
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo entrenador"}
            </button>
        };
    }

    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let open = open.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let request = CreateCoachRequest {
                full_name: (*full_name).clone(),
                email: (*email).clone(),
            };
            if request.validate().is_err() {
                error.set(Some("Nombre y email válidos son obligatorios.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let full_name = full_name.clone();
            let email = email.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match coaches::create_coach(&request).await {
                    Ok(()) => {
                        full_name.set(String::new());
                        email.set(String::new());
                        open.set(false);
                        saving.set(false);
                        on_created.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <form onsubmit={on_submit} class="bg-white rounded-xl shadow p-4 space-y-3">
            <input
                type="text"
                placeholder="Nombre completo"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*full_name).clone()}
                oninput={on_full_name}
            />
            <input
                type="email"
                placeholder="Email"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*email).clone()}
                oninput={on_email}
            />
            if let Some(error) = error.as_ref() {
                <p class="text-sm text-red-600">{error.clone()}</p>
            }
            <div class="flex gap-2">
                <button type="button" onclick={on_cancel}
                    class="flex-1 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg py-2">
                    {"Cancelar"}
                </button>
                <button type="submit" disabled={*saving}
                    class="flex-1 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg py-2 disabled:opacity-50">
                    { if *saving { "Creando..." } else { "Crear" } }
                </button>
            </div>
        </form>
    }
}
