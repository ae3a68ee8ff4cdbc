use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::centers;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::{CenterDto, CreateCenterRequest};

/// Admin listing of the club's training centers.
#[function_component(Centers)]
pub fn centers_page() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<CenterDto>, String>>::None);
    let reload = use_state(|| 0u32);

    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = centers::list_centers().await;
                if let Err(e) = &result {
                    error!("Error loading centers: {}", e);
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
            <EmptyState title={"Todavía no hay centros".to_string()} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|center| html! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <p class="font-medium text-gray-800">{&center.name}</p>
                        if let Some(address) = &center.address {
                            <p class="text-sm text-gray-500">{address}</p>
                        }
                    </div>
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Centros"}</h1>
            if let Some(club_id) = club_id {
                <CreateCenterForm club_id={club_id} on_created={on_created} />
            }
            {list}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CreateCenterFormProps {
    club_id: String,
    on_created: Callback<()>,
}

#[function_component(CreateCenterForm)]
fn create_center_form(props: &CreateCenterFormProps) -> Html {
    let open = use_state(|| false);
    let name = use_state(String::new);
    let address = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo centro"}
            </button>
        };
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_address = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            address.set(input.value());
        })
    };

    let on_submit = {
        let open = open.clone();
        let name = name.clone();
        let address = address.clone();
        let error = error.clone();
        let saving = saving.clone();
        let club_id = props.club_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let request = CreateCenterRequest {
                club_id: club_id.clone(),
                name: (*name).clone(),
                address: Some((*address).clone()).filter(|a| !a.is_empty()),
            };
            if request.validate().is_err() {
                error.set(Some("El nombre es obligatorio.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let name = name.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match centers::create_center(&request).await {
                    Ok(()) => {
                        name.set(String::new());
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
                placeholder="Nombre del centro"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                type="text"
                placeholder="Dirección (opcional)"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*address).clone()}
                oninput={on_address}
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
