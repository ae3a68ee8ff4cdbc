use log::error;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::messages;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use crate::session::SessionContext;
use shared::dto::message::CreateMessageRequest;
use shared::{MessageDto, MessagePriority, UserRole};

#[function_component(Messages)]
pub fn messages_page() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let data = use_state(|| Option::<Result<Vec<MessageDto>, String>>::None);
    let reload = use_state(|| 0u32);

    let can_publish = matches!(
        session.state.roles.role(),
        Some(UserRole::SuperAdmin) | Some(UserRole::Coach)
    );
    let club_id = session.state.roles.club_id().map(str::to_string);

    {
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = messages::list_messages().await;
                if let Err(e) = &result {
                    error!("Error loading messages: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    let on_published = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let body = match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(list)) if list.is_empty() => html! {
            <EmptyState title={"No hay mensajes".to_string()}
                hint={Some("Los anuncios del club aparecerán aquí.".to_string())} />
        },
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(message_card) }
            </div>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold text-gray-800">{"Mensajes"}</h1>
            if can_publish {
                <ComposeMessage club_id={club_id} on_published={on_published} />
            }
            {body}
        </div>
    }
}

fn message_card(message: &MessageDto) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow p-4">
            <div class="flex items-center justify-between mb-1">
                <p class="font-medium text-gray-800">{&message.title}</p>
                if message.priority == MessagePriority::Important {
                    <span class="text-xs bg-red-100 text-red-700 rounded-full px-2 py-0.5">{"Importante"}</span>
                }
            </div>
            <p class="text-sm text-gray-600 whitespace-pre-line">{&message.body}</p>
            <p class="text-xs text-gray-400 mt-2">
                {format!("{} · {}", message.author_name, message.created_at.format("%d/%m/%Y %H:%M"))}
            </p>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ComposeMessageProps {
    pub club_id: Option<String>,
    pub on_published: Callback<()>,
}

#[function_component(ComposeMessage)]
fn compose_message(props: &ComposeMessageProps) -> Html {
    let open = use_state(|| false);
    let title = use_state(String::new);
    let body = use_state(String::new);
    let priority = use_state(|| MessagePriority::Normal);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    if !*open {
        let open = open.clone();
        return html! {
            <button
                onclick={Callback::from(move |_| open.set(true))}
                class="w-full bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg py-2"
            >
                {"Nuevo mensaje"}
            </button>
        };
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_body = {
        let body = body.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            body.set(input.value());
        })
    };
    let on_priority = {
        let priority = priority.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            priority.set(match select.value().as_str() {
                "important" => MessagePriority::Important,
                _ => MessagePriority::Normal,
            });
        })
    };

    let on_submit = {
        let open = open.clone();
        let title = title.clone();
        let body = body.clone();
        let priority = priority.clone();
        let error = error.clone();
        let saving = saving.clone();
        let club_id = props.club_id.clone();
        let on_published = props.on_published.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let request = CreateMessageRequest {
                club_id: club_id.clone(),
                team_id: None,
                title: (*title).clone(),
                body: (*body).clone(),
                priority: *priority,
            };
            if request.validate().is_err() {
                error.set(Some("El título y el cuerpo son obligatorios.".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let open = open.clone();
            let title = title.clone();
            let body = body.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_published = on_published.clone();
            spawn_local(async move {
                match messages::create_message(&request).await {
                    Ok(()) => {
                        title.set(String::new());
                        body.set(String::new());
                        open.set(false);
                        saving.set(false);
                        on_published.emit(());
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
                placeholder="Título"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*title).clone()}
                oninput={on_title}
            />
            <textarea
                placeholder="Mensaje"
                rows="3"
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                value={(*body).clone()}
                oninput={on_body}
            />
            <select class="w-full border border-gray-300 rounded-lg px-3 py-2" onchange={on_priority}>
                <option value="normal" selected={*priority == MessagePriority::Normal}>{"Normal"}</option>
                <option value="important" selected={*priority == MessagePriority::Important}>{"Importante"}</option>
            </select>
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
                    { if *saving { "Publicando..." } else { "Publicar" } }
                </button>
            </div>
        </form>
    }
}
