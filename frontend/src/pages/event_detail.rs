use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::events;
use crate::components::common::{EmptyState, ErrorState, Spinner};
use shared::EventDto;

#[derive(Properties, Clone, PartialEq)]
pub struct EventDetailProps {
    pub event_id: String,
}

#[function_component(EventDetail)]
pub fn event_detail(props: &EventDetailProps) -> Html {
    let data = use_state(|| Option::<Result<Option<EventDto>, String>>::None);

    {
        let data = data.clone();
        use_effect_with(props.event_id.clone(), move |event_id| {
            let event_id = event_id.clone();
            spawn_local(async move {
                let result = events::get_event(&event_id).await;
                if let Err(e) = &result {
                    error!("Error loading event: {}", e);
                }
                data.set(Some(result));
            });
            || ()
        });
    }

    match data.as_ref() {
        None => html! { <Spinner /> },
        Some(Err(e)) => html! { <ErrorState message={e.clone()} /> },
        Some(Ok(None)) => html! {
            <EmptyState title={"Evento no encontrado".to_string()} />
        },
        Some(Ok(Some(event))) => html! {
            <div class="space-y-4">
                <div>
                    <span class="text-xs bg-emerald-100 text-emerald-700 rounded-full px-2 py-0.5">
                        {event.event_type.label()}
                    </span>
                    <h1 class="text-xl font-bold text-gray-800 mt-2">{&event.title}</h1>
                    if let Some(team_name) = event.team_name() {
                        <p class="text-sm text-gray-500">{team_name}</p>
                    }
                </div>
                <div class="bg-white rounded-xl shadow p-4 space-y-2 text-sm text-gray-700">
                    <p>
                        <span class="font-medium">{"Inicio: "}</span>
                        {event.start_time.format("%d/%m/%Y %H:%M").to_string()}
                    </p>
                    <p>
                        <span class="font-medium">{"Fin: "}</span>
                        {event.end_time.format("%d/%m/%Y %H:%M").to_string()}
                    </p>
                    if let Some(location) = &event.location {
                        <p>
                            <span class="font-medium">{"Lugar: "}</span>
                            {location}
                        </p>
                    }
                </div>
                if let Some(description) = &event.description {
                    <div class="bg-white rounded-xl shadow p-4 text-sm text-gray-700 whitespace-pre-line">
                        {description}
                    </div>
                }
            </div>
        },
    }
}
