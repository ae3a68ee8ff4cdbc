use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="text-center text-gray-600">
                <h1 class="text-3xl font-bold mb-2">{"404"}</h1>
                <p>{"Esta página no existe."}</p>
            </div>
        </div>
    }
}
