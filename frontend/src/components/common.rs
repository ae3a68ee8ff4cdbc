use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="flex items-center justify-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-emerald-600"></div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorStateProps {
    pub message: String,
}

#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    html! {
        <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 text-sm">
            {&props.message}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    #[prop_or_default]
    pub hint: Option<String>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-10 text-gray-500">
            <p class="font-medium">{&props.title}</p>
            if let Some(hint) = &props.hint {
                <p class="text-sm mt-1">{hint}</p>
            }
        </div>
    }
}
