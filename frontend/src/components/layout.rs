use yew::prelude::*;

use crate::club::ClubContext;
use crate::components::nav::BottomNav;

#[derive(Properties, Clone, PartialEq)]
pub struct AppLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Shell around every signed-in screen: club-branded header when the
/// session is club-scoped, content area, bottom tab bar.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let club = use_context::<ClubContext>().expect("Club context not found");

    let header = match &club.club {
        Some(club) => {
            let style = club
                .primary_color
                .as_ref()
                .map(|color| format!("background-color: {}", color))
                .unwrap_or_default();
            html! {
                <header class="text-white px-4 py-3 flex items-center gap-3" style={style}>
                    if let Some(logo_url) = &club.logo_url {
                        <img src={logo_url.clone()} alt="" class="h-8 w-8 rounded-full object-cover" />
                    }
                    <span class="font-semibold">{&club.name}</span>
                </header>
            }
        }
        None => html! {},
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            {header}
            <main class="flex-1 max-w-lg w-full mx-auto px-4 py-4 pb-20">
                {props.children.clone()}
            </main>
            <BottomNav />
        </div>
    }
}
