//! Navigation bar shared by both pages

use leptos::*;
use leptos_router::{use_location, A};

use crate::config::APP_NAME;
use crate::routes::Page;

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let current_page = move || pathname.with(|path| Page::from_path(path));

    view! {
        <header>
            <div class="header-left">
                <A href=Page::Landing.path() class="logo">
                    <span class="logo-icon">"🛡️"</span>
                    {APP_NAME}
                </A>
            </div>
            <nav class="header-right">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! {
                        <a
                            href=page.path()
                            class="nav-link"
                            class:active=move || current_page() == Some(page)
                        >
                            {page.label()}
                        </a>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
