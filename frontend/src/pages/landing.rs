//! Landing page

use leptos::*;
use leptos_router::A;

use crate::components::*;
use crate::routes::Page;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <FeatureCards/>

            <div class="cta">
                <A href=Page::Predict.path() class="btn btn-primary">
                    "Start Detection →"
                </A>
                <p class="hint">"No registration required • Free to use"</p>
                <BackendStatusBadge/>
            </div>
        </div>

        <Footer/>
    }
}
