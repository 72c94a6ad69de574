//! Upload-and-classify page

use leptos::*;

use crate::components::*;

#[component]
pub fn PredictPage() -> impl IntoView {
    // Page-local: navigating away drops the workflow and any in-flight result.
    let workflow = create_rw_signal(BrowserWorkflow::new());

    let has_results = move || workflow.with(|w| w.predictions().is_some());

    view! {
        <Header/>

        <div class="container">
            <Show
                when=has_results
                fallback=move || view! { <UploadSection workflow=workflow/> }
            >
                <ResultsSection workflow=workflow/>
            </Show>
        </div>

        <Footer/>
    }
}
