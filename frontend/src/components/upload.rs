//! CSV selection and submission.
//!
//! Drives the [`Workflow`](crate::Workflow) held by the predict page:
//! file changes call `select_file`, the button calls `begin_submit` and
//! spawns the request, whose outcome is handed back through `finish`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::BrowserWorkflow;
use crate::config::{is_accepted_file, ACCEPTED_FILE_TYPES, SAMPLE_DATASETS_URL};
use crate::services::{classify, HttpBackend};
use crate::{AppConfig, UploadSelection};

#[component]
pub fn UploadSection(workflow: RwSignal<BrowserWorkflow>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    // Inline replacement for a blocking alert; never part of the workflow state.
    let (notice, set_notice) = create_signal(None::<String>);
    let (is_dragging, set_is_dragging) = create_signal(false);

    let is_loading = move || workflow.with(|w| w.is_loading());
    let error = move || workflow.with(|w| w.error_message());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_notice.set(None);
        workflow.update(|w| w.select_file(UploadSelection::new(file.name(), file)));
    };

    // Without preventDefault the browser opens the dropped file and unloads the app.
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_is_dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };

        if !is_accepted_file(&file.name()) {
            log::warn!("Ignoring dropped file {}", file.name());
            set_notice.set(Some("Please drop a CSV file".to_string()));
            return;
        }

        set_notice.set(None);
        workflow.update(|w| w.select_file(UploadSelection::new(file.name(), file)));
    };

    let on_submit = move |_| {
        let ticket = match workflow.try_update(|w| w.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(rejected)) => {
                log::warn!("Submission rejected: {}", rejected);
                set_notice.set(Some(rejected.to_string()));
                return;
            }
            None => return,
        };

        set_notice.set(None);
        let backend = HttpBackend::new(&config);

        spawn_local(async move {
            let outcome = classify(&backend, &ticket.file).await;
            // The page may have been left while the request was in flight.
            if workflow.try_update(|w| w.finish(ticket.id, outcome)).is_none() {
                log::warn!("Workflow disposed before submission #{} completed", ticket.id);
            }
        });
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="workflow">
            <div class="hero">
                <h2>"Predict " <span class="accent">"Fraud"</span></h2>
                <p class="subtitle">"Upload a CSV file for machine learning powered fraud prediction."</p>
                <p class="subtitle">
                    "For sample datasets click "
                    <a href=SAMPLE_DATASETS_URL target="_blank" class="link">"here."</a>
                </p>
            </div>

            <div class="card">
                <Show
                    when=move || error().is_some()
                    fallback=|| view! { }
                >
                    <ErrorBanner message=Signal::derive(move || error().unwrap_or_default())/>
                </Show>

                <Show
                    when=move || notice.get().is_some()
                    fallback=|| view! { }
                >
                    <div class="notice-message">{move || notice.get().unwrap_or_default()}</div>
                </Show>

                <div
                    class="upload-section"
                    id="uploadZone"
                    class:dragging=move || is_dragging.get()
                    on:click=trigger_file_input
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <div class="upload-icon">"📤"</div>
                    <div class="upload-text">
                        {move || workflow.with(|w| {
                            w.file_name()
                                .map(str::to_string)
                                .unwrap_or_else(|| "Drag & drop your CSV file here".to_string())
                        })}
                    </div>
                    <div class="upload-hint">"or click to browse"</div>

                    <input
                        type="file"
                        id="fileInput"
                        accept=ACCEPTED_FILE_TYPES
                        style="display:none"
                        on:click=|ev| ev.stop_propagation()
                        on:change=on_file_change
                    />
                </div>

                <div class="actions">
                    <button
                        class="btn btn-primary"
                        id="submitBtn"
                        on:click=on_submit
                        disabled=move || !workflow.with(|w| w.can_submit())
                    >
                        {move || if is_loading() { "⏳ Analyzing..." } else { "Predict Fraud →" }}
                    </button>
                    <Show
                        when=move || !is_loading()
                        fallback=|| view! { }
                    >
                        <p class="hint">"Powered by machine learning • Instant results"</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Red banner with the message of the last failed submission.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-message">
            <span class="error-icon">"⚠️"</span>
            <div>
                <p class="error-title">"Error"</p>
                <p class="error-text">{move || message.get()}</p>
            </div>
        </div>
    }
}
