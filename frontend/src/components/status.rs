//! Backend liveness badge

use leptos::*;

use crate::services::check_backend;
use crate::types::BackendStatus;
use crate::AppConfig;

#[component]
pub fn BackendStatusBadge() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let status = create_local_resource(
        || (),
        move |_| {
            let config = config.clone();
            async move { check_backend(&config).await }
        },
    );

    let current = move || status.get().unwrap_or(BackendStatus::Checking);

    view! {
        <div class="backend-status">
            <span class=move || current().css_class()></span>
            <span class="backend-status-text">{move || current().label()}</span>
        </div>
    }
}
