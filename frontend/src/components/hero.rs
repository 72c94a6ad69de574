//! Landing page hero and feature cards

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-icon">"🛡️"</div>
            <h1>"Detect Credit Card " <span class="accent">"Fraud"</span></h1>
            <p class="subtitle">
                "A machine learning powered fraud detection. Upload CSV files for batch processing "
                "and get an instant fraud alert."
            </p>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="feature-grid">
            <FeatureCard icon="📤" title="Upload CSV" description="Batch process multiple transactions"/>
            <FeatureCard icon="📊" title="ML Powered" description="Advanced neural network detection"/>
            <FeatureCard icon="✅" title="Instant Results" description="Get predictions in seconds"/>
        </div>
    }
}
