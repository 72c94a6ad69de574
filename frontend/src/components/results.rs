//! Results view: summary counts, predictions table and reset.

use leptos::*;

use crate::components::BrowserWorkflow;
use crate::report::{analysis_headline, format_probability, truncation_notice, visible_rows};
use crate::{PredictionRow, PredictionSummary};

#[component]
pub fn ResultsSection(workflow: RwSignal<BrowserWorkflow>) -> impl IntoView {
    let rows = Signal::derive(move || {
        workflow.with(|w| w.predictions().map(<[PredictionRow]>::to_vec).unwrap_or_default())
    });

    let headline = move || {
        workflow.with(|w| {
            let total = w.predictions().map_or(0, <[PredictionRow]>::len);
            analysis_headline(total, w.file_name().unwrap_or_default())
        })
    };

    let on_reset = move |_| {
        log::info!("Resetting analysis");
        workflow.update(|w| w.reset());
    };

    view! {
        <div class="workflow">
            <div class="hero">
                <h2>"Analysis " <span class="accent">"Complete"</span></h2>
                <p class="subtitle">{headline}</p>
            </div>

            <div class="card">
                <SummaryCards rows=rows/>
                <PredictionTable rows=rows/>

                <div class="actions">
                    <button class="btn btn-primary" id="resetBtn" on:click=on_reset>
                        "Analyze New File →"
                    </button>
                    <p class="hint">"Upload another CSV for analysis"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SummaryCards(rows: Signal<Vec<PredictionRow>>) -> impl IntoView {
    let summary = move || rows.with(|r| PredictionSummary::from_rows(r));

    view! {
        <div class="summary-grid">
            <div class="summary-card total">
                <p class="summary-value">{move || summary().total}</p>
                <p class="summary-label">"Total"</p>
            </div>
            <div class="summary-card high">
                <p class="summary-value">{move || summary().high_risk}</p>
                <p class="summary-label">"High Risk"</p>
            </div>
            <div class="summary-card low">
                <p class="summary-value">{move || summary().low_risk}</p>
                <p class="summary-label">"Low Risk"</p>
            </div>
        </div>
    }
}

#[component]
pub fn PredictionTable(rows: Signal<Vec<PredictionRow>>) -> impl IntoView {
    let notice = move || rows.with(|r| truncation_notice(r.len()));

    view! {
        <div class="table-container">
            <div class="table-header">
                <span class="table-icon">"✅"</span>
                <h3>"Fraud Predictions"</h3>
            </div>

            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Transaction"</th>
                            <th>"FraudProbability"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.with(|r| visible_rows(r).to_vec())
                            key=|row| (row.transaction, row.fraud_probability.to_bits())
                            children=move |row| {
                                let risk = row.risk();
                                view! {
                                    <tr>
                                        <td class="cell-index">{row.transaction}</td>
                                        <td>
                                            <span class=risk.css_class() title=risk.label()>
                                                {format_probability(row.fraud_probability)}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show
                    when=move || notice().is_some()
                    fallback=|| view! { }
                >
                    <div class="table-notice">{move || notice().unwrap_or_default()}</div>
                </Show>
            </div>
        </div>
    }
}
