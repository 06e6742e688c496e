//! Type statistics dashboard.
//!
//! One state container drives the view: `Idle -> Loading -> Success | Failure`,
//! entered once on mount. The pipeline runs in a task owned by this component,
//! so leaving the page drops the task with its in-flight requests and a late
//! result never reaches the signal.

use dioxus::prelude::*;
use pokedex_domain::{DashboardState, DomainError};

use crate::presentation::components::common::{ErrorAlert, Skeleton};
use crate::presentation::components::{StatChart, StatsTableCard};
use crate::presentation::services::use_stats_pipeline;

#[component]
pub fn DashboardView() -> Element {
    let pipeline = use_stats_pipeline();
    let mut state: Signal<DashboardState> = use_signal(DashboardState::default);

    use_effect(move || {
        let pipeline = pipeline.clone();
        spawn(async move {
            if !transition(&mut state, |s| s.start()) {
                return;
            }

            let outcome = pipeline.execute().await;
            match outcome {
                Ok(report) => {
                    transition(&mut state, |s| s.succeed(report.statistics));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Dashboard pipeline failed");
                    transition(&mut state, |s| s.fail(e.to_string()));
                }
            }
        });
    });

    let current = state.read().clone();
    match current {
        DashboardState::Idle | DashboardState::Loading => rsx! {
            div {
                class: "space-y-4",
                Skeleton { height: 400 }
                Skeleton { height: 200 }
            }
        },
        DashboardState::Failure(message) => rsx! {
            ErrorAlert { message }
        },
        DashboardState::Success(statistics) => rsx! {
            div {
                class: "space-y-8",
                StatChart { statistics: statistics.clone() }
                StatsTableCard { statistics: statistics.clone() }
            }
        },
    }
}

/// Apply a checked transition. Rejected transitions are logged and leave the
/// state untouched.
fn transition(
    state: &mut Signal<DashboardState>,
    step: impl FnOnce(DashboardState) -> Result<DashboardState, DomainError>,
) -> bool {
    let current = state.peek().clone();
    match step(current) {
        Ok(next) => {
            state.set(next);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring dashboard state transition");
            false
        }
    }
}
