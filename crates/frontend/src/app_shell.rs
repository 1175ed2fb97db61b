//! Application Shell - корневой компонент приложения
//!
//! Owns the research request state and wires `QueryForm` to `ResultView`.
//! Leaf components receive read-only signals plus a submit callback.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_deep_research::{DeepResearch, ResearchRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::usecases::u601_deep_research::api;
use crate::usecases::u601_deep_research::state::RequestState;
use crate::usecases::u601_deep_research::ui::{ApiStatusBadge, QueryForm, ResultView};

#[component]
fn AppHeader() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__content">
                <h1 class="header__title">"🔬 " {DeepResearch::display_name()}</h1>
                <p class="header__subtitle">{DeepResearch::description()}</p>
            </div>
            <div class="header__actions">
                <ApiStatusBadge />
            </div>
        </header>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let state = RwSignal::new(RequestState::default());

    // Projections of the single state value; each re-renders on every transition.
    let loading = Signal::derive(move || state.with(RequestState::is_loading));
    let result = Signal::derive(move || state.with(|s| s.result().to_string()));
    let error = Signal::derive(move || state.with(|s| s.error().to_string()));

    let on_submit = Callback::new(move |request: ResearchRequest| {
        if state.with_untracked(RequestState::is_loading) {
            log::warn!("research already in flight, submit ignored");
            return;
        }
        state.update(RequestState::begin);

        spawn_local(async move {
            let outcome = api::run_research(&request).await;
            if let Err(e) = &outcome {
                log::error!("research failed: {:?}", e);
            }
            state.update(|s| s.finish(outcome));
        });
    });

    view! {
        <div class="app">
            <AppHeader />
            <main class="app__main">
                <QueryForm on_submit=on_submit loading=loading />
                <ResultView result=result loading=loading error=error />
            </main>
        </div>
    }
}
