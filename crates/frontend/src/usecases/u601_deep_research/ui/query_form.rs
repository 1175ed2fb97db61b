use contracts::usecases::u601_deep_research::ResearchRequest;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Textarea};
use crate::shared::components::DateInput;
use crate::shared::date_utils::{describe_period, is_reversed};
use crate::shared::notify;
use crate::usecases::u601_deep_research::model::QueryDraft;

/// Research query form.
///
/// Owns its edit buffers; emits a validated request through `on_submit`.
/// Every control is disabled while `loading` is true.
#[component]
pub fn QueryForm(
    on_submit: Callback<ResearchRequest>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(QueryDraft::default());

    let text = Signal::derive(move || draft.with(|d| d.text.clone()));
    let start_date = Signal::derive(move || draft.with(|d| d.start_date.clone()));
    let end_date = Signal::derive(move || draft.with(|d| d.end_date.clone()));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        match draft.with_untracked(QueryDraft::submit) {
            Ok(request) => on_submit.run(request),
            Err(e) => notify::alert(&e.to_string()),
        }
    };

    let period_hint = move || {
        draft.with(|d| {
            let mut hint = format!("Period: {}", describe_period(&d.start_date, &d.end_date));
            if is_reversed(&d.start_date, &d.end_date) {
                hint.push_str(" (end date is before start date)");
            }
            hint
        })
    };

    view! {
        <div class="query-input">
            <form class="query-form" on:submit=handle_submit>
                <Textarea
                    id="query"
                    label="Research Query"
                    value=text
                    on_input=Callback::new(move |v: String| draft.update(|d| d.text = v))
                    placeholder="Enter your research question (e.g., 'trending topics about AI in 2024')"
                    rows=3
                    required=true
                    disabled=loading
                />

                <div class="query-form__dates">
                    <DateInput
                        id="start-date"
                        label="Start Date (Optional)"
                        value=start_date
                        on_change=Callback::new(move |v: String| draft.update(|d| d.start_date = v))
                        disabled=loading
                    />
                    <DateInput
                        id="end-date"
                        label="End Date (Optional)"
                        value=end_date
                        on_change=Callback::new(move |v: String| draft.update(|d| d.end_date = v))
                        disabled=loading
                    />
                </div>
                <div class="query-form__hint">{period_hint}</div>

                <Button button_type="submit" class="query-form__submit" disabled=loading>
                    {move || if loading.get() {
                        view! {
                            <span class="spinner"></span>
                            "Researching..."
                        }.into_any()
                    } else {
                        "Start Research".into_any()
                    }}
                </Button>
            </form>
        </div>
    }
}
