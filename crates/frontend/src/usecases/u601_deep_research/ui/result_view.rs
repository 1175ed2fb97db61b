use leptos::prelude::*;

/// Which of the four result views is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPanel {
    Loading,
    Error(String),
    Empty,
    Summary(Vec<String>),
}

impl ResultPanel {
    /// Priority: loading, then error, then empty, then the summary.
    pub fn select(result: &str, loading: bool, error: &str) -> Self {
        if loading {
            ResultPanel::Loading
        } else if !error.is_empty() {
            ResultPanel::Error(error.to_string())
        } else if result.is_empty() {
            ResultPanel::Empty
        } else {
            ResultPanel::Summary(summary_lines(result))
        }
    }
}

/// One paragraph per line, blank lines included
pub fn summary_lines(summary: &str) -> Vec<String> {
    summary.split('\n').map(str::to_string).collect()
}

#[component]
pub fn ResultView(
    #[prop(into)] result: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let panel = Memo::new(move |_| {
        result.with(|r| error.with(|e| ResultPanel::select(r, loading.get(), e)))
    });

    move || match panel.get() {
        ResultPanel::Loading => view! {
            <div class="result result--loading">
                <div class="result__spinner"></div>
                <p>"Processing your research query..."</p>
                <p class="result__steps">
                    "Gathering data from social media, news sources, and web content..."
                </p>
            </div>
        }
        .into_any(),
        ResultPanel::Error(message) => view! {
            <div class="result result--error">
                <h3>"❌ Research Error"</h3>
                <p>{message}</p>
                <p>"Please try again with a different query or check your connection."</p>
            </div>
        }
        .into_any(),
        ResultPanel::Empty => view! {
            <div class="result result--empty">
                <h3>"🚀 Ready to Research"</h3>
                <p>"Enter your research query above to get started with AI-powered deep research."</p>
            </div>
        }
        .into_any(),
        ResultPanel::Summary(lines) => view! {
            <div class="result">
                <div class="result__header">
                    <h2>"📊 Research Summary"</h2>
                </div>
                <div class="result__content">
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}
