use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with a reactive variant
#[component]
pub fn Badge(
    #[prop(into)]
    variant: Signal<BadgeVariant>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", variant.get().class())>
            {children()}
        </span>
    }
}
