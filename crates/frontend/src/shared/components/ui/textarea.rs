use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the textarea element
    #[prop(into)]
    id: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=textarea_placeholder
                disabled=move || disabled.get()
                required=required
                rows=textarea_rows
                prop:value=value
                on:input=move |ev| {
                    on_input.run(event_target_value(&ev));
                }
            />
        </div>
    }
}
