use leptos::prelude::*;

/// DateInput component with native date picker and label
/// Browser displays the date in the user's locale; the value stays yyyy-mm-dd
#[component]
pub fn DateInput(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// The date value in yyyy-mm-dd format, empty when unset
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd or empty)
    on_change: Callback<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id
                class="form__input form__input--date"
                type="date"
                prop:value=value
                disabled=move || disabled.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
        </div>
    }
}
