use leptos::prelude::*;

/// Labelled input bound to one field of a form record.
pub fn text_field<T>(
    record: RwSignal<T>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                type=input_type
                class="input"
                prop:value=move || record.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    record.update(|r| set(r, value));
                }
            />
        </label>
    }
}
