use leptos::prelude::*;

use crate::components::PageHeader;
use crate::console;
use crate::models::preferences::{
    pick_option, NotificationToggle, Preferences, SelectOption, Theme, CURRENCIES, LANGUAGES,
    SAVED_MESSAGE, TIMEZONES,
};
use crate::models::AppState;

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let prefs = RwSignal::new(Preferences::default());

    let save = move |_: leptos::ev::MouseEvent| {
        prefs.with_untracked(|p| console::log("Saving preferences", p));
        state.show_banner(SAVED_MESSAGE);
    };

    let toggles = NotificationToggle::ALL
        .into_iter()
        .map(|toggle| {
            view! {
                <label class="toggle-row">
                    <span class="toggle-row__label">{toggle.label()}</span>
                    <input
                        type="checkbox"
                        class="toggle"
                        prop:checked=move || prefs.with(|p| p.notifications.get(toggle))
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            prefs.update(|p| p.notifications.set(toggle, on));
                        }
                    />
                </label>
            }
        })
        .collect_view();

    let themes = Theme::ALL
        .into_iter()
        .map(|theme| {
            view! {
                <label class="radio-card">
                    <input
                        type="radio"
                        name="theme"
                        value=theme.key()
                        prop:checked=move || prefs.with(|p| p.theme == theme)
                        on:change=move |_| prefs.update(|p| p.theme = theme)
                    />
                    <span class="radio-card__title">{theme.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="preferences">
            <PageHeader title="Preferences" subtitle="Customize how Purchasync works for you" icon="⚙" />

            <div class="card">
                <h2 class="card__title">"Notifications"</h2>
                {toggles}
            </div>

            <div class="card">
                <h2 class="card__title">"Regional"</h2>
                {option_select(prefs, "Language", &LANGUAGES, |p| p.language.clone(), |p, v| p.language = v)}
                {option_select(prefs, "Timezone", &TIMEZONES, |p| p.timezone.clone(), |p, v| p.timezone = v)}
                {option_select(prefs, "Currency", &CURRENCIES, |p| p.currency.clone(), |p, v| p.currency = v)}
            </div>

            <div class="card">
                <h2 class="card__title">"Appearance"</h2>
                <div class="radio-group">{themes}</div>
            </div>

            <div class="form__actions">
                <button type="button" class="button button--primary" on:click=save>
                    "Save Preferences"
                </button>
            </div>
        </section>
    }
}

/// Dropdown over a fixed option list; unknown values snap to the first option.
fn option_select(
    prefs: RwSignal<Preferences>,
    label: &'static str,
    options: &'static [SelectOption],
    current: fn(&Preferences) -> String,
    apply: fn(&mut Preferences, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <select
                class="input"
                on:change=move |ev| {
                    let value = pick_option(options, &event_target_value(&ev));
                    prefs.update(|p| apply(p, value));
                }
            >
                {options
                    .iter()
                    .map(|&(key, text)| {
                        view! {
                            <option value=key prop:selected=move || prefs.with(|p| current(p) == key)>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
