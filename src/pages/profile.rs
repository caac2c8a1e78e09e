use leptos::prelude::*;

use crate::components::{text_field, PageHeader};
use crate::console;
use crate::models::profile::UserProfile;
use crate::models::team::initials;
use crate::models::AppState;

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let profile = RwSignal::new(UserProfile::default());

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match profile.with_untracked(UserProfile::validated) {
            Ok(saved) => {
                console::log("Profile saved", &saved);
                profile.set(saved);
                state.show_banner("Profile updated successfully!");
            }
            Err(e) => console::debug("Profile not saved", &e),
        }
    };

    view! {
        <section class="profile">
            <PageHeader title="Profile" subtitle="Your personal account details" icon="👤" />
            <div class="card profile__summary">
                <span class="avatar avatar--large">{move || profile.with(|p| initials(&p.full_name))}</span>
                <div>
                    <h2>{move || profile.with(|p| p.full_name.clone())}</h2>
                    <p class="list-row__meta">{move || profile.with(|p| p.job_title.clone())}</p>
                </div>
            </div>
            <form class="card form" on:submit=save>
                {text_field(profile, "Full Name *", "text", |p| p.full_name.clone(), |p, v| p.full_name = v)}
                {text_field(profile, "Email *", "email", |p| p.email.clone(), |p, v| p.email = v)}
                {text_field(profile, "Job Title", "text", |p| p.job_title.clone(), |p, v| p.job_title = v)}
                {text_field(profile, "Department", "text", |p| p.department.clone(), |p, v| p.department = v)}
                {text_field(profile, "Phone", "tel", |p| p.phone.clone(), |p, v| p.phone = v)}
                <div class="form__actions">
                    <button type="submit" class="button button--primary">
                        "Save Changes"
                    </button>
                </div>
            </form>
        </section>
    }
}
