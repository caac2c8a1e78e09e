use leptos::prelude::*;

use crate::components::{text_field, PageHeader};
use crate::console;
use crate::models::profile::CompanyProfile;
use crate::models::AppState;

#[component]
pub fn MyBusiness() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");
    let company = RwSignal::new(CompanyProfile::default());

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match company.with_untracked(CompanyProfile::validated) {
            Ok(saved) => {
                console::log("Company profile saved", &saved);
                company.set(saved);
                state.show_banner("Company details saved successfully!");
            }
            Err(e) => console::debug("Company profile not saved", &e),
        }
    };

    view! {
        <section class="my-business">
            <PageHeader title="My Company" subtitle="Details suppliers see on your RFQs" icon="🏢" />
            <form class="card form" on:submit=save>
                {text_field(company, "Company Name *", "text", |c| c.name.clone(), |c, v| c.name = v)}
                {text_field(company, "Industry", "text", |c| c.industry.clone(), |c, v| c.industry = v)}
                {text_field(
                    company,
                    "Registration Number",
                    "text",
                    |c| c.registration_number.clone(),
                    |c, v| c.registration_number = v,
                )}
                {text_field(company, "Tax ID", "text", |c| c.tax_id.clone(), |c, v| c.tax_id = v)}
                {text_field(company, "Address", "text", |c| c.address.clone(), |c, v| c.address = v)}
                {text_field(company, "Website", "url", |c| c.website.clone(), |c, v| c.website = v)}
                {text_field(company, "Phone", "tel", |c| c.phone.clone(), |c, v| c.phone = v)}
                <div class="form__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || company.with(|c| c.name.trim().is_empty())
                    >
                        "Save Changes"
                    </button>
                </div>
            </form>
        </section>
    }
}
