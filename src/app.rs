use leptos::prelude::*;

use crate::components::{NotificationCenter, Sidebar, SuccessBanner, TopNavigation};
use crate::models::{AppState, View};
use crate::pages::{
    Approvals, Dashboard, Inbox, InvitedTasks, Messages, MyBusiness, MyJobs, Notifications,
    PreferencesPage, Profile, Quotations, RfqList, RfqTemplates, Samples, Suppliers, Team,
};

/// Root application component that provides global context and mounts the shell.
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Provide context to all child components
    provide_context(state);

    let active = Memo::new(move |_| state.active_view.get());

    view! {
        <div class="app">
            <Sidebar />
            <TopNavigation />
            <main class=move || state.content_class() id=move || active.get().id()>
                {move || page(active.get())}
            </main>
            <NotificationCenter />
            <SuccessBanner />
        </div>
    }
}

/// Page component for `view`. Switching views remounts the page, so its
/// records start from their seed again.
fn page(view: View) -> AnyView {
    match view {
        View::Dashboard => view! { <Dashboard /> }.into_any(),
        View::RfqList => view! { <RfqList /> }.into_any(),
        View::RfqTemplates => view! { <RfqTemplates /> }.into_any(),
        View::Quotations => view! { <Quotations /> }.into_any(),
        View::Approvals => view! { <Approvals /> }.into_any(),
        View::Suppliers => view! { <Suppliers /> }.into_any(),
        View::Samples => view! { <Samples /> }.into_any(),
        View::MyJobs => view! { <MyJobs /> }.into_any(),
        View::InvitedTasks => view! { <InvitedTasks /> }.into_any(),
        View::Team => view! { <Team /> }.into_any(),
        View::Inbox => view! { <Inbox /> }.into_any(),
        View::Messages => view! { <Messages /> }.into_any(),
        View::Notifications => view! { <Notifications /> }.into_any(),
        View::MyBusiness => view! { <MyBusiness /> }.into_any(),
        View::Profile => view! { <Profile /> }.into_any(),
        View::Preferences => view! { <PreferencesPage /> }.into_any(),
    }
}
