pub mod approvals;
pub mod dashboard;
pub mod inbox;
pub mod invited_tasks;
pub mod messages;
pub mod my_business;
pub mod my_jobs;
pub mod notifications;
pub mod preferences;
pub mod profile;
pub mod quotations;
pub mod rfq_list;
pub mod rfq_templates;
pub mod samples;
pub mod suppliers;
pub mod team;

pub use approvals::Approvals;
pub use dashboard::Dashboard;
pub use inbox::Inbox;
pub use invited_tasks::InvitedTasks;
pub use messages::Messages;
pub use my_business::MyBusiness;
pub use my_jobs::MyJobs;
pub use notifications::Notifications;
pub use preferences::PreferencesPage;
pub use profile::Profile;
pub use quotations::Quotations;
pub use rfq_list::RfqList;
pub use rfq_templates::RfqTemplates;
pub use samples::Samples;
pub use suppliers::Suppliers;
pub use team::Team;
