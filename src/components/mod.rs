pub mod approval_modal;
pub mod create_rfq_modal;
pub mod date_picker;
pub mod document_requirements_modal;
pub mod form_field;
pub mod job_actions_menu;
pub mod list_controls;
pub mod modal;
pub mod notification_center;
pub mod sidebar;
pub mod subtask_form;
pub mod success_banner;
pub mod supplier_search_modal;
pub mod team_selector;
pub mod top_navigation;

pub use approval_modal::ApprovalModal;
pub use create_rfq_modal::CreateRfqModal;
pub use date_picker::DatePicker;
pub use document_requirements_modal::DocumentRequirementsModal;
pub use form_field::text_field;
pub use job_actions_menu::JobActionsMenu;
pub use list_controls::{CountBadge, EmptyState, FilterChips, ListToolbar, PageHeader, SearchBar};
pub use modal::ModalFrame;
pub use notification_center::NotificationCenter;
pub use sidebar::Sidebar;
pub use subtask_form::SubtaskForm;
pub use success_banner::SuccessBanner;
pub use supplier_search_modal::SupplierSearchModal;
pub use team_selector::TeamSelector;
pub use top_navigation::TopNavigation;
