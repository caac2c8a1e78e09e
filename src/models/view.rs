/// Every page the sidebar can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    RfqList,
    RfqTemplates,
    Quotations,
    Approvals,
    Suppliers,
    Samples,
    MyJobs,
    InvitedTasks,
    Team,
    Inbox,
    Messages,
    Notifications,
    MyBusiness,
    Profile,
    Preferences,
}

impl View {
    pub const ALL: [Self; 16] = [
        Self::Dashboard,
        Self::RfqList,
        Self::RfqTemplates,
        Self::Quotations,
        Self::Approvals,
        Self::Suppliers,
        Self::Samples,
        Self::MyJobs,
        Self::InvitedTasks,
        Self::Team,
        Self::Inbox,
        Self::Messages,
        Self::Notifications,
        Self::MyBusiness,
        Self::Profile,
        Self::Preferences,
    ];

    /// Route key used in navigation and DOM ids
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::RfqList => "rfq-list",
            Self::RfqTemplates => "rfq-templates",
            Self::Quotations => "quotations",
            Self::Approvals => "approvals",
            Self::Suppliers => "suppliers",
            Self::Samples => "samples",
            Self::MyJobs => "my-jobs",
            Self::InvitedTasks => "invited-tasks",
            Self::Team => "team",
            Self::Inbox => "inbox",
            Self::Messages => "messages",
            Self::Notifications => "notifications",
            Self::MyBusiness => "my-business",
            Self::Profile => "profile",
            Self::Preferences => "preferences",
        }
    }

    /// Resolve a route key; unknown keys land on the dashboard.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|view| view.id() == id)
            .unwrap_or_default()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::RfqList => "RFQ List",
            Self::RfqTemplates => "RFQ Templates",
            Self::Quotations => "Quotations",
            Self::Approvals => "Approvals",
            Self::Suppliers => "Suppliers",
            Self::Samples => "Samples",
            Self::MyJobs => "My Tasks",
            Self::InvitedTasks => "Invited Tasks",
            Self::Team => "Team",
            Self::Inbox => "Inbox",
            Self::Messages => "Messages",
            Self::Notifications => "Notifications",
            Self::MyBusiness => "My Company",
            Self::Profile => "Profile",
            Self::Preferences => "Preferences",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "Overview and metrics",
            Self::RfqList => "Manage RFQs",
            Self::RfqTemplates => "Template library",
            Self::Quotations => "Manage quotes",
            Self::Approvals => "Approval workflow",
            Self::Suppliers => "Supplier database",
            Self::Samples => "Product samples",
            Self::MyJobs => "Personal tasks",
            Self::InvitedTasks => "Task invitations",
            Self::Team => "Team management",
            Self::Inbox => "Email & WhatsApp",
            Self::Messages => "Team chat",
            Self::Notifications => "System alerts",
            Self::MyBusiness => "Company details",
            Self::Profile => "Personal info",
            Self::Preferences => "App settings",
        }
    }

    /// Glyph shown in the sidebar and, when collapsed, on its own.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::RfqList => "📄",
            Self::RfqTemplates => "📂",
            Self::Quotations => "📈",
            Self::Approvals => "🛡",
            Self::Suppliers | Self::MyBusiness => "🏢",
            Self::Samples => "📦",
            Self::MyJobs => "☑",
            Self::InvitedTasks => "✉",
            Self::Team => "👥",
            Self::Inbox => "📥",
            Self::Messages => "💬",
            Self::Notifications => "🔔",
            Self::Profile => "👤",
            Self::Preferences => "⚙",
        }
    }
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub title: &'static str,
    pub views: &'static [View],
}

pub const NAV_SECTIONS: [NavSection; 6] = [
    NavSection {
        title: "Main",
        views: &[View::Dashboard],
    },
    NavSection {
        title: "RFQ Management",
        views: &[
            View::RfqList,
            View::RfqTemplates,
            View::Quotations,
            View::Approvals,
        ],
    },
    NavSection {
        title: "Suppliers",
        views: &[View::Suppliers, View::Samples],
    },
    NavSection {
        title: "Tasks & Team",
        views: &[View::MyJobs, View::InvitedTasks, View::Team],
    },
    NavSection {
        title: "Communication",
        views: &[View::Inbox, View::Messages, View::Notifications],
    },
    NavSection {
        title: "Settings",
        views: &[View::MyBusiness, View::Profile, View::Preferences],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), view);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_dashboard() {
        assert_eq!(View::from_id("reports"), View::Dashboard);
        assert_eq!(View::from_id(""), View::Dashboard);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = View::ALL.iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), View::ALL.len());
    }

    #[test]
    fn test_every_view_is_in_exactly_one_section() {
        let listed: Vec<View> = NAV_SECTIONS
            .iter()
            .flat_map(|section| section.views.iter().copied())
            .collect();
        assert_eq!(listed.len(), View::ALL.len());
        for view in View::ALL {
            assert_eq!(listed.iter().filter(|v| **v == view).count(), 1);
        }
    }

    #[test]
    fn test_my_jobs_is_labelled_my_tasks() {
        assert_eq!(View::MyJobs.id(), "my-jobs");
        assert_eq!(View::MyJobs.label(), "My Tasks");
    }
}
