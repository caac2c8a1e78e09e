use serde::Serialize;

/// A `<select>` option: stored value plus display label.
pub type SelectOption = (&'static str, &'static str);

/// Notification switches on the preferences page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub rfq_updates: bool,
    pub supplier_messages: bool,
    pub approval_requests: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            rfq_updates: true,
            supplier_messages: true,
            approval_requests: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationToggle {
    Email,
    Push,
    RfqUpdates,
    SupplierMessages,
    ApprovalRequests,
}

impl NotificationToggle {
    pub const ALL: [Self; 5] = [
        Self::Email,
        Self::Push,
        Self::RfqUpdates,
        Self::SupplierMessages,
        Self::ApprovalRequests,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Push => "Push Notifications",
            Self::RfqUpdates => "RFQ Updates",
            Self::SupplierMessages => "Supplier Messages",
            Self::ApprovalRequests => "Approval Requests",
        }
    }
}

impl NotificationPrefs {
    pub const fn get(&self, toggle: NotificationToggle) -> bool {
        match toggle {
            NotificationToggle::Email => self.email,
            NotificationToggle::Push => self.push,
            NotificationToggle::RfqUpdates => self.rfq_updates,
            NotificationToggle::SupplierMessages => self.supplier_messages,
            NotificationToggle::ApprovalRequests => self.approval_requests,
        }
    }

    pub fn set(&mut self, toggle: NotificationToggle, on: bool) {
        let slot = match toggle {
            NotificationToggle::Email => &mut self.email,
            NotificationToggle::Push => &mut self.push,
            NotificationToggle::RfqUpdates => &mut self.rfq_updates,
            NotificationToggle::SupplierMessages => &mut self.supplier_messages,
            NotificationToggle::ApprovalRequests => &mut self.approval_requests,
        };
        *slot = on;
    }
}

pub const LANGUAGES: [SelectOption; 4] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];

pub const TIMEZONES: [SelectOption; 4] = [
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
];

pub const CURRENCIES: [SelectOption; 4] = [
    ("USD", "US Dollar (USD)"),
    ("EUR", "Euro (EUR)"),
    ("GBP", "British Pound (GBP)"),
    ("CAD", "Canadian Dollar (CAD)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Application settings. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub notifications: NotificationPrefs,
    pub language: String,
    pub timezone: String,
    pub theme: Theme,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: NotificationPrefs::default(),
            language: LANGUAGES[0].0.to_string(),
            timezone: TIMEZONES[0].0.to_string(),
            theme: Theme::default(),
            currency: CURRENCIES[0].0.to_string(),
        }
    }
}

/// Keep `value` if it is one of `options`, otherwise fall back to the first.
pub fn pick_option(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|(key, _)| *key == value)
        .or_else(|| options.first())
        .map(|(key, _)| (*key).to_string())
        .unwrap_or_default()
}

pub const SAVED_MESSAGE: &str = "Preferences saved successfully!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.timezone, "America/New_York");
        assert_eq!(prefs.currency, "USD");
        assert_eq!(prefs.theme, Theme::Light);
        assert!(NotificationToggle::ALL.iter().all(|t| prefs.notifications.get(*t)));
    }

    #[test]
    fn test_toggle_set_get() {
        let mut prefs = NotificationPrefs::default();
        prefs.set(NotificationToggle::SupplierMessages, false);
        assert!(!prefs.get(NotificationToggle::SupplierMessages));
        assert!(prefs.get(NotificationToggle::RfqUpdates));
    }

    #[test]
    fn test_pick_option_falls_back() {
        assert_eq!(pick_option(&CURRENCIES, "GBP"), "GBP");
        assert_eq!(pick_option(&CURRENCIES, "JPY"), "USD");
        assert_eq!(pick_option(&[], "x"), "");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["notifications"]["rfqUpdates"], true);
        assert_eq!(json["theme"], "light");
    }

    #[test]
    fn test_theme_key_matches_serialized_form() {
        for theme in Theme::ALL {
            assert_eq!(serde_json::to_value(theme).unwrap(), theme.key());
        }
    }
}
