use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::calendar::parse_timestamp;
use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::task::Priority;

pub const INBOX_FILTERS: [&str; 5] = ["all", "unread", "forwarded", "email", "whatsapp"];

/// Where a forwarded message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    Email,
    WhatsApp,
}

impl Channel {
    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::WhatsApp => "whatsapp",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::WhatsApp => "💬",
        }
    }

    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Email => "channel-icon channel-icon--email",
            Self::WhatsApp => "channel-icon channel-icon--whatsapp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxMessage {
    pub id: String,
    pub channel: Channel,
    pub from: String,
    pub subject: String,
    pub preview: String,
    pub received_at: Option<DateTime<Utc>>,
    pub read: bool,
    pub forwarded: bool,
    pub priority: Priority,
    pub attachments: Option<u32>,
}

impl Identified for InboxMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for InboxMessage {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.subject.as_str(),
            self.from.as_str(),
            self.preview.as_str(),
        ]
    }
}

impl Filterable for InboxMessage {
    fn matches_filter(&self, key: &str) -> bool {
        match key {
            "unread" => !self.read,
            "forwarded" => self.forwarded,
            other => self.channel.filter_key() == other,
        }
    }
}

pub fn unread_count(messages: &[InboxMessage]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

pub fn mark_read(messages: &mut [InboxMessage], id: &str) -> bool {
    update_by_id(messages, id, |m| m.read = true)
}

pub fn empty_state_hint(searching: bool) -> &'static str {
    if searching {
        "Try adjusting your search"
    } else {
        "No forwarded messages in your inbox"
    }
}

pub fn sample_messages() -> Vec<InboxMessage> {
    let message = |id: &str,
                   channel,
                   from: &str,
                   subject: &str,
                   preview: &str,
                   at: &str,
                   read: bool,
                   forwarded: bool,
                   priority,
                   attachments: Option<u32>| InboxMessage {
        id: id.to_string(),
        channel,
        from: from.to_string(),
        subject: subject.to_string(),
        preview: preview.to_string(),
        received_at: parse_timestamp(at),
        read,
        forwarded,
        priority,
        attachments,
    };

    vec![
        message(
            "1",
            Channel::Email,
            "sarah.johnson@techcorp.com",
            "Urgent: Office Equipment RFQ Response Needed",
            "Hi John, we received the quotation from TechCorp Industries for the office equipment. The pricing looks competitive...",
            "2024-01-15T14:30:00Z",
            false,
            true,
            Priority::High,
            Some(2),
        ),
        message(
            "2",
            Channel::WhatsApp,
            "Mike Davis",
            "Supplier meeting tomorrow",
            "Hey, just confirming our meeting with Global Supply Co. tomorrow at 2 PM. Should we prepare anything specific?",
            "2024-01-15T13:45:00Z",
            false,
            false,
            Priority::Medium,
            None,
        ),
        message(
            "3",
            Channel::Email,
            "procurement@globalsupply.com",
            "Re: IT Services Contract Proposal",
            "Thank you for your inquiry. We have reviewed your requirements and are pleased to submit our proposal...",
            "2024-01-15T12:20:00Z",
            true,
            true,
            Priority::Medium,
            Some(1),
        ),
        message(
            "4",
            Channel::WhatsApp,
            "Lisa Wilson",
            "Quick question about supplier docs",
            "Hi! Can you check if TechCorp has submitted their insurance certificate? I can't find it in the system.",
            "2024-01-15T11:15:00Z",
            true,
            false,
            Priority::Low,
            None,
        ),
        message(
            "5",
            Channel::Email,
            "director@company.com",
            "Q2 Budget Approval for Manufacturing Materials",
            "The board has approved the Q2 budget allocation for manufacturing materials. Please proceed with the procurement...",
            "2024-01-15T10:30:00Z",
            false,
            true,
            Priority::High,
            None,
        ),
        message(
            "6",
            Channel::WhatsApp,
            "Emma Martinez",
            "Supplier onboarding update",
            "Just finished the onboarding call with Innovation Partners. They're ready to start receiving RFQs.",
            "2024-01-15T09:45:00Z",
            true,
            false,
            Priority::Low,
            None,
        ),
        message(
            "7",
            Channel::Email,
            "quotes@innovationpartners.com",
            "Marketing Campaign Quotation - Final Version",
            "Please find attached our final quotation for the Q1 marketing campaign. We have incorporated all your feedback...",
            "2024-01-14T16:20:00Z",
            true,
            true,
            Priority::Medium,
            Some(3),
        ),
        message(
            "8",
            Channel::WhatsApp,
            "David Brown",
            "Logistics meeting notes",
            "Sharing the notes from today's logistics meeting. Key points: new shipping rates, delivery schedules...",
            "2024-01-14T15:10:00Z",
            true,
            false,
            Priority::Low,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_seed_counts() {
        let messages = sample_messages();
        assert_eq!(messages.len(), 8);
        assert_eq!(unread_count(&messages), 3);
        assert!(messages.iter().all(|m| m.received_at.is_some()));
    }

    #[test]
    fn test_filters() {
        let messages = sample_messages();
        let count = |key| apply(&messages, &ListQuery::new("", key)).len();
        assert_eq!(count("unread"), 3);
        assert_eq!(count("forwarded"), 4);
        assert_eq!(count("email"), 4);
        assert_eq!(count("whatsapp"), 4);
        assert_eq!(count(ALL), 8);
    }

    #[test]
    fn test_search_covers_preview() {
        let messages = sample_messages();
        let found = apply(&messages, &ListQuery::new("insurance certificate", ALL));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from, "Lisa Wilson");
    }

    #[test]
    fn test_mark_read() {
        let mut messages = sample_messages();
        assert!(mark_read(&mut messages, "1"));
        assert_eq!(unread_count(&messages), 2);
        // Idempotent
        assert!(mark_read(&mut messages, "1"));
        assert_eq!(unread_count(&messages), 2);
    }
}
