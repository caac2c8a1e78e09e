use serde::Serialize;

use crate::models::error::{required, ValidationError};
use crate::models::listing::{update_by_id, Filterable, Identified, Searchable};
use crate::models::task::CURRENT_USER;

pub const CHAT_FILTERS: [&str; 2] = ["all", "unread"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub author: String,
    pub body: String,
    pub time: String,
}

impl ChatMessage {
    pub fn is_own(&self) -> bool {
        self.author == CURRENT_USER
    }
}

/// A conversation with a colleague or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatThread {
    pub id: String,
    pub title: String,
    pub participants: Vec<String>,
    pub unread: u32,
    pub messages: Vec<ChatMessage>,
}

impl ChatThread {
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn preview(&self) -> String {
        self.last_message()
            .map(|m| format!("{}: {}", m.author, m.body))
            .unwrap_or_default()
    }
}

impl Identified for ChatThread {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ChatThread {
    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.participants.iter().map(String::as_str));
        fields
    }
}

impl Filterable for ChatThread {
    fn matches_filter(&self, key: &str) -> bool {
        key == "unread" && self.unread > 0
    }
}

/// Opening a thread clears its unread counter.
pub fn select_thread(threads: &mut [ChatThread], id: &str) -> bool {
    update_by_id(threads, id, |t| t.unread = 0)
}

/// Append `draft` as the current user's message. Blank drafts are rejected.
pub fn send_message(
    threads: &mut [ChatThread],
    id: &str,
    draft: &str,
    time: &str,
) -> Result<bool, ValidationError> {
    let body = required(draft, "Message")?;
    Ok(update_by_id(threads, id, |t| {
        t.messages.push(ChatMessage {
            author: CURRENT_USER.to_string(),
            body,
            time: time.to_string(),
        });
    }))
}

pub fn total_unread(threads: &[ChatThread]) -> u32 {
    threads.iter().map(|t| t.unread).sum()
}

pub fn sample_threads() -> Vec<ChatThread> {
    let msg = |author: &str, body: &str, time: &str| ChatMessage {
        author: author.to_string(),
        body: body.to_string(),
        time: time.to_string(),
    };
    vec![
        ChatThread {
            id: "c1".into(),
            title: "Procurement Team".into(),
            participants: vec![
                "Sarah Johnson".into(),
                "Mike Davis".into(),
                "Lisa Wilson".into(),
            ],
            unread: 2,
            messages: vec![
                msg("Sarah Johnson", "Quotations for office equipment are in.", "09:12"),
                msg(CURRENT_USER, "Great, I'll review them this afternoon.", "09:20"),
                msg("Mike Davis", "Budget sign-off is ready when you are.", "10:02"),
                msg("Lisa Wilson", "TechCorp insurance certificate is still missing.", "10:15"),
            ],
        },
        ChatThread {
            id: "c2".into(),
            title: "Mike Davis".into(),
            participants: vec!["Mike Davis".into()],
            unread: 1,
            messages: vec![
                msg("Mike Davis", "Meeting with Global Supply Co. tomorrow at 2 PM?", "13:45"),
            ],
        },
        ChatThread {
            id: "c3".into(),
            title: "Supplier Onboarding".into(),
            participants: vec!["Emma Martinez".into(), "David Brown".into()],
            unread: 0,
            messages: vec![
                msg("Emma Martinez", "Innovation Partners finished onboarding.", "Yesterday"),
                msg(CURRENT_USER, "Thanks Emma, adding them to the next RFQ.", "Yesterday"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_select_clears_unread() {
        let mut threads = sample_threads();
        assert_eq!(total_unread(&threads), 3);
        assert!(select_thread(&mut threads, "c1"));
        assert_eq!(threads[0].unread, 0);
        assert_eq!(total_unread(&threads), 1);
    }

    #[test]
    fn test_send_appends_own_message() {
        let mut threads = sample_threads();
        assert_eq!(send_message(&mut threads, "c2", "  Yes, 2 PM works ", "14:00"), Ok(true));
        let last = threads[1].last_message().unwrap();
        assert!(last.is_own());
        assert_eq!(last.body, "Yes, 2 PM works");
        assert_eq!(threads[1].preview(), "John Buyer: Yes, 2 PM works");
    }

    #[test]
    fn test_blank_draft_rejected() {
        let mut threads = sample_threads();
        assert!(send_message(&mut threads, "c2", "   ", "14:00").is_err());
        assert_eq!(threads[1].messages.len(), 1);
    }

    #[test]
    fn test_search_participants() {
        let threads = sample_threads();
        let found = apply(&threads, &ListQuery::new("emma", ALL));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c3");
        assert_eq!(apply(&threads, &ListQuery::new("", "unread")).len(), 2);
    }
}
