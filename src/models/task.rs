use chrono::NaiveDate;
use serde::Serialize;

use crate::models::calendar::{parse_iso_date, ymd};
use crate::models::error::{required, ValidationError};
use crate::models::listing::{Filterable, Identified, Searchable};

pub const TASK_FILTERS: [&str; 5] = ["all", "to-do", "in-progress", "review", "done"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::High => "badge badge--red",
            Self::Medium => "badge badge--yellow",
            Self::Low => "badge badge--green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    pub const fn filter_key(self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::ToDo => "badge badge--gray",
            Self::InProgress => "badge badge--blue",
            Self::Review => "badge badge--purple",
            Self::Done => "badge badge--green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtask {
    pub title: String,
    pub assigned_team: Vec<String>,
    pub due: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assignee: String,
    pub due: NaiveDate,
    pub category: String,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub const fn is_closed(&self) -> bool {
        matches!(self.status, TaskStatus::Done)
    }

    /// A new top-level task built from the subtask form.
    pub fn from_draft(id: impl Into<String>, draft: Subtask, today: NaiveDate) -> Self {
        let assignee = draft
            .assigned_team
            .first()
            .cloned()
            .unwrap_or_else(|| CURRENT_USER.to_string());
        Self {
            id: id.into(),
            title: draft.title,
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::ToDo,
            assignee,
            due: draft.due.unwrap_or(today),
            category: "General".to_string(),
            subtasks: Vec::new(),
        }
    }
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Task {
    fn haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Filterable for Task {
    fn matches_filter(&self, key: &str) -> bool {
        self.status.filter_key() == key
    }
}

/// Owner of the personal task list.
pub const CURRENT_USER: &str = "John Buyer";

/// Entries in a task row's overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobAction {
    Edit,
    Duplicate,
    Close,
    Reopen,
}

impl JobAction {
    /// Closed jobs offer reopen where open ones offer close.
    pub const fn for_job(closed: bool) -> [Self; 3] {
        if closed {
            [Self::Edit, Self::Duplicate, Self::Reopen]
        } else {
            [Self::Edit, Self::Duplicate, Self::Close]
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Duplicate => "Duplicate",
            Self::Close => "Close",
            Self::Reopen => "Reopen",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Edit => "✎",
            Self::Duplicate => "⧉",
            Self::Close => "🗀",
            Self::Reopen => "↺",
        }
    }
}

/// Apply a menu action to the task with `id`. Duplicates are inserted right after
/// the source with `new_id`.
pub fn apply_job_action(tasks: &mut Vec<Task>, id: &str, action: JobAction, new_id: &str) {
    let Some(index) = tasks.iter().position(|t| t.id == id) else {
        return;
    };
    match action {
        JobAction::Edit => {}
        JobAction::Duplicate => {
            let mut copy = tasks[index].clone();
            copy.id = new_id.to_string();
            copy.title = format!("{} (Copy)", copy.title);
            copy.status = TaskStatus::ToDo;
            tasks.insert(index + 1, copy);
        }
        JobAction::Close => tasks[index].status = TaskStatus::Done,
        JobAction::Reopen => tasks[index].status = TaskStatus::ToDo,
    }
}

/// Raw subtask form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtaskForm {
    pub title: String,
    pub assigned_team: Vec<String>,
    pub due_date: String,
}

impl SubtaskForm {
    pub fn toggle_member(&mut self, member: &str) {
        if let Some(pos) = self.assigned_team.iter().position(|m| m == member) {
            self.assigned_team.remove(pos);
        } else {
            self.assigned_team.push(member.to_string());
        }
    }

    pub fn team_summary(&self) -> String {
        if self.assigned_team.is_empty() {
            "Select team members".to_string()
        } else {
            format!("{} member(s) selected", self.assigned_team.len())
        }
    }

    pub fn submit(&self) -> Result<Subtask, ValidationError> {
        Ok(Subtask {
            title: required(&self.title, "Subtask title")?,
            assigned_team: self.assigned_team.clone(),
            due: parse_iso_date(&self.due_date),
        })
    }
}

pub fn empty_state_hint(searching: bool) -> &'static str {
    if searching {
        "Try adjusting your search"
    } else {
        "All caught up! No tasks to show."
    }
}

pub fn sample_tasks() -> Vec<Task> {
    let task = |id: &str,
                title: &str,
                description: &str,
                priority,
                status,
                due: NaiveDate,
                category: &str| Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        status,
        assignee: CURRENT_USER.to_string(),
        due,
        category: category.to_string(),
        subtasks: Vec::new(),
    };

    vec![
        task(
            "1",
            "Review supplier quotations for office equipment",
            "Compare and analyze 5 quotations received for office furniture procurement",
            Priority::High,
            TaskStatus::ToDo,
            ymd(2024, 1, 20),
            "RFQ Review",
        ),
        task(
            "2",
            "Approve IT services contract",
            "Final approval needed for annual IT support contract with Global Supply Co.",
            Priority::High,
            TaskStatus::InProgress,
            ymd(2024, 1, 18),
            "Approval",
        ),
        task(
            "3",
            "Update supplier database",
            "Add new suppliers from marketplace search to active supplier list",
            Priority::Medium,
            TaskStatus::ToDo,
            ymd(2024, 1, 22),
            "Data Management",
        ),
        task(
            "4",
            "Prepare Q2 procurement plan",
            "Draft procurement strategy and budget allocation for Q2 operations",
            Priority::Medium,
            TaskStatus::Review,
            ymd(2024, 1, 25),
            "Planning",
        ),
        task(
            "5",
            "Negotiate with TechCorp Industries",
            "Follow up on pricing negotiations for manufacturing materials",
            Priority::Low,
            TaskStatus::ToDo,
            ymd(2024, 1, 30),
            "Negotiation",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{apply, ListQuery, ALL};

    #[test]
    fn test_hyphenated_status_filter() {
        let tasks = sample_tasks();
        assert_eq!(apply(&tasks, &ListQuery::new("", "to-do")).len(), 3);
        assert_eq!(apply(&tasks, &ListQuery::new("", "in-progress")).len(), 1);
        assert!(apply(&tasks, &ListQuery::new("", "done")).is_empty());
    }

    #[test]
    fn test_search_covers_description() {
        let tasks = sample_tasks();
        let found = apply(&tasks, &ListQuery::new("budget allocation", ALL));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "4");
    }

    #[test]
    fn test_actions_depend_on_closed_state() {
        assert_eq!(
            JobAction::for_job(false),
            [JobAction::Edit, JobAction::Duplicate, JobAction::Close]
        );
        assert_eq!(
            JobAction::for_job(true),
            [JobAction::Edit, JobAction::Duplicate, JobAction::Reopen]
        );
    }

    #[test]
    fn test_close_and_reopen() {
        let mut tasks = sample_tasks();
        apply_job_action(&mut tasks, "2", JobAction::Close, "");
        assert!(tasks[1].is_closed());
        apply_job_action(&mut tasks, "2", JobAction::Reopen, "");
        assert_eq!(tasks[1].status, TaskStatus::ToDo);
    }

    #[test]
    fn test_duplicate_inserts_copy_after_source() {
        let mut tasks = sample_tasks();
        apply_job_action(&mut tasks, "4", JobAction::Duplicate, "99");
        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[4].id, "99");
        assert_eq!(tasks[4].title, "Prepare Q2 procurement plan (Copy)");
        assert_eq!(tasks[4].status, TaskStatus::ToDo);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut tasks = sample_tasks();
        apply_job_action(&mut tasks, "nope", JobAction::Close, "");
        assert_eq!(tasks, sample_tasks());
    }

    #[test]
    fn test_subtask_form_toggle_and_summary() {
        let mut form = SubtaskForm::default();
        assert_eq!(form.team_summary(), "Select team members");
        form.toggle_member("Mike Davis");
        form.toggle_member("Lisa Wilson");
        assert_eq!(form.team_summary(), "2 member(s) selected");
        form.toggle_member("Mike Davis");
        assert_eq!(form.assigned_team, vec!["Lisa Wilson".to_string()]);
    }

    #[test]
    fn test_subtask_requires_title() {
        let form = SubtaskForm {
            title: "   ".into(),
            ..SubtaskForm::default()
        };
        assert_eq!(
            form.submit(),
            Err(ValidationError::MissingField("Subtask title"))
        );

        let form = SubtaskForm {
            title: " Call supplier ".into(),
            due_date: "2024-02-01".into(),
            ..SubtaskForm::default()
        };
        let subtask = form.submit().unwrap();
        assert_eq!(subtask.title, "Call supplier");
        assert_eq!(subtask.due, Some(ymd(2024, 2, 1)));
    }

    #[test]
    fn test_task_from_draft() {
        let draft = Subtask {
            title: "Chase invoices".into(),
            assigned_team: vec!["Emma Martinez".into()],
            due: None,
        };
        let task = Task::from_draft("7", draft, ymd(2024, 1, 16));
        assert_eq!(task.assignee, "Emma Martinez");
        assert_eq!(task.due, ymd(2024, 1, 16));
        assert_eq!(task.status, TaskStatus::ToDo);
    }
}
