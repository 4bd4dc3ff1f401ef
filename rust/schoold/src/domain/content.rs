use super::Record;
use crate::filter::Filterable;
use crate::workflow::{ApprovalStatus, Illegal, Keyed, PublishStatus, Review};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Students,
    Teachers,
    Both,
}

impl Audience {
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Students => "students",
            Audience::Teachers => "teachers",
            Audience::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "students" => Some(Audience::Students),
            "teachers" => Some(Audience::Teachers),
            "both" => Some(Audience::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Ppt,
    Video,
    Document,
    Other,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Ppt => "ppt",
            MediaType::Video => "video",
            MediaType::Document => "document",
            MediaType::Other => "other",
        }
    }

    /// Guess from the file extension, the way the upload form does.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, e)| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "ppt" | "pptx" => MediaType::Ppt,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => MediaType::Video,
            "pdf" | "doc" | "docx" | "txt" => MediaType::Document,
            _ => MediaType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub audience: Audience,
    pub priority: Priority,
    pub created_at: String,
    pub status: PublishStatus,
}

impl Announcement {
    pub fn publish(&self) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.publish()?,
            ..self.clone()
        })
    }
}

impl Keyed for Announcement {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for Announcement {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "audience", "priority"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "audience" => Some(self.audience.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }
}

impl Record for Announcement {
    const COLLECTION: &'static str = "announcements";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub file_name: String,
    pub media_type: MediaType,
    pub size_bytes: u64,
    pub course: String,
    pub teacher: String,
    pub uploaded_at: String,
    pub status: ApprovalStatus,
}

impl Resource {
    pub fn review(&self, action: Review) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.review(action)?,
            ..self.clone()
        })
    }
}

impl Keyed for Resource {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for Resource {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "type"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.file_name.as_str(), self.course.as_str(), self.teacher.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "type" => Some(self.media_type.as_str()),
            _ => None,
        }
    }
}

impl Record for Resource {
    const COLLECTION: &'static str = "resources";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}
