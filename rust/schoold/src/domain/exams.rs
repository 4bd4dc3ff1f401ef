use super::Record;
use crate::filter::Filterable;
use crate::workflow::{
    ExamAction, ExamStatus, Illegal, Keyed, ParticipationEvent, ParticipationStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamMonitoring {
    pub id: String,
    pub title: String,
    pub course: String,
    pub invigilator: String,
    pub start_time: String,
    pub duration_minutes: u32,
    pub status: ExamStatus,
    pub total_students: u32,
    pub joined_count: u32,
}

impl ExamMonitoring {
    pub fn apply(&self, action: ExamAction) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.apply(action)?,
            ..self.clone()
        })
    }

    /// Recounts participants for this session. Anyone who ever joined counts.
    pub fn with_counts(&self, participants: &[StudentParticipation]) -> Self {
        let mine = participants.iter().filter(|p| p.exam_id == self.id);
        let (total, joined) = mine.fold((0u32, 0u32), |(t, j), p| {
            let j = if p.status == ParticipationStatus::NotJoined {
                j
            } else {
                j + 1
            };
            (t + 1, j)
        });
        Self {
            total_students: total,
            joined_count: joined,
            ..self.clone()
        }
    }
}

impl Keyed for ExamMonitoring {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for ExamMonitoring {
    const CATEGORY_KEYS: &'static [&'static str] = &["status"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.course.as_str(),
            self.invigilator.as_str(),
            self.id.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Record for ExamMonitoring {
    const COLLECTION: &'static str = "exams";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentParticipation {
    pub id: String,
    pub exam_id: String,
    pub student_name: String,
    pub student_code: String,
    pub status: ParticipationStatus,
    pub flagged: bool,
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl StudentParticipation {
    pub fn apply(&self, event: ParticipationEvent, seen_at: &str) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.apply(event)?,
            last_seen: Some(seen_at.to_string()),
            ..self.clone()
        })
    }

    pub fn set_flag(&self, flagged: bool) -> Self {
        Self {
            flagged,
            ..self.clone()
        }
    }
}

impl Keyed for StudentParticipation {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentParticipation {
    const CATEGORY_KEYS: &'static [&'static str] = &["examId", "status", "flagged"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.student_name.as_str(), self.student_code.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "examId" => Some(self.exam_id.as_str()),
            "status" => Some(self.status.as_str()),
            "flagged" => Some(if self.flagged { "true" } else { "false" }),
            _ => None,
        }
    }
}

impl Record for StudentParticipation {
    const COLLECTION: &'static str = "participation";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityAlert {
    pub id: String,
    pub exam_id: String,
    pub student_code: String,
    pub message: String,
    pub severity: Severity,
    pub raised_at: String,
}

impl Keyed for IntegrityAlert {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for IntegrityAlert {
    const CATEGORY_KEYS: &'static [&'static str] = &["examId", "severity"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.message.as_str(), self.student_code.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "examId" => Some(self.exam_id.as_str()),
            "severity" => Some(self.severity.as_str()),
            _ => None,
        }
    }
}

impl Record for IntegrityAlert {
    const COLLECTION: &'static str = "alerts";

    fn status_label(&self) -> &'static str {
        self.severity.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStats {
    pub total_exams: usize,
    pub ongoing_exams: usize,
    pub total_students: usize,
    pub joined: usize,
    pub not_joined: usize,
    pub disconnected: usize,
    pub submitted: usize,
    pub flagged: usize,
    pub alerts: AlertCounts,
}

impl ExamStats {
    pub fn collect(
        exams: &[ExamMonitoring],
        participants: &[StudentParticipation],
        alerts: &[IntegrityAlert],
    ) -> Self {
        let mut stats = ExamStats {
            total_exams: exams.len(),
            ongoing_exams: exams
                .iter()
                .filter(|e| e.status == ExamStatus::Ongoing)
                .count(),
            total_students: participants.len(),
            ..Default::default()
        };
        for p in participants {
            match p.status {
                ParticipationStatus::Joined => stats.joined += 1,
                ParticipationStatus::NotJoined => stats.not_joined += 1,
                ParticipationStatus::Disconnected => stats.disconnected += 1,
                ParticipationStatus::Submitted => stats.submitted += 1,
            }
            if p.flagged {
                stats.flagged += 1;
            }
        }
        for a in alerts {
            match a.severity {
                Severity::Low => stats.alerts.low += 1,
                Severity::Medium => stats.alerts.medium += 1,
                Severity::High => stats.alerts.high += 1,
            }
        }
        stats
    }
}
