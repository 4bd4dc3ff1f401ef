use crate::domain::{ExamMonitoring, ExamStats, IntegrityAlert, StudentParticipation};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Snapshot of the exam-monitoring dashboard as written to disk.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringReport<'a> {
    pub stats: ExamStats,
    pub exams: &'a [ExamMonitoring],
    pub students: &'a [StudentParticipation],
    pub alerts: &'a [IntegrityAlert],
    pub generated_at: String,
    #[serde(skip)]
    at: DateTime<Utc>,
}

impl<'a> MonitoringReport<'a> {
    pub fn new(
        exams: &'a [ExamMonitoring],
        students: &'a [StudentParticipation],
        alerts: &'a [IntegrityAlert],
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            stats: ExamStats::collect(exams, students, alerts),
            exams,
            students,
            alerts,
            generated_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            at,
        }
    }

    /// `exam-monitoring-report-<YYYY-MM-DD>.json`, dated in UTC.
    pub fn file_name(&self) -> String {
        report_file_name(self.at)
    }

    /// Writes pretty JSON into `dir` (created if needed) and returns the file
    /// path. A report from the same day replaces the previous one.
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.to_string_lossy()))?;
        let path = dir.join(self.file_name());
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, body)
            .with_context(|| format!("failed to write {}", path.to_string_lossy()))?;
        Ok(path)
    }
}

pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("exam-monitoring-report-{}.json", at.format("%Y-%m-%d"))
}
