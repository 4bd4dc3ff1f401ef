mod content;
mod exams;
mod finance;
mod students;

pub use content::{Announcement, Audience, MediaType, Priority, Resource};
pub use exams::{ExamMonitoring, ExamStats, IntegrityAlert, Severity, StudentParticipation};
pub use finance::{ClearanceRequest, ClearanceType, FeeCategory, Invoice, Payment};
pub use students::{
    Academic, DisciplinaryAction, DocumentEntry, FeeAccount, Guardian, ModuleResult,
    ModuleStatus, PreviousSchool, Profile, RegisteredCourse, StudentAdmission,
    StudentApplication, StudentIdCard, StudentPromotion, StudentRecord,
};

use crate::filter::Filterable;
use crate::workflow::Keyed;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// A row of one of the admin list views.
pub trait Record: Keyed + Filterable + Clone + Serialize + DeserializeOwned {
    /// Collection name, used on the wire and as the storage partition.
    const COLLECTION: &'static str;

    /// Label used by the stat cards above each list.
    fn status_label(&self) -> &'static str;
}

pub fn status_summary<T: Record>(items: &[T]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.status_label()).or_insert(0) += 1;
    }
    counts
}
