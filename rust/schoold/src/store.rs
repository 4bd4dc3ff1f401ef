use crate::db;
use crate::domain::*;
use crate::seed;
use anyhow::Context;
use rusqlite::Connection;
use serde_json::json;

/// Every list view's collection. Each view owns its own vector.
#[derive(Debug, Clone)]
pub struct Collections {
    pub payments: Vec<Payment>,
    pub invoices: Vec<Invoice>,
    pub clearances: Vec<ClearanceRequest>,
    pub announcements: Vec<Announcement>,
    pub resources: Vec<Resource>,
    pub admissions: Vec<StudentAdmission>,
    pub id_cards: Vec<StudentIdCard>,
    pub applications: Vec<StudentApplication>,
    pub promotions: Vec<StudentPromotion>,
    pub student_records: Vec<StudentRecord>,
    pub exams: Vec<ExamMonitoring>,
    pub participation: Vec<StudentParticipation>,
    pub alerts: Vec<IntegrityAlert>,
}

impl Collections {
    pub fn seeded() -> Self {
        Self {
            payments: seed::payments(),
            invoices: seed::invoices(),
            clearances: seed::clearances(),
            announcements: seed::announcements(),
            resources: seed::resources(),
            admissions: seed::admissions(),
            id_cards: seed::id_cards(),
            applications: seed::applications(),
            promotions: seed::promotions(),
            student_records: seed::student_records(),
            exams: seed::exams(),
            participation: seed::participation(),
            alerts: seed::alerts(),
        }
    }

    /// Loads every collection from the workspace, seeding the ones that were
    /// never written.
    pub fn load_or_seed(conn: &Connection) -> anyhow::Result<Self> {
        Ok(Self {
            payments: load_or_seed(conn)?,
            invoices: load_or_seed(conn)?,
            clearances: load_or_seed(conn)?,
            announcements: load_or_seed(conn)?,
            resources: load_or_seed(conn)?,
            admissions: load_or_seed(conn)?,
            id_cards: load_or_seed(conn)?,
            applications: load_or_seed(conn)?,
            promotions: load_or_seed(conn)?,
            student_records: load_or_seed(conn)?,
            exams: load_or_seed(conn)?,
            participation: load_or_seed(conn)?,
            alerts: load_or_seed(conn)?,
        })
    }
}

/// Binds a record type to its slot in `Collections` and its demo data.
pub trait Stored: Record {
    fn slot(c: &Collections) -> &Vec<Self>;
    fn slot_mut(c: &mut Collections) -> &mut Vec<Self>;
    fn seed() -> Vec<Self>;
}

macro_rules! stored {
    ($ty:ty, $field:ident, $seed:path) => {
        impl Stored for $ty {
            fn slot(c: &Collections) -> &Vec<Self> {
                &c.$field
            }
            fn slot_mut(c: &mut Collections) -> &mut Vec<Self> {
                &mut c.$field
            }
            fn seed() -> Vec<Self> {
                $seed()
            }
        }
    };
}

stored!(Payment, payments, seed::payments);
stored!(Invoice, invoices, seed::invoices);
stored!(ClearanceRequest, clearances, seed::clearances);
stored!(Announcement, announcements, seed::announcements);
stored!(Resource, resources, seed::resources);
stored!(StudentAdmission, admissions, seed::admissions);
stored!(StudentIdCard, id_cards, seed::id_cards);
stored!(StudentApplication, applications, seed::applications);
stored!(StudentPromotion, promotions, seed::promotions);
stored!(StudentRecord, student_records, seed::student_records);
stored!(ExamMonitoring, exams, seed::exams);
stored!(StudentParticipation, participation, seed::participation);
stored!(IntegrityAlert, alerts, seed::alerts);

fn seeded_key(collection: &str) -> String {
    format!("seeded.{}", collection)
}

pub fn persist<T: Stored>(conn: &Connection, items: &[T]) -> anyhow::Result<()> {
    let rows = items
        .iter()
        .map(|r| -> anyhow::Result<(String, String)> {
            Ok((r.key().to_string(), serde_json::to_string(r)?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    db::records_replace(conn, T::COLLECTION, &rows)
        .with_context(|| format!("failed to write collection {}", T::COLLECTION))?;
    db::settings_set_json(conn, &seeded_key(T::COLLECTION), &json!(true))?;
    Ok(())
}

fn load_or_seed<T: Stored>(conn: &Connection) -> anyhow::Result<Vec<T>> {
    let seeded = db::settings_get_json(conn, &seeded_key(T::COLLECTION))?
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if !seeded {
        let items = T::seed();
        persist(conn, &items)?;
        tracing::debug!(collection = T::COLLECTION, rows = items.len(), "seeded collection");
        return Ok(items);
    }
    db::records_load(conn, T::COLLECTION)?
        .iter()
        .map(|body| {
            serde_json::from_str::<T>(body)
                .with_context(|| format!("corrupt row in collection {}", T::COLLECTION))
        })
        .collect()
}
