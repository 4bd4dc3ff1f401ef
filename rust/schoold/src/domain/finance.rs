use super::Record;
use crate::filter::Filterable;
use crate::workflow::{
    ApprovalStatus, Illegal, InvoiceAction, InvoiceStatus, Keyed, PaymentStatus, Review,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeCategory {
    Tuition,
    Library,
    Examination,
    Accommodation,
    Other,
}

impl FeeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FeeCategory::Tuition => "tuition",
            FeeCategory::Library => "library",
            FeeCategory::Examination => "examination",
            FeeCategory::Accommodation => "accommodation",
            FeeCategory::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tuition" => Some(FeeCategory::Tuition),
            "library" => Some(FeeCategory::Library),
            "examination" => Some(FeeCategory::Examination),
            "accommodation" => Some(FeeCategory::Accommodation),
            "other" => Some(FeeCategory::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceType {
    Examination,
    Graduation,
    Transcript,
}

impl ClearanceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClearanceType::Examination => "examination",
            ClearanceType::Graduation => "graduation",
            ClearanceType::Transcript => "transcript",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "examination" => Some(ClearanceType::Examination),
            "graduation" => Some(ClearanceType::Graduation),
            "transcript" => Some(ClearanceType::Transcript),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub student_name: String,
    pub student_code: String,
    pub amount: f64,
    pub category: FeeCategory,
    pub method: String,
    pub date: String,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn review(&self, action: Review) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.review(action)?,
            ..self.clone()
        })
    }
}

impl Keyed for Payment {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for Payment {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "category"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.student_name.as_str(), self.student_code.as_str(), self.id.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }
}

impl Record for Payment {
    const COLLECTION: &'static str = "payments";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub student_name: String,
    pub student_code: String,
    pub amount: f64,
    pub category: FeeCategory,
    pub issue_date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn apply(&self, action: InvoiceAction) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.apply(action)?,
            ..self.clone()
        })
    }
}

impl Keyed for Invoice {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for Invoice {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "category"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.student_name.as_str(), self.student_code.as_str(), self.id.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }
}

impl Record for Invoice {
    const COLLECTION: &'static str = "invoices";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRequest {
    pub id: String,
    pub student_name: String,
    pub student_code: String,
    pub program: String,
    pub clearance_type: ClearanceType,
    pub request_date: String,
    pub outstanding_balance: f64,
    pub status: ApprovalStatus,
}

impl ClearanceRequest {
    pub fn review(&self, action: Review) -> Result<Self, Illegal> {
        Ok(Self {
            status: self.status.review(action)?,
            ..self.clone()
        })
    }
}

impl Keyed for ClearanceRequest {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for ClearanceRequest {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "type"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_name.as_str(),
            self.student_code.as_str(),
            self.id.as_str(),
            self.program.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "type" => Some(self.clearance_type.as_str()),
            _ => None,
        }
    }
}

impl Record for ClearanceRequest {
    const COLLECTION: &'static str = "clearances";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}
