use super::Record;
use crate::filter::Filterable;
use crate::workflow::{
    ApprovalStatus, CardAction, CardStatus, Illegal, Keyed, LetterAction, LetterStatus,
    PromotionStatus, Review,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousSchool {
    pub name: String,
    pub completion_year: i32,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAdmission {
    pub id: String,
    pub student_name: String,
    pub email: String,
    pub program: String,
    pub intake: String,
    pub letter_status: LetterStatus,
    #[serde(default)]
    pub letter_generated_at: Option<String>,
    #[serde(default)]
    pub letter_approved_at: Option<String>,
    #[serde(default)]
    pub signed_letter_uploaded: bool,
    pub guardian: Guardian,
    pub previous_school: PreviousSchool,
}

impl StudentAdmission {
    /// Advances the admission letter; `generate` and `approve` stamp `today`.
    pub fn apply_letter(&self, action: LetterAction, today: &str) -> Result<Self, Illegal> {
        let letter_status = self.letter_status.apply(action)?;
        let mut next = Self {
            letter_status,
            ..self.clone()
        };
        match action {
            LetterAction::Generate => next.letter_generated_at = Some(today.to_string()),
            LetterAction::Approve => next.letter_approved_at = Some(today.to_string()),
            LetterAction::Reject => {}
        }
        Ok(next)
    }

    /// The signed copy can only come back for an approved letter.
    pub fn upload_signed(&self) -> Result<Self, Illegal> {
        if self.letter_status != LetterStatus::Approved {
            return Err(Illegal {
                from: self.letter_status.as_str(),
                action: "uploadSigned",
            });
        }
        Ok(Self {
            signed_letter_uploaded: true,
            ..self.clone()
        })
    }
}

impl Keyed for StudentAdmission {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentAdmission {
    const CATEGORY_KEYS: &'static [&'static str] = &["letterStatus", "program"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_name.as_str(),
            self.id.as_str(),
            self.program.as_str(),
            self.email.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "letterStatus" => Some(self.letter_status.as_str()),
            "program" => Some(self.program.as_str()),
            _ => None,
        }
    }
}

impl Record for StudentAdmission {
    const COLLECTION: &'static str = "admissions";

    fn status_label(&self) -> &'static str {
        self.letter_status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdCard {
    pub id: String,
    pub student_name: String,
    pub student_code: String,
    pub program: String,
    #[serde(default)]
    pub card_number: Option<String>,
    pub status: CardStatus,
    pub expiry_date: String,
}

impl StudentIdCard {
    /// `fresh_number` is only consulted by `generate`.
    pub fn apply<F>(&self, action: CardAction, fresh_number: F) -> Result<Self, Illegal>
    where
        F: FnOnce() -> String,
    {
        let status = self.status.apply(action)?;
        let card_number = match action {
            CardAction::Generate => Some(fresh_number()),
            _ => self.card_number.clone(),
        };
        Ok(Self {
            status,
            card_number,
            ..self.clone()
        })
    }
}

impl Keyed for StudentIdCard {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentIdCard {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "program"];

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.student_name.as_str(),
            self.student_code.as_str(),
            self.program.as_str(),
        ];
        if let Some(n) = self.card_number.as_deref() {
            fields.push(n);
        }
        fields
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "program" => Some(self.program.as_str()),
            _ => None,
        }
    }
}

impl Record for StudentIdCard {
    const COLLECTION: &'static str = "idCards";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentApplication {
    pub id: String,
    pub student_name: String,
    pub email: String,
    pub program: String,
    pub submitted_at: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub student_code: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    pub guardian: Guardian,
}

impl StudentApplication {
    /// Approval assigns a student code from `fresh_code`.
    pub fn review<F>(&self, action: Review, fresh_code: F) -> Result<Self, Illegal>
    where
        F: FnOnce() -> String,
    {
        let status = self.status.review(action)?;
        let student_code = match action {
            Review::Approve => Some(fresh_code()),
            Review::Reject => self.student_code.clone(),
        };
        Ok(Self {
            status,
            student_code,
            ..self.clone()
        })
    }
}

impl Keyed for StudentApplication {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentApplication {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "program"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_name.as_str(),
            self.id.as_str(),
            self.program.as_str(),
            self.email.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "program" => Some(self.program.as_str()),
            _ => None,
        }
    }
}

impl Record for StudentApplication {
    const COLLECTION: &'static str = "applications";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPromotion {
    pub id: String,
    pub student_name: String,
    pub student_code: String,
    pub program: String,
    pub from_year: u8,
    pub to_year: u8,
    pub cgpa: f64,
    pub status: PromotionStatus,
    #[serde(default)]
    pub allowed_modules: Vec<String>,
    #[serde(default)]
    pub retake_modules: Vec<String>,
    pub fees_cleared: bool,
}

impl StudentPromotion {
    /// Any decision may replace any other. The module lists follow the decision:
    /// promoted students carry no retakes, students held back carry no
    /// next-year modules.
    pub fn decide(&self, status: PromotionStatus, retake: Option<Vec<String>>) -> Self {
        let mut next = Self {
            status,
            ..self.clone()
        };
        match status {
            PromotionStatus::Promoted => next.retake_modules.clear(),
            PromotionStatus::NotPromoted => next.allowed_modules.clear(),
            PromotionStatus::Conditional => {
                if let Some(list) = retake {
                    next.retake_modules = list;
                }
            }
        }
        next
    }
}

impl Keyed for StudentPromotion {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentPromotion {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "program"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_name.as_str(),
            self.student_code.as_str(),
            self.program.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "program" => Some(self.program.as_str()),
            _ => None,
        }
    }
}

impl Record for StudentPromotion {
    const COLLECTION: &'static str = "promotions";

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub program: String,
    pub year_of_study: u8,
    pub date_of_birth: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Passed,
    Failed,
    Retake,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResult {
    pub code: String,
    pub title: String,
    pub semester: String,
    pub grade: String,
    pub status: ModuleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Academic {
    pub cgpa: f64,
    #[serde(default)]
    pub modules: Vec<ModuleResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    pub name: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeAccount {
    pub total: f64,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaryAction {
    pub date: String,
    pub offence: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCourse {
    pub code: String,
    pub title: String,
    pub credits: u8,
}

/// Full registrar view of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub student_code: String,
    pub profile: Profile,
    pub academic: Academic,
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
    pub fees: FeeAccount,
    #[serde(default)]
    pub disciplinary: Vec<DisciplinaryAction>,
    #[serde(default)]
    pub courses: Vec<RegisteredCourse>,
}

impl StudentRecord {
    pub fn fee_standing(&self) -> &'static str {
        if self.fees.balance > 0.0 {
            "owing"
        } else {
            "cleared"
        }
    }
}

impl Keyed for StudentRecord {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Filterable for StudentRecord {
    const CATEGORY_KEYS: &'static [&'static str] = &["program", "fees"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.profile.full_name.as_str(),
            self.student_code.as_str(),
            self.id.as_str(),
            self.profile.program.as_str(),
            self.profile.email.as_str(),
        ]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "program" => Some(self.profile.program.as_str()),
            "fees" => Some(self.fee_standing()),
            _ => None,
        }
    }
}

impl Record for StudentRecord {
    const COLLECTION: &'static str = "studentRecords";

    fn status_label(&self) -> &'static str {
        self.fee_standing()
    }
}
