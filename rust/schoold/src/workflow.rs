use serde::{Deserialize, Serialize};

/// Records addressed by an opaque string id.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Illegal {
    pub from: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
    Illegal(Illegal),
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Applied => "applied",
            Outcome::NotFound => "not_found",
            Outcome::Illegal(_) => "illegal_transition",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transition<T> {
    pub items: Vec<T>,
    pub outcome: Outcome,
    /// Position of the changed record in `items`, when one changed.
    pub index: Option<usize>,
}

impl<T> Transition<T> {
    pub fn applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    pub fn record(&self) -> Option<&T> {
        self.index.and_then(|i| self.items.get(i))
    }
}

/// Builds a new collection in which the first record keyed `id` is replaced by
/// `step(record)`. The input slice is never touched; a missing id or a refused
/// step hands back an unchanged copy.
pub fn transition<T, F>(items: &[T], id: &str, step: F) -> Transition<T>
where
    T: Keyed + Clone,
    F: FnOnce(&T) -> Result<T, Illegal>,
{
    let Some(pos) = items.iter().position(|r| r.key() == id) else {
        return Transition {
            items: items.to_vec(),
            outcome: Outcome::NotFound,
            index: None,
        };
    };

    match step(&items[pos]) {
        Ok(next) => {
            debug_assert_eq!(next.key(), id, "transition must not rewrite the record id");
            let mut out = Vec::with_capacity(items.len());
            out.extend_from_slice(&items[..pos]);
            out.push(next);
            out.extend_from_slice(&items[pos + 1..]);
            Transition {
                items: out,
                outcome: Outcome::Applied,
                index: Some(pos),
            }
        }
        Err(illegal) => Transition {
            items: items.to_vec(),
            outcome: Outcome::Illegal(illegal),
            index: None,
        },
    }
}

/// Returns the collection without the record keyed `id`, or `None` if absent.
pub fn remove<T: Keyed + Clone>(items: &[T], id: &str) -> Option<Vec<T>> {
    let pos = items.iter().position(|r| r.key() == id)?;
    let mut out = items.to_vec();
    out.remove(pos);
    Some(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Approve,
    Reject,
}

impl Review {
    pub fn as_str(self) -> &'static str {
        match self {
            Review::Approve => "approve",
            Review::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn review(self, action: Review) -> Result<Self, Illegal> {
        match (self, action) {
            (ApprovalStatus::Pending, Review::Approve) => Ok(ApprovalStatus::Approved),
            (ApprovalStatus::Pending, Review::Reject) => Ok(ApprovalStatus::Rejected),
            _ => Err(Illegal {
                from: self.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Rejected => "rejected",
        }
    }

    pub fn review(self, action: Review) -> Result<Self, Illegal> {
        match (self, action) {
            (PaymentStatus::Pending, Review::Approve) => Ok(PaymentStatus::Completed),
            (PaymentStatus::Pending, Review::Reject) => Ok(PaymentStatus::Rejected),
            _ => Err(Illegal {
                from: self.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceAction {
    MarkPaid,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn apply(self, action: InvoiceAction) -> Result<Self, Illegal> {
        match (self, action) {
            (InvoiceStatus::Pending, InvoiceAction::MarkPaid) => Ok(InvoiceStatus::Paid),
            (InvoiceStatus::Pending, InvoiceAction::Cancel) => Ok(InvoiceStatus::Cancelled),
            _ => Err(Illegal {
                from: self.as_str(),
                action: match action {
                    InvoiceAction::MarkPaid => "markPaid",
                    InvoiceAction::Cancel => "cancel",
                },
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Draft,
    Published,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }

    pub fn publish(self) -> Result<Self, Illegal> {
        match self {
            PublishStatus::Draft => Ok(PublishStatus::Published),
            PublishStatus::Published => Err(Illegal {
                from: self.as_str(),
                action: "publish",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterAction {
    Generate,
    Approve,
    Reject,
}

impl LetterAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterAction::Generate => "generate",
            LetterAction::Approve => "approve",
            LetterAction::Reject => "reject",
        }
    }
}

/// Admission letter lifecycle. `approved` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    NotGenerated,
    Generated,
    Approved,
    Rejected,
}

impl LetterStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterStatus::NotGenerated => "not_generated",
            LetterStatus::Generated => "generated",
            LetterStatus::Approved => "approved",
            LetterStatus::Rejected => "rejected",
        }
    }

    pub fn apply(self, action: LetterAction) -> Result<Self, Illegal> {
        match (self, action) {
            (LetterStatus::NotGenerated, LetterAction::Generate) => Ok(LetterStatus::Generated),
            (LetterStatus::Generated, LetterAction::Approve) => Ok(LetterStatus::Approved),
            (LetterStatus::Generated, LetterAction::Reject) => Ok(LetterStatus::Rejected),
            _ => Err(Illegal {
                from: self.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Generate,
    Print,
    Issue,
}

impl CardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CardAction::Generate => "generate",
            CardAction::Print => "print",
            CardAction::Issue => "issue",
        }
    }
}

/// ID card lifecycle, strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    NotGenerated,
    Generated,
    Printed,
    Issued,
}

impl CardStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CardStatus::NotGenerated => "not_generated",
            CardStatus::Generated => "generated",
            CardStatus::Printed => "printed",
            CardStatus::Issued => "issued",
        }
    }

    pub fn apply(self, action: CardAction) -> Result<Self, Illegal> {
        match (self, action) {
            (CardStatus::NotGenerated, CardAction::Generate) => Ok(CardStatus::Generated),
            (CardStatus::Generated, CardAction::Print) => Ok(CardStatus::Printed),
            (CardStatus::Printed, CardAction::Issue) => Ok(CardStatus::Issued),
            _ => Err(Illegal {
                from: self.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    Promoted,
    NotPromoted,
    Conditional,
}

impl PromotionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PromotionStatus::Promoted => "promoted",
            PromotionStatus::NotPromoted => "not_promoted",
            PromotionStatus::Conditional => "conditional",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "promoted" => Some(PromotionStatus::Promoted),
            "not_promoted" => Some(PromotionStatus::NotPromoted),
            "conditional" => Some(PromotionStatus::Conditional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamAction {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl ExamStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExamStatus::Upcoming => "upcoming",
            ExamStatus::Ongoing => "ongoing",
            ExamStatus::Completed => "completed",
        }
    }

    pub fn apply(self, action: ExamAction) -> Result<Self, Illegal> {
        match (self, action) {
            (ExamStatus::Upcoming, ExamAction::Start) => Ok(ExamStatus::Ongoing),
            (ExamStatus::Ongoing, ExamAction::End) => Ok(ExamStatus::Completed),
            _ => Err(Illegal {
                from: self.as_str(),
                action: match action {
                    ExamAction::Start => "start",
                    ExamAction::End => "end",
                },
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationEvent {
    Join,
    Disconnect,
    Submit,
}

impl ParticipationEvent {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "join" => Some(ParticipationEvent::Join),
            "disconnect" => Some(ParticipationEvent::Disconnect),
            "submit" => Some(ParticipationEvent::Submit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParticipationEvent::Join => "join",
            ParticipationEvent::Disconnect => "disconnect",
            ParticipationEvent::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipationStatus {
    Joined,
    NotJoined,
    Disconnected,
    Submitted,
}

impl ParticipationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ParticipationStatus::Joined => "joined",
            ParticipationStatus::NotJoined => "not-joined",
            ParticipationStatus::Disconnected => "disconnected",
            ParticipationStatus::Submitted => "submitted",
        }
    }

    pub fn apply(self, event: ParticipationEvent) -> Result<Self, Illegal> {
        use ParticipationEvent as E;
        use ParticipationStatus as S;
        match (self, event) {
            (S::NotJoined | S::Disconnected, E::Join) => Ok(S::Joined),
            (S::Joined, E::Disconnect) => Ok(S::Disconnected),
            (S::Joined | S::Disconnected, E::Submit) => Ok(S::Submitted),
            _ => Err(Illegal {
                from: self.as_str(),
                action: event.as_str(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        status: CardStatus,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".into(),
                status: CardStatus::NotGenerated,
            },
            Row {
                id: "b".into(),
                status: CardStatus::Generated,
            },
        ]
    }

    #[test]
    fn refused_step_leaves_collection_equal() {
        let before = rows();
        let t = transition(&before, "a", |r| {
            r.status.apply(CardAction::Print).map(|status| Row {
                status,
                ..r.clone()
            })
        });
        assert_eq!(t.items, before);
        assert_eq!(
            t.outcome,
            Outcome::Illegal(Illegal {
                from: "not_generated",
                action: "print"
            })
        );
        assert!(t.record().is_none());
    }

    #[test]
    fn remove_drops_only_the_target() {
        let out = remove(&rows(), "a").expect("present");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
        assert!(remove(&rows(), "zzz").is_none());
    }
}
