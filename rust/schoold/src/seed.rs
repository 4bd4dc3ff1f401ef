//! Demo data loaded into a fresh workspace (or used as-is without one).

use crate::domain::*;
use crate::workflow::{
    ApprovalStatus, CardStatus, ExamStatus, InvoiceStatus, LetterStatus, ParticipationStatus,
    PaymentStatus, PromotionStatus, PublishStatus,
};

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    student_name: &str,
    student_code: &str,
    amount: f64,
    category: FeeCategory,
    method: &str,
    date: &str,
    status: PaymentStatus,
) -> Payment {
    Payment {
        id: id.into(),
        student_name: student_name.into(),
        student_code: student_code.into(),
        amount,
        category,
        method: method.into(),
        date: date.into(),
        status,
    }
}

#[rustfmt::skip]
pub fn payments() -> Vec<Payment> {
    use FeeCategory::*;
    use PaymentStatus::*;
    vec![
        payment("PAY001", "Nakato Sarah", "STU/2024/0001", 1_500_000.0, Tuition, "Mobile Money", "2024-09-12", Pending),
        payment("PAY002", "Okello James", "STU/2024/0002", 50_000.0, Library, "Bank Transfer", "2024-09-10", Completed),
        payment("PAY003", "Namubiru Grace", "STU/2024/0003", 120_000.0, Examination, "Cash", "2024-09-08", Completed),
        payment("PAY004", "Mugisha David", "STU/2024/0004", 800_000.0, Accommodation, "Bank Transfer", "2024-09-05", Pending),
        payment("PAY005", "Atim Esther", "STU/2024/0005", 1_500_000.0, Tuition, "Mobile Money", "2024-09-01", Rejected),
    ]
}

#[rustfmt::skip]
pub fn invoices() -> Vec<Invoice> {
    let inv = |id: &str, name: &str, code: &str, amount: f64, category, issued: &str, due: &str, status| Invoice {
        id: id.into(),
        student_name: name.into(),
        student_code: code.into(),
        amount,
        category,
        issue_date: issued.into(),
        due_date: due.into(),
        status,
    };
    vec![
        inv("INV001", "Okello James", "STU/2024/0002", 1_500_000.0, FeeCategory::Tuition, "2024-08-15", "2024-09-30", InvoiceStatus::Paid),
        inv("INV002", "Mugisha David", "STU/2024/0004", 800_000.0, FeeCategory::Accommodation, "2024-08-15", "2024-09-30", InvoiceStatus::Pending),
        inv("INV003", "Atim Esther", "STU/2024/0005", 120_000.0, FeeCategory::Examination, "2024-09-01", "2024-10-15", InvoiceStatus::Pending),
        inv("INV004", "Namubiru Grace", "STU/2024/0003", 50_000.0, FeeCategory::Library, "2024-07-01", "2024-07-31", InvoiceStatus::Cancelled),
    ]
}

#[rustfmt::skip]
pub fn clearances() -> Vec<ClearanceRequest> {
    let clr = |id: &str, name: &str, code: &str, program: &str, kind, date: &str, owed: f64, status| ClearanceRequest {
        id: id.into(),
        student_name: name.into(),
        student_code: code.into(),
        program: program.into(),
        clearance_type: kind,
        request_date: date.into(),
        outstanding_balance: owed,
        status,
    };
    vec![
        clr("CLR001", "Okello James", "STU/2024/0002", "Computer Science", ClearanceType::Examination, "2024-10-01", 0.0, ApprovalStatus::Pending),
        clr("CLR002", "Mugisha David", "STU/2024/0004", "Business Administration", ClearanceType::Examination, "2024-10-02", 800_000.0, ApprovalStatus::Pending),
        clr("CLR003", "Namubiru Grace", "STU/2024/0003", "Education", ClearanceType::Transcript, "2024-09-20", 0.0, ApprovalStatus::Approved),
        clr("CLR004", "Atim Esther", "STU/2024/0005", "Computer Science", ClearanceType::Graduation, "2024-09-18", 1_500_000.0, ApprovalStatus::Rejected),
    ]
}

#[rustfmt::skip]
pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "ann-001".into(),
            title: "End of semester examinations".into(),
            body: "Examinations begin on 2 December. Ensure your clearance is approved before then.".into(),
            audience: Audience::Students,
            priority: Priority::High,
            created_at: "2024-10-01".into(),
            status: PublishStatus::Published,
        },
        Announcement {
            id: "ann-002".into(),
            title: "Staff meeting".into(),
            body: "Department heads meet on Friday at 10:00 in the board room.".into(),
            audience: Audience::Teachers,
            priority: Priority::Medium,
            created_at: "2024-10-03".into(),
            status: PublishStatus::Draft,
        },
        Announcement {
            id: "ann-003".into(),
            title: "Library hours extended".into(),
            body: "The library stays open until 22:00 during the examination period.".into(),
            audience: Audience::Both,
            priority: Priority::Low,
            created_at: "2024-10-05".into(),
            status: PublishStatus::Published,
        },
    ]
}

#[rustfmt::skip]
pub fn resources() -> Vec<Resource> {
    let res = |id: &str, file: &str, size: u64, course: &str, teacher: &str, at: &str, status| Resource {
        id: id.into(),
        file_name: file.into(),
        media_type: MediaType::from_file_name(file),
        size_bytes: size,
        course: course.into(),
        teacher: teacher.into(),
        uploaded_at: at.into(),
        status,
    };
    vec![
        res("res-001", "Data Structures Week 1.pptx", 2_457_600, "CSC 1201", "Dr. Kato Ronald", "2024-09-02", ApprovalStatus::Approved),
        res("res-002", "Intro to Accounting.mp4", 157_286_400, "BBA 1104", "Ms. Achieng Ruth", "2024-09-04", ApprovalStatus::Pending),
        res("res-003", "Curriculum Design Notes.pdf", 1_048_576, "EDU 2101", "Mr. Ssempala Paul", "2024-09-06", ApprovalStatus::Pending),
        res("res-004", "Lab Dataset.zip", 5_242_880, "CSC 1201", "Dr. Kato Ronald", "2024-09-07", ApprovalStatus::Rejected),
    ]
}

fn guardian(name: &str, phone: &str, relationship: &str) -> Guardian {
    Guardian {
        name: name.into(),
        phone: phone.into(),
        relationship: relationship.into(),
    }
}

#[rustfmt::skip]
pub fn admissions() -> Vec<StudentAdmission> {
    vec![
        StudentAdmission {
            id: "adm001".into(),
            student_name: "Akello Brenda".into(),
            email: "akello.brenda@example.com".into(),
            program: "Computer Science".into(),
            intake: "August 2024".into(),
            letter_status: LetterStatus::NotGenerated,
            letter_generated_at: None,
            letter_approved_at: None,
            signed_letter_uploaded: false,
            guardian: guardian("Akello Joseph", "+256 772 100200", "Father"),
            previous_school: PreviousSchool {
                name: "Gulu High School".into(),
                completion_year: 2023,
                grade: "18 points".into(),
            },
        },
        StudentAdmission {
            id: "adm002".into(),
            student_name: "Wasswa Ivan".into(),
            email: "wasswa.ivan@example.com".into(),
            program: "Business Administration".into(),
            intake: "August 2024".into(),
            letter_status: LetterStatus::Generated,
            letter_generated_at: Some("2024-08-20".into()),
            letter_approved_at: None,
            signed_letter_uploaded: false,
            guardian: guardian("Nalwoga Mary", "+256 701 334455", "Mother"),
            previous_school: PreviousSchool {
                name: "Kings College Budo".into(),
                completion_year: 2023,
                grade: "16 points".into(),
            },
        },
        StudentAdmission {
            id: "adm003".into(),
            student_name: "Nabirye Fiona".into(),
            email: "nabirye.fiona@example.com".into(),
            program: "Education".into(),
            intake: "January 2024".into(),
            letter_status: LetterStatus::Approved,
            letter_generated_at: Some("2023-12-01".into()),
            letter_approved_at: Some("2023-12-05".into()),
            signed_letter_uploaded: true,
            guardian: guardian("Nabirye Sam", "+256 783 998877", "Uncle"),
            previous_school: PreviousSchool {
                name: "Mbale Secondary School".into(),
                completion_year: 2022,
                grade: "14 points".into(),
            },
        },
    ]
}

#[rustfmt::skip]
pub fn id_cards() -> Vec<StudentIdCard> {
    let card = |id: &str, name: &str, code: &str, program: &str, number: Option<&str>, status| StudentIdCard {
        id: id.into(),
        student_name: name.into(),
        student_code: code.into(),
        program: program.into(),
        card_number: number.map(Into::into),
        status,
        expiry_date: "2028-08-31".into(),
    };
    vec![
        card("card001", "Okello James", "STU/2024/0002", "Computer Science", None, CardStatus::NotGenerated),
        card("card002", "Namubiru Grace", "STU/2024/0003", "Education", Some("ID-2024-0001"), CardStatus::Generated),
        card("card003", "Mugisha David", "STU/2024/0004", "Business Administration", Some("ID-2024-0002"), CardStatus::Printed),
        card("card004", "Atim Esther", "STU/2024/0005", "Computer Science", Some("ID-2024-0003"), CardStatus::Issued),
    ]
}

#[rustfmt::skip]
pub fn applications() -> Vec<StudentApplication> {
    vec![
        StudentApplication {
            id: "app001".into(),
            student_name: "Kintu Brian".into(),
            email: "kintu.brian@example.com".into(),
            program: "Computer Science".into(),
            submitted_at: "2024-07-14".into(),
            status: ApprovalStatus::Approved,
            student_code: Some("STU/2024/0006".into()),
            documents: vec!["UACE Certificate".into(), "National ID".into()],
            guardian: guardian("Kintu Moses", "+256 752 111222", "Father"),
        },
        StudentApplication {
            id: "app002".into(),
            student_name: "Auma Patricia".into(),
            email: "auma.patricia@example.com".into(),
            program: "Education".into(),
            submitted_at: "2024-07-18".into(),
            status: ApprovalStatus::Rejected,
            student_code: None,
            documents: vec!["UACE Certificate".into()],
            guardian: guardian("Auma Rose", "+256 774 555666", "Mother"),
        },
        StudentApplication {
            id: "app003".into(),
            student_name: "Lubega Henry".into(),
            email: "lubega.henry@example.com".into(),
            program: "Business Administration".into(),
            submitted_at: "2024-07-21".into(),
            status: ApprovalStatus::Pending,
            student_code: None,
            documents: vec![
                "UACE Certificate".into(),
                "UCE Certificate".into(),
                "Birth Certificate".into(),
            ],
            guardian: guardian("Lubega Charles", "+256 700 909090", "Father"),
        },
    ]
}

#[rustfmt::skip]
pub fn promotions() -> Vec<StudentPromotion> {
    let strs = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        StudentPromotion {
            id: "prom001".into(),
            student_name: "Okello James".into(),
            student_code: "STU/2024/0002".into(),
            program: "Computer Science".into(),
            from_year: 1,
            to_year: 2,
            cgpa: 4.12,
            status: PromotionStatus::Promoted,
            allowed_modules: strs(&["CSC 2101", "CSC 2102", "CSC 2103"]),
            retake_modules: Vec::new(),
            fees_cleared: true,
        },
        StudentPromotion {
            id: "prom002".into(),
            student_name: "Mugisha David".into(),
            student_code: "STU/2024/0004".into(),
            program: "Business Administration".into(),
            from_year: 1,
            to_year: 2,
            cgpa: 2.71,
            status: PromotionStatus::Conditional,
            allowed_modules: strs(&["BBA 2101", "BBA 2102"]),
            retake_modules: strs(&["BBA 1104"]),
            fees_cleared: false,
        },
        StudentPromotion {
            id: "prom003".into(),
            student_name: "Atim Esther".into(),
            student_code: "STU/2024/0005".into(),
            program: "Computer Science".into(),
            from_year: 2,
            to_year: 3,
            cgpa: 1.88,
            status: PromotionStatus::NotPromoted,
            allowed_modules: Vec::new(),
            retake_modules: strs(&["CSC 2101", "CSC 2103"]),
            fees_cleared: false,
        },
    ]
}

#[rustfmt::skip]
fn module(code: &str, title: &str, semester: &str, grade: &str, status: ModuleStatus) -> ModuleResult {
    ModuleResult {
        code: code.into(),
        title: title.into(),
        semester: semester.into(),
        grade: grade.into(),
        status,
    }
}

fn course(code: &str, title: &str, credits: u8) -> RegisteredCourse {
    RegisteredCourse {
        code: code.into(),
        title: title.into(),
        credits,
    }
}

#[rustfmt::skip]
pub fn student_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            id: "rec001".into(),
            student_code: "STU/2024/0002".into(),
            profile: Profile {
                full_name: "Okello James".into(),
                email: "okello.james@example.com".into(),
                program: "Computer Science".into(),
                year_of_study: 2,
                date_of_birth: "2004-03-17".into(),
                phone: "+256 772 345678".into(),
            },
            academic: Academic {
                cgpa: 4.12,
                modules: vec![
                    module("CSC 1101", "Programming Fundamentals", "2023/24 Sem 1", "A", ModuleStatus::Passed),
                    module("CSC 1102", "Discrete Mathematics", "2023/24 Sem 1", "B+", ModuleStatus::Passed),
                    module("CSC 1201", "Data Structures", "2023/24 Sem 2", "A-", ModuleStatus::Passed),
                ],
            },
            documents: vec![
                DocumentEntry {
                    name: "UACE Certificate".into(),
                    verified: true,
                },
                DocumentEntry {
                    name: "National ID".into(),
                    verified: true,
                },
            ],
            fees: FeeAccount {
                total: 3_000_000.0,
                paid: 3_000_000.0,
                balance: 0.0,
            },
            disciplinary: Vec::new(),
            courses: vec![
                course("CSC 2101", "Operating Systems", 4),
                course("CSC 2102", "Databases", 4),
                course("CSC 2103", "Computer Networks", 3),
            ],
        },
        StudentRecord {
            id: "rec002".into(),
            student_code: "STU/2024/0004".into(),
            profile: Profile {
                full_name: "Mugisha David".into(),
                email: "mugisha.david@example.com".into(),
                program: "Business Administration".into(),
                year_of_study: 1,
                date_of_birth: "2005-11-02".into(),
                phone: "+256 701 223344".into(),
            },
            academic: Academic {
                cgpa: 2.71,
                modules: vec![
                    module("BBA 1101", "Principles of Management", "2023/24 Sem 1", "B", ModuleStatus::Passed),
                    module("BBA 1104", "Financial Accounting", "2023/24 Sem 2", "E", ModuleStatus::Retake),
                ],
            },
            documents: vec![DocumentEntry {
                name: "UACE Certificate".into(),
                verified: false,
            }],
            fees: FeeAccount {
                total: 2_600_000.0,
                paid: 1_800_000.0,
                balance: 800_000.0,
            },
            disciplinary: vec![DisciplinaryAction {
                date: "2024-03-11".into(),
                offence: "Examination malpractice (phone in exam room)".into(),
                action: "Written warning".into(),
            }],
            courses: vec![
                course("BBA 2101", "Marketing", 3),
                course("BBA 1104", "Financial Accounting (retake)", 4),
            ],
        },
    ]
}

#[rustfmt::skip]
pub fn exams() -> Vec<ExamMonitoring> {
    let exam = |id: &str, title: &str, course: &str, invigilator: &str, start: &str, minutes, status, total, joined| ExamMonitoring {
        id: id.into(),
        title: title.into(),
        course: course.into(),
        invigilator: invigilator.into(),
        start_time: start.into(),
        duration_minutes: minutes,
        status,
        total_students: total,
        joined_count: joined,
    };
    vec![
        exam("EXM001", "Data Structures Final", "CSC 1201", "Dr. Kato Ronald", "2024-12-02T09:00:00Z", 180, ExamStatus::Ongoing, 5, 4),
        exam("EXM002", "Financial Accounting Midterm", "BBA 1104", "Ms. Achieng Ruth", "2024-12-04T14:00:00Z", 120, ExamStatus::Upcoming, 0, 0),
        exam("EXM003", "Curriculum Studies Quiz", "EDU 2101", "Mr. Ssempala Paul", "2024-11-28T10:00:00Z", 60, ExamStatus::Completed, 0, 0),
    ]
}

#[rustfmt::skip]
pub fn participation() -> Vec<StudentParticipation> {
    use ParticipationStatus::*;
    let part = |id: &str, name: &str, code: &str, status, flagged, seen: Option<&str>| StudentParticipation {
        id: id.into(),
        exam_id: "EXM001".into(),
        student_name: name.into(),
        student_code: code.into(),
        status,
        flagged,
        last_seen: seen.map(Into::into),
    };
    vec![
        part("part001", "Okello James", "STU/2024/0002", Joined, false, Some("2024-12-02T09:41:00Z")),
        part("part002", "Namubiru Grace", "STU/2024/0003", NotJoined, false, None),
        part("part003", "Mugisha David", "STU/2024/0004", Disconnected, false, Some("2024-12-02T09:22:00Z")),
        part("part004", "Atim Esther", "STU/2024/0005", Submitted, false, Some("2024-12-02T09:38:00Z")),
        part("part005", "Kintu Brian", "STU/2024/0006", Joined, true, Some("2024-12-02T09:40:00Z")),
    ]
}

#[rustfmt::skip]
pub fn alerts() -> Vec<IntegrityAlert> {
    let alert = |id: &str, code: &str, message: &str, severity, at: &str| IntegrityAlert {
        id: id.into(),
        exam_id: "EXM001".into(),
        student_code: code.into(),
        message: message.into(),
        severity,
        raised_at: at.into(),
    };
    vec![
        alert("alert-001", "STU/2024/0006", "Browser tab switched 4 times", Severity::High, "2024-12-02T09:35:00Z"),
        alert("alert-002", "STU/2024/0004", "Connection dropped during exam", Severity::Medium, "2024-12-02T09:22:00Z"),
        alert("alert-003", "STU/2024/0002", "Webcam briefly obscured", Severity::Low, "2024-12-02T09:15:00Z"),
    ]
}
