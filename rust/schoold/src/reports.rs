use serde::Serialize;

/// Canned tabular preview for one report type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPreview {
    pub kind: &'static str,
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

static REPORTS: &[ReportPreview] = &[
    ReportPreview {
        kind: "enrollment",
        title: "Enrollment Summary",
        headers: &["Program", "Year 1", "Year 2", "Year 3", "Total"],
        rows: &[
            &["Computer Science", "120", "98", "85", "303"],
            &["Business Administration", "150", "132", "110", "392"],
            &["Education", "90", "84", "76", "250"],
        ],
    },
    ReportPreview {
        kind: "fees",
        title: "Fee Collection",
        headers: &["Category", "Expected", "Collected", "Outstanding"],
        rows: &[
            &["Tuition", "450,000,000", "382,500,000", "67,500,000"],
            &["Library", "12,000,000", "11,200,000", "800,000"],
            &["Examination", "30,000,000", "27,900,000", "2,100,000"],
        ],
    },
    ReportPreview {
        kind: "performance",
        title: "Academic Performance",
        headers: &["Program", "Average CGPA", "Pass Rate", "Retakes"],
        rows: &[
            &["Computer Science", "3.62", "91%", "14"],
            &["Business Administration", "3.41", "88%", "22"],
            &["Education", "3.55", "93%", "9"],
        ],
    },
    ReportPreview {
        kind: "attendance",
        title: "Attendance Overview",
        headers: &["Program", "Sessions", "Average Attendance", "Below 75%"],
        rows: &[
            &["Computer Science", "64", "87%", "11"],
            &["Business Administration", "58", "82%", "19"],
            &["Education", "61", "90%", "6"],
        ],
    },
    ReportPreview {
        kind: "clearance",
        title: "Clearance Status",
        headers: &["Clearance Type", "Approved", "Pending", "Rejected"],
        rows: &[
            &["Examination", "412", "37", "8"],
            &["Graduation", "188", "21", "4"],
            &["Transcript", "96", "12", "2"],
        ],
    },
];

pub fn report_types() -> impl Iterator<Item = (&'static str, &'static str)> {
    REPORTS.iter().map(|r| (r.kind, r.title))
}

/// `None` for a missing or unknown report type.
pub fn preview(kind: Option<&str>) -> Option<&'static ReportPreview> {
    let kind = kind?.trim();
    REPORTS.iter().find(|r| r.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_matches_its_headers() {
        for r in REPORTS {
            for row in r.rows {
                assert_eq!(row.len(), r.headers.len(), "{}", r.kind);
            }
        }
    }

    #[test]
    fn unselected_type_has_no_preview() {
        assert!(preview(None).is_none());
        assert!(preview(Some("")).is_none());
        assert!(preview(Some("payroll")).is_none());
        assert_eq!(preview(Some("fees")).map(|r| r.title), Some("Fee Collection"));
    }
}
