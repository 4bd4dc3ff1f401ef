#[path = "../src/filter.rs"]
mod filter;

use filter::{Choice, Filterable, ListFilter};

#[derive(Debug, Clone, PartialEq)]
struct Applicant {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    program: &'static str,
    status: &'static str,
}

impl Filterable for Applicant {
    const CATEGORY_KEYS: &'static [&'static str] = &["status", "program"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.id, self.program, self.email]
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status),
            "program" => Some(self.program),
            _ => None,
        }
    }
}

fn applicants() -> Vec<Applicant> {
    vec![
        Applicant {
            id: "app001",
            name: "Nansubuga Mary",
            email: "mary.n@example.com",
            program: "Bachelor of Computer Science",
            status: "approved",
        },
        Applicant {
            id: "app002",
            name: "Ochieng Peter",
            email: "peter.o@example.com",
            program: "Bachelor of Education",
            status: "rejected",
        },
        Applicant {
            id: "app003",
            name: "Lubega Henry",
            email: "henry.l@example.com",
            program: "Bachelor of Computer Science",
            status: "pending",
        },
        Applicant {
            id: "app004",
            name: "Akello Joy",
            email: "joy.a@example.com",
            program: "Bachelor of Business Administration",
            status: "pending",
        },
    ]
}

fn ids(rows: &[&Applicant]) -> Vec<&'static str> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn empty_query_and_all_sentinels_keep_everything() {
    let items = applicants();
    let f = ListFilter::new("")
        .with("status", Choice::parse("all"))
        .with("program", Choice::parse("all"));
    let rows = filter::apply(&items, &f);
    assert_eq!(rows.len(), items.len());
    assert!(rows.iter().zip(items.iter()).all(|(a, b)| *a == b));
}

#[test]
fn text_search_is_case_insensitive_over_any_field() {
    let items = applicants();
    assert_eq!(ids(&filter::apply(&items, &ListFilter::new("LUBEGA"))), ["app003"]);
    assert_eq!(ids(&filter::apply(&items, &ListFilter::new("example.com"))).len(), 4);
    assert_eq!(ids(&filter::apply(&items, &ListFilter::new("APP00"))).len(), 4);
    assert!(filter::apply(&items, &ListFilter::new("zzz")).is_empty());
}

#[test]
fn query_is_trimmed_before_matching() {
    let items = applicants();
    let rows = filter::apply(&items, &ListFilter::new("   joy  "));
    assert_eq!(ids(&rows), ["app004"]);
    assert_eq!(filter::apply(&items, &ListFilter::new("   ")).len(), items.len());
}

#[test]
fn category_and_text_combine_with_and() {
    let items = applicants();
    let f = ListFilter::new("computer").with("status", Choice::parse("pending"));
    assert_eq!(ids(&filter::apply(&items, &f)), ["app003"]);

    let f = ListFilter::new("education").with("status", Choice::parse("pending"));
    assert!(filter::apply(&items, &f).is_empty());
}

#[test]
fn category_match_is_exact() {
    let items = applicants();
    let f = ListFilter::new("").with("status", Choice::parse("pend"));
    assert!(filter::apply(&items, &f).is_empty());
}

#[test]
fn later_choice_for_same_key_replaces_earlier_one() {
    let items = applicants();
    let f = ListFilter::new("")
        .with("status", Choice::parse("rejected"))
        .with("status", Choice::parse("pending"));
    assert_eq!(ids(&filter::apply(&items, &f)), ["app003", "app004"]);
}

#[test]
fn output_preserves_input_order() {
    let items = applicants();
    let f = ListFilter::new("bachelor").with("status", Choice::parse("pending"));
    let rows = filter::apply(&items, &f);
    let positions: Vec<usize> = rows
        .iter()
        .map(|r| items.iter().position(|i| i.id == r.id).expect("row from input"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn blank_choice_means_all() {
    assert_eq!(Choice::parse(""), Choice::All);
    assert_eq!(Choice::parse("  all "), Choice::All);
    assert_eq!(Choice::parse("paid"), Choice::Only("paid".into()));
    assert!(Choice::All.admits(None));
    assert!(!Choice::Only("paid".into()).admits(None));
}
