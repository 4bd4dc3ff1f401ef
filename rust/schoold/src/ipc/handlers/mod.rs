pub mod backup;
pub mod content;
pub mod core;
pub mod detail;
pub mod exams;
pub mod finance;
pub mod reports;
pub mod setup;
pub mod students;
