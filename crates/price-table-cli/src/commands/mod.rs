pub mod report;
pub mod schedule;
