pub mod report;
pub mod today;
pub mod week;
