pub mod health;
pub mod report;
pub mod scenarios;
pub mod simulate;
