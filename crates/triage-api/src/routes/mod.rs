pub mod guidelines;
pub mod health;
pub mod triage;
