pub mod patient;
pub mod result;
