pub mod accounts;
pub mod notes;
