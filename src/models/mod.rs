pub mod admin;
pub mod officer;
pub mod quiz_result;
