pub mod admin_service;
pub mod officer_service;
pub mod result_service;
