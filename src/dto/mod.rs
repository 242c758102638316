pub mod admin_dto;
pub mod officer_dto;
pub mod result_dto;
