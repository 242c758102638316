pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    admin_service::AdminService, officer_service::OfficerService, result_service::ResultService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub admin_service: AdminService,
    pub officer_service: OfficerService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let admin_service = AdminService::new(pool.clone());
        let officer_service = OfficerService::new(pool.clone());
        let result_service = ResultService::new(pool.clone());

        Self {
            pool,
            admin_service,
            officer_service,
            result_service,
        }
    }
}
