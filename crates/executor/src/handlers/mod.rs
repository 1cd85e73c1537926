//! Command handlers, one module per game surface.

pub mod castle;
pub mod config;
pub mod route;
