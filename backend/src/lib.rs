//! # ARRBO Stats Backend
//!
//! Read-only REST API over the basketball statistics that the ARRBO ingestion
//! jobs load into PostgreSQL: player averages, player positions, top usage
//! players per team, defensive efficiency by position, and the game schedule.
//!
//! ## Architecture
//!
//! - [`api`]: Record types served over HTTP and their key types
//! - [`models`]: Record definitions and wire-name mapping
//! - [`db`]: Repository traits, Postgres and in-memory backends, service layer
//! - [`http`]: Axum router, handlers and error mapping
//!
//! ## Features
//!
//! - `postgres-repo`: Diesel/r2d2 repository over PostgreSQL
//! - `local-repo`: In-memory repository, optionally seeded from JSON
//! - `http-server`: The REST API and the `arrbo-server` binary

// RepositoryError carries structured context.
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
