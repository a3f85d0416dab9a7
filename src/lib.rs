//! Staff portal for a school ERP: leave and attendance dashboards, a profile
//! editor and login/signup forms backed by an external auth service.

pub mod api;
pub mod auth;
pub mod config;
pub mod derivation;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;
pub mod view;
