//! vocalis-admin
//!
//! The application context behind the admin dashboard. The frontend is a
//! thin view over [`commands::AdminService`]: session-gated commands over the
//! in-memory record set, in-flight guards for delete and export, and the
//! on-disk admin config.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
