//! Outbound adapters implementing domain ports over infrastructure.
//!
//! - **persistence**: PostgreSQL course store via Diesel.

pub mod persistence;
