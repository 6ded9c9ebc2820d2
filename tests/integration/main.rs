//! Integration tests driving the full router
//!
//! Tests that need PostgreSQL are `#[ignore]`d; run them with a
//! `DATABASE_URL` and `cargo test -- --ignored`.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;

mod database;
