//! Property-based tests for the authentication core

mod password_proptest;
