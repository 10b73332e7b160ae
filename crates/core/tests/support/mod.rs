//! Shared test helpers for `paneboard-core` integration tests.
//!
//! In-memory fakes for every core port so service tests can focus on
//! behaviour instead of boilerplate. Each test binary uses a subset.

#![allow(dead_code)]

pub mod collaborators;
pub mod mail;
pub mod repositories;
