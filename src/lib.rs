// src/lib.rs

//! Course Scout Library
//!
//! Searches a paginated course listing endpoint, collects every page and
//! keeps the courses whose enrollment has not opened yet.

pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
pub mod utils;
