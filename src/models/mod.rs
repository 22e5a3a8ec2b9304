// src/models/mod.rs

//! Domain models for the course search.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod course;
mod search;

// Re-export all public types
pub use config::{Config, DefaultsConfig, HttpConfig, OutputConfig, SearchConfig};
pub use course::{Course, Location, SearchPage};
pub use search::{
    CourseLength, Region, RegionEntry, RegionTable, SearchOptions, SearchParams, SearchWindow,
    StudentCategory,
};
