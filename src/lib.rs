//! Attendance Engine
//!
//! This crate turns an attendance export spreadsheet (one row per calendar day,
//! two stacked header rows) into per-day work-time records and aggregate
//! statistics such as days worked, average hours and the overtime delta.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod workbook;
