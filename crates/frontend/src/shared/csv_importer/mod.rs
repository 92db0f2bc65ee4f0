//! Bulk product import from CSV.
//!
//! `parser` turns an uploaded file into raw rows, `engine` validates and
//! submits them one at a time, `widget` is the file-picker control that
//! drives the run and reports the outcome.

pub mod engine;
pub mod parser;
pub mod widget;
