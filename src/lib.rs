//! Console Payroll Tracker
//!
//! This crate provides the employee model, gross pay calculation, and the
//! interactive console session for building a payroll report from full-time,
//! part-time, and contractual employees.

#![warn(missing_docs)]

pub mod calculation;
pub mod console;
pub mod error;
pub mod models;
pub mod registry;
