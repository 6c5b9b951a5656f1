//! Core Kernel - Foundational types and utilities for the estimate system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Code enums: closed sets of coded categorical values
//! - Temporal types: clocks, jurisdictions and age derivation
//! - Common identifiers and the port error model shared by adapters

pub mod code;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use code::CodeEnum;
pub use temporal::{age_in_years, Clock, FixedClock, SystemClock, TemporalError, Timezone};
pub use identifiers::OrderId;
pub use ports::{DomainPort, PortError};
