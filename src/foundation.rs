//! Error type and arena ids shared by every module.

pub mod error;
pub mod ids;
