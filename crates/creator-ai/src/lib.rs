//! Backend library for the creator analytics platform: rule-based SEO scoring
//! of video metadata, channel audits from Studio CSV exports, and the HTTP
//! surface exposing both.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
