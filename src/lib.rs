//! Survey Form - topic-branching survey with validated submission
//!
//! This crate implements a survey whose middle section depends on the chosen
//! topic: validation covers only the fields the respondent can see, and a
//! successful submission is decorated with supplemental questions fetched
//! for that topic.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
