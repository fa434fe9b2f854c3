//! FocusGroup AI - Synthetic focus group web application
//!
//! This crate generates synthetic user personas for a product description and
//! simulates a focus-group discussion, using an external completion API when
//! configured and deterministic keyword-rule fallbacks otherwise.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
