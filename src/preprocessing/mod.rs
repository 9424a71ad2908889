//! Audio preprocessing modules
//!
//! Prepares two extracted sequences for comparison:
//! - Peak-relative noise gate
//! - Length truncation and peak normalization

pub mod noise_gate;
pub mod normalization;
