//! Analysis and result aggregation modules
//!
//! Turns extracted features into a final score:
//! - Pearson correlation
//! - Score blending and response curve
//! - Trace hook for intermediates
//! - Result types

pub mod correlation;
pub mod result;
pub mod score;
pub mod trace;
