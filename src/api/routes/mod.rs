//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod demo;
pub mod health;
