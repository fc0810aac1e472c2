//! Chart Data Model
//!
//! This module provides everything the resolver hands to renderers:
//!
//! - **types**: `ChartData`, `Dataset`, `ChartType`
//! - **demo**: Fixed fallback datasets and demo-URL samples
//! - **palette**: Default color rotation
//! - **url**: Shareable URL encoding
//! - **error**: Error types

pub mod demo;
pub mod error;
pub mod palette;
pub mod types;
pub mod url;

pub use demo::{default_data, demo_data, fallback_for, sample_bar, sample_line};
pub use error::{ChartError, ChartResult};
pub use palette::{color_for, palette_color, DEFAULT_PALETTE};
pub use types::{ChartData, ChartType, Dataset};
pub use url::{chart_url, demo_url, encode_param};
