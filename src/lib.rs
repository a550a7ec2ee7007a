//! APCA contrast checks for foreground/background color pairs, served as
//! MCP tools over stdio.
//!
//! The core is [`check_contrast`]: a pure function from two CSS color strings
//! and an [`EvaluationContext`] to a [`ContrastResult`].

pub mod cli;
pub mod error;
pub mod math;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod types;

pub use error::{ColorArgument, ColorParseError, Error, Result};
pub use math::checker::{check_contrast, check_contrast_with, rate, ApcaScorer, ContrastScorer};
pub use math::threshold::resolve_minimum;
pub use types::{ContrastResult, EvaluationContext, FontWeight, Polarity, Rating, UseCase};
