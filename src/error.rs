//! Error types for pile operations.

use thiserror::Error;

/// Error returned when drawing from an empty pile.
///
/// The round resolver checks [`Pile::is_empty`](crate::Pile::is_empty)
/// before every draw it makes during a war, so this error only surfaces
/// when a round is started on an already-empty pile. That is a contract
/// violation by the caller, not an expected runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pile is empty")]
pub struct EmptyPileError;
