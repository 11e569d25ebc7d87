//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when a ledger record does not exist.
//! - [`InvalidInput`] thrown when a request is rejected before touching the store.
//! - [`Database`] and [`Io`] for storage faults.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`Database`]: EngineError::Database
//!  [`Io`]: EngineError::Io
use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

/// The two sub-ledgers. Used to label errors and messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerKind {
    Expense,
    Income,
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{kind} ID {id} not found")]
    NotFound { kind: LedgerKind, id: i64 },
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn not_found(kind: LedgerKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    /// `true` for storage faults, `false` for outcomes the caller can act on.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Io(_))
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::NotFound { kind: ka, id: ia },
                Self::NotFound { kind: kb, id: ib },
            ) => ka == kb && ia == ib,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
