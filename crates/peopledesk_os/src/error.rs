#![forbid(unsafe_code)]

use peopledesk_kernel_contracts::ContractViolation;
use peopledesk_storage::ledger::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortalError {
    #[error("no page at '{path}'")]
    NotFound { path: String },
    #[error("capability '{capability}' is not implemented")]
    NotImplemented { capability: &'static str },
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
