//! Error types for subnet configuration

use thiserror::Error;

/// Errors raised while editing a virtual network in memory
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetConfigError {
    /// A subnet with this name (ignoring case) is already in the VNet
    #[error("Subnet with the specified name already exists: {0}")]
    DuplicateName(String),
}

/// Result type for subnet configuration operations
pub type SubnetConfigResult<T> = Result<T, SubnetConfigError>;
