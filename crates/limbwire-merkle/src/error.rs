use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A leaf could not be turned into bytes.
    InvalidLeaf { position: usize, reason: String },
    /// The builder needs at least one leaf.
    EmptyTree,
    /// The fixed-depth tree has no room for another leaf.
    TreeFull,
    /// The tree did not produce a root.
    RootUnavailable,
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::InvalidLeaf { position, reason } => {
                write!(f, "Invalid leaf at position {}: {}", position, reason)
            }
            MerkleError::EmptyTree => {
                write!(f, "Tree is empty")
            }
            MerkleError::TreeFull => {
                write!(f, "Tree is full")
            }
            MerkleError::RootUnavailable => {
                write!(f, "Failed to compute tree root")
            }
        }
    }
}

impl std::error::Error for MerkleError {}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, MerkleError>;
