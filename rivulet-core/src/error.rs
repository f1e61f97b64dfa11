// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet.
//!
//! Only construction-time failures are represented here. Once an [`Observable`](crate::Observable)
//! exists there is no error channel: a stream either completes or is cancelled.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn connect() -> Result<()> {
//!     let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
//!     Err(RivuletError::transport("connecting to upstream", io))
//! }
//!
//! assert!(connect().unwrap_err().is_transport());
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// A source adapter could not complete its exchange with an external resource.
    ///
    /// No Observable is produced when this is returned, so no partial stream ever starts.
    #[error("Transport error while {context}: {source}")]
    Transport {
        /// What the adapter was doing when the failure happened
        context: String,
        /// The underlying transport failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a transport error with the given context
    pub fn transport(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error came from a transport exchange
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Specialized Result type for rivulet operations
pub type Result<T> = std::result::Result<T, RivuletError>;
