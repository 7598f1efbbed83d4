//! Domain error taxonomy.
//!
//! Errors produced below the HTTP layer. The api crate wraps these in its
//! own `AppError` and maps each variant to a single response action.

/// Domain-level error shared by the db and api crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The identifier has no matching record.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity name for the error message (e.g. `"Listing"`).
        entity: &'static str,
        /// The identifier that failed to resolve, as given by the client.
        id: String,
    },

    /// A malformed payload or a missing required attachment.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request carries no usable identity.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The requester is authenticated but not allowed to do this.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Listing",
            id: "657f1f77bcf86cd799439011".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Listing with id 657f1f77bcf86cd799439011 not found"
        );
    }

    #[test]
    fn validation_message_carries_detail() {
        let err = CoreError::Validation("an image file is required".to_string());
        assert_eq!(err.to_string(), "validation failed: an image file is required");
    }
}
