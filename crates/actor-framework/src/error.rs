//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, plus the boxed entity error that carries a
//! domain failure from inside an actor back to its caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the concrete entity error if this is an [`FrameworkError::EntityError`] holding
    /// an `E`. Anything else is handed back unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("stock exhausted")]
    struct StockExhausted;

    #[test]
    fn entity_error_downcasts_to_its_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(StockExhausted));
        assert_eq!(err.into_entity_error::<StockExhausted>().unwrap(), StockExhausted);
    }

    #[test]
    fn foreign_entity_error_is_returned_untouched() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        match err.into_entity_error::<StockExhausted>() {
            Err(FrameworkError::EntityError(inner)) => assert_eq!(inner.to_string(), "disk"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn runtime_errors_are_not_entity_errors() {
        let err = FrameworkError::NotFound("ORD-1001".into());
        assert!(matches!(
            err.into_entity_error::<StockExhausted>(),
            Err(FrameworkError::NotFound(id)) if id == "ORD-1001"
        ));
    }
}
