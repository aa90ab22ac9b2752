//! Application Errors
//!
//! User-facing error kinds. Display strings are the Spanish UI copy shown
//! in the error banner.

use thiserror::Error;

/// Client-side name validation failures (never reach the network)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El nombre no puede contener los caracteres < o >")]
    AngleBracket,
    #[error("El nombre no puede contener el carácter *")]
    Asterisk,
}

/// Errors surfaced in the UI banner, one at a time
///
/// Mutation errors carry the server-provided message when the response body
/// includes one, falling back to a generic message otherwise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error al obtener los nombres")]
    Fetch,
    #[error("{}", .0.as_deref().unwrap_or("Error al crear el registro"))]
    Create(Option<String>),
    #[error("{}", .0.as_deref().unwrap_or("Error al actualizar el registro"))]
    Update(Option<String>),
    #[error("{}", .0.as_deref().unwrap_or("Error al eliminar el registro"))]
    Delete(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_distinct() {
        assert_ne!(
            ValidationError::AngleBracket.to_string(),
            ValidationError::Asterisk.to_string()
        );
    }

    #[test]
    fn mutation_errors_prefer_server_message() {
        let err = AppError::Create(Some("El nombre ya existe".to_string()));
        assert_eq!(err.to_string(), "El nombre ya existe");

        let err = AppError::Create(None);
        assert_eq!(err.to_string(), "Error al crear el registro");
    }

    #[test]
    fn fetch_error_message() {
        assert_eq!(AppError::Fetch.to_string(), "Error al obtener los nombres");
    }
}
