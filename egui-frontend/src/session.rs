//! # Session Module
//!
//! Gates access to the main interface behind a hardcoded credential pair.
//! A plain, case-sensitive equality check against client-visible constants,
//! not a security boundary.

use thiserror::Error;

pub const ADMIN_EMAIL: &str = "admin@recriar.com.br";
pub const ADMIN_PASSWORD: &str = "Recriar@2025";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Credenciais inválidas. Tente admin@recriar.com.br")]
    InvalidCredentials,
}

/// Compare the submitted pair against the admin constants.
pub fn authenticate(email: &str, password: &str) -> Result<(), LoginError> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pair_succeeds() {
        assert!(authenticate("admin@recriar.com.br", "Recriar@2025").is_ok());
    }

    #[test]
    fn anything_else_fails() {
        assert_eq!(
            authenticate("admin@recriar.com.br", "wrong"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("other@recriar.com.br", "Recriar@2025"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(authenticate("", ""), Err(LoginError::InvalidCredentials));
        // Case matters
        assert_eq!(
            authenticate("Admin@recriar.com.br", "Recriar@2025"),
            Err(LoginError::InvalidCredentials)
        );
    }
}
