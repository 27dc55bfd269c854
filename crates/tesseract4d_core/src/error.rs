//! Engine error types
//!
//! The engine is pure math, so the taxonomy is small: a bad edge length at
//! setup, and a vertex sitting exactly on the projection's singular point.

use std::fmt;

/// Error type for tesseract operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TesseractError {
    /// Edge length was NaN or infinite
    InvalidConfiguration {
        edge_length: f32,
    },
    /// Vertex has `w == -1` exactly, so `1 / (1 + w)` is undefined
    SingularProjection {
        /// Index of the offending vertex, if known
        vertex: Option<usize>,
    },
}

impl fmt::Display for TesseractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TesseractError::InvalidConfiguration { edge_length } => {
                write!(f, "Invalid configuration: edge length {} is not finite", edge_length)
            }
            TesseractError::SingularProjection { vertex: Some(i) } => {
                write!(f, "Singular projection: vertex {} has w = -1", i)
            }
            TesseractError::SingularProjection { vertex: None } => {
                write!(f, "Singular projection: w = -1")
            }
        }
    }
}

impl std::error::Error for TesseractError {}

impl TesseractError {
    /// Attach a vertex index to a singular projection error
    pub fn at_vertex(self, index: usize) -> Self {
        match self {
            TesseractError::SingularProjection { .. } => {
                TesseractError::SingularProjection { vertex: Some(index) }
            }
            other => other,
        }
    }

    /// Whether the caller can recover by skipping the affected segment
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TesseractError::SingularProjection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = TesseractError::InvalidConfiguration { edge_length: f32::NAN };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_singular_projection_display() {
        let err = TesseractError::SingularProjection { vertex: Some(8) };
        let msg = format!("{}", err);
        assert!(msg.contains("Singular projection"));
        assert!(msg.contains("vertex 8"));
    }

    #[test]
    fn test_at_vertex() {
        let err = TesseractError::SingularProjection { vertex: None }.at_vertex(3);
        assert_eq!(err, TesseractError::SingularProjection { vertex: Some(3) });

        let cfg = TesseractError::InvalidConfiguration { edge_length: f32::INFINITY };
        assert_eq!(cfg.at_vertex(3), cfg);
    }

    #[test]
    fn test_recoverable() {
        assert!(TesseractError::SingularProjection { vertex: None }.is_recoverable());
        assert!(!TesseractError::InvalidConfiguration { edge_length: f32::INFINITY }.is_recoverable());
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = TesseractError::SingularProjection { vertex: Some(1) };
        assert!(err.source().is_none());
    }
}
