use thiserror::Error;

/// Error types that can occur when embedding the chat engine or sandbox.
#[derive(Debug, Error)]
pub enum CatseekError {
    /// The named engine preset does not exist
    #[error("Unknown engine preset: {0}")]
    UnknownPreset(String),
    /// The sandbox interpreter could not be probed
    #[error("Probe error: {0}")]
    Probe(String),
    /// Underlying I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_preset_name() {
        let err = CatseekError::UnknownPreset("dogpt".into());
        assert_eq!(err.to_string(), "Unknown engine preset: dogpt");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no interpreter");
        let err: CatseekError = io.into();
        assert!(matches!(err, CatseekError::Io(_)));
        assert!(err.to_string().contains("no interpreter"));
    }
}
