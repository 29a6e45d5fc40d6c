use sheetmap_core::usecases::Error as UsecaseError;
use sheetmap_entities::reference::ReferenceParseError;
use thiserror::Error;

/// Everything that can go wrong when submitting a reference.
///
/// The messages are meant for humans and distinguish
/// the stage in which a run failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("incorrect reference")]
    InvalidReference(#[from] ReferenceParseError),
    #[error("failed to get data from the server: {0:#}")]
    RowRetrieval(anyhow::Error),
    #[error("failed to parse data from the server: row #{index}: {reason}")]
    MalformedRow { index: usize, reason: String },
    #[error("failed to resolve address: {address}")]
    GeocodingExhausted { address: String },
    #[error("empty reference")]
    EmptyReference,
    #[error("already loading")]
    Busy,
}

impl From<UsecaseError> for PipelineError {
    fn from(err: UsecaseError) -> Self {
        match err {
            UsecaseError::MalformedRow { index, reason } => Self::MalformedRow { index, reason },
            UsecaseError::GeocodingExhausted { address } => Self::GeocodingExhausted { address },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishable_messages() {
        let messages = [
            PipelineError::from(ReferenceParseError).to_string(),
            PipelineError::RowRetrieval(anyhow::anyhow!("timeout")).to_string(),
            PipelineError::from(UsecaseError::MalformedRow {
                index: 2,
                reason: "empty name".into(),
            })
            .to_string(),
            PipelineError::from(UsecaseError::GeocodingExhausted {
                address: "nowhere".into(),
            })
            .to_string(),
        ];
        assert_eq!(messages[0], "incorrect reference");
        assert_eq!(messages[1], "failed to get data from the server: timeout");
        assert_eq!(
            messages[2],
            "failed to parse data from the server: row #2: empty name"
        );
        assert_eq!(messages[3], "failed to resolve address: nowhere");
    }
}
