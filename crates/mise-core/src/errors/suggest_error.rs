/// Suggestion subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("candidate source failed: {reason}")]
    SourceFailed { reason: String },

    #[error("unknown station: {station_id}")]
    UnknownStation { station_id: String },
}
