use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("start marker [JSON_START] not found")]
    MissingStartMarker,

    #[error("end marker [JSON_END] not found")]
    MissingEndMarker,

    #[error("end marker [JSON_END] appears before start marker [JSON_START]")]
    MarkersOutOfOrder,

    #[error("invalid json between markers: {0}")]
    InvalidJson(String),

    #[error("structured data must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}
