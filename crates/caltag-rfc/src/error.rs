use thiserror::Error;

/// XML rendering errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("No prefix registered for namespace `{namespace}` (element `{local_name}`)")]
    UnregisteredNamespace {
        namespace: String,
        local_name: String,
    },

    #[error("Status code {0} has no standard reason phrase")]
    UnknownStatus(u16),

    #[error("Status code {0} is outside 100-999")]
    InvalidStatus(u16),

    #[error("Escape error: {0}")]
    EscapeError(#[from] quick_xml::escape::EscapeError),

    #[error(transparent)]
    CoreError(#[from] caltag_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
