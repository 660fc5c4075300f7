#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NanoIdError {
    #[error("invalid character '{ch}' at position {position} in ID: {id}")]
    InvalidCharacter { id: String, ch: char, position: usize },

    #[error("Failed to convert an instance of {type_name} from \"{id}\"")]
    ConversionFailed { id: String, type_name: &'static str },
}

pub type Result<T> = std::result::Result<T, NanoIdError>;
