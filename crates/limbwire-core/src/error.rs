use primitive_types::U256;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Value out of range: {digits} hex digits exceed the 256-bit domain")]
    ValueOutOfRange { digits: usize },

    #[error("Invalid hex value: {0}")]
    InvalidHex(String),

    #[error("Leaf is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Leaf index {index} out of range for {len} leaves")]
    IndexOutOfRange { index: U256, len: usize },

    #[error("No leaf decoded at position {position}")]
    MissingLeaf { position: usize },

    #[error("Wire decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
