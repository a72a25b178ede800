pub mod error;
pub mod whois;

pub use error::{QuillError, Result};
pub use whois::{
    load, FieldValue, ParserConfig, Record, Registry, RegistryBuilder, Scalar, WhoisParser,
};
