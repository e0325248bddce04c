pub mod validation;

pub use validation::{parse_identifier, validate_identifier};
