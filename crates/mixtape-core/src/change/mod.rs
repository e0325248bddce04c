//! Change interpretation
//!
//! Maps patch records (`op`, `path`, `value`) onto store commands. Each
//! change is classified and applied on its own; a failing change is
//! reported as skipped and never aborts the ones after it.

pub mod interpreter;
pub mod path;
pub mod validator;

pub use interpreter::{apply_change, interpret, ChangeOp, ChangeOutcome};
pub use path::ChangePath;
pub use validator::{AcceptAnyPayload, PayloadValidator, PlaylistSchema};
