// src/lib.rs
//! Allow-list parsing and authorization queries for principal identifiers.
//!
//! Converts a delimited configuration string (conventionally the
//! `ALLOWED_USER_IDS` environment variable) into a validated, de-duplicated
//! set of canonical identifiers, and answers membership queries. Parsing is
//! fail-soft per entry: a corrupt token is skipped and reported, never fatal.
//! The default posture is fail-closed: an empty set denies everyone.
//!
//! ```rust
//! use allowlist_core::AllowListEngine;
//!
//! let engine = AllowListEngine::new_from_str("123,456, 789");
//! assert!(engine.is_allowed("456").unwrap());
//! assert!(!engine.is_allowed("999").unwrap());
//! ```

pub use engine::AllowListEngine;
pub use error::PolicyError;
pub use loader::{ParsedAllowList, parse_allow_list};
pub use token_pattern::set_token_pattern;
pub use types::{
    ALLOWED_USER_IDS_VAR, AllowListPolicy, AllowReason, Decision, DefaultPosture, DenyReason,
    IdScheme, MalformedEntry, ParseReport, PrincipalId, Provenance, RawConfig,
};

mod engine;
mod error;
mod loader;
pub mod metrics;
mod token_pattern;
mod types;
