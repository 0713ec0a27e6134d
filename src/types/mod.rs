//! Data model types for allow-list configuration and authorization queries.
//!
//! The pipeline is parse -> normalize -> query: a [`RawConfig`] (with its
//! [`Provenance`]) is parsed under an [`IdScheme`] into an immutable
//! [`AllowListPolicy`], which answers membership queries with a [`Decision`].
//! The [`ParseReport`] captures what the parser accepted and skipped.

mod decision;
mod policy;
mod posture;
mod principal_id;
mod provenance;
mod raw_config;
mod report;
mod scheme;

pub use decision::{AllowReason, Decision, DenyReason};
pub use policy::AllowListPolicy;
pub use posture::DefaultPosture;
pub use principal_id::PrincipalId;
pub use provenance::Provenance;
pub use raw_config::{ALLOWED_USER_IDS_VAR, RawConfig};
pub use report::{MalformedEntry, ParseReport};
pub use scheme::IdScheme;
