//! Resource declaration types for Sitestack.
//!
//! This crate provides the declarative vocabulary shared across the
//! Sitestack workspace: validated identifier newtypes, the enums used in
//! resource declarations, the per-resource property structs, and the
//! template document handed to the external provisioning engine.
//!
//! Nothing here performs any provisioning. Every type is an immutable
//! value record; the `sitestack-core` crate assembles them into a
//! dependency graph and renders the graph to a [`Template`].

mod enums;
mod error;
mod resource;
mod template;
mod types;

pub use enums::{
    AllowedMethods, BucketAccessControl, CertificateValidation, MinimumProtocolVersion,
    RecordType, RemovalPolicy, SslSupportMethod, ViewerProtocolPolicy,
};
pub use error::ModelError;
pub use resource::{
    AliasRecordSpec, BucketSpec, CertificateSpec, ContentUploadSpec, DistributionSpec,
    ErrorResponseSpec, HostedZoneLookup, ResourceKind, ResourceSpec,
};
pub use template::{
    PropertyValue, Template, TemplateOutput, TemplateParameter, TemplateResource,
};
pub use types::{AccountId, AwsRegion, LogicalId};
