//! Seam to the external provisioning engine.
//!
//! The builder never provisions anything itself; it hands a rendered
//! [`Template`] across this trait. Engine failures are opaque to this
//! crate and surface verbatim as
//! [`SiteStackError::Provisioning`](crate::SiteStackError::Provisioning).

use sitestack_model::Template;

use crate::error::SiteStackResult;

/// Consumer of a rendered template.
///
/// Implementations decide what "apply" means: writing the document to
/// disk, handing it to a deployment service, or recording it for tests.
/// The builder makes no assumptions beyond the error contract.
pub trait ProvisioningEngine {
    /// Hand the template to the engine.
    ///
    /// # Errors
    /// Returns [`SiteStackError::Provisioning`](crate::SiteStackError::Provisioning)
    /// with the engine's failure text, verbatim.
    fn apply(&mut self, template: &Template) -> SiteStackResult<()>;
}
