//! SSPI provider.

use windows::core::{w, PCWSTR};

use crate::{settings::ContextSettings, Mechanism, SecurityProvider};

mod context;
mod cred;
mod error;
mod name;

pub use context::ContextHandle;
pub use cred::{Credentials, CredentialsUsage};
pub use error::Error;
pub use name::TargetName;

const NEGOTIATE: PCWSTR = w!("Negotiate");

/// SSPI expects SPNs in `service/host` form, so [`TargetNameForm`](crate::TargetNameForm) doesn't change the import here.
#[derive(Clone, Debug, Default)]
pub struct SspiProvider {
    settings: ContextSettings,
}
impl SspiProvider {
    pub fn new(settings: ContextSettings) -> Self {
        Self { settings }
    }
    pub fn settings(&self) -> &ContextSettings {
        &self.settings
    }
}
impl SecurityProvider for SspiProvider {
    type Credential = Credentials;
    type Name = TargetName;
    type Context = ContextHandle;
    type Error = Error;

    fn acquire_acceptor(&self) -> Result<Credentials, Error> {
        Credentials::acquire(self.settings.acceptor_principal.as_deref(), CredentialsUsage::Inbound)
    }
    fn import_target(&self, principal: &str) -> Result<TargetName, Error> {
        TargetName::new(principal)
    }
    fn negotiated_mechanism(&self, context: &ContextHandle) -> Option<Mechanism> {
        match context.package_name() {
            Ok(package) => Mechanism::from_package_name(&package),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "Could not query security package of context");
                None
            }
        }
    }
}
