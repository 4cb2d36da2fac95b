//! GSSAPI provider.

use libgssapi_sys::{GSS_C_NT_HOSTBASED_SERVICE, GSS_C_NT_USER_NAME};

use crate::{
    settings::{hostbased_service_name, ContextSettings, TargetNameForm},
    Mechanism, SecurityProvider,
};

mod context;
mod cred;
mod error;
mod name;

pub use context::ContextHandle;
pub use cred::{Credentials, CredentialsUsage};
pub use error::{Error, GssErrorCode, MechanismErrorCode};
pub use name::NameHandle;

#[derive(Clone, Debug, Default)]
pub struct GssProvider {
    settings: ContextSettings,
}
impl GssProvider {
    pub fn new(settings: ContextSettings) -> Self {
        Self { settings }
    }
    pub fn settings(&self) -> &ContextSettings {
        &self.settings
    }
}
impl SecurityProvider for GssProvider {
    type Credential = Credentials;
    type Name = NameHandle;
    type Context = ContextHandle;
    type Error = Error;

    fn acquire_acceptor(&self) -> Result<Credentials, Error> {
        Credentials::acquire(self.settings.acceptor_principal.as_deref(), CredentialsUsage::Inbound)
    }
    fn import_target(&self, principal: &str) -> Result<NameHandle, Error> {
        match self.settings.target_name_form {
            TargetNameForm::HostBasedService => unsafe {
                NameHandle::import(&hostbased_service_name(principal), GSS_C_NT_HOSTBASED_SERVICE)
            },
            TargetNameForm::Principal => unsafe { NameHandle::import(principal, GSS_C_NT_USER_NAME) },
        }
    }
    fn negotiated_mechanism(&self, context: &ContextHandle) -> Option<Mechanism> {
        match context.mechanism() {
            Ok(mechanism) => mechanism,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "Could not inquire context mechanism");
                None
            }
        }
    }
}
