use std::{
    ptr::NonNull,
    time::{Duration, Instant},
};

use libgssapi_sys::{
    gss_acquire_cred, gss_cred_id_struct, gss_release_cred, GSS_C_ACCEPT, GSS_C_BOTH, GSS_C_INITIATE,
    GSS_C_NT_USER_NAME, _GSS_C_INDEFINITE,
};

use super::{name::NameHandle, Error};
use crate::NativeHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialsUsage {
    Inbound,
    Outbound,
    Both,
}
impl CredentialsUsage {
    fn to_c(self) -> i32 {
        match self {
            Self::Inbound => GSS_C_ACCEPT as i32,
            Self::Outbound => GSS_C_INITIATE as i32,
            Self::Both => GSS_C_BOTH as i32,
        }
    }
}

/// An owned GSSAPI credential, released on drop
pub struct Credentials {
    cred_handle: NonNull<gss_cred_id_struct>,
    usage: CredentialsUsage,
    valid_until: Option<Instant>,
}
// Valid, because Credentials does not expose any mutability and is the sole owner of the underlying memory
unsafe impl Send for Credentials {}
unsafe impl Sync for Credentials {}
impl Credentials {
    /// Grab the default credentials for a given principal (or the default principal of the keytab/ticket cache)
    pub fn acquire(principal: Option<&str>, usage: CredentialsUsage) -> Result<Self, Error> {
        let name = principal
            .map(|p| unsafe { NameHandle::import(p, GSS_C_NT_USER_NAME) })
            .transpose()?;
        let mut minor = 0;
        let mut validity = 0;
        let mut cred_handle = std::ptr::null_mut();
        let major = unsafe {
            gss_acquire_cred(
                &mut minor,
                name.as_ref().map_or(std::ptr::null_mut(), NameHandle::as_ptr),
                _GSS_C_INDEFINITE,
                std::ptr::null_mut(),
                usage.to_c(),
                &mut cred_handle,
                std::ptr::null_mut(),
                &mut validity,
            )
        };
        if let Some(error) = Error::from_status(major, minor) {
            return Err(error);
        }
        let Some(cred_handle) = NonNull::new(cred_handle) else {
            return Err(Error::failure());
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?usage, validity, "Acquired GSSAPI credentials");
        let valid_until =
            (validity != _GSS_C_INDEFINITE).then(|| Instant::now() + Duration::from_secs(validity.into()));
        Ok(Self {
            cred_handle,
            usage,
            valid_until,
        })
    }
    pub fn inbound(principal: Option<&str>) -> Result<Self, Error> {
        Self::acquire(principal, CredentialsUsage::Inbound)
    }
    pub fn outbound(principal: Option<&str>) -> Result<Self, Error> {
        Self::acquire(principal, CredentialsUsage::Outbound)
    }
    pub fn both(principal: Option<&str>) -> Result<Self, Error> {
        Self::acquire(principal, CredentialsUsage::Both)
    }
    pub fn usage(&self) -> CredentialsUsage {
        self.usage
    }
    /// `None` if the credentials don't expire
    pub fn valid_until(&self) -> Option<Instant> {
        self.valid_until
    }
    /// Raw handle for passing to `gss_init_sec_context`/`gss_accept_sec_context`
    pub fn as_ptr(&self) -> *mut gss_cred_id_struct {
        self.cred_handle.as_ptr()
    }
}
impl NativeHandle for Credentials {}
impl Drop for Credentials {
    fn drop(&mut self) {
        let mut _s = 0;
        unsafe {
            gss_release_cred(&mut _s, &mut NonNull::as_ptr(self.cred_handle));
        }
    }
}
