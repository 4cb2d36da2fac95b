use windows::{
    core::PCWSTR,
    Win32::Security::{
        Authentication::Identity::{
            AcquireCredentialsHandleW, FreeCredentialsHandle, SECPKG_CRED, SECPKG_CRED_BOTH, SECPKG_CRED_INBOUND,
            SECPKG_CRED_OUTBOUND,
        },
        Credentials::SecHandle,
    },
};

use super::{name::to_wide, Error, NEGOTIATE};
use crate::NativeHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialsUsage {
    Inbound,
    Outbound,
    Both,
}
impl CredentialsUsage {
    fn to_usage(self) -> SECPKG_CRED {
        match self {
            Self::Inbound => SECPKG_CRED_INBOUND,
            Self::Outbound => SECPKG_CRED_OUTBOUND,
            Self::Both => SECPKG_CRED(SECPKG_CRED_BOTH),
        }
    }
}

/// A Negotiate credentials handle, freed on drop
#[derive(Debug)]
pub struct Credentials {
    handle: SecHandle,
    usage: CredentialsUsage,
}
impl Credentials {
    /// Grab the credentials of `principal`, or of the current security context if `None`
    pub fn acquire(principal: Option<&str>, usage: CredentialsUsage) -> Result<Self, Error> {
        let mut handle = SecHandle::default();
        let mut _valid_until = 0;
        let princ_wide = principal.map(to_wide).transpose()?;
        let princ_ref = princ_wide.as_ref().map_or(std::ptr::null(), |b| b.as_ptr());
        unsafe {
            AcquireCredentialsHandleW(
                // Must be valid UTF16 zero-terminated string or null pointer (if own user is needed)
                PCWSTR(princ_ref),
                NEGOTIATE,
                usage.to_usage(),
                None,
                None,
                None,
                None,
                &mut handle,
                Some(&mut _valid_until),
            )
        }?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?usage, "Acquired SSPI credentials");
        Ok(Self { handle, usage })
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
    /// For `AcceptSecurityContext`/`InitializeSecurityContextW`
    pub fn raw_handle(&self) -> &SecHandle {
        &self.handle
    }
}
impl NativeHandle for Credentials {
    fn is_invalid(&self) -> bool {
        self.handle.dwLower == 0 && self.handle.dwUpper == 0
    }
}
impl Drop for Credentials {
    fn drop(&mut self) {
        let _ = unsafe { FreeCredentialsHandle(&self.handle) };
    }
}
