use std::{ffi::c_void, ops::Deref};

use windows::Win32::Security::{
    Authentication::Identity::{
        DeleteSecurityContext, FreeContextBuffer, QueryContextAttributesW, SecPkgContext_PackageInfoW,
        SECPKG_ATTR_PACKAGE_INFO,
    },
    Credentials::SecHandle,
};

use super::Error;
use crate::NativeHandle;

/// An SSPI security context, deleted on drop
///
/// Only built from a handle the token exchange filled in, there is no zeroed default:
///
/// ```compile_fail
/// let _ = kenobi_nego::windows::ContextHandle::default();
/// ```
#[derive(Debug)]
pub struct ContextHandle(SecHandle);
impl ContextHandle {
    /// Take ownership of a context filled in by `AcceptSecurityContext`/`InitializeSecurityContextW`
    pub fn new(handle: SecHandle) -> Self {
        Self(handle)
    }
    /// Name of the security package that ended up serving the context, e.g. `Kerberos` or `NTLM`
    pub fn package_name(&self) -> Result<String, Error> {
        let mut info = SecPkgContext_PackageInfoW::default();
        unsafe {
            QueryContextAttributesW(
                &self.0,
                SECPKG_ATTR_PACKAGE_INFO,
                std::ptr::from_mut(&mut info) as *mut c_void,
            )
        }?;
        let Some(package) = (unsafe { info.PackageInfo.as_ref() }) else {
            return Err(Error::InvalidPackageName);
        };
        let name = unsafe { package.Name.to_string() }.map_err(|_| Error::InvalidPackageName);
        let _ = unsafe { FreeContextBuffer(info.PackageInfo as *mut c_void) };
        name
    }
}
impl Deref for ContextHandle {
    type Target = SecHandle;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl NativeHandle for ContextHandle {
    fn is_invalid(&self) -> bool {
        self.0.dwLower == 0 && self.0.dwUpper == 0
    }
}
impl Drop for ContextHandle {
    fn drop(&mut self) {
        let _ = unsafe { DeleteSecurityContext(&self.0) };
    }
}
