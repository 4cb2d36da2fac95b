use std::ptr::NonNull;

use libgssapi_sys::{gss_OID, gss_ctx_id_struct, gss_delete_sec_context, gss_inquire_context};

use super::Error;
use crate::{Mechanism, NativeHandle};

/// A GSSAPI security context, deleted on drop
pub struct ContextHandle(NonNull<gss_ctx_id_struct>);
unsafe impl Send for ContextHandle {}
impl ContextHandle {
    pub fn new(ctx: NonNull<gss_ctx_id_struct>) -> Self {
        Self(ctx)
    }
    /// Take ownership of a context returned by `gss_init_sec_context`/`gss_accept_sec_context`.
    ///
    /// `None` for `GSS_C_NO_CONTEXT`.
    ///
    /// # Safety
    ///
    /// `ctx` has to be a context handle nobody else will delete
    pub unsafe fn from_raw(ctx: *mut gss_ctx_id_struct) -> Option<Self> {
        NonNull::new(ctx).map(Self)
    }
    pub fn as_ptr(&self) -> *mut gss_ctx_id_struct {
        self.0.as_ptr()
    }
    /// The actual mechanism of the context, `Ok(None)` if it isn't one this crate knows
    pub fn mechanism(&self) -> Result<Option<Mechanism>, Error> {
        let mut minor = 0;
        let mut mech_type: gss_OID = std::ptr::null_mut();
        let major = unsafe {
            gss_inquire_context(
                &mut minor,
                self.0.as_ptr(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                &mut mech_type,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        if let Some(error) = Error::from_status(major, minor) {
            return Err(error);
        }
        // The returned OID is static storage of the library and must not be released
        let Some(oid) = (unsafe { mech_type.as_ref() }) else {
            return Ok(None);
        };
        if oid.elements.is_null() {
            return Ok(None);
        }
        let bytes = unsafe { std::slice::from_raw_parts(oid.elements as *const u8, oid.length as usize) };
        Ok(Mechanism::from_oid(bytes))
    }
}
impl NativeHandle for ContextHandle {}
impl Drop for ContextHandle {
    fn drop(&mut self) {
        let mut _s = 0;
        unsafe { gss_delete_sec_context(&mut _s, &mut NonNull::as_ptr(self.0), std::ptr::null_mut()) };
    }
}
