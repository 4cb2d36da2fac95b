use std::{ffi::c_void, fmt::Display, ptr::NonNull};

use libgssapi_sys::{
    gss_OID, gss_buffer_desc_struct, gss_buffer_t, gss_display_name, gss_import_name, gss_name_struct,
    gss_release_buffer, gss_release_name,
};

use super::Error;
use crate::NativeHandle;

/// An imported GSSAPI name, released on drop
pub struct NameHandle {
    name: NonNull<gss_name_struct>,
}
unsafe impl Send for NameHandle {}
unsafe impl Sync for NameHandle {}
impl NameHandle {
    /// # Safety
    ///
    /// `oid` has to be null or point to a valid name type OID for the lifetime of the call
    pub unsafe fn import(principal: &str, oid: gss_OID) -> Result<Self, Error> {
        let mut minor = 0;
        let mut namebuffer = gss_buffer_desc_struct {
            length: principal.len(),
            value: principal.as_ptr() as *mut c_void,
        };
        let mut name = std::ptr::null_mut::<gss_name_struct>();
        let major = unsafe { gss_import_name(&mut minor, &mut namebuffer as gss_buffer_t, oid, &mut name) };
        if let Some(error) = Error::from_status(major, minor) {
            return Err(error);
        }
        let Some(name) = NonNull::new(name) else {
            return Err(Error::failure());
        };
        Ok(NameHandle { name })
    }
    /// Raw handle for passing to `gss_init_sec_context`
    pub fn as_ptr(&self) -> *mut gss_name_struct {
        self.name.as_ptr()
    }
}
impl NativeHandle for NameHandle {}
impl Drop for NameHandle {
    fn drop(&mut self) {
        let mut _s = 0;
        unsafe { gss_release_name(&mut _s, &mut NonNull::as_ptr(self.name)) };
    }
}
impl Display for NameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut minor = 0;
        let mut buffer = gss_buffer_desc_struct {
            length: 0,
            value: std::ptr::null_mut(),
        };
        let major = unsafe {
            gss_display_name(
                &mut minor,
                NonNull::as_ptr(self.name),
                &mut buffer,
                std::ptr::null_mut(),
            )
        };
        if Error::from_status(major, minor).is_some() || buffer.value.is_null() {
            return Ok(());
        }
        let sl = unsafe { std::slice::from_raw_parts(buffer.value as *const u8, buffer.length) };
        let result = f.write_str(&String::from_utf8_lossy(sl));
        let mut _min = 0;
        let _maj = unsafe { gss_release_buffer(&mut _min, &mut buffer) };
        result
    }
}
