use std::{fmt::Display, num::NonZero};

use libgssapi_sys::{
    gss_buffer_desc_struct, gss_display_status, gss_release_buffer, GSS_C_GSS_CODE, GSS_C_MECH_CODE, _GSS_S_FAILURE,
};

const FAILURE: NonZero<u32> = match NonZero::new(_GSS_S_FAILURE) {
    Some(code) => code,
    None => panic!("GSS_S_FAILURE is zero"),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MechanismErrorCode(NonZero<u32>);
impl MechanismErrorCode {
    pub fn new(val: u32) -> Option<Self> {
        NonZero::new(val).map(Self)
    }
}
impl Display for MechanismErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_status(self.0.into(), GSS_C_MECH_CODE as i32, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GssErrorCode(NonZero<u32>);
impl GssErrorCode {
    pub fn new(val: u32) -> Option<Self> {
        NonZero::new(val).map(Self)
    }
}
impl Display for GssErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_status(self.0.into(), GSS_C_GSS_CODE as i32, f)
    }
}

fn write_status(val: u32, status_type: i32, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut minor_status = 0;
    let mut message_context = 0;
    let mut string = gss_buffer_desc_struct {
        length: 0,
        value: std::ptr::null_mut(),
    };
    unsafe {
        gss_display_status(
            &mut minor_status,
            val,
            status_type,
            std::ptr::null_mut(),
            &mut message_context,
            &mut string,
        )
    };
    let result = if string.value.is_null() {
        write!(f, "GSS status {val:#x}")
    } else {
        let bytes = unsafe { std::slice::from_raw_parts(string.value as *const u8, string.length) };
        f.write_str(&String::from_utf8_lossy(bytes))
    };
    let mut _s = 0;
    unsafe { gss_release_buffer(&mut _s, &mut string) };
    result
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    Gss(GssErrorCode),
    Mechanism(MechanismErrorCode),
}
impl Error {
    pub(crate) fn gss(val: u32) -> Option<Self> {
        GssErrorCode::new(val).map(Error::Gss)
    }
    pub(crate) fn mechanism(val: u32) -> Option<Self> {
        MechanismErrorCode::new(val).map(Error::Mechanism)
    }
    /// A call reported success but handed back a null handle
    pub(crate) fn failure() -> Self {
        Self::Gss(GssErrorCode(FAILURE))
    }
    /// Mechanism errors carry more detail, so they win over the major status
    pub(crate) fn from_status(major: u32, minor: u32) -> Option<Self> {
        if major == 0 {
            return None;
        }
        Self::mechanism(minor).or_else(|| Self::gss(major))
    }
}
impl std::error::Error for Error {}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gss(gss) => gss.fmt(f),
            Self::Mechanism(mech) => mech.fmt(f),
        }
    }
}
impl From<GssErrorCode> for Error {
    fn from(value: GssErrorCode) -> Self {
        Self::Gss(value)
    }
}
impl From<MechanismErrorCode> for Error {
    fn from(value: MechanismErrorCode) -> Self {
        Self::Mechanism(value)
    }
}
