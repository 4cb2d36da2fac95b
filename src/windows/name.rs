use std::fmt::Display;

use windows::core::PCWSTR;

use super::Error;
use crate::NativeHandle;

/// A zero-terminated UTF-16 SPN for `InitializeSecurityContextW`.
///
/// SSPI has no name objects, so releasing this only frees the buffer.
#[derive(Debug)]
pub struct TargetName(Box<[u16]>);
impl TargetName {
    pub fn new(principal: &str) -> Result<Self, Error> {
        to_wide(principal).map(Self)
    }
    pub fn as_pcwstr(&self) -> PCWSTR {
        PCWSTR(self.0.as_ptr())
    }
}
impl NativeHandle for TargetName {}
impl Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let without_nul = &self.0[..self.0.len() - 1];
        f.write_str(&String::from_utf16_lossy(without_nul))
    }
}

pub(crate) fn to_wide(s: &str) -> Result<Box<[u16]>, Error> {
    if s.contains('\0') {
        return Err(Error::NulInTargetName);
    }
    Ok(s.encode_utf16().chain(std::iter::once(0)).collect())
}
