/// DER body of 1.2.840.113554.1.2.2
pub const KERBEROS_OID: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02];
/// DER body of 1.3.6.1.4.1.311.2.2.10
pub const NTLM_OID: &[u8] = &[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x02, 0x0a];
/// DER body of 1.3.6.1.5.5.2
pub const SPNEGO_OID: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x02];

/// The mechanism a Negotiate handshake settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mechanism {
    Kerberos,
    /// The fallback when Kerberos isn't available
    Ntlm,
    /// Negotiation wasn't resolved to an inner mechanism
    Spnego,
}
impl Mechanism {
    pub fn from_oid(oid: &[u8]) -> Option<Self> {
        match oid {
            KERBEROS_OID => Some(Self::Kerberos),
            NTLM_OID => Some(Self::Ntlm),
            SPNEGO_OID => Some(Self::Spnego),
            _ => None,
        }
    }
    /// Maps SSPI security package names
    pub fn from_package_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("Kerberos") {
            Some(Self::Kerberos)
        } else if name.eq_ignore_ascii_case("NTLM") {
            Some(Self::Ntlm)
        } else if name.eq_ignore_ascii_case("Negotiate") {
            Some(Self::Spnego)
        } else {
            None
        }
    }
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Ntlm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_oids() {
        assert_eq!(Mechanism::from_oid(KERBEROS_OID), Some(Mechanism::Kerberos));
        assert_eq!(Mechanism::from_oid(NTLM_OID), Some(Mechanism::Ntlm));
        assert_eq!(Mechanism::from_oid(SPNEGO_OID), Some(Mechanism::Spnego));
        // legacy krb5 OID 1.3.5.1.5.2 is not recognised
        assert_eq!(Mechanism::from_oid(&[0x2b, 0x05, 0x01, 0x05, 0x02]), None);
    }

    #[test]
    fn package_names_ignore_case() {
        assert_eq!(Mechanism::from_package_name("ntlm"), Some(Mechanism::Ntlm));
        assert_eq!(Mechanism::from_package_name("Kerberos"), Some(Mechanism::Kerberos));
        assert_eq!(Mechanism::from_package_name("Negotiate"), Some(Mechanism::Spnego));
        assert_eq!(Mechanism::from_package_name("Schannel"), None);
    }

    #[test]
    fn only_ntlm_is_fallback() {
        assert!(Mechanism::Ntlm.is_fallback());
        assert!(!Mechanism::Kerberos.is_fallback());
        assert!(!Mechanism::Spnego.is_fallback());
    }
}
