use std::borrow::Cow;

/// How a target principal string is handed to the native name import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetNameForm {
    /// `service/host` style SPNs, imported as a host-based service (`service@host`) where the library needs it
    #[default]
    HostBasedService,
    /// A full principal name like `HTTP/host.example.com@EXAMPLE.COM`, imported unchanged
    Principal,
}

#[derive(Clone, Debug, Default)]
pub struct ContextSettings {
    pub target_name_form: TargetNameForm,
    pub acceptor_principal: Option<String>,
}
impl ContextSettings {
    #[must_use]
    pub fn target_name_form(self, target_name_form: TargetNameForm) -> Self {
        Self {
            target_name_form,
            ..self
        }
    }
    /// Accept as a specific principal instead of the default identity of the keytab/current user
    #[must_use]
    pub fn acceptor_principal(self, principal: impl Into<String>) -> Self {
        Self {
            acceptor_principal: Some(principal.into()),
            ..self
        }
    }
}

/// `HTTP/host.example.com` -> `HTTP@host.example.com`
///
/// Only the first separator is replaced; strings without one are returned unchanged.
pub fn hostbased_service_name(spn: &str) -> Cow<'_, str> {
    match spn.split_once('/') {
        Some((service, host)) => Cow::Owned(format!("{service}@{host}")),
        None => Cow::Borrowed(spn),
    }
}
