use crate::Mechanism;

/// A native handle owned by a [`NegotiationContext`](crate::NegotiationContext).
///
/// Implementors release their native resource in `Drop`.
pub trait NativeHandle {
    /// Whether the handle is unusable (e.g. a zeroed SSPI handle).
    ///
    /// Handles backed by a non-null pointer are valid by construction.
    fn is_invalid(&self) -> bool {
        false
    }
}

/// The native security library, as seen by a negotiation context.
pub trait SecurityProvider {
    type Credential: NativeHandle;
    type Name: NativeHandle;
    type Context: NativeHandle;
    type Error: std::error::Error + 'static;

    /// Acquire the default acceptor credential.
    fn acquire_acceptor(&self) -> Result<Self::Credential, Self::Error>;
    /// Resolve a target principal into a name handle.
    fn import_target(&self, principal: &str) -> Result<Self::Name, Self::Error>;
    /// Inspect a security context for the mechanism it ended up using.
    ///
    /// `None` if the provider can't tell, or the context isn't established yet.
    fn negotiated_mechanism(&self, _context: &Self::Context) -> Option<Mechanism> {
        None
    }
}
