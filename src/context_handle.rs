use once_cell::unsync::OnceCell;

use crate::{Mechanism, NativeHandle, NegotiationError, SecurityProvider};

/// The native state of one Negotiate handshake attempt.
///
/// Owns the acceptor credential, the target name and the security context, and
/// releases them in that reverse order: context, then name, then credential.
/// The base credential is only borrowed and is never released here.
///
/// Dropping the context disposes it.
pub struct NegotiationContext<'cred, P: SecurityProvider> {
    provider: P,
    base_credential: &'cred P::Credential,
    acceptor_credential: OnceCell<P::Credential>,
    target_name: Option<P::Name>,
    context: Option<P::Context>,
    is_fallback_mechanism: bool,
    disposed: bool,
}
impl<'cred, P: SecurityProvider> NegotiationContext<'cred, P> {
    /// Bind to a base credential. Nothing native is acquired yet.
    ///
    /// # Panics
    ///
    /// If `base_credential` is an invalid handle.
    pub fn new(provider: P, base_credential: &'cred P::Credential) -> Self {
        assert!(
            !base_credential.is_invalid(),
            "invalid base credential passed to NegotiationContext"
        );
        Self {
            provider,
            base_credential,
            acceptor_credential: OnceCell::new(),
            target_name: None,
            context: None,
            is_fallback_mechanism: false,
            disposed: false,
        }
    }
    /// Bind to a base credential and resolve the principal to authenticate to.
    ///
    /// An empty `target_principal` gives an acceptor-side context without a target name.
    /// If the name can't be resolved, the partially built context is disposed before the error is returned.
    pub fn with_target(
        provider: P,
        base_credential: &'cred P::Credential,
        target_principal: &str,
    ) -> Result<Self, NegotiationError<P::Error>> {
        let mut ctx = Self::new(provider, base_credential);
        if target_principal.is_empty() {
            return Ok(ctx);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target_principal, "Importing target name");
        match ctx.provider.import_target(target_principal) {
            Ok(name) => {
                ctx.target_name = Some(name);
                Ok(ctx)
            }
            Err(source) => {
                ctx.dispose();
                Err(NegotiationError::TargetName {
                    principal: target_principal.to_owned(),
                    source,
                })
            }
        }
    }
    pub fn base_credential(&self) -> &'cred P::Credential {
        self.base_credential
    }
    /// The acceptor credential, acquired from the default identity on first access
    pub fn acceptor_credential(&self) -> Result<&P::Credential, NegotiationError<P::Error>> {
        if self.disposed {
            return Err(NegotiationError::Disposed);
        }
        self.acceptor_credential.get_or_try_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("Acquiring acceptor credential");
            self.provider
                .acquire_acceptor()
                .map_err(NegotiationError::AcceptorCredential)
        })
    }
    /// `None` for acceptor-side contexts
    pub fn target_name(&self) -> Option<&P::Name> {
        self.target_name.as_ref()
    }
    pub fn security_context(&self) -> Option<&P::Context> {
        self.context.as_ref()
    }
    pub fn is_fallback_mechanism(&self) -> bool {
        self.is_fallback_mechanism
    }
    /// Derived from the fallback flag alone: `Kerberos` until NTLM was recorded,
    /// including on a context that was never classified.
    pub fn negotiated_mechanism(&self) -> Mechanism {
        if self.is_fallback_mechanism {
            Mechanism::Ntlm
        } else {
            Mechanism::Kerberos
        }
    }
    /// Take ownership of the security context produced by the token exchange.
    ///
    /// A context can only be attached once. A second one is rejected and released,
    /// the attached one stays in place.
    ///
    /// # Panics
    ///
    /// If `context` is an invalid handle.
    pub fn set_security_context(&mut self, context: P::Context) -> Result<(), NegotiationError<P::Error>> {
        assert!(!context.is_invalid(), "invalid context passed to NegotiationContext");
        if self.disposed {
            return Err(NegotiationError::Disposed);
        }
        if self.context.is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejecting second security context");
            return Err(NegotiationError::ContextAlreadySet);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("Security context attached");
        self.context = Some(context);
        Ok(())
    }
    /// Record whether the handshake ended up on the fallback mechanism (NTLM)
    pub fn set_authentication_package(&mut self, is_fallback: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(is_fallback, "Recording negotiated authentication package");
        self.is_fallback_mechanism = is_fallback;
    }
    /// Ask the provider which mechanism the attached context used and record it.
    ///
    /// Returns `None` and leaves the flag alone if there is no context or the provider can't tell.
    /// A context still reporting SPNEGO hasn't settled on an inner mechanism and counts as unknown.
    pub fn classify_mechanism(&mut self) -> Option<Mechanism> {
        let mechanism = self
            .context
            .as_ref()
            .and_then(|ctx| self.provider.negotiated_mechanism(ctx))
            .filter(|mechanism| *mechanism != Mechanism::Spnego)?;
        self.set_authentication_package(mechanism.is_fallback());
        Some(mechanism)
    }
    /// Release the owned handles: security context, target name, acceptor credential.
    ///
    /// Released slots are left empty, calling this again does nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
        if let Some(context) = self.context.take() {
            #[cfg(feature = "tracing")]
            tracing::trace!("Releasing security context");
            drop(context);
        }
        if let Some(name) = self.target_name.take() {
            #[cfg(feature = "tracing")]
            tracing::trace!("Releasing target name");
            drop(name);
        }
        if let Some(cred) = self.acceptor_credential.take() {
            #[cfg(feature = "tracing")]
            tracing::trace!("Releasing acceptor credential");
            drop(cred);
        }
    }
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
impl<P: SecurityProvider> Drop for NegotiationContext<'_, P> {
    fn drop(&mut self) {
        self.dispose();
    }
}
