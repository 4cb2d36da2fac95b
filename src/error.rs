/// Failures of a [`NegotiationContext`](crate::NegotiationContext), generic over the provider's native error.
#[derive(Debug, thiserror::Error)]
pub enum NegotiationError<E: std::error::Error + 'static> {
    #[error("failed to import target name {principal:?}: {source}")]
    TargetName {
        principal: String,
        #[source]
        source: E,
    },
    #[error("failed to acquire acceptor credential: {0}")]
    AcceptorCredential(#[source] E),
    #[error("security context was already attached")]
    ContextAlreadySet,
    #[error("negotiation context was disposed")]
    Disposed,
}
