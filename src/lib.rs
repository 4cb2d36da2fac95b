//! Ownership of the native resources behind a Negotiate (SPNEGO) handshake.
//!
//! A [`NegotiationContext`] binds a borrowed base credential to the handles a
//! token-exchange driver needs: a lazily acquired acceptor credential, an
//! optional target name and the security context produced by the exchange.
//! It releases them in a fixed order and records whether the handshake fell
//! back to NTLM.
//!
//! Native handles come from a [`SecurityProvider`]. With the `gssapi` feature,
//! [`unix::GssProvider`] talks to the system GSSAPI library; on Windows,
//! [`windows::SspiProvider`] uses SSPI.

mod context_handle;
mod error;
pub mod mechanism;
pub mod provider;
pub mod settings;

#[cfg(all(unix, feature = "gssapi"))]
pub mod unix;
#[cfg(windows)]
pub mod windows;

pub use context_handle::NegotiationContext;
pub use error::NegotiationError;
pub use mechanism::Mechanism;
pub use provider::{NativeHandle, SecurityProvider};
pub use settings::{ContextSettings, TargetNameForm};
