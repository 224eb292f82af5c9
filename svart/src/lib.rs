#[cfg(feature = "core")]
#[doc(inline)]
pub use svart_core as core;

#[cfg(feature = "compact")]
#[doc(inline)]
pub use svart_compact as compact;
