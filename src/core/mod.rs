//! Registry core: subscriber storage, handles and locking.
//!
//! Everything a dispatch strategy needs besides its own aggregation rule
//! lives here. The strategies in `events/` wrap one `EventCore` each.
//!
//! Internal modules:
//! - [`config`]: per-event settings ([`EventConfig`]);
//! - [`registry`]: ordered callbacks, tokens, the re-entrant lock, snapshots, teardown;
//! - [`subscription`]: the RAII handle returned by subscribe;
//! - [`source`]: the subscribe-only view handed to outside code.

mod config;
mod registry;
mod source;
mod subscription;

pub use config::EventConfig;
pub use registry::Token;
pub use source::EventSource;
pub use subscription::Subscription;

pub(crate) use registry::EventCore;
