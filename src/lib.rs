pub mod adaptors;
pub mod chained;
pub mod config;
pub mod error;
pub mod recipes;
pub mod router;
pub mod sentinel;
pub mod statistics;

// Re-export the chaining surface at the crate root
pub use chained::{Cached, ChainedSequence, IntoChained};
pub use config::{forwarding_mode, ChainConfig, ForwardingMode, FORWARDING_ENV_VAR};
pub use error::{ChainError, ChainResult};
pub use router::{route, At, Call, CallMut, Splice};
pub use sentinel::{drop_omitted, Arg};
