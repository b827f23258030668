mod diff;
mod env;
mod format;
mod metadata;
mod parameters;
mod pricing;
mod provider;
mod service;
mod usage;

pub use diff::*;
pub use env::*;
pub use format::*;
pub use metadata::*;
pub use parameters::*;
pub use pricing::*;
pub use provider::*;
pub use service::*;
pub use usage::*;
