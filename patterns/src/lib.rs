//! Builder, state and strategy pattern demonstrations.
//!
//! - [`builder`] assembles a [`ServerConfig`] from defaults.
//! - [`state`] walks a [`Document`] through its review workflow.
//! - [`strategy`] prices a [`ShoppingCart`] with a swappable discount.

pub mod builder;
pub use builder::{ServerConfig, ServerConfigBuilder};

pub mod state;
pub use state::{Document, DocumentState};

pub mod strategy;
pub use strategy::{
    Bill, BillingStrategy, NoDiscount, PremiumDiscount, ShoppingCart, StandardDiscount,
};

pub mod result;
pub use result::{PatternError, PatternResult};
