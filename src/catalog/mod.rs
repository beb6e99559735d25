//! Ranked User Agent (UA) catalog and selection.
//!
//! See [`UserAgentCatalog`] for the main catalog type; selection by
//! popularity rank goes through [`UserAgentCatalog::top_user_agent`] and
//! [`UserAgentCatalog::top_n_user_agents`], filtered random selection
//! through [`UserAgentCatalog::random`] with a [`UserAgentFilter`].

mod db;
pub use db::*;

mod filter;
pub use filter::*;

#[cfg(feature = "embed-catalog")]
mod embedded_catalog;
#[cfg(feature = "embed-catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "embed-catalog")))]
pub use embedded_catalog::*;
