//! User Agent (UA) catalog selection and interpretation.
//!
//! This crate provides an interpreter ([`UserAgent::new`]) for User Agent
//! strings, as well as a ranked [`catalog`] of popular User Agents from
//! which strings can be selected by popularity or at random, optionally
//! narrowed down with a [`UserAgentFilter`](catalog::UserAgentFilter).
//!
//! The interpreter can be used to know what UA is connecting to a server,
//! while the catalog is typically used on the client side to advertise
//! a realistic UA, be it the most popular one or a random pick.
//!
//! # Remarks
//!
//! We interpret only the majority User Agents, and we do not interpret all
//! User Agents:
//!
//! - Only [`Edge`](BrowserKind::Edge), [`Chrome`](BrowserKind::Chrome),
//!   [`Firefox`](BrowserKind::Firefox) and [`Safari`](BrowserKind::Safari)
//!   are recognised as browsers, anything else reports
//!   [`Unknown`](BrowserKind::Unknown);
//! - The only [`Platform`]s recognised are [`Windows`](Platform::Windows),
//!   [`MacOS`](Platform::MacOS), [`Linux`](Platform::Linux),
//!   [`Android`](Platform::Android), [`iOS`](Platform::IOS) and
//!   [`Kindle`](Platform::Kindle); everything else is bucketed as
//!   [`Other`](Platform::Other).
//!
//! Interpretation is total: every input string, however malformed, yields
//! a result. Unmatched strings report platform [`Other`](Platform::Other)
//! and browser [`Unknown`](BrowserKind::Unknown), never an error.
//!
//! Browser versions are reported verbatim as found in the UA string
//! (e.g. `91.0.4472.124` for `Chrome/91.0.4472.124`), operating system
//! versions are normalised to dotted form (e.g. `10.15.7` for
//! `Mac OS X 10_15_7`).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod str;

mod ua;
pub use ua::*;

pub mod catalog;
