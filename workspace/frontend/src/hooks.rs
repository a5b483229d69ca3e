//! Page-level data-fetch controllers.
//!
//! Each data page owns exactly one of these hooks. The shared shape: a
//! [`common::FetchState`] handle plus a `refetch` callback, re-fired through
//! `use_effect_with` whenever the page's filter inputs change. Responses are
//! gated by a [`common::RequestSequence`] so a slow response for an old
//! filter can never overwrite newer data.

pub mod analysis;
pub mod dashboard;
pub mod login;
pub mod sentiment;
