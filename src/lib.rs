//! MedLeaf — AI-assisted symptom analysis and medicinal plant
//! identification backend.
//!
//! The pipeline behind every analysis endpoint is the same: compose an
//! ordered conversation ([`prompts`]), deliver it to the completion
//! service ([`gateway`]), then pull a typed result out of the free-text
//! reply ([`extract`]) with a schema-specific fallback when the model
//! answers in prose. Profile, locale and per-category history persist
//! through the file-backed [`store`].

pub mod api;
pub mod config;
pub mod extract;
pub mod gateway;
pub mod models;
pub mod profile_context;
pub mod prompts;
pub mod store;
