//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into mutate → recompute → persist units.
//! - Keep UI shells decoupled from storage and derivation details.

pub mod app_service;
