//! # vestibule
//!
//! Leptos + WASM client for a local-only registration/login demo. The app
//! keeps the current session in a reactive store provided via context and
//! mirrors it into browser `localStorage`, so a reload resumes whatever
//! session was last established. There is no server: "authentication" is
//! storing a user record locally and flipping a flag.
//!
//! This crate contains pages, components, application state, and the
//! persistence glue. Route guards redirect between `/login` and
//! `/dashboard` based on the stored session.

pub mod app;
pub mod components;
pub mod consts;
pub mod pages;
pub mod state;
pub mod util;
