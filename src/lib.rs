//! ajaxctl - a terminal client for JSON action endpoints
//!
//! Server-rendered web applications commonly expose "action" endpoints that
//! answer with `{"success": bool, "message": "...", "redirect": "..."}`.
//! This library implements the client side of that convention: confirmation
//! before destructive requests, a busy indicator for the request lifetime,
//! success and error notifications, and the follow-up (callback, redirect or
//! reload) once an action succeeded. File downloads and the persisted
//! light/dark theme preference round it off.
//!
//! # Modules
//!
//! * [`client`] - The action client and its result types
//! * [`transport`] - HTTP transport abstraction
//! * [`ui`] - Capability traits, UI state and terminal implementations
//! * [`storage`] - Client-local preference store
//! * [`theme`] - Theme preference handling
//! * [`config`] - Application configuration management

/// Action client for JSON action endpoints
pub mod client;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for the command-line tool
pub mod logger;

/// Client-local preference storage
pub mod storage;

/// Light/dark theme preference
pub mod theme;

/// Transport layer carrying action requests
pub mod transport;

/// User-facing capabilities and shared UI state
pub mod ui;

pub use client::{ActionOutcome, ActionResult, AjaxActionClient, DownloadKind, Form};
pub use theme::Theme;
pub use ui::{Capabilities, UiState};
