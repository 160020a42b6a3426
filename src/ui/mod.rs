// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`hero`] - Landing section with the deferred decorative scene
//! - [`gallery`] - Filterable project grid with a detail view
//! - [`about`] - Tabbed skills/experience/education panel and resume export
//! - [`contact`] - Contact form with a simulated submission lifecycle
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with section links and the theme switch
//! - [`footer`] - Quick links and the copyright line
//! - [`scene`] - Deferred wireframe scene (gate, geometry, canvas renderer)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod scene;
pub mod styles;
pub mod theming;
