// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio showcase built with the Iced GUI framework.
//!
//! It presents a filterable project gallery, a tabbed about section, and a
//! contact form inside a single themeable window, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod ui;
