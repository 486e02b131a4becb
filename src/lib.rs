// SPDX-License-Identifier: MPL-2.0
//! `iced_review` is an image-review gallery built with the Iced GUI framework.
//!
//! It steps through an ordered catalog of reviewed images with the keyboard,
//! the mouse or touch, reveals each review in a collapsible panel, and
//! animates the hand-off between the thumbnail grid and the detail view.
//!
//! The navigation core in [`gallery`] is free of rendering and driven with
//! explicit time through [`scheduler`], so it can be tested without a window.

#![doc(html_root_url = "https://docs.rs/iced_review/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod scheduler;
pub mod ui;
