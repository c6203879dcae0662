// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an image carousel component for the Iced GUI framework.
//!
//! The carousel cycles through a fixed list of images with previous/next
//! arrows and position dots, animating each slide change. The crate also
//! ships a small host application that shows images given on the command
//! line, localized with Fluent and configured through `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
