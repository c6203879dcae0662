// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the carousel labels.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files, optionally extended from a directory
//! - Runtime language switching
//! - Fallback to `en-US` when no requested locale is available

pub mod fluent;
