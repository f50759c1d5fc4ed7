// ABOUTME: Core types and errors for the HealthOS clinical intelligence platform
// ABOUTME: Foundation crate with domain models, status palettes, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

#![deny(unsafe_code)]

//! # HealthOS Core
//!
//! Foundation crate providing shared types for the HealthOS clinical
//! intelligence engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **models**: Domain documents (`HealthProfile`, `AvatarState`,
//!   `TriageResult`) and their enumerations

/// Unified error handling system for validation and parsing failures
pub mod errors;

/// Domain documents and enumerations (profile, avatar state, triage)
pub mod models;
