// ABOUTME: Error module re-exports from the healthos-core crate
// ABOUTME: Preserves existing import paths while delegating to the foundation crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Error types for the clinical inference engine.

pub use healthos_core::errors::{AppError, AppResult};
