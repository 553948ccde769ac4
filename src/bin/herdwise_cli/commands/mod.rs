// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Re-exports command modules for herdwise-cli
// ABOUTME: Provides access to breed listing, calculation, and report commands

pub mod breeds;
pub mod calculate;
pub mod report;
