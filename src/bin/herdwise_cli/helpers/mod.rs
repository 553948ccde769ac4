// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Re-exports helper modules for herdwise-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
