// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser test suite: structural productions, kwargs, quoting, errors.

mod helpers;

mod commands;
mod errors;
mod kwargs;
mod proptests;
mod quoting;
