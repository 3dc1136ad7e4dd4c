// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod accessor;
mod column;
mod dataset;
mod error;
mod select;

pub use accessor::DatasetAccessor;
pub use column::Column;
pub use dataset::{Dataset, DatasetBuilder};
pub use error::DatasetError;
pub use select::Predicate;
