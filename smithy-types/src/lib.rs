/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire-neutral value types shared by the JSON protocol runtime and the service crates.

pub mod date_time;
mod number;

pub use crate::date_time::DateTime;
pub use crate::number::{Number, TryFromNumberError};
