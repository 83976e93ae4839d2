/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Canonical field-value placeholders and format helpers.

pub const NONE: &str = "none";

/// Delivery-subject field value for consumer snapshots that may not carry
/// one.
pub fn deliver_subject_or_none(deliver_subject: Option<&str>) -> &str {
    deliver_subject.unwrap_or(NONE)
}
