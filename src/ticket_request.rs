// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Booking line items.

use crate::base::{TicketType, UnknownTicketType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A number of tickets of a single type within one booking.
///
/// Several requests for the same type in one booking add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketRequest {
    pub const fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.ticket_type, self.count)
    }
}

/// Error returned when parsing a `TYPE=COUNT` line item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTicketRequestError {
    #[error("expected TYPE=COUNT, got '{0}'")]
    MissingSeparator(String),

    #[error(transparent)]
    TicketType(#[from] UnknownTicketType),

    #[error("invalid ticket count: {0}")]
    Count(#[from] ParseIntError),
}

impl FromStr for TicketRequest {
    type Err = ParseTicketRequestError;

    /// Parses `ADULT=2` style arguments. The type name is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ticket_type, count) = s
            .split_once('=')
            .ok_or_else(|| ParseTicketRequestError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(ticket_type.parse()?, count.trim().parse()?))
    }
}
