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

//! Core identifier types for accounts and tickets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the account a booking is charged to.
///
/// Treated as opaque; the payment and reservation services decide what a
/// valid account is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of ticket in a booking.
///
/// Determines the unit price and whether the holder occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Infants sit on an adult's lap and are not given a seat.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Upper-case name used in price resources and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    pub fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`TicketType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket type '{0}'")]
pub struct UnknownTicketType(pub String);

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TicketType::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTicketType(s.to_string()))
    }
}
