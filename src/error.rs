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

//! Error types for ticket purchases and price loading.

use crate::base::TicketType;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`PurchaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request breaks a booking rule. No service was called.
    Validation,
    /// The payment or reservation service failed.
    Processing,
    /// The purchase could not be computed. No service was called.
    Internal,
}

/// Failure reported by a payment or reservation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ticket purchase errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// No adult ticket with a positive count in the booking
    #[error(
        "Invalid tickets request: At least one adult ticket must be purchased as part of booking."
    )]
    NoAdultTicket,

    /// More tickets than a single booking allows
    #[error(
        "Your request is not processed, maximum allowed 25 tickets in a single booking, please request with less number of tickets."
    )]
    TooManyTickets { requested: u64 },

    /// Payment service rejected the charge
    #[error("An error occurred while processing the ticket purchase: {0}")]
    Payment(#[source] ServiceError),

    /// Reservation service failed after payment was taken
    #[error("An error occurred while processing the ticket purchase: {0}")]
    Reservation(#[source] ServiceError),

    /// Total amount does not fit in a `u64`
    #[error("ticket purchase amount overflowed")]
    AmountOverflow,
}

impl PurchaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoAdultTicket | Self::TooManyTickets { .. } => ErrorKind::Validation,
            Self::Payment(_) | Self::Reservation(_) => ErrorKind::Processing,
            Self::AmountOverflow => ErrorKind::Internal,
        }
    }
}

/// Price table loading errors. Fatal at start-up.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Unable to find ticket-prices details at '{}'", path.display())]
    MissingResource { path: PathBuf },

    #[error("Error loading ticket prices: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error loading ticket prices: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid price '{value}' for ticket type {ticket_type}")]
    InvalidPrice {
        ticket_type: TicketType,
        value: String,
    },
}
