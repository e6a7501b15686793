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

//! # Ticket Purchase
//!
//! This library validates ticket bookings against the booking rules, prices
//! them, and hands payment and seat reservation off to external services.
//!
//! ## Core Components
//!
//! - [`PurchaseValidator`]: Checks a booking, takes payment and reserves seats
//! - [`TicketRequest`]: A number of tickets of one [`TicketType`]
//! - [`PriceTable`]: Unit price per ticket type, loaded once at start-up
//! - [`PaymentService`] / [`ReservationService`]: The external services
//! - [`PurchaseError`]: Why a purchase was refused or failed
//!
//! ## Example
//!
//! ```
//! use ticket_purchase_rs::{
//!     AccountId, LoggingPaymentService, LoggingReservationService, PriceTable,
//!     PurchaseError, PurchaseValidator, TicketRequest, TicketType,
//! };
//!
//! let prices = PriceTable::from_reader("ADULT=25\nCHILD=15\nINFANT=0\n".as_bytes()).unwrap();
//! let validator = PurchaseValidator::new(prices, LoggingPaymentService, LoggingReservationService);
//!
//! // Children cannot book on their own
//! let result = validator.purchase(AccountId(1), &[TicketRequest::new(TicketType::Child, 2)]);
//! assert_eq!(result, Err(PurchaseError::NoAdultTicket));
//!
//! let receipt = validator
//!     .purchase(
//!         AccountId(1),
//!         &[
//!             TicketRequest::new(TicketType::Adult, 2),
//!             TicketRequest::new(TicketType::Infant, 1),
//!         ],
//!     )
//!     .unwrap();
//! assert_eq!(receipt.total_amount, 50);
//! assert_eq!(receipt.total_seats, 2);
//! ```
//!
//! ## Thread Safety
//!
//! The validator keeps no state between purchases, so a single instance can
//! be shared across threads when its services are `Send + Sync`.

mod base;
pub mod error;
pub mod price_table;
pub mod services;
mod ticket_request;
mod validator;

pub use base::{AccountId, TicketType, UnknownTicketType};
pub use error::{ConfigurationError, ErrorKind, PurchaseError, ServiceError};
pub use price_table::PriceTable;
pub use services::{
    LoggingPaymentService, LoggingReservationService, PaymentService, ReservationService,
};
pub use ticket_request::{ParseTicketRequestError, TicketRequest};
pub use validator::{MAX_TICKETS_PER_BOOKING, PurchaseReceipt, PurchaseValidator};
