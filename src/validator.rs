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

//! Ticket purchase validation and processing.
//!
//! The [`PurchaseValidator`] checks a booking against the ticket rules, works
//! out what to charge and how many seats to hold, then hands off to the
//! payment and reservation services.
//!
//! # Booking Rules
//!
//! - At least one adult ticket must be bought.
//! - No more than [`MAX_TICKETS_PER_BOOKING`] tickets in a single booking.
//! - Infants are charged at the infant price but are not given a seat.
//!
//! A booking that breaks a rule is rejected before either service is called.

use crate::base::{AccountId, TicketType};
use crate::error::PurchaseError;
use crate::price_table::PriceTable;
use crate::services::{PaymentService, ReservationService};
use crate::ticket_request::TicketRequest;
use serde::Serialize;

/// Largest number of tickets, of any type, accepted in one booking.
pub const MAX_TICKETS_PER_BOOKING: u64 = 25;

/// What a successful purchase charged and reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    #[serde(rename = "account")]
    pub account_id: AccountId,
    #[serde(rename = "amount")]
    pub total_amount: u64,
    #[serde(rename = "seats")]
    pub total_seats: u64,
}

/// Validates ticket bookings and delegates payment and seat reservation.
///
/// Holds no mutable state: the price table and services are fixed at
/// construction, so one validator can serve concurrent purchases as long as
/// the services themselves allow it.
///
/// # Example
///
/// ```
/// use ticket_purchase_rs::{
///     AccountId, LoggingPaymentService, LoggingReservationService, PriceTable,
///     PurchaseValidator, TicketRequest, TicketType,
/// };
///
/// let prices = PriceTable::from_iter([
///     (TicketType::Adult, 25),
///     (TicketType::Child, 15),
///     (TicketType::Infant, 0),
/// ]);
/// let validator = PurchaseValidator::new(prices, LoggingPaymentService, LoggingReservationService);
///
/// let receipt = validator
///     .purchase(
///         AccountId(1),
///         &[
///             TicketRequest::new(TicketType::Adult, 2),
///             TicketRequest::new(TicketType::Child, 1),
///             TicketRequest::new(TicketType::Infant, 1),
///         ],
///     )
///     .unwrap();
/// assert_eq!(receipt.total_amount, 65);
/// assert_eq!(receipt.total_seats, 3);
/// ```
#[derive(Debug)]
pub struct PurchaseValidator<P, R> {
    prices: PriceTable,
    payment: P,
    reservation: R,
}

impl<P, R> PurchaseValidator<P, R>
where
    P: PaymentService,
    R: ReservationService,
{
    pub fn new(prices: PriceTable, payment: P, reservation: R) -> Self {
        Self {
            prices,
            payment,
            reservation,
        }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Validates a booking, takes payment and reserves seats.
    ///
    /// Payment is always taken before seats are reserved, and seats are only
    /// reserved once payment succeeded.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoAdultTicket`] - No adult ticket with a positive count.
    /// - [`PurchaseError::TooManyTickets`] - More than [`MAX_TICKETS_PER_BOOKING`] tickets.
    /// - [`PurchaseError::AmountOverflow`] - The total price does not fit in a `u64`.
    /// - [`PurchaseError::Payment`] - The payment service failed.
    /// - [`PurchaseError::Reservation`] - The reservation service failed.
    pub fn purchase(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        if !has_adult_ticket(requests) {
            return Err(PurchaseError::NoAdultTicket);
        }

        let requested = total_tickets(requests);
        if requested > MAX_TICKETS_PER_BOOKING {
            return Err(PurchaseError::TooManyTickets { requested });
        }

        let total_amount = self.total_amount(requests)?;
        self.payment
            .make_payment(account_id, total_amount)
            .map_err(PurchaseError::Payment)?;

        let total_seats = total_seats(requests);
        self.reservation
            .reserve_seats(account_id, total_seats)
            .map_err(PurchaseError::Reservation)?;

        tracing::debug!(%account_id, total_amount, total_seats, "tickets purchased");

        Ok(PurchaseReceipt {
            account_id,
            total_amount,
            total_seats,
        })
    }

    fn total_amount(&self, requests: &[TicketRequest]) -> Result<u64, PurchaseError> {
        requests.iter().try_fold(0u64, |total, request| {
            let price = u64::from(self.prices.price(request.ticket_type()));
            price
                .checked_mul(u64::from(request.count()))
                .and_then(|line| total.checked_add(line))
                .ok_or(PurchaseError::AmountOverflow)
        })
    }
}

fn has_adult_ticket(requests: &[TicketRequest]) -> bool {
    requests
        .iter()
        .any(|request| request.ticket_type() == TicketType::Adult && request.count() > 0)
}

// Counts are u32, so summing into u64 cannot overflow for any slice that fits in memory.
fn total_tickets(requests: &[TicketRequest]) -> u64 {
    requests.iter().map(|request| u64::from(request.count())).sum()
}

fn total_seats(requests: &[TicketRequest]) -> u64 {
    requests
        .iter()
        .filter(|request| request.ticket_type().occupies_seat())
        .map(|request| u64::from(request.count()))
        .sum()
}
