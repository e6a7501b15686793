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

//! External services a purchase is delegated to.
//!
//! The validator only depends on the [`PaymentService`] and
//! [`ReservationService`] traits. Concrete clients are built by the
//! application and handed in at construction time.

use crate::base::AccountId;
use crate::error::ServiceError;
use std::sync::Arc;

/// Takes payment for a booking.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentService: Send + Sync {
    /// Charges `amount` to the account.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the charge was not taken.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError>;
}

/// Reserves seats for a booking.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationService: Send + Sync {
    /// Reserves `seats` seats for the account.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the seats could not be reserved.
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError>;
}

impl<T: PaymentService + ?Sized> PaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: ReservationService + ?Sized> ReservationService for Arc<T> {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError> {
        (**self).reserve_seats(account_id, seats)
    }
}

/// Payment service that accepts every charge and records it in the log.
///
/// Stands in for the third-party gateway when running locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl PaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError> {
        tracing::info!(%account_id, amount, "payment taken");
        Ok(())
    }
}

/// Reservation service that accepts every request and records it in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReservationService;

impl ReservationService for LoggingReservationService {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError> {
        tracing::info!(%account_id, seats, "seats reserved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_services_always_succeed() {
        assert_eq!(LoggingPaymentService.make_payment(AccountId(1), 65), Ok(()));
        assert_eq!(
            LoggingReservationService.reserve_seats(AccountId(1), 3),
            Ok(())
        );
    }

    #[test]
    fn shared_services_forward_calls() {
        let mut mock = MockPaymentService::new();
        mock.expect_make_payment()
            .withf(|account_id, amount| *account_id == AccountId(9) && *amount == 40)
            .times(1)
            .returning(|_, _| Err(ServiceError::new("declined")));

        let shared: Arc<dyn PaymentService> = Arc::new(mock);
        assert_eq!(
            shared.make_payment(AccountId(9), 40),
            Err(ServiceError::new("declined"))
        );
    }
}
