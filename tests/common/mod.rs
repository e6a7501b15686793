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

//! Recording services shared by the integration tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use ticket_purchase_rs::{
    AccountId, PaymentService, PriceTable, PurchaseValidator, ReservationService, ServiceError,
    TicketRequest, TicketType,
};

/// A call made to one of the services, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Payment(AccountId, u64),
    Reservation(AccountId, u64),
}

/// Records every call and optionally fails one of them.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
    fail_payment: Option<String>,
    fail_reservation: Option<String>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_payment(message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_payment: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn failing_reservation(message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_reservation: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

impl PaymentService for Recorder {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError> {
        self.calls.lock().push(Call::Payment(account_id, amount));
        match &self.fail_payment {
            Some(message) => Err(ServiceError::new(message.clone())),
            None => Ok(()),
        }
    }
}

impl ReservationService for Recorder {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError> {
        self.calls.lock().push(Call::Reservation(account_id, seats));
        match &self.fail_reservation {
            Some(message) => Err(ServiceError::new(message.clone())),
            None => Ok(()),
        }
    }
}

pub type TestValidator = PurchaseValidator<Arc<Recorder>, Arc<Recorder>>;

pub fn standard_prices() -> PriceTable {
    PriceTable::from_iter([
        (TicketType::Adult, 25),
        (TicketType::Child, 15),
        (TicketType::Infant, 0),
    ])
}

/// Builds a validator whose payment and reservation calls land in `recorder`.
pub fn validator_with(recorder: &Arc<Recorder>) -> TestValidator {
    PurchaseValidator::new(standard_prices(), Arc::clone(recorder), Arc::clone(recorder))
}

pub fn adult(count: u32) -> TicketRequest {
    TicketRequest::new(TicketType::Adult, count)
}

pub fn child(count: u32) -> TicketRequest {
    TicketRequest::new(TicketType::Child, count)
}

pub fn infant(count: u32) -> TicketRequest {
    TicketRequest::new(TicketType::Infant, count)
}
