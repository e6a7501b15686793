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

use clap::Parser;
use csv::Writer;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use ticket_purchase_rs::{
    AccountId, LoggingPaymentService, LoggingReservationService, PriceTable, PurchaseReceipt,
    PurchaseValidator, TicketRequest,
};
use tracing_subscriber::EnvFilter;

/// Ticket Purchase - Validate and book a set of tickets
///
/// Checks the booking rules, takes payment and reserves seats, then prints
/// the receipt to stdout.
#[derive(Parser, Debug)]
#[command(name = "ticket-purchase-rs")]
#[command(about = "Validates and books a ticket purchase", long_about = None)]
struct Args {
    /// Path to the ticket price properties file
    ///
    /// Expected format: one TYPE=PRICE entry per line
    #[arg(long, value_name = "FILE", default_value = "resources/ticket-prices.properties")]
    prices: PathBuf,

    /// Account the booking is charged to
    #[arg(long, value_name = "ID")]
    account: i64,

    /// Tickets to book, e.g. ADULT=2 CHILD=1 INFANT=1
    #[arg(value_name = "TYPE=COUNT", required = true)]
    tickets: Vec<TicketRequest>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Prices are required before anything can be booked
    let prices = match PriceTable::from_path(&args.prices) {
        Ok(prices) => prices,
        Err(e) => {
            eprintln!("Error loading prices from '{}': {}", args.prices.display(), e);
            process::exit(1);
        }
    };

    let validator = PurchaseValidator::new(prices, LoggingPaymentService, LoggingReservationService);

    let receipt = match validator.purchase(AccountId(args.account), &args.tickets) {
        Ok(receipt) => receipt,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_receipt(&receipt, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Write a receipt to a CSV writer
///
/// # CSV Format
///
/// Columns: `account, amount, seats`
///
/// ```csv
/// account,amount,seats
/// 1,65,3
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_receipt<W: Write>(receipt: &PurchaseReceipt, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    wtr.serialize(receipt)?;
    wtr.flush()?;
    Ok(())
}
