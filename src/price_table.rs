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

//! Unit prices per ticket type.
//!
//! Prices are loaded once at start-up from a properties-style resource and
//! never change afterwards:
//!
//! ```text
//! # Unit prices per ticket type
//! ADULT=25
//! CHILD=15
//! INFANT=0
//! ```
//!
//! # Example
//!
//! ```
//! use ticket_purchase_rs::{PriceTable, TicketType};
//!
//! let prices = PriceTable::from_reader("ADULT=25\nCHILD=15\n".as_bytes()).unwrap();
//! assert_eq!(prices.price(TicketType::Adult), 25);
//! // Types without an entry are free.
//! assert_eq!(prices.price(TicketType::Infant), 0);
//! ```

use crate::base::TicketType;
use crate::error::ConfigurationError;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Immutable mapping from ticket type to unit price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<TicketType, u32>,
}

impl PriceTable {
    pub fn new(prices: HashMap<TicketType, u32>) -> Self {
        Self { prices }
    }

    /// Returns the configured price, if any.
    pub fn get(&self, ticket_type: TicketType) -> Option<u32> {
        self.prices.get(&ticket_type).copied()
    }

    /// Returns the unit price for `ticket_type`.
    ///
    /// A type missing from the table is priced at 0. This can under-charge,
    /// so it is reported as a warning.
    pub fn price(&self, ticket_type: TicketType) -> u32 {
        self.get(ticket_type).unwrap_or_else(|| {
            tracing::warn!(%ticket_type, "no price configured, charging 0");
            0
        })
    }

    /// Loads prices from a properties file.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingResource`] - The file does not exist.
    /// - [`ConfigurationError::Io`] - The file could not be read.
    /// - [`ConfigurationError::InvalidPrice`] - A known ticket type has a
    ///   value that is not a non-negative integer.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigurationError::MissingResource {
                path: path.to_path_buf(),
            },
            _ => ConfigurationError::Io(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads prices from `KEY=VALUE` lines.
    ///
    /// Blank lines and `#` comments are skipped, keys match ticket type names
    /// case-insensitively, and a repeated key overrides earlier ones. Keys that
    /// are not ticket types are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPrice`] for a malformed price, or a
    /// read error from the underlying reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'=')
            .comment(Some(b'#'))
            .quoting(false)
            .trim(Trim::All)
            .flexible(true) // A bare key is an empty value
            .has_headers(false)
            .from_reader(reader);

        let mut prices = HashMap::new();
        for result in rdr.records() {
            let record = result?;
            let Some(key) = record.get(0) else {
                continue;
            };
            let Ok(ticket_type) = key.parse::<TicketType>() else {
                tracing::warn!(key, "ignoring price for unknown ticket type");
                continue;
            };

            // Everything after the first '=' is the value.
            let value = record.iter().skip(1).collect::<Vec<_>>().join("=");
            let price = value
                .parse::<u32>()
                .map_err(|_| ConfigurationError::InvalidPrice { ticket_type, value })?;
            prices.insert(ticket_type, price);
        }

        Ok(Self { prices })
    }
}

impl FromIterator<(TicketType, u32)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (TicketType, u32)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bundled_format() {
        let input = "# Unit prices per ticket type\nADULT=25\nCHILD=15\nINFANT=0\n";
        let prices = PriceTable::from_reader(input.as_bytes()).unwrap();

        assert_eq!(prices.get(TicketType::Adult), Some(25));
        assert_eq!(prices.get(TicketType::Child), Some(15));
        assert_eq!(prices.get(TicketType::Infant), Some(0));
    }

    #[test]
    fn parse_with_whitespace_and_blank_lines() {
        let input = "\n  adult = 30 \n\n Child=10\n";
        let prices = PriceTable::from_reader(input.as_bytes()).unwrap();

        assert_eq!(prices.get(TicketType::Adult), Some(30));
        assert_eq!(prices.get(TicketType::Child), Some(10));
        assert_eq!(prices.get(TicketType::Infant), None);
    }

    #[test]
    fn later_entries_override_earlier_ones() {
        let input = "ADULT=25\nADULT=40\n";
        let prices = PriceTable::from_reader(input.as_bytes()).unwrap();
        assert_eq!(prices.get(TicketType::Adult), Some(40));
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let input = "SENIOR=12\nADULT=25\n";
        let prices = PriceTable::from_reader(input.as_bytes()).unwrap();
        assert_eq!(prices, PriceTable::from_iter([(TicketType::Adult, 25)]));
    }

    #[test]
    fn invalid_price_is_rejected() {
        let input = "ADULT=twenty\n";
        let result = PriceTable::from_reader(input.as_bytes());
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPrice {
                ticket_type: TicketType::Adult,
                ref value,
            }) if value == "twenty"
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = PriceTable::from_reader("CHILD=-5\n".as_bytes());
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPrice { ticket_type: TicketType::Child, .. })
        ));
    }

    #[test]
    fn bare_key_is_rejected() {
        let result = PriceTable::from_reader("INFANT\n".as_bytes());
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPrice { ticket_type: TicketType::Infant, .. })
        ));
    }

    #[test]
    fn missing_entry_prices_at_zero() {
        let prices = PriceTable::from_iter([(TicketType::Adult, 25)]);
        assert_eq!(prices.price(TicketType::Child), 0);
        assert_eq!(prices.price(TicketType::Adult), 25);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = PriceTable::from_path("does/not/exist.properties");
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingResource { .. })
        ));
    }
}
