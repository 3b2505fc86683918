//! Resource creation commands
//!
//! Parses `create resources gold(<n>) silver(<n>) bronze(<n>)` into a
//! [`ResourceBundle`]. Currency tokens may come in any order and any case,
//! but each must appear exactly once.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::constants::{Currency, MAX_AMOUNT, NUM_CURRENCIES, RESOURCES_COMMAND_PREFIX};
use crate::models::errors::{TravelError, TravelResult};
use crate::models::resources::ResourceBundle;

static CURRENCY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(gold|silver|bronze)\(([0-9]+)\)$").expect("currency token pattern is valid")
});

/// Parse a resource creation command.
///
/// Once the `create resources` prefix is recognized, an amount too large
/// for a currency is reported as [`TravelError::Overflow`] even if the rest
/// of the command is also wrong.
pub fn parse(command: &str) -> TravelResult<ResourceBundle> {
    let invalid = || TravelError::InvalidCommand {
        command: command.to_string(),
    };

    let tokens: Vec<&str> = command.split_whitespace().collect();
    if !tokens.starts_with(&RESOURCES_COMMAND_PREFIX) {
        return Err(invalid());
    }

    let mut amounts: [Option<u64>; NUM_CURRENCIES] = [None; NUM_CURRENCIES];
    let mut malformed = tokens.len() != RESOURCES_COMMAND_PREFIX.len() + NUM_CURRENCIES;

    for token in &tokens[RESOURCES_COMMAND_PREFIX.len()..] {
        let Some(caps) = CURRENCY_TOKEN.captures(token) else {
            malformed = true;
            continue;
        };
        let currency = Currency::from_name(&caps[1]).ok_or_else(invalid)?;
        let amount = parse_amount(currency, &caps[2])?;

        let slot = &mut amounts[currency as usize];
        if slot.is_some() {
            malformed = true;
        }
        *slot = Some(amount);
    }

    match amounts {
        [Some(gold), Some(silver), Some(bronze)] if !malformed => {
            Ok(ResourceBundle::new(gold, silver, bronze))
        }
        _ => Err(invalid()),
    }
}

/// `digits` is already known to be ASCII digits, so the only way to fail
/// is by passing [`MAX_AMOUNT`].
fn parse_amount(currency: Currency, digits: &str) -> TravelResult<u64> {
    digits
        .parse::<u64>()
        .ok()
        .filter(|&amount| amount <= MAX_AMOUNT)
        .ok_or_else(|| TravelError::Overflow {
            currency: currency.name().to_string(),
            amount: digits.to_string(),
        })
}
