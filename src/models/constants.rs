pub const NUM_CURRENCIES: usize = 3;

/// Largest amount a single currency may hold: the signed 64-bit range.
pub const MAX_AMOUNT: u64 = i64::MAX as u64;

/// Leading words of a resource creation command.
pub const RESOURCES_COMMAND_PREFIX: [&str; 2] = ["create", "resources"];

/// Leading words of a unit creation command.
pub const UNIT_COMMAND_PREFIX: [&str; 2] = ["create", "unit"];

/// Tokens in a full unit creation command: prefix, type, name, id.
pub const UNIT_COMMAND_TOKENS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Gold = 0,
    Silver = 1,
    Bronze = 2,
}

impl Currency {
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Silver => "silver",
            Currency::Bronze => "bronze",
        }
    }

    /// Case-insensitive lookup by command token name.
    pub fn from_name(name: &str) -> Option<Currency> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub const ALL: [Currency; NUM_CURRENCIES] =
        [Currency::Gold, Currency::Silver, Currency::Bronze];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_lookup_ignores_case() {
        assert_eq!(Currency::from_name("GOLD"), Some(Currency::Gold));
        assert_eq!(Currency::from_name("Silver"), Some(Currency::Silver));
        assert_eq!(Currency::from_name("bronze"), Some(Currency::Bronze));
        assert_eq!(Currency::from_name("copper"), None);
    }
}
