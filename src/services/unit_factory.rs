//! Unit creation commands: `create unit <type> <name> <id>`

use crate::models::constants::{UNIT_COMMAND_PREFIX, UNIT_COMMAND_TOKENS};
use crate::models::errors::{TravelError, TravelResult, UnitCommandFault};
use crate::models::unit::{Unit, UnitId, UnitKind};

/// Parse a unit creation command into a new, unplaced unit.
pub fn parse(command: &str) -> TravelResult<Unit> {
    let reject = |fault| TravelError::InvalidUnitCreationCommand {
        command: command.to_string(),
        fault,
    };

    let tokens: Vec<&str> = command.split_whitespace().collect();
    if tokens.len() != UNIT_COMMAND_TOKENS || !tokens.starts_with(&UNIT_COMMAND_PREFIX) {
        return Err(reject(UnitCommandFault::MalformedCommand));
    }

    let (type_name, display_name, id) = (tokens[2], tokens[3], tokens[4]);

    let kind = UnitKind::from_name(type_name)
        .ok_or_else(|| reject(UnitCommandFault::UnknownUnitType(type_name.to_string())))?;
    let id = id
        .parse::<UnitId>()
        .map_err(|_| reject(UnitCommandFault::InvalidUnitId(id.to_string())))?;

    Ok(Unit::new(kind, display_name, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_each_kind() {
        let cases = [
            ("create unit Procyon Gosho 1", UnitKind::Procyon, "Gosho", 1),
            ("create unit Luyten Pesho 2", UnitKind::Luyten, "Pesho", 2),
            ("create unit Lacaille Pesho 2", UnitKind::Lacaille, "Pesho", 2),
        ];
        for (command, kind, name, id) in cases {
            let unit = parse(command).unwrap();
            assert_eq!(unit.kind, kind);
            assert_eq!(unit.name, name);
            assert_eq!(unit.id, id);
            assert!(unit.current_location.is_none());
            assert!(unit.resources.is_empty());
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        match parse("create unit invalidType Name 1") {
            Err(TravelError::InvalidUnitCreationCommand { fault, .. }) => {
                assert_eq!(fault, UnitCommandFault::UnknownUnitType("invalidType".to_string()));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bad_id_is_rejected() {
        match parse("create unit Luyten Name InvalidId") {
            Err(TravelError::InvalidUnitCreationCommand { fault, .. }) => {
                assert_eq!(fault, UnitCommandFault::InvalidUnitId("InvalidId".to_string()));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse("create unit Luyten Name 99999999999999999999"),
            Err(TravelError::InvalidUnitCreationCommand { .. })
        ));
    }

    #[test]
    fn misspelled_type_with_bad_id_is_rejected() {
        assert!(matches!(
            parse("create unit Lutyen Name InvalidId"),
            Err(TravelError::InvalidUnitCreationCommand { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let commands = [
            "create unit Procyon Gosho",
            "make unit Procyon Gosho 1",
            "create unit Procyon Gosho 1 extra",
        ];
        for command in commands {
            match parse(command) {
                Err(TravelError::InvalidUnitCreationCommand { fault, .. }) => {
                    assert_eq!(
                        fault,
                        UnitCommandFault::MalformedCommand,
                        "command {:?}",
                        command
                    );
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn negative_ids_are_integers() {
        assert_eq!(parse("create unit Procyon Gosho -4").unwrap().id, -4);
    }
}
