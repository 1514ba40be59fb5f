//! Unit tests for CLI types and conversions

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod row_id_tests {
    use super::*;

    #[test]
    fn test_player_id_from_str_valid() {
        let id = PlayerId::from_str("54321").unwrap();
        assert_eq!(id.as_i64(), 54321);
    }

    #[test]
    fn test_player_id_from_str_invalid() {
        assert!(PlayerId::from_str("not_a_number").is_err());
    }

    #[test]
    fn test_system_id_display() {
        assert_eq!(SystemId::new(7).to_string(), "7");
    }

    #[test]
    fn test_row_id_serde_is_transparent() {
        let id = ProjectionId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");

        let deserialized: ProjectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_season_from_str() {
        assert_eq!(Season::from_str("2024").unwrap(), Season::new(2024));
        assert!(Season::from_str("-1").is_err());
        assert!(Season::from_str("twenty").is_err());
    }

    #[test]
    fn test_season_ordering() {
        let mut seasons = vec![Season::new(2024), Season::new(2013), Season::new(2020)];
        seasons.sort();
        assert_eq!(
            seasons,
            vec![Season::new(2013), Season::new(2020), Season::new(2024)]
        );
    }
}

#[cfg(test)]
mod id_field_tests {
    use super::*;

    #[test]
    fn test_every_column_round_trips_through_from_str() {
        for field in IdField::ALL {
            assert_eq!(IdField::from_str(field.column()).unwrap(), field);
            assert_eq!(field.to_string(), field.column());
        }
    }

    #[test]
    fn test_canonical_and_secondary_partition() {
        assert_eq!(
            IdField::canonical(),
            &[IdField::ChadwickId, IdField::MlbId, IdField::FgId]
        );
        assert_eq!(IdField::secondary().len(), 5);
        assert!(IdField::canonical().iter().all(|f| f.is_canonical()));
        assert!(IdField::secondary().iter().all(|f| !f.is_canonical()));
    }

    #[test]
    fn test_unknown_field_is_invalid_argument() {
        match IdField::from_str("yahoo_id") {
            Err(crate::error::ProjectionError::InvalidArgument { message }) => {
                assert!(message.contains("yahoo_id"));
                assert!(message.contains("fg_id"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_name_fields() {
        let columns: Vec<_> = NameField::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(columns, vec!["last_name", "first_name"]);
    }
}

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ProjectionKind::from_str("batter").unwrap(), ProjectionKind::Batter);
        assert_eq!(ProjectionKind::from_str("Pitcher").unwrap(), ProjectionKind::Pitcher);
    }

    #[test]
    fn test_kind_from_str_rejects_other_values() {
        for bad in ["", "catcher", "batters"] {
            match ProjectionKind::from_str(bad) {
                Err(crate::error::ProjectionError::InvalidArgument { .. }) => (),
                other => panic!("Expected InvalidArgument for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ProjectionKind::Batter).unwrap(),
            "\"batter\""
        );
    }
}
