use serde::Deserialize;

use super::TransportError;
use super::number::LenientNumber;
use crate::domain::{CountryCode, CountryPrice, PriceTable};

#[derive(Debug, Deserialize)]
struct CountryPriceRow {
    country_code: String,
    #[serde(default)]
    country_name: Option<String>,
    cost: LenientNumber,
}

/// Decode a backend price-table payload (JSON array of country price rows).
///
/// Cost fields may be numbers or numeric strings. A row whose cost cannot be
/// read, or whose values violate the domain invariants (blank code, negative
/// cost), fails the whole payload: pricing must not silently lose a
/// destination. Later rows replace earlier rows with the same code.
pub fn decode_price_table_json(json: &str) -> Result<PriceTable, TransportError> {
    let rows: Vec<CountryPriceRow> = serde_json::from_str(json)?;

    let mut table = PriceTable::new();
    for row in rows {
        let code = CountryCode::new(row.country_code.as_str()).map_err(|source| {
            TransportError::InvalidPriceRecord {
                country_code: row.country_code.clone(),
                source,
            }
        })?;
        let cost = row.cost.value().ok_or_else(|| TransportError::MissingCost {
            country_code: row.country_code.clone(),
        })?;
        let name = row.country_name.unwrap_or_default();
        let price = CountryPrice::new(code, name, cost).map_err(|source| {
            TransportError::InvalidPriceRecord {
                country_code: row.country_code.clone(),
                source,
            }
        })?;
        table.insert(price);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_with_number_and_string_costs() {
        let json = r#"
        [
          {"country_code": "KR", "country_name": "South Korea", "cost": 0.0105},
          {"country_code": "JP", "country_name": "Japan", "cost": "0.0210"}
        ]
        "#;

        let table = decode_price_table_json(json).unwrap();
        assert_eq!(table.len(), 2);

        let kr = table.get(&CountryCode::new("KR").unwrap()).unwrap();
        assert_eq!(kr.cost_per_segment(), 0.0105);
        assert_eq!(kr.name(), "South Korea");

        let jp = table.get(&CountryCode::new("JP").unwrap()).unwrap();
        assert_eq!(jp.cost_per_segment(), 0.0210);
    }

    #[test]
    fn ignores_unknown_fields_and_missing_names() {
        let json = r#"
        [
          {"country_code": "KR", "cost": 0.0105, "id": "rec_1", "updated_date": "2024-01-01"}
        ]
        "#;

        let table = decode_price_table_json(json).unwrap();
        let kr = table.get(&CountryCode::new("KR").unwrap()).unwrap();
        assert_eq!(kr.name(), "");
    }

    #[test]
    fn later_rows_replace_earlier_ones() {
        let json = r#"
        [
          {"country_code": "KR", "country_name": "South Korea", "cost": 0.0105},
          {"country_code": "KR", "country_name": "South Korea", "cost": 0.0099}
        ]
        "#;

        let table = decode_price_table_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table
                .get(&CountryCode::new("KR").unwrap())
                .unwrap()
                .cost_per_segment(),
            0.0099
        );
    }

    #[test]
    fn unreadable_cost_fails_the_payload() {
        let json = r#"[{"country_code": "KR", "cost": "free"}]"#;
        let err = decode_price_table_json(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingCost { country_code } if country_code == "KR"
        ));
    }

    #[test]
    fn negative_cost_fails_the_payload() {
        let json = r#"[{"country_code": "KR", "cost": -0.01}]"#;
        let err = decode_price_table_json(json).unwrap_err();
        assert!(matches!(err, TransportError::InvalidPriceRecord { .. }));
    }

    #[test]
    fn blank_code_fails_the_payload() {
        let json = r#"[{"country_code": "  ", "cost": 0.01}]"#;
        let err = decode_price_table_json(json).unwrap_err();
        assert!(matches!(err, TransportError::InvalidPriceRecord { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            decode_price_table_json("not json"),
            Err(TransportError::Json(_))
        ));
    }
}
