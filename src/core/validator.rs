//! Shipment request schema.
//!
//! Every rule runs on every request and all violations are collected, so a
//! caller sees the whole list at once. Messages use the
//! `instance.<field> ...` wording that API clients already match on.

use crate::domain::model::ShipmentRequest;
use serde_json::{Map, Number, Value};

pub const MIN_PRODUCT_ID: u64 = 1000;
pub const ZIP_MIN_LENGTH: usize = 5;
pub const ZIP_MAX_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy)]
enum FieldRule {
    Integer {
        minimum: u64,
    },
    String {
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    name: &'static str,
    rule: FieldRule,
}

// 順序即回報順序
const SHIPMENT_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "productId",
        rule: FieldRule::Integer {
            minimum: MIN_PRODUCT_ID,
        },
    },
    FieldSpec {
        name: "name",
        rule: FieldRule::String {
            min_length: None,
            max_length: None,
        },
    },
    FieldSpec {
        name: "addr",
        rule: FieldRule::String {
            min_length: None,
            max_length: None,
        },
    },
    FieldSpec {
        name: "zip",
        rule: FieldRule::String {
            min_length: Some(ZIP_MIN_LENGTH),
            max_length: Some(ZIP_MAX_LENGTH),
        },
    },
];

/// A field value that passed every rule for its field.
#[derive(Debug, Clone)]
enum FieldValue {
    Integer(u64),
    Text(String),
}

// 2^64，超過就放不進 u64
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

impl FieldSpec {
    /// Push this field's violations; hand back the typed value only when
    /// there were none.
    fn check(&self, value: &Value, violations: &mut Vec<String>) -> Option<FieldValue> {
        let before = violations.len();
        match self.rule {
            FieldRule::Integer { minimum } => {
                let Value::Number(number) = value else {
                    violations.push(self.type_violation("integer"));
                    return None;
                };
                let whole = is_whole(number);
                if !whole {
                    violations.push(self.type_violation("integer"));
                }
                // minimum 對任何數字都適用，包括非整數
                if number.as_f64().is_some_and(|n| n < minimum as f64) {
                    violations.push(format!(
                        "instance.{} must be greater than or equal to {}",
                        self.name, minimum
                    ));
                }
                let fitted = whole_as_u64(number);
                if whole && fitted.is_none() && number.as_f64().is_some_and(|n| n > 0.0) {
                    violations.push(format!(
                        "instance.{} must be less than or equal to {}",
                        self.name,
                        u64::MAX
                    ));
                }
                if violations.len() > before {
                    return None;
                }
                fitted.map(FieldValue::Integer)
            }
            FieldRule::String {
                min_length,
                max_length,
            } => {
                let Value::String(text) = value else {
                    violations.push(self.type_violation("string"));
                    return None;
                };
                let length = text.chars().count();
                if let Some(min) = min_length {
                    if length < min {
                        violations.push(format!(
                            "instance.{} does not meet minimum length of {}",
                            self.name, min
                        ));
                    }
                }
                if let Some(max) = max_length {
                    if length > max {
                        violations.push(format!(
                            "instance.{} does not meet maximum length of {}",
                            self.name, max
                        ));
                    }
                }
                if violations.len() > before {
                    return None;
                }
                Some(FieldValue::Text(text.clone()))
            }
        }
    }

    fn type_violation(&self, expected: &str) -> String {
        format!("instance.{} is not of a type(s) {}", self.name, expected)
    }
}

/// Whole numbers only. `1000.0` counts, `1000.5` does not.
fn is_whole(number: &Number) -> bool {
    number.is_i64()
        || number.is_u64()
        || number
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

fn whole_as_u64(number: &Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < U64_LIMIT)
            .map(|f| f as u64)
    })
}

fn is_known_field(key: &str) -> bool {
    SHIPMENT_FIELDS.iter().any(|field| field.name == key)
}

fn check_object(object: &Map<String, Value>) -> (Vec<String>, [Option<FieldValue>; 4]) {
    let mut violations = Vec::new();
    let mut values: [Option<FieldValue>; 4] = Default::default();

    for (field, slot) in SHIPMENT_FIELDS.iter().zip(values.iter_mut()) {
        if let Some(value) = object.get(field.name) {
            *slot = field.check(value, &mut violations);
        }
    }

    for field in &SHIPMENT_FIELDS {
        if !object.contains_key(field.name) {
            violations.push(format!("instance requires property \"{}\"", field.name));
        }
    }

    // key 的順序跟呼叫端送來的一樣 (serde_json preserve_order)
    for key in object.keys().filter(|key| !is_known_field(key)) {
        violations.push(format!(
            "instance is not allowed to have the additional property \"{}\"",
            key
        ));
    }

    (violations, values)
}

/// Validate an arbitrary JSON value against the shipment schema.
///
/// Returns the typed request when every rule passes, otherwise the ordered
/// list of violations: per-field type and bound checks in field order, then
/// missing fields, then unknown keys.
pub fn validate_shipment(instance: &Value) -> Result<ShipmentRequest, Vec<String>> {
    let Value::Object(object) = instance else {
        return Err(vec!["instance is not of a type(s) object".to_string()]);
    };

    let (violations, [product_id, name, addr, zip]) = check_object(object);

    // 欄位缺值時一定已經有對應的 violation
    match (product_id, name, addr, zip) {
        (
            Some(FieldValue::Integer(product_id)),
            Some(FieldValue::Text(name)),
            Some(FieldValue::Text(addr)),
            Some(FieldValue::Text(zip)),
        ) if violations.is_empty() => Ok(ShipmentRequest {
            product_id,
            name,
            addr,
            zip,
        }),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "productId": 1000,
            "name": "Test Tester",
            "addr": "100 Test St",
            "zip": "12345-6789"
        })
    }

    fn violations_for(value: Value) -> Vec<String> {
        validate_shipment(&value).expect_err("expected violations")
    }

    #[test]
    fn test_valid_request() {
        let request = validate_shipment(&valid_body()).unwrap();
        assert_eq!(
            request,
            ShipmentRequest {
                product_id: 1000,
                name: "Test Tester".to_string(),
                addr: "100 Test St".to_string(),
                zip: "12345-6789".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_object_reports_required_in_field_order() {
        assert_eq!(
            violations_for(json!({})),
            vec![
                "instance requires property \"productId\"",
                "instance requires property \"name\"",
                "instance requires property \"addr\"",
                "instance requires property \"zip\"",
            ]
        );
    }

    #[test]
    fn test_mixed_violations_order() {
        // 呼叫端的欄位順序不影響回報順序
        let body = json!({
            "zip": "1234789000000000",
            "name": 10,
            "productId": 899
        });
        assert_eq!(
            violations_for(body),
            vec![
                "instance.productId must be greater than or equal to 1000",
                "instance.name is not of a type(s) string",
                "instance.zip does not meet maximum length of 10",
                "instance requires property \"addr\"",
            ]
        );
    }

    #[test]
    fn test_wrong_types() {
        let body = json!({
            "productId": "bob",
            "name": 10,
            "zip": 10000000,
            "addr": 100
        });
        assert_eq!(
            violations_for(body),
            vec![
                "instance.productId is not of a type(s) integer",
                "instance.name is not of a type(s) string",
                "instance.addr is not of a type(s) string",
                "instance.zip is not of a type(s) string",
            ]
        );
    }

    #[test]
    fn test_zip_length_bounds() {
        let mut body = valid_body();
        body["zip"] = json!("12");
        assert_eq!(
            violations_for(body.clone()),
            vec!["instance.zip does not meet minimum length of 5"]
        );

        body["zip"] = json!("12345-6789123213213123");
        assert_eq!(
            violations_for(body.clone()),
            vec!["instance.zip does not meet maximum length of 10"]
        );

        body["zip"] = json!("12345");
        assert!(validate_shipment(&body).is_ok());
    }

    #[test]
    fn test_zip_length_counts_characters() {
        let mut body = valid_body();
        // 5 個字元，15 個 byte
        body["zip"] = json!("一二三四五");
        assert!(validate_shipment(&body).is_ok());
    }

    #[test]
    fn test_product_id_minimum() {
        let mut body = valid_body();
        body["productId"] = json!(999);
        assert_eq!(
            violations_for(body),
            vec!["instance.productId must be greater than or equal to 1000"]
        );
    }

    #[test]
    fn test_product_id_fractional() {
        let mut body = valid_body();
        body["productId"] = json!(999.5);
        assert_eq!(
            violations_for(body.clone()),
            vec![
                "instance.productId is not of a type(s) integer",
                "instance.productId must be greater than or equal to 1000",
            ]
        );

        body["productId"] = json!(1001.0);
        assert_eq!(validate_shipment(&body).unwrap().product_id, 1001);
    }

    #[test]
    fn test_product_id_beyond_u64() {
        let mut body = valid_body();
        body["productId"] = json!(1e20);
        assert_eq!(
            violations_for(body.clone()),
            vec!["instance.productId must be less than or equal to 18446744073709551615"]
        );

        body["productId"] = json!(18446744073709551615u64);
        assert_eq!(validate_shipment(&body).unwrap().product_id, u64::MAX);
    }

    #[test]
    fn test_negative_product_id() {
        let mut body = valid_body();
        body["productId"] = json!(-5);
        assert_eq!(
            violations_for(body),
            vec!["instance.productId must be greater than or equal to 1000"]
        );
    }

    #[test]
    fn test_additional_properties_in_caller_order() {
        let mut body = valid_body();
        body["phone"] = json!(1234567);
        body["email"] = json!("a@b.c");
        assert_eq!(
            violations_for(body),
            vec![
                "instance is not allowed to have the additional property \"phone\"",
                "instance is not allowed to have the additional property \"email\"",
            ]
        );
    }

    #[test]
    fn test_non_object_instance() {
        assert_eq!(
            violations_for(json!([1, 2, 3])),
            vec!["instance is not of a type(s) object"]
        );
        assert_eq!(
            violations_for(json!("ship it")),
            vec!["instance is not of a type(s) object"]
        );
    }
}
