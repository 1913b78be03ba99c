use crate::envelope::Envelope;
use crate::envelope::decode::decode;
use crate::error::Error;

/// A customer record as served by the `/customer/*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    /// Numeric customer id (`customerId` on the wire).
    pub customer_id: i64,
    /// Display name.
    pub name: String,
}

impl Customer {
    pub fn new(customer_id: i64, name: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
        }
    }
}

/// A supplier record as served by the `/supplier/*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplier {
    /// Numeric supplier id (`supplierId` on the wire).
    pub supplier_id: i64,
    /// Company name.
    pub company: String,
}

impl Supplier {
    pub fn new(supplier_id: i64, company: impl Into<String>) -> Self {
        Self {
            supplier_id,
            company: company.into(),
        }
    }
}

/// Payload shape chosen at runtime rather than through a type parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum PayloadKind {
    Customer,
    Supplier,
    Text,
    Raw,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Payload {
    Customer(Customer),
    Supplier(Supplier),
    Text(String),
    Raw(serde_json::Value),
}

/// [`decode`] with the payload type picked by `kind`.
pub fn decode_as(kind: PayloadKind, json: &str) -> Result<Envelope<Payload>, Error> {
    let envelope = match kind {
        PayloadKind::Customer => decode::<Customer>(json)?.map(Payload::Customer),
        PayloadKind::Supplier => decode::<Supplier>(json)?.map(Payload::Supplier),
        PayloadKind::Text => decode::<String>(json)?.map(Payload::Text),
        PayloadKind::Raw => decode::<serde_json::Value>(json)?.map(Payload::Raw),
    };
    Ok(envelope)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::envelope::ApiError;
    use strum::VariantNames;

    #[test]
    fn records_use_camel_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(Customer::new(1, "Mike Ross")).unwrap(),
            serde_json::json!({"customerId": 1, "name": "Mike Ross"})
        );
        assert_eq!(
            serde_json::to_value(Supplier::new(1, "Microsoft")).unwrap(),
            serde_json::json!({"supplierId": 1, "company": "Microsoft"})
        );
    }

    #[test]
    fn payload_kind_parses_lowercase_names() {
        let cases = [
            ("customer", Some(PayloadKind::Customer)),
            ("supplier", Some(PayloadKind::Supplier)),
            ("text", Some(PayloadKind::Text)),
            ("raw", Some(PayloadKind::Raw)),
            ("Customer", None),
            ("order", None),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<PayloadKind>().ok(), expected, "mismatch for {name}");
        }
    }

    #[test]
    fn variant_names_cover_every_payload_kind() {
        assert_eq!(PayloadKind::VARIANTS, ["customer", "supplier", "text", "raw"]);
        for name in PayloadKind::VARIANTS {
            let kind = name.parse::<PayloadKind>().unwrap();
            assert_eq!(kind.as_ref(), *name);
        }
    }

    #[test]
    fn decode_as_selects_payload_shape() {
        let json = r#"{"type":"data","data":{"supplierId":1,"company":"Microsoft"}}"#;
        let env = decode_as(PayloadKind::Supplier, json).unwrap();
        assert_eq!(
            env.data_ref(),
            Some(&Payload::Supplier(Supplier::new(1, "Microsoft")))
        );

        let raw = decode_as(PayloadKind::Raw, json).unwrap();
        assert_eq!(
            raw.data_ref(),
            Some(&Payload::Raw(
                serde_json::json!({"supplierId": 1, "company": "Microsoft"})
            ))
        );

        let text = decode_as(PayloadKind::Text, r#"{"type":"data","data":"v 2.15.144"}"#).unwrap();
        assert_eq!(text.data_ref(), Some(&Payload::Text("v 2.15.144".into())));
    }

    #[test]
    fn decode_as_keeps_error_envelopes() {
        let json = r#"{"type":"error","data":{"id":99,"description":"Error data type"}}"#;
        for kind in [
            PayloadKind::Customer,
            PayloadKind::Supplier,
            PayloadKind::Text,
            PayloadKind::Raw,
        ] {
            let env = decode_as(kind, json).unwrap();
            assert_eq!(
                env.error_ref(),
                Some(&ApiError::new(99, "Error data type")),
                "mismatch for {kind}"
            );
        }
    }

    #[test]
    fn decode_as_surfaces_shape_errors() {
        assert!(matches!(
            decode_as(PayloadKind::Text, r#"{"type":"data","data":{"a":1}}"#),
            Err(Error::Json(_))
        ));
    }
}
