//! Extended JSON types tagged with `__type`.
//!
//! ```text
//! Pointer   {"__type":"Pointer","className":C,"objectId":I}
//! Date      {"__type":"Date","iso":"2011-08-21T18:02:52.249Z"}
//! Bytes     {"__type":"Bytes","base64":"..."}
//! GeoPoint  {"__type":"GeoPoint","latitude":F,"longitude":F}
//! File      {"__type":"File","name":N}
//! Relation  {"__type":"Relation","className":C}
//! ```
//!
//! Decoding dispatches on the tag alone. A value with no tag, or with a tag
//! this module does not know (including `Object`), is handed back unchanged
//! as [`Decoded::Plain`]. A known tag with a missing or mistyped companion
//! field is an error.
//!
//! # Example
//!
//! ```
//! use bmob_protocol::codec::{Decoded, Pointer, SpecialValue};
//! use serde_json::json;
//!
//! let author = SpecialValue::from(Pointer::user("u1"));
//! let encoded = author.encode();
//! assert_eq!(encoded, json!({"__type": "Pointer", "className": "_User", "objectId": "u1"}));
//!
//! assert_eq!(SpecialValue::decode(&encoded).unwrap(), Decoded::Special(author));
//! assert_eq!(SpecialValue::decode(&json!(42)).unwrap(), Decoded::Plain(json!(42)));
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::error::{ProtocolError, Result};
use crate::protocol::{class, key, type_tag};

/// Reference to a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pointer {
    /// Class of the referenced object.
    pub class_name: String,
    /// ID of the referenced object.
    pub object_id: String,
}

impl Pointer {
    /// Create a pointer to `object_id` in `class_name`.
    pub fn new(class_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            object_id: object_id.into(),
        }
    }

    /// Pointer to a user (`_User`).
    pub fn user(object_id: impl Into<String>) -> Self {
        Self::new(class::USER, object_id)
    }

    /// Pointer to an installation (`_Installation`).
    pub fn installation(object_id: impl Into<String>) -> Self {
        Self::new(class::INSTALLATION, object_id)
    }

    /// Encode as a `Pointer` JSON object.
    pub fn encode(&self) -> Value {
        json!({
            key::TYPE: type_tag::POINTER,
            key::CLASS_NAME: self.class_name,
            key::OBJECT_ID: self.object_id,
        })
    }
}

impl Serialize for Pointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

/// A value of one of the server's extended JSON types.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialValue {
    /// Reference to another object.
    Pointer(Pointer),
    /// Date/time as an ISO-8601 string.
    Date {
        /// Timestamp, e.g. `2011-08-21T18:02:52.249Z`.
        iso: String,
    },
    /// Binary data.
    Bytes {
        /// Standard base64 of the data.
        base64: String,
    },
    /// Location.
    ///
    /// Both coordinates must be finite; JSON has no NaN or infinity. Build
    /// with [`SpecialValue::geo_point`] to have that checked.
    GeoPoint {
        /// Degrees north.
        latitude: f64,
        /// Degrees east.
        longitude: f64,
    },
    /// Stored file, by name.
    File {
        /// Server-assigned file name.
        name: String,
    },
    /// To-many relation to objects of a class.
    Relation {
        /// Class of the related objects.
        class_name: String,
    },
}

/// Outcome of [`SpecialValue::decode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The value carried a recognized `__type` tag.
    Special(SpecialValue),
    /// Anything else, returned unchanged.
    Plain(Value),
}

impl Decoded {
    /// The special value, if any.
    pub fn into_special(self) -> Option<SpecialValue> {
        match self {
            Self::Special(value) => Some(value),
            Self::Plain(_) => None,
        }
    }

    /// Check if a recognized tag was found.
    #[inline]
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special(_))
    }
}

impl SpecialValue {
    /// Date value from a UTC timestamp, with millisecond precision.
    pub fn date(at: DateTime<Utc>) -> Self {
        Self::Date {
            iso: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Bytes value from raw data.
    pub fn bytes(data: &[u8]) -> Self {
        Self::Bytes {
            base64: BASE64.encode(data),
        }
    }

    /// GeoPoint value. `None` if either coordinate is NaN or infinite.
    pub fn geo_point(latitude: f64, longitude: f64) -> Option<Self> {
        (latitude.is_finite() && longitude.is_finite()).then_some(Self::GeoPoint {
            latitude,
            longitude,
        })
    }

    /// The `__type` literal for this value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Pointer(_) => type_tag::POINTER,
            Self::Date { .. } => type_tag::DATE,
            Self::Bytes { .. } => type_tag::BYTES,
            Self::GeoPoint { .. } => type_tag::GEO_POINT,
            Self::File { .. } => type_tag::FILE,
            Self::Relation { .. } => type_tag::RELATION,
        }
    }

    /// Parse the timestamp of a `Date`. `None` for other variants.
    pub fn as_datetime(&self) -> Option<Result<DateTime<Utc>>> {
        match self {
            Self::Date { iso } => Some(
                DateTime::parse_from_rfc3339(iso)
                    .map(|at| at.with_timezone(&Utc))
                    .map_err(ProtocolError::from),
            ),
            _ => None,
        }
    }

    /// Decode the payload of `Bytes`. `None` for other variants.
    pub fn decode_bytes(&self) -> Option<Result<Bytes>> {
        match self {
            Self::Bytes { base64 } => Some(
                BASE64
                    .decode(base64)
                    .map(Bytes::from)
                    .map_err(ProtocolError::from),
            ),
            _ => None,
        }
    }

    /// Encode to the tagged JSON form.
    pub fn encode(&self) -> Value {
        match self {
            Self::Pointer(pointer) => pointer.encode(),
            Self::Date { iso } => json!({ key::TYPE: type_tag::DATE, key::ISO: iso }),
            Self::Bytes { base64 } => json!({ key::TYPE: type_tag::BYTES, key::BASE64: base64 }),
            Self::GeoPoint {
                latitude,
                longitude,
            } => json!({
                key::TYPE: type_tag::GEO_POINT,
                key::LATITUDE: latitude,
                key::LONGITUDE: longitude,
            }),
            Self::File { name } => json!({ key::TYPE: type_tag::FILE, key::NAME: name }),
            Self::Relation { class_name } => {
                json!({ key::TYPE: type_tag::RELATION, key::CLASS_NAME: class_name })
            }
        }
    }

    /// Decode an arbitrary JSON value.
    ///
    /// Only `__type` is inspected; `__op` is never treated as a type tag.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedSpecialValue`] if the tag is known but
    /// a companion field is missing or has the wrong JSON type.
    pub fn decode(value: &Value) -> Result<Decoded> {
        let Some(object) = value.as_object() else {
            return Ok(Decoded::Plain(value.clone()));
        };
        let Some(tag) = object.get(key::TYPE).and_then(Value::as_str) else {
            return Ok(Decoded::Plain(value.clone()));
        };

        let special = match tag {
            type_tag::POINTER => Self::Pointer(Pointer {
                class_name: required_str(object, type_tag::POINTER, key::CLASS_NAME)?,
                object_id: required_str(object, type_tag::POINTER, key::OBJECT_ID)?,
            }),
            type_tag::DATE => Self::Date {
                iso: required_str(object, type_tag::DATE, key::ISO)?,
            },
            type_tag::BYTES => Self::Bytes {
                base64: required_str(object, type_tag::BYTES, key::BASE64)?,
            },
            type_tag::GEO_POINT => Self::GeoPoint {
                latitude: required_f64(object, type_tag::GEO_POINT, key::LATITUDE)?,
                longitude: required_f64(object, type_tag::GEO_POINT, key::LONGITUDE)?,
            },
            type_tag::FILE => Self::File {
                name: required_str(object, type_tag::FILE, key::NAME)?,
            },
            type_tag::RELATION => Self::Relation {
                class_name: required_str(object, type_tag::RELATION, key::CLASS_NAME)?,
            },
            other => {
                tracing::trace!(type_tag = other, "Passing through unrecognized type tag");
                return Ok(Decoded::Plain(value.clone()));
            }
        };

        Ok(Decoded::Special(special))
    }
}

fn required_str(
    object: &Map<String, Value>,
    type_tag: &'static str,
    field: &'static str,
) -> Result<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ProtocolError::MalformedSpecialValue { type_tag, field })
}

fn required_f64(
    object: &Map<String, Value>,
    type_tag: &'static str,
    field: &'static str,
) -> Result<f64> {
    object
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(ProtocolError::MalformedSpecialValue { type_tag, field })
}

impl From<Pointer> for SpecialValue {
    fn from(pointer: Pointer) -> Self {
        Self::Pointer(pointer)
    }
}

impl From<SpecialValue> for Value {
    fn from(value: SpecialValue) -> Self {
        value.encode()
    }
}

impl Serialize for SpecialValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn all_variants() -> Vec<SpecialValue> {
        vec![
            SpecialValue::Pointer(Pointer::new("GameScore", "Ed1nuqPvcm")),
            SpecialValue::Date {
                iso: "2011-08-21T18:02:52.249Z".to_string(),
            },
            SpecialValue::bytes(b"\x00\x01binary\xff"),
            SpecialValue::GeoPoint {
                latitude: 39.9042,
                longitude: 116.4074,
            },
            SpecialValue::File {
                name: "pic.png".to_string(),
            },
            SpecialValue::Relation {
                class_name: "Comment".to_string(),
            },
        ]
    }

    #[test]
    fn test_decode_inverts_encode() {
        for value in all_variants() {
            let decoded = SpecialValue::decode(&value.encode()).unwrap();
            assert_eq!(decoded, Decoded::Special(value));
        }
    }

    #[test]
    fn test_encode_carries_type_tag() {
        for value in all_variants() {
            let encoded = value.encode();
            assert_eq!(encoded[key::TYPE], value.type_tag());
            assert!(encoded.get(key::OP).is_none());
        }
    }

    #[test]
    fn test_encode_pointer() {
        let encoded = Pointer::new("GameScore", "abc").encode();
        assert_eq!(
            encoded,
            json!({"__type": "Pointer", "className": "GameScore", "objectId": "abc"})
        );
    }

    #[test]
    fn test_encode_shapes() {
        assert_eq!(
            SpecialValue::Date {
                iso: "2011-08-21T18:02:52.249Z".into()
            }
            .encode(),
            json!({"__type": "Date", "iso": "2011-08-21T18:02:52.249Z"})
        );
        assert_eq!(
            SpecialValue::bytes(b"hello").encode(),
            json!({"__type": "Bytes", "base64": "aGVsbG8="})
        );
        assert_eq!(
            SpecialValue::geo_point(40.0, -30.5).unwrap().encode(),
            json!({"__type": "GeoPoint", "latitude": 40.0, "longitude": -30.5})
        );
        assert_eq!(
            SpecialValue::File { name: "a.txt".into() }.encode(),
            json!({"__type": "File", "name": "a.txt"})
        );
        assert_eq!(
            SpecialValue::Relation {
                class_name: "Post".into()
            }
            .encode(),
            json!({"__type": "Relation", "className": "Post"})
        );
    }

    #[test]
    fn test_builtin_class_pointers() {
        assert_eq!(Pointer::user("u1").class_name, "_User");
        assert_eq!(Pointer::installation("i1").class_name, "_Installation");
    }

    #[test]
    fn test_decode_untagged_is_identity() {
        let values = [
            json!({"score": 1337, "playerName": "Sean Plott"}),
            json!([1, 2, 3]),
            json!("text"),
            json!(null),
            json!(3.5),
            json!({}),
        ];
        for value in values {
            assert_eq!(
                SpecialValue::decode(&value).unwrap(),
                Decoded::Plain(value.clone())
            );
        }
    }

    #[test]
    fn test_decode_unknown_tag_is_identity() {
        let value = json!({"__type": "Polygon", "coordinates": [[0, 0]]});
        assert_eq!(
            SpecialValue::decode(&value).unwrap(),
            Decoded::Plain(value.clone())
        );
    }

    #[test]
    fn test_decode_object_tag_is_plain() {
        let value = json!({"__type": "Object", "className": "Post", "objectId": "p1", "title": "x"});
        assert_eq!(
            SpecialValue::decode(&value).unwrap(),
            Decoded::Plain(value.clone())
        );
    }

    #[test]
    fn test_decode_non_string_tag_is_plain() {
        let value = json!({"__type": 7});
        assert!(!SpecialValue::decode(&value).unwrap().is_special());
    }

    #[test]
    fn test_decode_ignores_operator_tag() {
        let value = json!({"__op": "Increment", "amount": 1});
        assert_eq!(
            SpecialValue::decode(&value).unwrap(),
            Decoded::Plain(value.clone())
        );
    }

    #[test]
    fn test_decode_missing_companion_field() {
        let err = SpecialValue::decode(&json!({"__type": "Pointer", "className": "Foo"})).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MalformedSpecialValue {
                type_tag: "Pointer",
                field: "objectId"
            }
        ));

        let err = SpecialValue::decode(&json!({"__type": "Date"})).unwrap_err();
        assert!(err.to_string().contains("`iso`"));

        let err = SpecialValue::decode(&json!({"__type": "GeoPoint", "latitude": 1.0})).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MalformedSpecialValue { field: "longitude", .. }
        ));
    }

    #[test]
    fn test_decode_mistyped_companion_field() {
        let err = SpecialValue::decode(&json!({"__type": "File", "name": 5})).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MalformedSpecialValue {
                type_tag: "File",
                field: "name"
            }
        ));

        let err = SpecialValue::decode(
            &json!({"__type": "GeoPoint", "latitude": "north", "longitude": 2.0}),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MalformedSpecialValue { field: "latitude", .. }
        ));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let value = json!({
            "__type": "File",
            "name": "pic.png",
            "url": "http://files.example.com/pic.png"
        });
        assert_eq!(
            SpecialValue::decode(&value).unwrap().into_special(),
            Some(SpecialValue::File {
                name: "pic.png".to_string()
            })
        );
    }

    #[test]
    fn test_geo_point_integer_coordinates() {
        let decoded = SpecialValue::decode(&json!({"__type": "GeoPoint", "latitude": 40, "longitude": -30}))
            .unwrap()
            .into_special();
        assert_eq!(decoded, SpecialValue::geo_point(40.0, -30.0));
    }

    #[test]
    fn test_geo_point_rejects_non_finite() {
        assert!(SpecialValue::geo_point(f64::NAN, 1.0).is_none());
        assert!(SpecialValue::geo_point(1.0, f64::NAN).is_none());
        assert!(SpecialValue::geo_point(f64::INFINITY, 0.0).is_none());
        assert!(SpecialValue::geo_point(0.0, f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_geo_point_decode_inverts_encode_at_bounds() {
        for (latitude, longitude) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0), (1e-12, -1e-12)] {
            let value = SpecialValue::geo_point(latitude, longitude).unwrap();
            assert_eq!(
                SpecialValue::decode(&value.encode()).unwrap(),
                Decoded::Special(value)
            );
        }
    }

    #[test]
    fn test_date_from_datetime() {
        let at = Utc.with_ymd_and_hms(2011, 8, 21, 18, 2, 52).unwrap()
            + chrono::Duration::milliseconds(249);
        let value = SpecialValue::date(at);
        assert_eq!(
            value,
            SpecialValue::Date {
                iso: "2011-08-21T18:02:52.249Z".to_string()
            }
        );
        assert_eq!(value.as_datetime().unwrap().unwrap(), at);
    }

    #[test]
    fn test_date_invalid_iso() {
        let value = SpecialValue::Date {
            iso: "yesterday".to_string(),
        };
        assert!(matches!(
            value.as_datetime(),
            Some(Err(ProtocolError::InvalidDate(_)))
        ));
        assert!(SpecialValue::bytes(b"x").as_datetime().is_none());
    }

    #[test]
    fn test_bytes_payload() {
        let data: Vec<u8> = (0..=255).collect();
        let value = SpecialValue::bytes(&data);
        let decoded = value.decode_bytes().unwrap().unwrap();
        assert_eq!(&decoded[..], &data[..]);
    }

    #[test]
    fn test_bytes_invalid_base64() {
        let value = SpecialValue::Bytes {
            base64: "not base64!".to_string(),
        };
        assert!(matches!(
            value.decode_bytes(),
            Some(Err(ProtocolError::InvalidBase64(_)))
        ));
        assert!(SpecialValue::File { name: "a".into() }.decode_bytes().is_none());
    }

    #[test]
    fn test_serialize_uses_encoding() {
        let value = SpecialValue::Relation {
            class_name: "Post".to_string(),
        };
        assert_eq!(serde_json::to_value(&value).unwrap(), value.encode());

        let pointer = Pointer::user("u1");
        assert_eq!(serde_json::to_value(&pointer).unwrap(), pointer.encode());
        assert_eq!(Value::from(SpecialValue::from(pointer.clone())), pointer.encode());
    }
}
