//! Provides integration with [Serde](https://docs.rs/serde/latest/serde/)
//!
//! This module implements [`Serialize`](serde::ser::Serialize) and
//! [`Deserialize`](serde::de::Deserialize) for [`Value`], [`Array`] and
//! [`Object`], so value trees can be embedded in Serde data structures or
//! exchanged with other Serde based JSON libraries. Integer values
//! serialize as integers and float values as floats, and object member order
//! is preserved in both directions.
//!
//! This module is _not_ intended as a replacement for
//! [Serde JSON](https://docs.rs/serde_json/latest/serde_json/index.html);
//! the parser and stringifier of this crate remain the primary text codec.
//!
//! To enable this optional integration, specify the `serde` feature in your
//! `Cargo.toml` file for the dependency on this crate:
//! ```toml
//! [dependencies]
//! treeson = { version = "...", features = ["serde"] }
//! ```

use std::fmt::Formatter;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Array, Object, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(a) => a.serialize(serializer),
            Value::Object(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Boolean(value))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Integer(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Value, E> {
        // Values beyond the i64 range widen to a float, losing precision the
        // same way `Value::number()` widening does
        match i64::try_from(value) {
            Ok(i) => Ok(Value::Integer(i)),
            Err(_) => Ok(Value::Number(value as f64)),
        }
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Value, E> {
        if !value.is_finite() {
            return Err(E::custom("JSON number must be finite"));
        }
        Ok(Value::Number(value))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut arr = Array::new();
        while let Some(element) = seq.next_element()? {
            arr.push(element);
        }
        Ok(Value::Array(arr))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut obj = Object::new();
        while let Some(name) = map.next_key::<String>()? {
            if obj.contains(&name) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate property name '{name}'"
                )));
            }
            obj.insert(name, map.next_value()?);
        }
        Ok(Value::Object(obj))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Array, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(arr) => Ok(arr),
            value => Err(serde::de::Error::custom(format!(
                "expected a JSON array but got {} value",
                value.kind()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Object, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(obj) => Ok(obj),
            value => Err(serde::de::Error::custom(format!(
                "expected a JSON object but got {} value",
                value.kind()
            ))),
        }
    }
}
