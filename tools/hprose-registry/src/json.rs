// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON document -> `Value` conversion.
//!
//! Objects carrying a string `"$class"` member become class instances (the
//! remaining members are the fields); other objects become maps.

use hprose_io::Value;
use serde_json::Value as Json;

const CLASS_KEY: &str = "$class";

pub fn to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number(n),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::List(items.iter().map(to_value).collect()),
        Json::Object(members) => match members.get(CLASS_KEY) {
            Some(Json::String(class)) => Value::object(
                class.clone(),
                members
                    .iter()
                    .filter(|(name, _)| name.as_str() != CLASS_KEY)
                    .map(|(name, member)| (name.clone(), to_value(member))),
            ),
            _ => Value::Map(
                members
                    .iter()
                    .map(|(name, member)| (Value::String(name.clone()), to_value(member)))
                    .collect(),
            ),
        },
    }
}

/// Narrowest integer variant, else double.
fn number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).map_or(Value::I64(i), Value::I32);
    }
    if let Some(u) = n.as_u64() {
        return Value::U64(u);
    }
    n.as_f64().map_or(Value::Null, Value::F64)
}
