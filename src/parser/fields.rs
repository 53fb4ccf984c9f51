//! Keyed-field and quoted-token extraction.
//!
//! Table entries use the `["Key"] = value` form. Only the handful of keys the
//! loader cares about are recognised; everything else in a block is opaque.

use std::sync::LazyLock;

use regex::Regex;

/// A `["Key"] = ...` field with a known value shape.
pub struct Field {
    pattern: LazyLock<Regex>,
}

impl Field {
    /// First match of this field in `text`, as the captured value.
    pub fn find<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// First match at or after `start`, as (match offset, captured value).
    pub fn locate<'a>(&self, text: &'a str, start: usize) -> Option<(usize, &'a str)> {
        let caps = self.pattern.captures_at(text, start)?;
        Some((caps.get(0)?.start(), caps.get(1)?.as_str()))
    }

    /// Integer-valued lookup. Values that overflow `u32` are treated as absent.
    pub fn find_u32(&self, text: &str) -> Option<u32> {
        self.find(text).and_then(|value| value.parse().ok())
    }
}

macro_rules! string_field {
    ($key:literal) => {
        Field {
            pattern: LazyLock::new(|| {
                Regex::new(concat!(r#"\[""#, $key, r#""\]\s*=\s*"([^"]+)""#))
                    .expect("string field pattern")
            }),
        }
    };
}

/// `["Code"] = "..."` inside a vehicle class.
pub static CODE: Field = string_field!("Code");
/// `["groupName"] = "..."` in the mission tree.
pub static GROUP_NAME: Field = string_field!("groupName");
/// `["id"] = "..."` in a mission block.
pub static MISSION_ID: Field = string_field!("id");
/// `["name"] = "..."` in a mission block.
pub static MISSION_NAME: Field = string_field!("name");

/// `["VehicleClass"] = <int>` inside a unit-library entry.
pub static VEHICLE_CLASS: Field = Field {
    pattern: LazyLock::new(|| {
        Regex::new(r#"\["VehicleClass"\]\s*=\s*(\d+)"#).expect("vehicle class pattern")
    }),
};

/// `["sceneFile"] = <expr>`, where the expression runs to the next `,` or `}`.
pub static SCENE_FILE: Field = Field {
    pattern: LazyLock::new(|| {
        Regex::new(r#"\["sceneFile"\]\s*=\s*([^,}]+)"#).expect("scene file pattern")
    }),
};

static QUOTED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([a-zA-Z0-9_]+)""#).expect("quoted token pattern"));

/// Every double-quoted identifier-like token in `text`, in order.
pub fn quoted_tokens(text: &str) -> impl Iterator<Item = &str> {
    QUOTED_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
