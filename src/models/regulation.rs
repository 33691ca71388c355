//! Program and regulation records from the CFR catalog.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A regulatory program (e.g. the Clean Air Act's NSPS program).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub regulations: Vec<Regulation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Program {
    /// Non-empty CFR numbers of this program's regulations, in order.
    pub fn cfr_numbers(&self) -> impl Iterator<Item = &str> {
        self.regulations.iter().filter_map(|r| r.cfr())
    }

    /// Whether any regulation of this program belongs to one of `parts`.
    pub fn covers_any(&self, parts: &[u32]) -> bool {
        self.regulations.iter().any(|r| r.matches_any(parts))
    }
}

/// A regulation keyed by CFR part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    /// CFR part; upstream sends a string, a number or null.
    #[serde(
        default,
        deserialize_with = "deserialize_cfr",
        skip_serializing_if = "Option::is_none"
    )]
    pub cfr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Regulation {
    /// The CFR value, if present and not blank.
    pub fn cfr(&self) -> Option<&str> {
        self.cfr.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// CFR value as a part number.
    pub fn cfr_part(&self) -> Option<u32> {
        self.cfr().and_then(|c| c.parse().ok())
    }

    pub fn matches_any(&self, parts: &[u32]) -> bool {
        self.cfr_part().is_some_and(|p| parts.contains(&p))
    }
}

fn deserialize_cfr<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
