use serde::{Deserialize, Deserializer};

/// A single entry of the services registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    /// Opaque icon markup, only ever escaped and re-embedded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_svg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<String>,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The decoded registry document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistryModel {
    pub blocked_services: Vec<ServiceRecord>,
}

impl RegistryModel {
    pub fn len(&self) -> usize {
        self.blocked_services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked_services.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.blocked_services.iter().map(|s| s.rules.len()).sum()
    }
}
