use serde::Deserialize;

/// Deserialize a string into an [`Option`], treating the empty string as [`None`].
///
/// Figment cannot represent [`None`] in TOML or environment variables,
/// so optional string settings use the empty string as the unset value.
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Item {
        #[serde(deserialize_with = "deserialize_non_empty_string")]
        value: Option<String>,
    }

    #[test]
    fn test_empty_string_is_none() -> Result<(), Box<dyn std::error::Error>> {
        let item: Item = serde_json::from_str(r#"{"value": ""}"#)?;
        assert_eq!(item.value, None);
        let item: Item = serde_json::from_str(r#"{"value": "alice"}"#)?;
        assert_eq!(item.value.as_deref(), Some("alice"));
        Ok(())
    }
}
