use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An unresolved read operation that the Spark Connect server will evaluate.
///
/// A relation only describes how to obtain the data. Neither the table name nor
/// the path is checked for existence, and the options are passed through to
/// the data source as opaque strings.
///
/// The format is [`None`] when the server should use its default data source
/// (`spark.sql.sources.default`). An empty format string is treated the same way.
///
/// Options are only carried by [`Relation::ReadByPathWithOptions`], and that variant
/// always has at least one option when built via [`Relation::read_with_format_and_path_and_options`]
/// or deserialized. In other words, "no options" and "empty options" are the same read.
///
/// The variants can still be built directly, e.g. in a `match` arm or a test.
/// An empty format or an empty options map built that way is read as unset by the
/// accessors, and equality compares relations through the accessors, so such a
/// value is equal to the one the constructors would have produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    rename_all_fields = "camelCase",
    from = "RelationRepr"
)]
pub enum Relation {
    ReadTable {
        name: String,
    },
    ReadByPath {
        path: String,
        format: Option<String>,
    },
    ReadByPathWithOptions {
        path: String,
        format: Option<String>,
        options: BTreeMap<String, String>,
    },
}

/// The serialized form of [`Relation`], which may not be normalized.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
enum RelationRepr {
    ReadTable {
        name: String,
    },
    ReadByPath {
        path: String,
        format: Option<String>,
    },
    ReadByPathWithOptions {
        path: String,
        format: Option<String>,
        options: BTreeMap<String, String>,
    },
}

impl From<RelationRepr> for Relation {
    fn from(repr: RelationRepr) -> Self {
        match repr {
            RelationRepr::ReadTable { name } => Relation::read_table(name),
            RelationRepr::ReadByPath { path, format } => {
                Relation::read_with_format_and_path(path, format)
            }
            RelationRepr::ReadByPathWithOptions {
                path,
                format,
                options,
            } => Relation::read_with_format_and_path_and_options(path, format, options),
        }
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Relation::ReadTable { name: a }, Relation::ReadTable { name: b }) => a == b,
            (Relation::ReadTable { .. }, _) | (_, Relation::ReadTable { .. }) => false,
            _ => {
                self.path() == other.path()
                    && self.format() == other.format()
                    && self.options() == other.options()
            }
        }
    }
}

impl Eq for Relation {}

impl Relation {
    pub fn read_table(name: impl Into<String>) -> Self {
        Relation::ReadTable { name: name.into() }
    }

    pub fn read_with_format_and_path(path: impl Into<String>, format: Option<String>) -> Self {
        Relation::ReadByPath {
            path: path.into(),
            format: normalize_format(format),
        }
    }

    /// The options are moved into the relation, so the caller must pass an owned
    /// copy if it keeps accumulating options afterward.
    pub fn read_with_format_and_path_and_options(
        path: impl Into<String>,
        format: Option<String>,
        options: BTreeMap<String, String>,
    ) -> Self {
        if options.is_empty() {
            return Self::read_with_format_and_path(path, format);
        }
        Relation::ReadByPathWithOptions {
            path: path.into(),
            format: normalize_format(format),
            options,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Relation::ReadTable { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Relation::ReadTable { name } => Some(name),
            Relation::ReadByPath { .. } | Relation::ReadByPathWithOptions { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Relation::ReadTable { .. } => None,
            Relation::ReadByPath { path, .. } | Relation::ReadByPathWithOptions { path, .. } => {
                Some(path)
            }
        }
    }

    pub fn format(&self) -> Option<&str> {
        match self {
            Relation::ReadTable { .. } => None,
            Relation::ReadByPath { format, .. }
            | Relation::ReadByPathWithOptions { format, .. } => {
                format.as_deref().filter(|f| !f.is_empty())
            }
        }
    }

    pub fn options(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Relation::ReadByPathWithOptions { options, .. } if !options.is_empty() => {
                Some(options)
            }
            Relation::ReadByPathWithOptions { .. } => None,
            Relation::ReadTable { .. } | Relation::ReadByPath { .. } => None,
        }
    }
}

fn normalize_format(format: Option<String>) -> Option<String> {
    format.filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_read_table() {
        let relation = Relation::read_table("db.events");
        assert!(relation.is_table());
        assert_eq!(relation.name(), Some("db.events"));
        assert_eq!(relation.path(), None);
        assert_eq!(relation.format(), None);
        assert_eq!(relation.options(), None);
    }

    #[test]
    fn test_read_table_allows_empty_name() {
        assert_eq!(
            Relation::read_table(""),
            Relation::ReadTable {
                name: String::new()
            }
        );
    }

    #[test]
    fn test_read_by_path() {
        let relation =
            Relation::read_with_format_and_path("/data/events", Some("parquet".to_string()));
        assert_eq!(
            relation,
            Relation::ReadByPath {
                path: "/data/events".to_string(),
                format: Some("parquet".to_string()),
            }
        );
        assert_eq!(relation.options(), None);
    }

    #[test]
    fn test_empty_format_is_unset() {
        let explicit = Relation::read_with_format_and_path("p", Some(String::new()));
        let unset = Relation::read_with_format_and_path("p", None);
        assert_eq!(explicit, unset);
        assert_eq!(explicit.format(), None);
    }

    #[test]
    fn test_read_by_path_with_options() {
        let options = BTreeMap::from([
            ("header".to_string(), "true".to_string()),
            ("delimiter".to_string(), ";".to_string()),
        ]);
        let relation = Relation::read_with_format_and_path_and_options(
            "/data/a.csv",
            Some("csv".to_string()),
            options.clone(),
        );
        assert_eq!(relation.path(), Some("/data/a.csv"));
        assert_eq!(relation.format(), Some("csv"));
        assert_eq!(relation.options(), Some(&options));
    }

    #[test]
    fn test_empty_options_are_no_options() {
        let relation =
            Relation::read_with_format_and_path_and_options("p", None, BTreeMap::new());
        assert_eq!(relation, Relation::read_with_format_and_path("p", None));
    }

    proptest! {
        #[test]
        fn options_are_carried_only_when_present(
            path in ".*",
            format in proptest::option::of("[a-z]{0,8}"),
            options in proptest::collection::btree_map("[a-z]{1,4}", ".*", 0..6),
        ) {
            let relation = Relation::read_with_format_and_path_and_options(
                path.clone(),
                format.clone(),
                options.clone(),
            );
            prop_assert_eq!(relation.path(), Some(path.as_str()));
            prop_assert_eq!(relation.format(), format.as_deref().filter(|f| !f.is_empty()));
            if options.is_empty() {
                prop_assert_eq!(relation.options(), None);
            } else {
                prop_assert_eq!(relation.options(), Some(&options));
            }
        }
    }

    #[test]
    fn test_deserialize_normalizes_relation() -> Result<(), Box<dyn std::error::Error>> {
        let relation: Relation = serde_json::from_str(
            r#"{"readByPathWithOptions":{"path":"p","format":"","options":{}}}"#,
        )?;
        assert!(matches!(
            relation,
            Relation::ReadByPath {
                ref path,
                format: None
            } if path == "p"
        ));
        assert_eq!(relation, Relation::read_with_format_and_path("p", None));
        assert_eq!(relation.format(), None);
        assert_eq!(relation.options(), None);
        assert_eq!(
            serde_json::to_value(&relation)?,
            serde_json::json!({"readByPath": {"path": "p", "format": null}})
        );
        Ok(())
    }

    #[test]
    fn test_direct_variants_compare_as_normalized() {
        let relation = Relation::ReadByPathWithOptions {
            path: "p".to_string(),
            format: Some(String::new()),
            options: BTreeMap::new(),
        };
        assert_eq!(relation.format(), None);
        assert_eq!(relation.options(), None);
        assert_eq!(relation, Relation::read_with_format_and_path("p", None));
        assert_ne!(relation, Relation::read_table("p"));
        assert_ne!(
            relation,
            Relation::read_with_format_and_path("p", Some("csv".to_string()))
        );
    }

    #[test]
    fn test_serialize_camel_case() -> Result<(), Box<dyn std::error::Error>> {
        let relation = Relation::read_with_format_and_path_and_options(
            "p",
            Some("csv".to_string()),
            BTreeMap::from([("header".to_string(), "true".to_string())]),
        );
        let json = serde_json::to_value(&relation)?;
        assert_eq!(
            json,
            serde_json::json!({
                "readByPathWithOptions": {
                    "path": "p",
                    "format": "csv",
                    "options": {"header": "true"}
                }
            })
        );
        Ok(())
    }
}
