use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::null_as_default;
use crate::digest::fields_digest;

/// Kind of configuration fact carried by a [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Invalid,
    Simple,
    Parameter,
    Endpoint,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Invalid,
        RecordKind::Simple,
        RecordKind::Parameter,
        RecordKind::Endpoint,
    ];

    /// Map a wire type name onto a kind. Unknown names are `Invalid`.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "simple" => RecordKind::Simple,
            "parameter" => RecordKind::Parameter,
            "endpoint" => RecordKind::Endpoint,
            _ => RecordKind::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Invalid => "invalid",
            RecordKind::Simple => "simple",
            RecordKind::Parameter => "parameter",
            RecordKind::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    /// Strict parse for user input; unlike [`RecordKind::from_type_name`],
    /// unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown record kind '{}'", s))
    }
}

impl From<&str> for RecordKind {
    fn from(name: &str) -> Self {
        RecordKind::from_type_name(name)
    }
}

/// A single typed configuration fact reported by a host
///
/// Each record:
/// - Carries its raw wire type name; [`Record::kind`] interprets it
/// - Belongs to one package and may list the templates it was rendered into
/// - Holds an application domain that stays empty until a snapshot derives it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    type_name: String,

    #[serde(rename = "pkg", deserialize_with = "null_as_default")]
    package: String,

    #[serde(rename = "tpls", deserialize_with = "null_as_default")]
    templates: Vec<String>,

    #[serde(rename = "src", deserialize_with = "null_as_default")]
    source: String,

    #[serde(rename = "k", deserialize_with = "null_as_default")]
    key: String,

    #[serde(rename = "v", deserialize_with = "null_as_default")]
    value: String,

    #[serde(rename = "appdomain", deserialize_with = "null_as_default")]
    application_domain: String,
}

impl Record {
    /// Create a record with no source, templates or application domain
    pub fn new(
        type_name: impl Into<String>,
        package: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            package: package.into(),
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_templates(mut self, templates: Vec<String>) -> Self {
        self.templates = templates;
        self
    }

    /// Set the domain as reported on the wire; derivation overwrites it
    pub fn with_application_domain(mut self, domain: impl Into<String>) -> Self {
        self.application_domain = domain.into();
        self
    }

    /// Interpret the raw type name. Never fails.
    pub fn kind(&self) -> RecordKind {
        RecordKind::from_type_name(&self.type_name)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn application_domain(&self) -> &str {
        &self.application_domain
    }

    /// Assign the application domain using an empty default.
    pub fn assign_application_domain(&mut self) {
        self.assign_application_domain_or("");
    }

    /// Assign the application domain.
    ///
    /// Endpoint records always take the domain embedded in their value.
    /// Every other kind takes `default`, truncated at the first comma.
    pub fn assign_application_domain_or(&mut self, default: &str) {
        self.application_domain = match self.kind() {
            RecordKind::Endpoint => endpoint_application_domain(&self.value),
            _ => leading_domain(default).to_string(),
        };
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.key == key
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.value == value
    }

    pub fn has_package(&self, package: &str) -> bool {
        self.package == package
    }

    pub fn has_application_domain(&self, domain: &str) -> bool {
        self.application_domain == domain
    }

    /// SHA256 over every field in declaration order.
    pub fn fingerprint(&self) -> String {
        let template_count = self.templates.len().to_string();
        let head = [
            self.type_name.as_str(),
            self.package.as_str(),
            template_count.as_str(),
        ];
        let tail = [
            self.source.as_str(),
            self.key.as_str(),
            self.value.as_str(),
            self.application_domain.as_str(),
        ];
        fields_digest(
            head.into_iter()
                .chain(self.templates.iter().map(String::as_str))
                .chain(tail),
        )
    }
}

/// Extract the application domain from an endpoint value.
///
/// Endpoint values embed `host:port:scheme:domain` inside single-quoted
/// segments. The result is the text after the last `:` of the last quoted
/// segment containing a `:`. Values without any `'` yield an empty string,
/// as do values without a `:`.
pub fn endpoint_application_domain(value: &str) -> String {
    if !value.contains('\'') {
        return String::new();
    }
    value
        .split('\'')
        .filter_map(|segment| segment.rsplit_once(':').map(|(_, domain)| domain))
        .last()
        .unwrap_or_default()
        .to_string()
}

fn leading_domain(default: &str) -> &str {
    match default.split_once(',') {
        Some((head, _)) => head,
        None => default,
    }
}
