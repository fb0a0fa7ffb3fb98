//! The engine-facing template document.
//!
//! A [`Template`] is the serialized form of a resource graph: the input
//! the external provisioning engine consumes. Resources are keyed by
//! logical ID; cross-references render as `Ref` / `Fn::GetAtt`
//! intrinsics so the engine can resolve them at apply time.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::enums::RemovalPolicy;

/// Template format version understood by the provisioning engine.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A value in a resource's `Properties` block.
///
/// Either a literal string or an intrinsic the engine resolves during
/// apply. Intrinsics serialize to their single-key map form, e.g.
/// `{"Ref": "SiteBucket"}` or `{"Fn::GetAtt": ["SiteDistribution",
/// "DomainName"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A literal string value.
    Literal(String),
    /// Reference to another resource's default return value.
    Ref {
        /// Logical ID of the referenced resource.
        #[serde(rename = "Ref")]
        logical_id: String,
    },
    /// An attribute of another resource.
    GetAtt {
        /// Logical ID and attribute name.
        #[serde(rename = "Fn::GetAtt")]
        target: (String, String),
    },
    /// Select one element of a resolved list.
    Select {
        /// Zero-based index (as the engine expects, a string) and the
        /// list-producing value.
        #[serde(rename = "Fn::Select")]
        select: (String, Box<PropertyValue>),
    },
    /// Split a resolved string into a list.
    Split {
        /// Separator and the string-producing value.
        #[serde(rename = "Fn::Split")]
        split: (String, Box<PropertyValue>),
    },
    /// Join resolved values into one string.
    Join {
        /// Delimiter and the values to join.
        #[serde(rename = "Fn::Join")]
        join: (String, Vec<PropertyValue>),
    },
}

impl PropertyValue {
    /// Literal string value.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// `Ref` intrinsic for the given logical ID.
    #[must_use]
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self::Ref {
            logical_id: logical_id.into(),
        }
    }

    /// `Fn::GetAtt` intrinsic for the given logical ID and attribute.
    #[must_use]
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            target: (logical_id.into(), attribute.into()),
        }
    }

    /// `Fn::Join` intrinsic over the given values.
    #[must_use]
    pub fn join(delimiter: impl Into<String>, values: Vec<PropertyValue>) -> Self {
        Self::Join {
            join: (delimiter.into(), values),
        }
    }

    /// Host component of a bucket's website endpoint.
    ///
    /// The website URL attribute resolves to `http://<host>`, so the
    /// host is the third element after splitting on `/`.
    #[must_use]
    pub fn website_host(bucket_logical_id: impl Into<String>) -> Self {
        Self::Select {
            select: (
                "2".to_owned(),
                Box::new(Self::Split {
                    split: (
                        "/".to_owned(),
                        Box::new(Self::get_att(bucket_logical_id, "WebsiteURL")),
                    ),
                }),
            ),
        }
    }
}

impl From<PropertyValue> for serde_json::Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Literal(s) => Self::String(s),
            PropertyValue::Ref { logical_id } => serde_json::json!({ "Ref": logical_id }),
            PropertyValue::GetAtt { target: (id, attr) } => {
                serde_json::json!({ "Fn::GetAtt": [id, attr] })
            }
            PropertyValue::Select { select: (index, inner) } => {
                serde_json::json!({ "Fn::Select": [index, Self::from(*inner)] })
            }
            PropertyValue::Split { split: (separator, inner) } => {
                serde_json::json!({ "Fn::Split": [separator, Self::from(*inner)] })
            }
            PropertyValue::Join { join: (delimiter, values) } => {
                let values: Vec<Self> = values.into_iter().map(Self::from).collect();
                serde_json::json!({ "Fn::Join": [delimiter, values] })
            }
        }
    }
}

/// A parameter the engine resolves before apply (e.g. a zone lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParameter {
    /// Parameter type understood by the engine.
    #[serde(rename = "Type")]
    pub parameter_type: String,
    /// Human-readable description.
    #[serde(rename = "Description")]
    pub description: String,
}

/// One resource entry in the template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateResource {
    /// Engine resource type, e.g. `AWS::S3::Bucket`.
    #[serde(rename = "Type")]
    pub resource_type: String,
    /// Explicit creation-order dependencies.
    #[serde(rename = "DependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Teardown behavior, when it differs from the engine default.
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<RemovalPolicy>,
    /// Resource properties.
    #[serde(rename = "Properties")]
    pub properties: serde_json::Value,
}

/// One stack output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutput {
    /// Human-readable description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Output value, usually an intrinsic.
    #[serde(rename = "Value")]
    pub value: PropertyValue,
}

/// The document handed to the external provisioning engine.
///
/// Maps are ordered so that identical graphs always serialize to
/// identical documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    /// Template format version.
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    /// Stack description.
    #[serde(rename = "Description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Engine-resolved parameters.
    #[serde(rename = "Parameters", skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, TemplateParameter>,
    /// Resources keyed by logical ID.
    #[serde(rename = "Resources")]
    pub resources: BTreeMap<String, TemplateResource>,
    /// Stack outputs keyed by output name.
    #[serde(rename = "Outputs", skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, TemplateOutput>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_owned(),
            description: String::new(),
            parameters: BTreeMap::new(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }
}

impl Template {
    /// Serialize the template to compact JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the template to pretty-printed JSON.
    ///
    /// Pretty output is what lands on disk, so the document stays
    /// readable in the engine's console.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
