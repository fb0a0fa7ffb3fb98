//! Enumerations used in resource declarations.
//!
//! Each enum mirrors the string values the provisioning engine expects on
//! the wire; `as_str` returns the wire form and `From<&str>` parses it,
//! falling back to the default variant for unknown input.

use serde::{Deserialize, Serialize};

/// Proof-of-ownership method for TLS certificate issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CertificateValidation {
    /// Validate via a DNS record in the site's hosted zone.
    #[default]
    #[serde(rename = "DNS")]
    Dns,
    /// Validate via an email challenge to the domain contacts.
    #[serde(rename = "EMAIL")]
    Email,
}

impl CertificateValidation {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "DNS",
            Self::Email => "EMAIL",
        }
    }
}

impl std::fmt::Display for CertificateValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CertificateValidation {
    fn from(s: &str) -> Self {
        match s {
            "EMAIL" => Self::Email,
            _ => Self::Dns,
        }
    }
}

/// What happens to an owned resource when the stack is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RemovalPolicy {
    /// Delete the resource with the stack.
    #[default]
    #[serde(rename = "Delete")]
    Destroy,
    /// Keep the resource after the stack is gone.
    #[serde(rename = "Retain")]
    Retain,
}

impl RemovalPolicy {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Destroy => "Delete",
            Self::Retain => "Retain",
        }
    }
}

impl std::fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RemovalPolicy {
    fn from(s: &str) -> Self {
        match s {
            "Retain" | "RETAIN" => Self::Retain,
            _ => Self::Destroy,
        }
    }
}

/// How the CDN treats plain-HTTP viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewerProtocolPolicy {
    /// Redirect HTTP requests to HTTPS.
    #[default]
    #[serde(rename = "redirect-to-https")]
    RedirectToHttps,
    /// Serve both HTTP and HTTPS.
    #[serde(rename = "allow-all")]
    AllowAll,
    /// Reject plain-HTTP requests.
    #[serde(rename = "https-only")]
    HttpsOnly,
}

impl ViewerProtocolPolicy {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RedirectToHttps => "redirect-to-https",
            Self::AllowAll => "allow-all",
            Self::HttpsOnly => "https-only",
        }
    }
}

impl std::fmt::Display for ViewerProtocolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ViewerProtocolPolicy {
    fn from(s: &str) -> Self {
        match s {
            "allow-all" => Self::AllowAll,
            "https-only" => Self::HttpsOnly,
            _ => Self::RedirectToHttps,
        }
    }
}

/// Minimum TLS protocol version the CDN negotiates with viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MinimumProtocolVersion {
    /// TLS 1.2 with the 2021 cipher suite.
    #[default]
    #[serde(rename = "TLSv1.2_2021")]
    TlsV12_2021,
    /// TLS 1.2 with the 2019 cipher suite.
    #[serde(rename = "TLSv1.2_2019")]
    TlsV12_2019,
}

impl MinimumProtocolVersion {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TlsV12_2021 => "TLSv1.2_2021",
            Self::TlsV12_2019 => "TLSv1.2_2019",
        }
    }
}

impl std::fmt::Display for MinimumProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MinimumProtocolVersion {
    fn from(s: &str) -> Self {
        match s {
            "TLSv1.2_2019" => Self::TlsV12_2019,
            _ => Self::TlsV12_2021,
        }
    }
}

/// How the CDN presents the certificate to viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SslSupportMethod {
    /// Server Name Indication (no dedicated IPs).
    #[default]
    #[serde(rename = "sni-only")]
    SniOnly,
    /// Dedicated IP addresses at every edge location.
    #[serde(rename = "vip")]
    Vip,
}

impl SslSupportMethod {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SniOnly => "sni-only",
            Self::Vip => "vip",
        }
    }
}

impl std::fmt::Display for SslSupportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SslSupportMethod {
    fn from(s: &str) -> Self {
        match s {
            "vip" => Self::Vip,
            _ => Self::SniOnly,
        }
    }
}

/// HTTP methods the CDN forwards to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AllowedMethods {
    /// GET and HEAD only.
    #[serde(rename = "GET_HEAD")]
    GetHead,
    /// GET, HEAD, and OPTIONS.
    #[default]
    #[serde(rename = "GET_HEAD_OPTIONS")]
    GetHeadOptions,
    /// All methods including writes.
    #[serde(rename = "ALL")]
    All,
}

impl AllowedMethods {
    /// Returns the method list for the engine document.
    #[must_use]
    pub fn as_methods(&self) -> &'static [&'static str] {
        match self {
            Self::GetHead => &["GET", "HEAD"],
            Self::GetHeadOptions => &["GET", "HEAD", "OPTIONS"],
            Self::All => &["DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"],
        }
    }
}

/// DNS record type for alias records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 alias record.
    #[default]
    A,
    /// IPv6 alias record.
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s {
            "AAAA" => Self::Aaaa,
            _ => Self::A,
        }
    }
}

/// Canned access control applied to the content bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketAccessControl {
    /// Owner gets full control, no other grants.
    #[serde(rename = "Private")]
    Private,
    /// Anyone can read bucket objects.
    #[serde(rename = "PublicRead")]
    PublicRead,
    /// Object writers grant the bucket owner full control.
    #[default]
    #[serde(rename = "BucketOwnerFullControl")]
    BucketOwnerFullControl,
}

impl BucketAccessControl {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::PublicRead => "PublicRead",
            Self::BucketOwnerFullControl => "BucketOwnerFullControl",
        }
    }
}

impl std::fmt::Display for BucketAccessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BucketAccessControl {
    fn from(s: &str) -> Self {
        match s {
            "Private" => Self::Private,
            "PublicRead" => Self::PublicRead,
            _ => Self::BucketOwnerFullControl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_certificate_validation() {
        assert_eq!(CertificateValidation::Dns.as_str(), "DNS");
        assert_eq!(CertificateValidation::from("EMAIL"), CertificateValidation::Email);
        assert_eq!(CertificateValidation::from("bogus"), CertificateValidation::Dns);
    }

    #[test]
    fn test_should_map_removal_policy_to_deletion_policy_values() {
        assert_eq!(RemovalPolicy::Destroy.as_str(), "Delete");
        assert_eq!(RemovalPolicy::Retain.as_str(), "Retain");
        assert_eq!(RemovalPolicy::from("RETAIN"), RemovalPolicy::Retain);
    }

    #[test]
    fn test_should_default_viewer_policy_to_redirect() {
        assert_eq!(ViewerProtocolPolicy::default(), ViewerProtocolPolicy::RedirectToHttps);
        assert_eq!(ViewerProtocolPolicy::default().as_str(), "redirect-to-https");
    }

    #[test]
    fn test_should_expand_allowed_methods() {
        assert_eq!(AllowedMethods::GetHeadOptions.as_methods(), &["GET", "HEAD", "OPTIONS"]);
        assert_eq!(AllowedMethods::GetHead.as_methods().len(), 2);
        assert_eq!(AllowedMethods::All.as_methods().len(), 7);
    }

    #[test]
    fn test_should_serialize_enums_to_wire_values() {
        assert_eq!(
            serde_json::to_value(MinimumProtocolVersion::TlsV12_2021).unwrap(),
            serde_json::json!("TLSv1.2_2021")
        );
        assert_eq!(
            serde_json::to_value(SslSupportMethod::SniOnly).unwrap(),
            serde_json::json!("sni-only")
        );
        assert_eq!(
            serde_json::to_value(BucketAccessControl::BucketOwnerFullControl).unwrap(),
            serde_json::json!("BucketOwnerFullControl")
        );
    }

    #[test]
    fn test_should_keep_record_type_wire_form() {
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::Aaaa.as_str(), "AAAA");
        assert_eq!(RecordType::from("AAAA"), RecordType::Aaaa);
    }
}
