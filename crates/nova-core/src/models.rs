//! Core data models for the release report

use serde::{Deserialize, Deserializer, Serialize};

/// A chart version paired with the application version it ships
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersionInfo {
    /// Chart version (e.g., "1.2.0")
    pub version: String,

    /// Application version declared by the chart (e.g., "v2")
    #[serde(rename = "appVersion")]
    pub app_version: String,
}

impl VersionInfo {
    /// Creates a new version pair
    pub fn new(version: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            app_version: app_version.into(),
        }
    }
}

/// One row of the report: an installed release and the newest chart available for it.
///
/// Every value is computed upstream; formatting never mutates a release.
/// `namespace`, `deprecated`, `home` and `icon` are left out of the JSON
/// encoding when they hold their zero value, and decode back to it. Any key
/// missing on input decodes to its zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReleaseOutput {
    /// Name of the installed release
    #[serde(rename = "release")]
    pub release_name: String,

    /// Name of the chart the release was installed from
    #[serde(rename = "chartName")]
    pub chart_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    pub description: String,

    /// Whether the chart is marked deprecated by its repository
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub home: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    #[serde(rename = "Installed")]
    pub installed: VersionInfo,

    #[serde(rename = "Latest")]
    pub latest: VersionInfo,

    /// Whether the installed version lags behind the latest one
    #[serde(rename = "outdated")]
    pub is_old: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ReleaseOutput {
    /// Creates a release with the mandatory identity and version data.
    ///
    /// Optional metadata (namespace, description, urls, deprecation) can be
    /// filled in on the returned value.
    pub fn new(
        release_name: impl Into<String>,
        chart_name: impl Into<String>,
        installed: VersionInfo,
        latest: VersionInfo,
        is_old: bool,
    ) -> Self {
        Self {
            release_name: release_name.into(),
            chart_name: chart_name.into(),
            installed,
            latest,
            is_old,
            ..Self::default()
        }
    }
}

/// Top-level envelope of a report.
///
/// Release order is display order. A `null` or missing release list
/// decodes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Output {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub helm_releases: Vec<ReleaseOutput>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ReleaseOutput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ReleaseOutput>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Output {
    pub fn new(helm_releases: Vec<ReleaseOutput>) -> Self {
        Self { helm_releases }
    }

    pub fn len(&self) -> usize {
        self.helm_releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helm_releases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseOutput> {
        self.helm_releases.iter()
    }

    /// Returns a report holding only the outdated releases, order preserved
    pub fn outdated(&self) -> Self {
        Self {
            helm_releases: self
                .helm_releases
                .iter()
                .filter(|release| release.is_old)
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Output {
    type Item = &'a ReleaseOutput;
    type IntoIter = std::slice::Iter<'a, ReleaseOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
