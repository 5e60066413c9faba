//! Sentinel-delimited managed region of a text document.

use std::fmt;

/// Start and end sentinels around generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedRegion {
    pub start: String,
    pub end: String,
}

/// Why a region could not be replaced in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionAnomaly {
    MissingStart,
    MissingEnd,
    /// The end sentinel comes before the start sentinel
    Misordered,
}

/// Result of [`ManagedRegion::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub content: String,
    /// Set when the block was appended instead of replaced
    pub anomaly: Option<RegionAnomaly>,
}

impl fmt::Display for RegionAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionAnomaly::MissingStart => write!(f, "start sentinel not found"),
            RegionAnomaly::MissingEnd => write!(f, "end sentinel not found"),
            RegionAnomaly::Misordered => write!(f, "start sentinel found after end sentinel"),
        }
    }
}

impl ManagedRegion {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The region holding the exported image listing of a README.
    pub fn images() -> Self {
        Self::new("<!--start-images-->", "<!--end-images-->")
    }

    /// `body` wrapped in the sentinels.
    pub fn block(&self, body: &str) -> String {
        format!("{}{}{}", self.start, body, self.end)
    }

    /// Content for a new document: the two sentinels and nothing else.
    pub fn empty_document(&self) -> String {
        self.block("")
    }

    /// Replace the region in `content` with `body`.
    ///
    /// With both sentinels present in order, the span from the start of the
    /// first start sentinel to the end of the first end sentinel is
    /// replaced and everything around it kept. Otherwise the block is
    /// appended to the end and the anomaly reported.
    ///
    /// # Example
    /// ```
    /// use sketch_docs::ManagedRegion;
    ///
    /// let region = ManagedRegion::new("<!--start-->", "<!--end-->");
    /// let update = region.apply("A<!--start-->OLD<!--end-->B", "NEW");
    /// assert_eq!(update.content, "A<!--start-->NEW<!--end-->B");
    /// assert!(update.anomaly.is_none());
    /// ```
    pub fn apply(&self, content: &str, body: &str) -> RegionUpdate {
        let block = self.block(body);

        let anomaly = match (content.find(&self.start), content.find(&self.end)) {
            (Some(start), Some(end)) if start < end => {
                let tail = &content[end + self.end.len()..];
                return RegionUpdate {
                    content: format!("{}{}{}", &content[..start], block, tail),
                    anomaly: None,
                };
            }
            (None, _) => RegionAnomaly::MissingStart,
            (Some(_), None) => RegionAnomaly::MissingEnd,
            (Some(_), Some(_)) => RegionAnomaly::Misordered,
        };

        RegionUpdate {
            content: format!("{}{}", content, block),
            anomaly: Some(anomaly),
        }
    }
}
