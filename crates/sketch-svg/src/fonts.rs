//! Font-family selection and quoting.

/// Which fonts get embedded, by family-name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontPolicy {
    pub embed_prefixes: Vec<String>,
    pub ignore_prefixes: Vec<String>,
}

/// Outcome of checking one family against a [`FontPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDecision {
    Embed,
    /// Matches an ignore prefix; wins over any embed prefix
    Ignore,
    NotListed,
}

impl FontPolicy {
    pub fn new(embed_prefixes: Vec<String>, ignore_prefixes: Vec<String>) -> Self {
        Self {
            embed_prefixes,
            ignore_prefixes,
        }
    }

    pub fn decide(&self, family: &str) -> FontDecision {
        let matches = |prefix: &String| family.starts_with(prefix.as_str());
        if self.ignore_prefixes.iter().any(matches) {
            FontDecision::Ignore
        } else if self.embed_prefixes.iter().any(matches) {
            FontDecision::Embed
        } else {
            FontDecision::NotListed
        }
    }
}

/// Families recorded for embedding in one document, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRecord {
    families: Vec<String>,
    quoted: usize,
}

impl FontRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
    }

    /// Families to embed, in the order they were first encountered.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// How many family names were wrapped in quotes.
    pub fn quoted(&self) -> usize {
        self.quoted
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Rewrite a `font-family` attribute value.
    ///
    /// Each comma-separated family is checked against `policy` and recorded
    /// for embedding when selected. Multi-word names that are not already
    /// quoted get single quotes whatever the policy says.
    pub fn rewrite_font_family(&mut self, value: &str, policy: &FontPolicy) -> String {
        value
            .split(',')
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .map(|family| {
                let name = unquote(family);
                if !self.contains(name) {
                    match policy.decide(name) {
                        FontDecision::Embed => {
                            tracing::debug!(family = name, "Font family to embed");
                            self.families.push(name.to_string());
                        }
                        FontDecision::Ignore => {
                            tracing::debug!(family = name, "Skipping ignored font family");
                        }
                        FontDecision::NotListed => {}
                    }
                }

                if needs_quotes(family) {
                    tracing::debug!(family, "Quoting font family");
                    self.quoted += 1;
                    format!("'{}'", family)
                } else {
                    family.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn is_quoted(family: &str) -> bool {
    family.starts_with('\'') || family.starts_with('"')
}

fn needs_quotes(family: &str) -> bool {
    family.contains(' ') && !is_quoted(family)
}

/// Strip one matching pair of surrounding quotes, if present.
fn unquote(family: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| family.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(family)
}
