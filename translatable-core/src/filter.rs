//! Ordered text-substitution pipeline
//!
//!     Filters are applied before Markdown is rendered (input filters) and after edited HTML
//!     has been turned back into Markdown (output filters). A typical use is protecting
//!     characters a surface would otherwise interpret, e.g. rewriting `<` before raw editing.
//!
//!     A [`Filter`] pairs a matcher with a replacement. Matchers are either literal substrings,
//!     replaced verbatim, or regular expressions whose replacement is a template where `$1`,
//!     `${name}` expand to capture groups. Each filter replaces every non-overlapping match
//!     before the next filter runs.
//!
//!     Building a filter is the only fallible step: a pattern that does not compile is reported
//!     as a [`FilterError`] at construction time, so [`FilterList::apply`] cannot fail.

use crate::error::FilterError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What a filter looks for.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact substring, replaced verbatim
    Literal(String),
    /// Regular expression, replaced through a capture-group template
    Pattern(Regex),
}

/// A single (matcher, replacement) rule.
#[derive(Debug, Clone)]
pub struct Filter {
    matcher: Matcher,
    replacement: String,
}

impl Filter {
    /// Literal substring filter.
    pub fn literal(
        matcher: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let matcher = matcher.into();
        if matcher.is_empty() {
            return Err(FilterError::EmptyMatcher);
        }
        Ok(Self {
            matcher: Matcher::Literal(matcher),
            replacement: replacement.into(),
        })
    }

    /// Regular-expression filter. `replacement` may reference capture groups.
    pub fn pattern(pattern: &str, replacement: impl Into<String>) -> Result<Self, FilterError> {
        if pattern.is_empty() {
            return Err(FilterError::EmptyMatcher);
        }
        let regex = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher: Matcher::Pattern(regex),
            replacement: replacement.into(),
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping match in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.matcher {
            Matcher::Literal(needle) => {
                if text.contains(needle.as_str()) {
                    Cow::Owned(text.replace(needle.as_str(), &self.replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Matcher::Pattern(regex) => regex.replace_all(text, self.replacement.as_str()),
        }
    }
}

/// Kind of matcher in a configured [`FilterRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Literal,
    Pattern,
}

/// Serializable form of a [`Filter`], as found in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    #[serde(default)]
    pub kind: MatcherKind,
    pub matcher: String,
    pub replacement: String,
}

impl FilterRule {
    pub fn literal(matcher: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            kind: MatcherKind::Literal,
            matcher: matcher.into(),
            replacement: replacement.into(),
        }
    }

    pub fn pattern(matcher: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            kind: MatcherKind::Pattern,
            matcher: matcher.into(),
            replacement: replacement.into(),
        }
    }

    /// Compile the rule into a [`Filter`].
    pub fn compile(&self) -> Result<Filter, FilterError> {
        match self.kind {
            MatcherKind::Literal => Filter::literal(self.matcher.as_str(), self.replacement.as_str()),
            MatcherKind::Pattern => Filter::pattern(&self.matcher, self.replacement.as_str()),
        }
    }
}

impl TryFrom<&FilterRule> for Filter {
    type Error = FilterError;

    fn try_from(rule: &FilterRule) -> Result<Self, Self::Error> {
        rule.compile()
    }
}

/// Ordered sequence of filters. The default list is empty and acts as the identity.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    filters: Vec<Filter>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Builder-style [`FilterList::push`].
    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Run every filter in order, each one seeing the previous one's output.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (index, filter) in self.filters.iter().enumerate() {
            let replaced = match filter.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            log::trace!("filter #{index} rewrote {} bytes", current.len());
            current = replaced;
        }
        current
    }
}

impl FromIterator<Filter> for FilterList {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl TryFrom<&[FilterRule]> for FilterList {
    type Error = FilterError;

    fn try_from(rules: &[FilterRule]) -> Result<Self, Self::Error> {
        rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.compile().map_err(|source| FilterError::InvalidRule {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

/// Apply `filters` to `text`. Convenience wrapper around [`FilterList::apply`].
pub fn apply(text: &str, filters: &FilterList) -> String {
    filters.apply(text)
}
