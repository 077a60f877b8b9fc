//! Semantic column resolution from header keywords
//!
//! Exports carry no fixed schema: column names vary by platform,
//! language and locale. Each semantic role is resolved by an ordered
//! table of keyword/anti-keyword rules evaluated against the lowercased
//! header tokens. Rule order and exclusion semantics are load-bearing:
//! reordering changes which column wins when several headers partially
//! match (a "cost per result" column must never be mistaken for total
//! spend).

use serde::Serialize;

/// A semantic field that must be mapped to a source column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnRole {
    Name,
    Spend,
    Results,
    Reach,
    Impressions,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ColumnRole::Name => "name",
            ColumnRole::Spend => "spend",
            ColumnRole::Results => "results",
            ColumnRole::Reach => "reach",
            ColumnRole::Impressions => "impressions",
        };
        write!(f, "{}", label)
    }
}

/// One keyword rule: a header token matches when it contains any
/// include keyword and none of the exclude keywords
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

/// Rule chain for the campaign name column
const NAME_RULES: &[ColumnRule] = &[ColumnRule {
    include: &["campaign name", "nombre de la", "campaña", "campana"],
    exclude: &[],
}];

/// Rule chain for total spend
///
/// Ordered by signal strength: explicit spend wording first, then the
/// currency-qualified header, then bare cost wording. Every rule
/// excludes per-result phrasings.
const SPEND_RULES: &[ColumnRule] = &[
    ColumnRule {
        include: &["gastad", "spent", "invers", "amount"],
        exclude: &["por", "per", "costo por", "cost per"],
    },
    ColumnRule {
        include: &["(clp)"],
        exclude: &[],
    },
    ColumnRule {
        include: &["costo", "cost", "coste"],
        exclude: &["por", "per", "conv"],
    },
];

/// Rule chain for the results/conversions column
const RESULTS_RULES: &[ColumnRule] = &[ColumnRule {
    include: &["results", "resultados", "conversiones", "acciones"],
    exclude: &["por", "per", "costo", "cost"],
}];

/// Rule chain for audience reach
const REACH_RULES: &[ColumnRule] = &[ColumnRule {
    include: &["reach", "alcance"],
    exclude: &[],
}];

/// Rule chain for impressions
const IMPRESSIONS_RULES: &[ColumnRule] = &[ColumnRule {
    include: &["impressions", "impresiones", "impr."],
    exclude: &[],
}];

/// Evaluate a rule chain against the header tokens, first match wins
fn find_column(headers: &[String], rules: &[ColumnRule]) -> Option<usize> {
    for rule in rules {
        let found = headers.iter().position(|header| {
            let matches = rule.include.iter().any(|kw| header.contains(kw));
            let excluded = rule.exclude.iter().any(|kw| header.contains(kw));
            matches && !excluded
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Mapping from semantic roles to zero-based column indices
///
/// Built once per parse from the header tokens and immutable afterward.
/// An unresolved role silently degrades every row's corresponding field
/// to zero (or the placeholder, for the name); unresolved roles are
/// reported through the parse stats rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub spend: Option<usize>,
    pub results: Option<usize>,
    pub reach: Option<usize>,
    pub impressions: Option<usize>,
}

impl ColumnMap {
    /// Resolve all roles against prepared (trimmed, lowercased) header
    /// tokens
    pub fn resolve(headers: &[String]) -> Self {
        Self {
            name: find_column(headers, NAME_RULES),
            spend: find_column(headers, SPEND_RULES),
            results: find_column(headers, RESULTS_RULES),
            reach: find_column(headers, REACH_RULES),
            impressions: find_column(headers, IMPRESSIONS_RULES),
        }
    }

    /// Roles that did not resolve to any column
    ///
    /// This is the parser's main silent-failure mode, so it is surfaced
    /// as an observable diagnostic in the parse stats.
    pub fn unresolved_roles(&self) -> Vec<ColumnRole> {
        let mut unresolved = Vec::new();
        if self.name.is_none() {
            unresolved.push(ColumnRole::Name);
        }
        if self.spend.is_none() {
            unresolved.push(ColumnRole::Spend);
        }
        if self.results.is_none() {
            unresolved.push(ColumnRole::Results);
        }
        if self.reach.is_none() {
            unresolved.push(ColumnRole::Reach);
        }
        if self.impressions.is_none() {
            unresolved.push(ColumnRole::Impressions);
        }
        unresolved
    }
}

/// Bounds-checked cell access through a resolved index
///
/// Returns `None` for unresolved roles and for rows shorter than the
/// header; the caller treats absence as an empty cell.
pub fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| row.get(i)).map(String::as_str)
}
