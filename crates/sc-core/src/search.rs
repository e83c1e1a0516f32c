use crate::catalog::{BrightnessTier, Catalog, ConstellationRecord, ShapeClass};
use crate::error::{ComposeError, Result};

/// Relevance weights: a name hit always outranks a theme hit, which
/// outranks a story hit. Ties keep catalog order (stable sort).
const SCORE_NAME: f64 = 3.0;
const SCORE_THEME: f64 = 2.0;
const SCORE_STORY: f64 = 1.0;

/// Filter configuration for a catalog search. String-typed on purpose:
/// values arrive from the boundary unvalidated, and unknown theme, shape,
/// or brightness values must surface as `InvalidFilter`, never be ignored.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Substring match against the record's theme keywords. Rejected when
    /// no catalog record carries it, so an empty result always means the
    /// other criteria narrowed a well-formed query to nothing.
    pub theme: Option<String>,
    /// Exact shape class: hunter, animal, figure, geometric.
    pub shape_class: Option<String>,
    /// Exact tier ("bright") or at-least range ("moderate+").
    pub brightness: Option<String>,
}

/// One search result: a catalog record plus its relevance score.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub record: &'a ConstellationRecord,
    pub score: f64,
}

enum TierFilter {
    Exact(BrightnessTier),
    AtLeast(BrightnessTier),
}

impl TierFilter {
    fn parse(s: &str) -> Result<Self> {
        let (base, at_least) = match s.strip_suffix('+') {
            Some(base) => (base, true),
            None => (s, false),
        };
        let tier = BrightnessTier::parse(base)
            .ok_or_else(|| ComposeError::InvalidFilter(format!("unknown brightness tier '{s}'")))?;
        Ok(if at_least {
            TierFilter::AtLeast(tier)
        } else {
            TierFilter::Exact(tier)
        })
    }

    fn matches(&self, tier: BrightnessTier) -> bool {
        match self {
            TierFilter::Exact(t) => tier == *t,
            TierFilter::AtLeast(t) => tier >= *t,
        }
    }
}

/// Query score for one record, or `None` when the query misses entirely.
fn query_score(record: &ConstellationRecord, query: &str) -> Option<f64> {
    let q = query.to_lowercase();
    if record.name.to_lowercase().contains(&q) {
        return Some(SCORE_NAME);
    }
    if record.themes.iter().any(|t| t.to_lowercase().contains(&q)) {
        return Some(SCORE_THEME);
    }
    if record.story.to_lowercase().contains(&q)
        || record.visual_character.to_lowercase().contains(&q)
    {
        return Some(SCORE_STORY);
    }
    None
}

/// Filter and rank catalog records. Case-insensitive substring query over
/// name, theme keywords, story, and visual character; optional typed
/// filters on top. An empty result is `Ok` — only malformed filters are
/// errors.
pub fn search<'a>(
    catalog: &'a Catalog,
    query: Option<&str>,
    filters: &SearchFilters,
) -> Result<Vec<SearchHit<'a>>> {
    let shape = filters
        .shape_class
        .as_deref()
        .map(|s| {
            ShapeClass::parse(s)
                .ok_or_else(|| ComposeError::InvalidFilter(format!("unknown shape class '{s}'")))
        })
        .transpose()?;
    let tier = filters
        .brightness
        .as_deref()
        .map(TierFilter::parse)
        .transpose()?;
    let theme = filters
        .theme
        .as_deref()
        .map(|raw| {
            let needle = raw.to_lowercase();
            let known = catalog
                .all()
                .iter()
                .any(|r| r.themes.iter().any(|t| t.to_lowercase().contains(&needle)));
            if known {
                Ok(needle)
            } else {
                Err(ComposeError::InvalidFilter(format!("unknown theme '{raw}'")))
            }
        })
        .transpose()?;

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    for record in catalog.all() {
        let score = match query.filter(|q| !q.trim().is_empty()) {
            Some(q) => match query_score(record, q) {
                Some(s) => s,
                None => continue,
            },
            None => SCORE_STORY,
        };

        if let Some(theme) = &theme
            && !record.themes.iter().any(|t| t.to_lowercase().contains(theme))
        {
            continue;
        }
        if let Some(shape) = shape
            && record.shape_class != shape
        {
            continue;
        }
        if let Some(tier_filter) = &tier
            && !tier_filter.matches(record.brightness_tier)
        {
            continue;
        }

        hits.push(SearchHit { record, score });
    }

    // Vec::sort_by is stable, so equal scores keep catalog order
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(hits)
}
