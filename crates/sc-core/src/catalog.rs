use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{ComposeError, Result};
use crate::geometry::Point;

/// Geometric/mythological archetype of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeClass {
    Hunter,
    Animal,
    Figure,
    Geometric,
}

impl ShapeClass {
    /// Parse a filter value. `None` for unrecognized input; the caller
    /// decides whether that is an error (search turns it into `InvalidFilter`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hunter" => Some(ShapeClass::Hunter),
            "animal" => Some(ShapeClass::Animal),
            "figure" => Some(ShapeClass::Figure),
            "geometric" => Some(ShapeClass::Geometric),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeClass::Hunter => "hunter",
            ShapeClass::Animal => "animal",
            ShapeClass::Figure => "figure",
            ShapeClass::Geometric => "geometric",
        }
    }
}

/// Ordinal brightness category. Variant order is the ordinal order,
/// so `Faint < Moderate < Bright` via the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessTier {
    Faint,
    Moderate,
    Bright,
}

impl BrightnessTier {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "faint" => Some(BrightnessTier::Faint),
            "moderate" => Some(BrightnessTier::Moderate),
            "bright" => Some(BrightnessTier::Bright),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrightnessTier::Faint => "faint",
            BrightnessTier::Moderate => "moderate",
            BrightnessTier::Bright => "bright",
        }
    }
}

/// One star of a constellation figure: a normalized unit-square position
/// plus a relative brightness in (0, 1], 1 = brightest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub brightness: f64,
}

impl Star {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Immutable constellation record, loaded once at catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationRecord {
    pub name: String,
    pub abbreviation: String,
    /// Latin genitive, as used in star designations ("Alpha Orionis").
    pub genitive: String,
    pub story: String,
    /// Thematic keywords extracted from the mythology.
    pub themes: Vec<String>,
    /// One-line description of how the figure reads on the sky.
    pub visual_character: String,
    pub shape_class: ShapeClass,
    pub brightness_tier: BrightnessTier,
    pub stars: Vec<Star>,
}

/// Read-only table of constellation records. Built once, shared by
/// reference; no mutation path exists after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ConstellationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ConstellationRecord>) -> Self {
        Self { records }
    }

    /// The built-in IAU catalog.
    pub fn builtin() -> Self {
        Self::new(data::builtin_records())
    }

    /// Case-insensitive exact match on name or IAU abbreviation.
    /// No fuzzy matching — that belongs to search.
    pub fn lookup(&self, name: &str) -> Result<&ConstellationRecord> {
        self.records
            .iter()
            .find(|r| {
                r.name.eq_ignore_ascii_case(name) || r.abbreviation.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ComposeError::NotFound(name.to_string()))
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ConstellationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
