//! Static brightness-tier × shape-class suggestion table.
//!
//! The mapping is an exhaustive match so the compiler enforces that every
//! tier/class pair has a defined entry — adding a tier or class fails to
//! build until its rows exist.

use serde::{Deserialize, Serialize};

use crate::catalog::{BrightnessTier, ShapeClass};

/// Visual element suggestions derived from a record's tier and class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedElements {
    pub lighting: Vec<String>,
    pub mood: Vec<String>,
    pub palette_hints: Vec<String>,
}

fn elems(lighting: &[&str], mood: &[&str], palette_hints: &[&str]) -> SuggestedElements {
    SuggestedElements {
        lighting: lighting.iter().map(|s| s.to_string()).collect(),
        mood: mood.iter().map(|s| s.to_string()).collect(),
        palette_hints: palette_hints.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn suggested_elements(tier: BrightnessTier, class: ShapeClass) -> SuggestedElements {
    use BrightnessTier::*;
    use ShapeClass::*;

    match (tier, class) {
        (Bright, Hunter) => elems(
            &["dramatic rim light", "high contrast key", "star-like highlights"],
            &["heroic", "commanding", "kinetic"],
            &["deep night blues", "burnished gold", "ember orange"],
        ),
        (Bright, Animal) => elems(
            &["brilliant key light", "glinting highlights", "strong silhouettes"],
            &["wild", "vigilant", "untamed"],
            &["midnight blue", "silver white", "amber"],
        ),
        (Bright, Figure) => elems(
            &["radiant backlight", "twin highlights", "sculpted shadows"],
            &["noble", "serene", "larger than life"],
            &["royal blue", "pale gold", "ivory"],
        ),
        (Bright, Geometric) => elems(
            &["symmetric four-point lighting", "crisp specular accents", "centered glow"],
            &["formal", "ordered", "monumental"],
            &["cobalt", "chrome silver", "white gold"],
        ),
        (Moderate, Hunter) => elems(
            &["balanced key and fill", "selective rim accents"],
            &["determined", "watchful"],
            &["slate blue", "bronze", "muted crimson"],
        ),
        (Moderate, Animal) => elems(
            &["soft directional light", "gentle highlights"],
            &["quiet strength", "poised"],
            &["dusk purple", "warm gray", "honey"],
        ),
        (Moderate, Figure) => elems(
            &["diffuse frontal light", "subtle halo"],
            &["contemplative", "graceful"],
            &["lavender", "soft silver", "rose"],
        ),
        (Moderate, Geometric) => elems(
            &["even ambient light", "thin edge highlights"],
            &["calm", "measured"],
            &["steel blue", "pewter", "faded gold"],
        ),
        (Faint, Hunter) => elems(
            &["low-key moonlight", "deep shadow pools"],
            &["mysterious", "lurking"],
            &["charcoal", "indigo", "dim copper"],
        ),
        (Faint, Animal) => elems(
            &["soft ambient glow", "diffuse starlight"],
            &["elusive", "tender"],
            &["misty gray", "pale violet", "dusty blue"],
        ),
        (Faint, Figure) => elems(
            &["candle-soft illumination", "veiled highlights"],
            &["wistful", "dreamlike"],
            &["smoke", "faded lilac", "moonstone"],
        ),
        (Faint, Geometric) => elems(
            &["soft ambient glow", "barely-there accents"],
            &["minimal", "austere"],
            &["ash gray", "cold blue", "ghost white"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [BrightnessTier; 3] = [
        BrightnessTier::Faint,
        BrightnessTier::Moderate,
        BrightnessTier::Bright,
    ];
    const CLASSES: [ShapeClass; 4] = [
        ShapeClass::Hunter,
        ShapeClass::Animal,
        ShapeClass::Figure,
        ShapeClass::Geometric,
    ];

    #[test]
    fn test_every_pair_is_populated() {
        for tier in TIERS {
            for class in CLASSES {
                let s = suggested_elements(tier, class);
                assert!(!s.lighting.is_empty(), "{tier:?}/{class:?} lighting empty");
                assert!(!s.mood.is_empty(), "{tier:?}/{class:?} mood empty");
                assert!(!s.palette_hints.is_empty(), "{tier:?}/{class:?} palette empty");
            }
        }
    }

    #[test]
    fn test_spec_examples() {
        let bright_hunter = suggested_elements(BrightnessTier::Bright, ShapeClass::Hunter);
        assert!(bright_hunter.lighting.iter().any(|l| l == "dramatic rim light"));

        let faint_geometric = suggested_elements(BrightnessTier::Faint, ShapeClass::Geometric);
        assert!(faint_geometric.lighting.iter().any(|l| l == "soft ambient glow"));
    }

    #[test]
    fn test_deterministic() {
        let a = suggested_elements(BrightnessTier::Moderate, ShapeClass::Figure);
        let b = suggested_elements(BrightnessTier::Moderate, ShapeClass::Figure);
        assert_eq!(a, b);
    }
}
