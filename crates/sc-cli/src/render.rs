//! Presentation layer: JSON and Markdown views over engine results.
//! Both formats are derived from the same value — nothing is re-computed.

use std::fmt::Write;

use sc_core::{Catalog, CompositionRequest, CompositionResult, ConstellationRecord, SearchHit};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Markdown,
}

/// Flat record view for search results and listings.
#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub name: String,
    pub abbreviation: String,
    pub genitive: String,
    pub story: String,
    pub themes: Vec<String>,
    pub visual_character: String,
    pub shape_class: String,
    pub brightness_tier: String,
    pub star_count: usize,
}

impl From<&ConstellationRecord> for RecordSummary {
    fn from(record: &ConstellationRecord) -> Self {
        Self {
            name: record.name.clone(),
            abbreviation: record.abbreviation.clone(),
            genitive: record.genitive.clone(),
            story: record.story.clone(),
            themes: record.themes.clone(),
            visual_character: record.visual_character.clone(),
            shape_class: record.shape_class.label().to_string(),
            brightness_tier: record.brightness_tier.label().to_string(),
            star_count: record.stars.len(),
        }
    }
}

pub fn composition_json(
    record: &ConstellationRecord,
    req: &CompositionRequest,
    result: &CompositionResult,
) -> serde_json::Value {
    serde_json::json!({
        "constellation": record.name,
        "abbreviation": record.abbreviation,
        "canvas": {
            "width": req.canvas_width,
            "height": req.canvas_height,
        },
        "composition": result,
    })
}

pub fn composition_markdown(record: &ConstellationRecord, result: &CompositionResult) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Constellation Composition: {}\n", record.name);
    let _ = writeln!(md, "**Story:** {}\n", record.story);
    let _ = writeln!(md, "**Themes:** {}\n", record.themes.join(", "));
    let _ = writeln!(md, "**Visual Character:** {}\n", record.visual_character);

    let _ = writeln!(md, "## Focal Points\n");
    for (i, fp) in result.focal_points.iter().enumerate() {
        let _ = writeln!(
            md,
            "{}. Position: ({:.2}, {:.2}) - Weight: {:.2}",
            i + 1,
            fp.x,
            fp.y,
            fp.weight
        );
    }

    let _ = writeln!(md, "\n## Visual Flow\n");
    let _ = writeln!(md, "- **Type:** {}", result.visual_flow.flow_type.label());
    let path: Vec<String> = result
        .visual_flow
        .path
        .iter()
        .map(|fp| format!("({:.2}, {:.2})", fp.x, fp.y))
        .collect();
    let _ = writeln!(md, "- **Reading Order:** {}", path.join(" → "));

    let _ = writeln!(md, "\n## Balance\n");
    let _ = writeln!(md, "- **Type:** {}", result.balance.balance_type.label());
    let _ = writeln!(
        md,
        "- **Center of Mass:** ({:.2}, {:.2})",
        result.balance.center_of_mass.x, result.balance.center_of_mass.y
    );

    let _ = writeln!(md, "\n## Spatial Distribution\n");
    let _ = writeln!(md, "{}", result.spatial_distribution.label());

    if !result.mythology_themes.is_empty() {
        let _ = writeln!(md, "\n## Mythology Themes\n");
        for theme in &result.mythology_themes {
            let _ = writeln!(md, "- {theme}");
        }
    }

    let _ = writeln!(md, "\n## Suggested Visual Elements\n");
    for (title, elements) in [
        ("Lighting", &result.suggested_elements.lighting),
        ("Mood", &result.suggested_elements.mood),
        ("Palette Hints", &result.suggested_elements.palette_hints),
    ] {
        let _ = writeln!(md, "### {title}\n");
        for elem in elements {
            let _ = writeln!(md, "- {elem}");
        }
        md.push('\n');
    }

    md
}

pub fn search_results_json(hits: &[SearchHit<'_>]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = hits
        .iter()
        .map(|hit| {
            serde_json::json!({
                "record": RecordSummary::from(hit.record),
                "relevance": hit.score,
            })
        })
        .collect();
    serde_json::json!({
        "constellations": results,
        "count": hits.len(),
    })
}

pub fn search_results_markdown(hits: &[SearchHit<'_>]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Found {} Constellation(s)\n", hits.len());
    for (i, hit) in hits.iter().enumerate() {
        let record = hit.record;
        let _ = writeln!(md, "## {}. {} ({})\n", i + 1, record.name, record.abbreviation);
        let _ = writeln!(md, "**Story:** {}\n", record.story);
        let _ = writeln!(md, "**Themes:** {}\n", record.themes.join(", "));
        let _ = writeln!(md, "**Visual Character:** {}\n", record.visual_character);
        let _ = writeln!(
            md,
            "**Shape:** {} — **Brightness:** {}\n",
            record.shape_class.label(),
            record.brightness_tier.label()
        );
        let _ = writeln!(md, "---\n");
    }
    md
}

pub fn listing_json(catalog: &Catalog) -> serde_json::Value {
    let list: Vec<RecordSummary> = catalog.all().iter().map(RecordSummary::from).collect();
    serde_json::json!({
        "constellations": list,
        "total_count": catalog.len(),
    })
}

pub fn listing_markdown(catalog: &Catalog) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Available Constellations ({})\n", catalog.len());
    for record in catalog.all() {
        let _ = writeln!(md, "## {} ({})\n", record.name, record.abbreviation);
        let _ = writeln!(md, "**Themes:** {}\n", record.themes.join(", "));
        let _ = writeln!(
            md,
            "**Shape:** {} — **Brightness:** {}\n",
            record.shape_class.label(),
            record.brightness_tier.label()
        );
        let _ = writeln!(md, "---\n");
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::{SearchFilters, compose, search};

    #[test]
    fn test_composition_json_shape() {
        let catalog = Catalog::builtin();
        let orion = catalog.lookup("Orion").unwrap();
        let req = CompositionRequest::new(1920, 1080);
        let result = compose(orion, &req).unwrap();

        let json = composition_json(orion, &req, &result);
        assert_eq!(json["constellation"], "Orion");
        assert_eq!(json["abbreviation"], "Ori");
        assert_eq!(json["canvas"]["width"], 1920);
        assert_eq!(
            json["composition"]["focal_points"].as_array().unwrap().len(),
            orion.stars.len()
        );
    }

    #[test]
    fn test_composition_markdown_sections() {
        let catalog = Catalog::builtin();
        let lyra = catalog.lookup("Lyra").unwrap();
        let req = CompositionRequest::new(1024, 1024);
        let result = compose(lyra, &req).unwrap();

        let md = composition_markdown(lyra, &result);
        assert!(md.contains("# Constellation Composition: Lyra"));
        assert!(md.contains("**Visual Character:** Compact parallelogram"));
        assert!(md.contains("## Focal Points"));
        assert!(md.contains("## Visual Flow"));
        assert!(md.contains("## Balance"));
        assert!(md.contains("## Mythology Themes"));
        assert!(md.contains("### Palette Hints"));
    }

    #[test]
    fn test_markdown_omits_empty_mythology() {
        let catalog = Catalog::builtin();
        let lyra = catalog.lookup("Lyra").unwrap();
        let req = CompositionRequest {
            canvas_width: 1024,
            canvas_height: 1024,
            include_mythology: false,
        };
        let result = compose(lyra, &req).unwrap();

        let md = composition_markdown(lyra, &result);
        assert!(!md.contains("## Mythology Themes"));
    }

    #[test]
    fn test_search_results_both_formats() {
        let catalog = Catalog::builtin();
        let hits = search(&catalog, Some("orion"), &SearchFilters::default()).unwrap();

        let json = search_results_json(&hits);
        assert_eq!(json["count"].as_u64().unwrap() as usize, hits.len());
        assert_eq!(json["constellations"][0]["record"]["name"], "Orion");
        assert_eq!(json["constellations"][0]["record"]["genitive"], "Orionis");

        let md = search_results_markdown(&hits);
        assert!(md.contains("Orion (Ori)"));
        assert!(md.contains("**Visual Character:**"));
    }

    #[test]
    fn test_listing_counts() {
        let catalog = Catalog::builtin();
        let json = listing_json(&catalog);
        assert_eq!(json["total_count"].as_u64().unwrap() as usize, catalog.len());

        let md = listing_markdown(&catalog);
        for record in catalog.all() {
            assert!(md.contains(&record.name));
        }
    }
}
