use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use sc_core::{Catalog, ComposeError, CompositionRequest, SearchFilters, compose, search};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::render::{self, Format};

const DEFAULT_CANVAS: u32 = 1024;

/// MCP server over the composition engine. The catalog is immutable after
/// construction, so handlers share it without any locking.
#[derive(Clone)]
pub struct SkyServer {
    catalog: Arc<Catalog>,
    tool_router: ToolRouter<Self>,
}

impl SkyServer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        }
    }
}

fn core_error(e: ComposeError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_text(value: &serde_json::Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchConstellationsRequest {
    /// Free-text search over name, story, theme keywords, and visual character
    query: Option<String>,
    /// Filter by theme keyword substring (e.g. "guidance")
    theme: Option<String>,
    /// Filter by shape class: hunter, animal, figure, geometric
    shape_class: Option<String>,
    /// Filter by brightness tier: faint, moderate, bright — or an
    /// at-least range like "moderate+"
    brightness: Option<String>,
    /// Output format, default markdown
    response_format: Option<Format>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GenerateCompositionRequest {
    /// Constellation name or IAU abbreviation (e.g. "Orion", "UMa")
    constellation_name: String,
    /// Canvas width in pixels, 512-4096, default 1024
    canvas_width: Option<u32>,
    /// Canvas height in pixels, 512-4096, default 1024
    canvas_height: Option<u32>,
    /// Include mythological themes, default true
    include_mythology: Option<bool>,
    /// Output format, default json
    response_format: Option<Format>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListConstellationsRequest {
    /// Output format, default markdown
    response_format: Option<Format>,
}

#[tool_router]
impl SkyServer {
    #[tool(
        name = "search_constellations",
        description = "Search constellations by name, theme, or mythology, with optional shape-class and brightness-tier filters. Name matches rank above theme matches, which rank above story matches. Returns an empty list (not an error) when nothing matches; unknown filter values are rejected."
    )]
    async fn search_constellations(
        &self,
        Parameters(req): Parameters<SearchConstellationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let filters = SearchFilters {
            theme: req.theme,
            shape_class: req.shape_class,
            brightness: req.brightness,
        };
        let hits = search(&self.catalog, req.query.as_deref(), &filters).map_err(core_error)?;

        match req.response_format.unwrap_or(Format::Markdown) {
            Format::Json => Ok(json_text(&render::search_results_json(&hits))),
            Format::Markdown => {
                if hits.is_empty() {
                    return Ok(CallToolResult::success(vec![Content::text(
                        "No constellations found matching your criteria. Try broader search terms.",
                    )]));
                }
                Ok(CallToolResult::success(vec![Content::text(
                    render::search_results_markdown(&hits),
                )]))
            }
        }
    }

    #[tool(
        name = "generate_constellation_composition",
        description = "Derive composition guidance for image generation from a constellation's star geometry and mythology: canvas-relative focal points with brightness weights, a visual-flow classification with reading order, balance and center of mass, and lighting/mood/palette suggestions. Fully deterministic — no model inference — so identical inputs always produce identical output."
    )]
    async fn generate_constellation_composition(
        &self,
        Parameters(req): Parameters<GenerateCompositionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let record = self
            .catalog
            .lookup(&req.constellation_name)
            .map_err(core_error)?;

        let request = CompositionRequest {
            canvas_width: req.canvas_width.unwrap_or(DEFAULT_CANVAS),
            canvas_height: req.canvas_height.unwrap_or(DEFAULT_CANVAS),
            include_mythology: req.include_mythology.unwrap_or(true),
        };
        let result = compose(record, &request).map_err(core_error)?;

        match req.response_format.unwrap_or(Format::Json) {
            Format::Json => Ok(json_text(&render::composition_json(record, &request, &result))),
            Format::Markdown => Ok(CallToolResult::success(vec![Content::text(
                render::composition_markdown(record, &result),
            )])),
        }
    }

    #[tool(
        name = "list_all_constellations",
        description = "List every constellation in the catalog with its abbreviation, themes, shape class, and brightness tier. Useful for browsing available compositional patterns before searching or composing."
    )]
    async fn list_all_constellations(
        &self,
        Parameters(req): Parameters<ListConstellationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        match req.response_format.unwrap_or(Format::Markdown) {
            Format::Json => Ok(json_text(&render::listing_json(&self.catalog))),
            Format::Markdown => Ok(CallToolResult::success(vec![Content::text(
                render::listing_markdown(&self.catalog),
            )])),
        }
    }
}

#[tool_handler]
impl ServerHandler for SkyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Deterministic composition guidance from astronomical constellations.\n\n\
                 WORKFLOW:\n\
                 1. BROWSE or SEARCH: call list_all_constellations for the full catalog, or \
                    search_constellations to find patterns by theme (\"guidance\", \"hunting\"), \
                    shape class, or brightness tier.\n\
                 2. COMPOSE: call generate_constellation_composition with a constellation name and \
                    target canvas size. The result gives canvas-relative focal points (multiply by \
                    width/height for pixels), a suggested reading order, balance classification, \
                    and lighting/mood/palette hints to feed into image-generation prompts.\n\n\
                 All outputs are pure functions of the inputs — no inference, no cost, safe to \
                 cache and to call repeatedly."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_server() -> SkyServer {
        SkyServer::new(Catalog::builtin())
    }

    fn text_from_result(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    fn parse_result(result: &CallToolResult) -> serde_json::Value {
        let text = text_from_result(result);
        serde_json::from_str(&text).expect("handler should return valid JSON")
    }

    #[tokio::test]
    async fn test_generate_composition_json() {
        let server = make_server();
        let result = server
            .generate_constellation_composition(Parameters(GenerateCompositionRequest {
                constellation_name: "Orion".to_string(),
                canvas_width: Some(1920),
                canvas_height: Some(1080),
                include_mythology: Some(true),
                response_format: None,
            }))
            .await
            .unwrap();

        let json = parse_result(&result);
        assert_eq!(json["constellation"], "Orion");
        assert_eq!(json["canvas"]["width"], 1920);

        let focal_points = json["composition"]["focal_points"].as_array().unwrap();
        let weight_sum: f64 = focal_points.iter().map(|fp| fp["weight"].as_f64().unwrap()).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
        assert!(json["composition"]["visual_flow"]["flow_type"].is_string());
        assert!(!json["composition"]["mythology_themes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_composition_defaults() {
        let server = make_server();
        let result = server
            .generate_constellation_composition(Parameters(GenerateCompositionRequest {
                constellation_name: "lyra".to_string(),
                canvas_width: None,
                canvas_height: None,
                include_mythology: None,
                response_format: None,
            }))
            .await
            .unwrap();

        let json = parse_result(&result);
        assert_eq!(json["constellation"], "Lyra");
        assert_eq!(json["canvas"]["width"], 1024);
        assert_eq!(json["canvas"]["height"], 1024);
    }

    #[tokio::test]
    async fn test_generate_composition_unknown_name() {
        let server = make_server();
        let err = server
            .generate_constellation_composition(Parameters(GenerateCompositionRequest {
                constellation_name: "Orionis".to_string(),
                canvas_width: None,
                canvas_height: None,
                include_mythology: None,
                response_format: None,
            }))
            .await
            .unwrap_err();

        assert!(err.message.contains("not found"));
    }

    #[tokio::test]
    async fn test_generate_composition_invalid_dimensions() {
        let server = make_server();
        let err = server
            .generate_constellation_composition(Parameters(GenerateCompositionRequest {
                constellation_name: "Orion".to_string(),
                canvas_width: Some(511),
                canvas_height: Some(1080),
                include_mythology: None,
                response_format: None,
            }))
            .await
            .unwrap_err();

        assert!(err.message.contains("511"));
    }

    #[tokio::test]
    async fn test_search_markdown_default() {
        let server = make_server();
        let result = server
            .search_constellations(Parameters(SearchConstellationsRequest {
                query: Some("hunting".to_string()),
                theme: None,
                shape_class: None,
                brightness: None,
                response_format: None,
            }))
            .await
            .unwrap();

        let text = text_from_result(&result);
        assert!(text.contains("Found"));
        assert!(text.contains("Orion") || text.contains("Canis Major"));
    }

    #[tokio::test]
    async fn test_search_no_match_is_not_error() {
        let server = make_server();
        let result = server
            .search_constellations(Parameters(SearchConstellationsRequest {
                query: Some("zzznonexistent".to_string()),
                theme: None,
                shape_class: None,
                brightness: None,
                response_format: Some(Format::Json),
            }))
            .await
            .unwrap();

        let json = parse_result(&result);
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_search_invalid_filter_is_error() {
        let server = make_server();
        let err = server
            .search_constellations(Parameters(SearchConstellationsRequest {
                query: None,
                theme: None,
                shape_class: Some("teapot".to_string()),
                brightness: None,
                response_format: None,
            }))
            .await
            .unwrap_err();

        assert!(err.message.contains("teapot"));
    }

    #[tokio::test]
    async fn test_list_all_json() {
        let server = make_server();
        let result = server
            .list_all_constellations(Parameters(ListConstellationsRequest {
                response_format: Some(Format::Json),
            }))
            .await
            .unwrap();

        let json = parse_result(&result);
        let count = json["total_count"].as_u64().unwrap();
        assert_eq!(count as usize, Catalog::builtin().len());
        assert_eq!(
            json["constellations"].as_array().unwrap().len() as u64,
            count
        );
    }

    #[test]
    fn test_tool_registration() {
        let server = make_server();
        let info = server.get_info();
        assert!(info.instructions.is_some());
        assert!(info.capabilities.tools.is_some());
    }
}
