use serde::{Deserialize, Serialize};

use crate::catalog::ConstellationRecord;
use crate::constants::{
    BALANCE_BAND, DIAGONAL_TOLERANCE_DEG, DISPERSED_SPAN, EPSILON, LINEAR_RATIO, MAX_CANVAS,
    MIN_CANVAS, MIN_RADIAL_STARS, RADIAL_TOLERANCE, SCATTER_SPAN,
};
use crate::error::{ComposeError, Result};
use crate::geometry::{self, Point, PrincipalAxis};
use crate::suggest::{SuggestedElements, suggested_elements};

/// Per-call engine input. Canvas dimensions are validated, never clamped;
/// all output geometry stays in the normalized unit square regardless.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub include_mythology: bool,
}

impl CompositionRequest {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            include_mythology: true,
        }
    }
}

/// A canvas-relative visual anchor derived from one star. Coordinates are
/// fractions in [0, 1]; scaling to pixels is the caller's multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Diagonal,
    Radial,
    Converging,
    Scattered,
}

impl FlowType {
    pub fn label(&self) -> &'static str {
        match self {
            FlowType::Diagonal => "diagonal",
            FlowType::Radial => "radial",
            FlowType::Converging => "converging",
            FlowType::Scattered => "scattered",
        }
    }
}

/// Suggested reading order across the focal points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualFlow {
    pub flow_type: FlowType,
    pub path: Vec<FocalPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceType {
    Symmetric,
    WeightedLeft,
    WeightedRight,
    WeightedTop,
    WeightedBottom,
    WeightedTopLeft,
    WeightedTopRight,
    WeightedBottomLeft,
    WeightedBottomRight,
}

impl BalanceType {
    pub fn label(&self) -> &'static str {
        match self {
            BalanceType::Symmetric => "symmetric",
            BalanceType::WeightedLeft => "weighted-left",
            BalanceType::WeightedRight => "weighted-right",
            BalanceType::WeightedTop => "weighted-top",
            BalanceType::WeightedBottom => "weighted-bottom",
            BalanceType::WeightedTopLeft => "weighted-top-left",
            BalanceType::WeightedTopRight => "weighted-top-right",
            BalanceType::WeightedBottomLeft => "weighted-bottom-left",
            BalanceType::WeightedBottomRight => "weighted-bottom-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance_type: BalanceType,
    pub center_of_mass: Point,
}

/// How the figure spreads across the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialDistribution {
    Clustered,
    Linear,
    Dispersed,
    Balanced,
}

impl SpatialDistribution {
    pub fn label(&self) -> &'static str {
        match self {
            SpatialDistribution::Clustered => "clustered",
            SpatialDistribution::Linear => "linear",
            SpatialDistribution::Dispersed => "dispersed",
            SpatialDistribution::Balanced => "balanced",
        }
    }
}

/// The engine's output. Plain value, no hidden state — the presentation
/// layer serializes it without re-deriving any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionResult {
    pub focal_points: Vec<FocalPoint>,
    pub visual_flow: VisualFlow,
    pub balance: Balance,
    pub spatial_distribution: SpatialDistribution,
    /// Empty unless mythology was requested.
    pub mythology_themes: Vec<String>,
    pub suggested_elements: SuggestedElements,
}

/// Derive composition guidance from one record. Pure and total for valid
/// input: same record and request always produce the identical result.
pub fn compose(record: &ConstellationRecord, req: &CompositionRequest) -> Result<CompositionResult> {
    validate_dimensions(req.canvas_width, req.canvas_height)?;
    if record.stars.is_empty() {
        return Err(ComposeError::EmptyGeometry(record.name.clone()));
    }

    // Stage 1: focal points, weights normalized to sum 1
    let total_brightness: f64 = record.stars.iter().map(|s| s.brightness).sum();
    if total_brightness < EPSILON {
        return Err(ComposeError::EmptyGeometry(record.name.clone()));
    }
    let focal_points: Vec<FocalPoint> = record
        .stars
        .iter()
        .map(|s| FocalPoint {
            x: s.x,
            y: s.y,
            weight: s.brightness / total_brightness,
        })
        .collect();

    let points: Vec<Point> = record.stars.iter().map(|s| s.position()).collect();
    let center = geometry::centroid(&points);
    let axis = geometry::principal_axis(&points);

    // Stage 2: visual flow
    let flow_type = classify_flow(&points, center, &axis, req.canvas_width, req.canvas_height);
    let path = order_path(&focal_points, center, &axis, flow_type);

    // Stage 3: balance
    let weights: Vec<f64> = focal_points.iter().map(|f| f.weight).collect();
    let center_of_mass = geometry::weighted_centroid(&points, &weights);
    let balance = Balance {
        balance_type: classify_balance(center_of_mass),
        center_of_mass,
    };

    let spatial_distribution = classify_distribution(&axis, points.len());

    // Stage 4: themes and static suggestions
    let mythology_themes = if req.include_mythology {
        record.themes.clone()
    } else {
        Vec::new()
    };
    let suggested_elements = suggested_elements(record.brightness_tier, record.shape_class);

    Ok(CompositionResult {
        focal_points,
        visual_flow: VisualFlow { flow_type, path },
        balance,
        spatial_distribution,
        mythology_themes,
        suggested_elements,
    })
}

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    let in_range = |v: u32| (MIN_CANVAS..=MAX_CANVAS).contains(&v);
    if in_range(width) && in_range(height) {
        Ok(())
    } else {
        Err(ComposeError::InvalidDimensions { width, height })
    }
}

/// Principal-axis angle in canvas space, folded to [0°, 90°].
/// The normalized direction is scaled by the canvas before the angle is
/// taken, so a unit-square diagonal on a wide canvas reads flatter than 45°.
fn canvas_angle_deg(axis_angle: f64, width: u32, height: u32) -> f64 {
    let dx = axis_angle.cos() * width as f64;
    let dy = axis_angle.sin() * height as f64;
    let mut deg = dy.atan2(dx).to_degrees().abs();
    if deg > 90.0 {
        deg = 180.0 - deg;
    }
    deg
}

/// Classification order honors the spec tie-break: diagonal, then radial,
/// then scattered, with converging as the residual.
fn classify_flow(
    points: &[Point],
    center: Point,
    axis: &PrincipalAxis,
    width: u32,
    height: u32,
) -> FlowType {
    if axis.major_dev > EPSILON {
        let deg = canvas_angle_deg(axis.angle, width, height);
        if (deg - 45.0).abs() <= DIAGONAL_TOLERANCE_DEG {
            return FlowType::Diagonal;
        }
    }
    if points.len() >= MIN_RADIAL_STARS
        && geometry::radial_dispersion(points, center) < RADIAL_TOLERANCE
    {
        return FlowType::Radial;
    }
    if axis.major_dev < SCATTER_SPAN {
        return FlowType::Scattered;
    }
    FlowType::Converging
}

/// Reading order: radial flows read center-outward; everything else reads
/// along the principal axis. Catalog star order breaks projection ties,
/// which `sort_by` preserves (stable).
fn order_path(
    focal_points: &[FocalPoint],
    center: Point,
    axis: &PrincipalAxis,
    flow_type: FlowType,
) -> Vec<FocalPoint> {
    let mut path: Vec<FocalPoint> = focal_points.to_vec();
    match flow_type {
        FlowType::Radial => {
            path.sort_by(|a, b| {
                let da = Point::new(a.x, a.y).distance(center);
                let db = Point::new(b.x, b.y).distance(center);
                da.total_cmp(&db)
            });
        }
        _ => {
            path.sort_by(|a, b| {
                let pa = geometry::project(Point::new(a.x, a.y), center, axis.angle);
                let pb = geometry::project(Point::new(b.x, b.y), center, axis.angle);
                pa.total_cmp(&pb)
            });
        }
    }
    path
}

fn classify_balance(com: Point) -> BalanceType {
    let left = com.x < 0.5 - BALANCE_BAND;
    let right = com.x > 0.5 + BALANCE_BAND;
    let top = com.y < 0.5 - BALANCE_BAND;
    let bottom = com.y > 0.5 + BALANCE_BAND;

    match (left, right, top, bottom) {
        (false, false, false, false) => BalanceType::Symmetric,
        (true, _, false, false) => BalanceType::WeightedLeft,
        (_, true, false, false) => BalanceType::WeightedRight,
        (false, false, true, _) => BalanceType::WeightedTop,
        (false, false, _, true) => BalanceType::WeightedBottom,
        (true, _, true, _) => BalanceType::WeightedTopLeft,
        (_, true, true, _) => BalanceType::WeightedTopRight,
        (true, _, _, true) => BalanceType::WeightedBottomLeft,
        (_, true, _, true) => BalanceType::WeightedBottomRight,
    }
}

fn classify_distribution(axis: &PrincipalAxis, star_count: usize) -> SpatialDistribution {
    if axis.major_dev < SCATTER_SPAN {
        SpatialDistribution::Clustered
    } else if axis.major_dev > EPSILON && axis.minor_dev / axis.major_dev < LINEAR_RATIO {
        SpatialDistribution::Linear
    } else if axis.major_dev > DISPERSED_SPAN && star_count >= 8 {
        SpatialDistribution::Dispersed
    } else {
        SpatialDistribution::Balanced
    }
}
