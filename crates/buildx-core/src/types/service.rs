//! Fabrication service kinds offered by the portal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fabrication service an order is placed against.
///
/// The service determines which material catalog is active, which process
/// fields of a [`super::PartConfiguration`] are meaningful, and which file
/// formats the upload step advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// 3D printing (FDM/SLA).
    #[serde(rename = "3d-printing")]
    AdditiveManufacturing,
    /// CNC machining.
    #[serde(rename = "cnc-cutting")]
    SubtractiveMachining,
    /// Laser cutting of sheet stock.
    #[serde(rename = "laser-cutting")]
    LaserCutting,
}

impl ServiceKind {
    /// All service kinds, in portal display order.
    pub const ALL: [ServiceKind; 3] = [
        Self::AdditiveManufacturing,
        Self::SubtractiveMachining,
        Self::LaserCutting,
    ];

    /// The stable machine-readable slug used in order payloads.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AdditiveManufacturing => "3d-printing",
            Self::SubtractiveMachining => "cnc-cutting",
            Self::LaserCutting => "laser-cutting",
        }
    }

    /// Human-readable service name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AdditiveManufacturing => "3D Printing",
            Self::SubtractiveMachining => "CNC Cutting",
            Self::LaserCutting => "Laser Cutting",
        }
    }

    /// File formats advertised for this service in the upload step.
    pub fn format_hint(&self) -> &'static [&'static str] {
        match self {
            Self::AdditiveManufacturing => &["stl", "obj", "3mf"],
            Self::SubtractiveMachining => &["step", "stp", "dxf", "dwg"],
            Self::LaserCutting => &["dxf", "svg", "pdf", "ai"],
        }
    }

    /// Estimated production turnaround shown on the review summary.
    pub fn production_time(&self) -> &'static str {
        match self {
            Self::AdditiveManufacturing => "2-3 business days",
            Self::SubtractiveMachining => "3-5 business days",
            Self::LaserCutting => "1-2 business days",
        }
    }

    /// Whether the additive process fields (infill, layer height) apply.
    ///
    /// When `false`, the sheet/stock thickness field applies instead.
    pub fn uses_additive_fields(&self) -> bool {
        matches!(self, Self::AdditiveManufacturing)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
