//! The closed set of shape-type tags a shapefile may carry.

use std::fmt;

/// Shape-type tag found in file headers and at the start of every record.
///
/// The set is closed: any other 32-bit value is a hard decode failure.
/// Only [`ShapeType::Null`] and [`ShapeType::Point`] have geometry decoders;
/// the remaining variants are recognized so they can be reported as
/// unsupported rather than invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    Polyline = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolylineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolylineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl ShapeType {
    /// Every recognized shape type, in ascending tag order.
    pub const ALL: [ShapeType; 14] = [
        ShapeType::Null,
        ShapeType::Point,
        ShapeType::Polyline,
        ShapeType::Polygon,
        ShapeType::MultiPoint,
        ShapeType::PointZ,
        ShapeType::PolylineZ,
        ShapeType::PolygonZ,
        ShapeType::MultiPointZ,
        ShapeType::PointM,
        ShapeType::PolylineM,
        ShapeType::PolygonM,
        ShapeType::MultiPointM,
        ShapeType::MultiPatch,
    ];

    /// Maps a raw tag to its shape type, or `None` if the tag is not one of the fourteen.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Null),
            1 => Some(Self::Point),
            3 => Some(Self::Polyline),
            5 => Some(Self::Polygon),
            8 => Some(Self::MultiPoint),
            11 => Some(Self::PointZ),
            13 => Some(Self::PolylineZ),
            15 => Some(Self::PolygonZ),
            18 => Some(Self::MultiPointZ),
            21 => Some(Self::PointM),
            23 => Some(Self::PolylineM),
            25 => Some(Self::PolygonM),
            28 => Some(Self::MultiPointM),
            31 => Some(Self::MultiPatch),
            _ => None,
        }
    }

    /// The numeric tag as written in the file.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Point => "Point",
            Self::Polyline => "Polyline",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::PointZ => "PointZ",
            Self::PolylineZ => "PolylineZ",
            Self::PolygonZ => "PolygonZ",
            Self::MultiPointZ => "MultiPointZ",
            Self::PointM => "PointM",
            Self::PolylineM => "PolylineM",
            Self::PolygonM => "PolygonM",
            Self::MultiPointM => "MultiPointM",
            Self::MultiPatch => "MultiPatch",
        }
    }

    /// Whether records of this type can be decoded into a [`Shape`](super::models::Shape).
    pub fn is_decodable(self) -> bool {
        matches!(self, Self::Null | Self::Point)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}
