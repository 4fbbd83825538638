//! # Plane
//!
//! Oriented plane used to partition polygons in the BSP tree.

use super::polygon::Polygon;
use config::constants::PLANE_EPSILON;
use glam::DVec3;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Plane `normal·p = w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

/// Where a polygon ends up relative to a plane.
#[derive(Debug)]
pub(crate) enum Split {
    CoplanarFront(Polygon),
    CoplanarBack(Polygon),
    Front(Polygon),
    Back(Polygon),
    /// Pieces on either side; a piece is `None` when it degenerated.
    Spanning {
        front: Option<Polygon>,
        back: Option<Polygon>,
    },
}

impl Plane {
    /// Plane through three points, wound counter-clockwise.
    ///
    /// `None` when the points are collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if !(length > f64::EPSILON) {
            return None;
        }
        let normal = normal / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverses the orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance of `point`, positive in front.
    #[inline]
    pub fn distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    fn classify(&self, point: DVec3) -> u8 {
        let t = self.distance(point);
        if t < -PLANE_EPSILON {
            BACK
        } else if t > PLANE_EPSILON {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Classifies `polygon`, splitting it when it straddles the plane.
    ///
    /// Pieces keep the original polygon's plane.
    pub fn split_polygon(&self, polygon: Polygon) -> Split {
        let types: Vec<u8> = polygon.vertices.iter().map(|&v| self.classify(v)).collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(polygon.plane.normal) > 0.0 {
                    Split::CoplanarFront(polygon)
                } else {
                    Split::CoplanarBack(polygon)
                }
            }
            FRONT => Split::Front(polygon),
            BACK => Split::Back(polygon),
            _ => {
                let count = polygon.vertices.len();
                let mut front = Vec::with_capacity(count + 1);
                let mut back = Vec::with_capacity(count + 1);
                for i in 0..count {
                    let j = (i + 1) % count;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (polygon.vertices[i], polygon.vertices[j]);
                    if ti != BACK {
                        front.push(vi);
                    }
                    if ti != FRONT {
                        back.push(vi);
                    }
                    if ti | tj == SPANNING {
                        let t = (self.w - self.normal.dot(vi)) / self.normal.dot(vj - vi);
                        let v = vi.lerp(vj, t);
                        front.push(v);
                        back.push(v);
                    }
                }
                let plane = polygon.plane;
                Split::Spanning {
                    front: (front.len() >= 3).then(|| Polygon::with_plane(front, plane)),
                    back: (back.len() >= 3).then(|| Polygon::with_plane(back, plane)),
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
