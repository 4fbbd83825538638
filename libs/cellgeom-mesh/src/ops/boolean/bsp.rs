//! # BSP Tree
//!
//! Binary space partitioning tree over convex polygons.
//!
//! Every traversal uses an explicit stack so deep trees built from finely
//! tessellated solids cannot overflow the call stack. `Drop` is iterative
//! for the same reason.

use super::plane::{Plane, Split};
use super::polygon::Polygon;

/// Node of a BSP tree. A node without a plane is an empty tree.
#[derive(Debug, Default)]
pub(crate) struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from `polygons`.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons, splitting them by the planes they meet.
    ///
    /// A node takes its plane from the first polygon it receives.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }
            let BspNode {
                plane,
                polygons: coplanar,
                front,
                back,
            } = node;
            let plane = *plane.get_or_insert(polygons[0].plane);

            let mut front_list = Vec::new();
            let mut back_list = Vec::new();
            for polygon in polygons {
                match plane.split_polygon(polygon) {
                    Split::CoplanarFront(p) | Split::CoplanarBack(p) => coplanar.push(p),
                    Split::Front(p) => front_list.push(p),
                    Split::Back(p) => back_list.push(p),
                    Split::Spanning { front: f, back: b } => {
                        front_list.extend(f);
                        back_list.extend(b);
                    }
                }
            }

            if !front_list.is_empty() {
                let child = front.get_or_insert_with(Box::default);
                stack.push((&mut **child, front_list));
            }
            if !back_list.is_empty() {
                let child = back.get_or_insert_with(Box::default);
                stack.push((&mut **child, back_list));
            }
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut kept = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                kept.extend(polygons);
                continue;
            };

            let mut front_list = Vec::new();
            let mut back_list = Vec::new();
            for polygon in polygons {
                match plane.split_polygon(polygon) {
                    Split::CoplanarFront(p) | Split::Front(p) => front_list.push(p),
                    Split::CoplanarBack(p) | Split::Back(p) => back_list.push(p),
                    Split::Spanning { front, back } => {
                        front_list.extend(front);
                        back_list.extend(back);
                    }
                }
            }

            match node.front.as_deref() {
                Some(child) => stack.push((child, front_list)),
                None => kept.extend(front_list),
            }
            // Behind a leaf is solid; those pieces are dropped.
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back_list));
            }
        }
        kept
    }

    /// Clips every polygon in this tree against `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            let BspNode {
                polygons, front, back, ..
            } = node;
            *polygons = other.clip_polygons(std::mem::take(polygons));
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Turns the solid inside out.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;
            polygons.iter_mut().for_each(Polygon::flip);
            if let Some(plane) = plane {
                plane.flip();
            }
            std::mem::swap(front, back);
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Collects every polygon in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        result
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    /// Outward-facing quads of the unit cube at the origin.
    fn cube_polygons(offset: DVec3) -> Vec<Polygon> {
        let c = |x: f64, y: f64, z: f64| DVec3::new(x, y, z) + offset;
        let faces = [
            [c(0., 0., 0.), c(0., 0., 1.), c(0., 1., 1.), c(0., 1., 0.)],
            [c(1., 0., 0.), c(1., 1., 0.), c(1., 1., 1.), c(1., 0., 1.)],
            [c(0., 0., 0.), c(1., 0., 0.), c(1., 0., 1.), c(0., 0., 1.)],
            [c(0., 1., 0.), c(0., 1., 1.), c(1., 1., 1.), c(1., 1., 0.)],
            [c(0., 0., 0.), c(0., 1., 0.), c(1., 1., 0.), c(1., 0., 0.)],
            [c(0., 0., 1.), c(1., 0., 1.), c(1., 1., 1.), c(0., 1., 1.)],
        ];
        faces.iter().filter_map(|f| Polygon::new(f.to_vec())).collect()
    }

    #[test]
    fn test_build_keeps_all_polygons() {
        let tree = BspNode::new(cube_polygons(DVec3::ZERO));
        assert_eq!(tree.all_polygons().len(), 6);
    }

    #[test]
    fn test_empty_tree_keeps_everything() {
        let tree = BspNode::default();
        assert_eq!(tree.clip_polygons(cube_polygons(DVec3::ZERO)).len(), 6);
    }

    #[test]
    fn test_clip_removes_inside() {
        let tree = BspNode::new(cube_polygons(DVec3::ZERO));
        let inside = Polygon::new(vec![
            DVec3::new(0.2, 0.2, 0.5),
            DVec3::new(0.8, 0.2, 0.5),
            DVec3::new(0.5, 0.8, 0.5),
        ])
        .unwrap();
        let outside = Polygon::new(vec![
            DVec3::new(2.0, 0.2, 0.5),
            DVec3::new(3.0, 0.2, 0.5),
            DVec3::new(2.5, 0.8, 0.5),
        ])
        .unwrap();
        let kept = tree.clip_polygons(vec![inside, outside]);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].vertices[0].x >= 2.0);
    }

    #[test]
    fn test_invert_flips_normals() {
        let mut tree = BspNode::new(cube_polygons(DVec3::ZERO));
        tree.invert();
        let center = DVec3::splat(0.5);
        for polygon in tree.all_polygons() {
            assert!(polygon.plane.distance(center) > 0.0);
        }
    }

    #[test]
    fn test_deep_tree_drop() {
        // Thin parallel slabs produce a degenerate, list-like tree.
        let polygons: Vec<Polygon> = (0..3_000)
            .filter_map(|i| {
                let z = i as f64;
                Polygon::new(vec![DVec3::new(0.0, 0.0, z), DVec3::new(1.0, 0.0, z), DVec3::new(0.0, 1.0, z)])
            })
            .collect();
        let tree = BspNode::new(polygons);
        assert_eq!(tree.all_polygons().len(), 3_000);
        drop(tree);
    }
}
