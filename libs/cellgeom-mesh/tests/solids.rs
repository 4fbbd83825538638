use approx::assert_relative_eq;
use cellgeom_eval::surfaces::{Axis, SurfaceKind};
use cellgeom_eval::{contains, Deck, EvalError, UnboundReferenceError};
use cellgeom_mesh::{to_solid, to_solids, MeshError, SharedSolidCache, Solid, SolidCache, SolidMemo, Universe};
use cellgeom_parser::parse;
use config::constants::GeometryConfig;
use glam::DVec3;

fn universe() -> Universe {
    Universe::new(GeometryConfig::new(16, 10.0).unwrap()).unwrap()
}

/// Surface 1: unit sphere at the origin, 2: unit sphere at x = 5,
/// 3: plane z = 0, 4: cylinder along z of radius 0.5.
fn deck() -> Deck {
    let mut deck = Deck::new();
    deck.add_surface(1, SurfaceKind::sphere(DVec3::ZERO, 1.0));
    deck.add_surface(2, SurfaceKind::sphere(DVec3::new(5.0, 0.0, 0.0), 1.0));
    deck.add_surface(3, SurfaceKind::axis_plane(Axis::Z, 0.0));
    deck.add_surface(4, SurfaceKind::cylinder(Axis::Z, DVec3::ZERO, 0.5));
    deck
}

fn build(text: &str, deck: &Deck, universe: &Universe) -> Result<Solid, MeshError> {
    to_solid(&parse(text).unwrap(), deck, deck, &mut SolidCache::new(), universe)
}

#[test]
fn ball_is_bounded_and_outside_is_not() {
    let (deck, universe) = (deck(), universe());
    assert!(universe.is_bounded(&build("-1", &deck, &universe).unwrap()));
    assert!(!universe.is_bounded(&build("1", &deck, &universe).unwrap()));
}

#[test]
fn hemisphere_from_ball_and_plane() {
    let (deck, universe) = (deck(), universe());
    let ball = build("-1", &deck, &universe).unwrap();
    let dome = build("-1 3", &deck, &universe).unwrap();
    let (min, max) = dome.bounding_box().unwrap();
    assert!(min.z.abs() < 1e-9);
    assert!(max.z > 0.95 && max.z <= 1.0);
    assert_relative_eq!(dome.volume(), ball.volume() / 2.0, max_relative = 1e-6);
}

#[test]
fn union_of_disjoint_balls() {
    let (deck, universe) = (deck(), universe());
    let ball = build("-1", &deck, &universe).unwrap();
    let pair = build("-1 : -2", &deck, &universe).unwrap();
    assert_relative_eq!(pair.volume(), 2.0 * ball.volume(), max_relative = 1e-6);
    let (min, max) = pair.bounding_box().unwrap();
    assert!(min.x < -0.9 && max.x > 5.9);
}

#[test]
fn ball_minus_cylinder() {
    let (deck, universe) = (deck(), universe());
    let ball = build("-1", &deck, &universe).unwrap();
    let bored = build("-1 4", &deck, &universe).unwrap();
    assert!(bored.volume() < ball.volume());
    assert!(bored.volume() > 0.0);
    assert!(universe.is_bounded(&bored));
}

#[test]
fn complement_of_unbounded_half_space_is_unsupported() {
    let (deck, universe) = (deck(), universe());
    let err = build("#(1)", &deck, &universe).unwrap_err();
    assert!(matches!(err, MeshError::Eval(EvalError::UnsupportedOperation(_))));
    assert!(build("#(3)", &deck, &universe).unwrap_err().is_unsupported());
}

#[test]
fn complement_of_bounded_cell() {
    let (mut deck, universe) = (deck(), universe());
    deck.add_cell(10, "-1").unwrap();
    let outside = build("#10", &deck, &universe).unwrap();
    let ball = build("-1", &deck, &universe).unwrap();
    assert!(!universe.is_bounded(&outside));
    assert_relative_eq!(outside.volume() + ball.volume(), 8000.0, max_relative = 1e-9);
    // Same region as the positive side of the sphere.
    let positive = build("1", &deck, &universe).unwrap();
    assert_relative_eq!(outside.volume(), positive.volume(), max_relative = 1e-9);
}

#[test]
fn complement_twice_is_unsupported() {
    let (mut deck, universe) = (deck(), universe());
    deck.add_cell(10, "-1").unwrap();
    deck.add_cell(11, "#10").unwrap();
    assert!(build("#11", &deck, &universe).unwrap_err().is_unsupported());
}

#[test]
fn cyclic_cells_are_rejected() {
    let (mut deck, universe) = (deck(), universe());
    deck.add_cell(1, "#1").unwrap();
    let err = build("-1 #1", &deck, &universe).unwrap_err();
    assert!(err.is_unsupported());
    assert!(err.to_string().contains("1 -> 1"), "{err}");
}

#[test]
fn unbound_references() {
    let (deck, universe) = (deck(), universe());
    assert_eq!(
        build("-1 -7", &deck, &universe).unwrap_err(),
        MeshError::from(UnboundReferenceError::surface(7))
    );
    assert_eq!(
        build("#7", &deck, &universe).unwrap_err(),
        MeshError::from(UnboundReferenceError::cell(7))
    );
}

#[test]
fn cache_spans_cells() {
    let (mut deck, universe) = (deck(), universe());
    deck.add_cell(1, "-1 3").unwrap();
    deck.add_cell(2, "-1 -3").unwrap();
    let mut cache = SolidCache::new();
    for (_, geometry) in deck.cells() {
        to_solid(geometry, &deck, &deck, &mut cache, &universe).unwrap();
    }
    let stats = cache.stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 1);
}

#[test]
fn solid_agrees_with_containment() {
    let (deck, universe) = (deck(), universe());
    let geometry = parse("-1 3 : -2").unwrap();
    let solid = to_solid(&geometry, &deck, &deck, &mut SolidCache::new(), &universe).unwrap();
    let (min, max) = solid.bounding_box().unwrap();
    for point in [DVec3::new(0.0, 0.0, 0.5), DVec3::new(5.0, 0.0, -0.5)] {
        assert!(contains(&geometry, point, &deck, &deck).unwrap());
        assert!(point.cmpge(min).all() && point.cmple(max).all());
    }
    assert!(!contains(&geometry, DVec3::new(0.0, 0.0, -0.5), &deck, &deck).unwrap());
}

#[test]
fn parallel_build_shares_cache() {
    let (mut deck, universe) = (deck(), universe());
    deck.add_cell(1, "-1 3").unwrap();
    deck.add_cell(2, "-1 -3").unwrap();
    deck.add_cell(3, "-2").unwrap();
    deck.add_cell(4, "-9").unwrap();
    let geometries: Vec<_> = deck.cells().map(|(_, geometry)| geometry).collect();
    let mut cache = SharedSolidCache::new();

    let results = to_solids(&geometries, &deck, &deck, &cache, &universe);
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert!(results[3].as_ref().unwrap_err().is_unbound());
    assert_eq!(cache.len(), 4);
    assert!(cache.lookup(cellgeom_mesh::SolidKey::new(1, cellgeom_parser::Sense::Negative)).is_some());
}
