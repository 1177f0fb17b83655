use bevy::math::Vec3;

use simulation::config::GROUND_HALF_EXTENT;

use super::cursor::{ray_ground_hit, within_ground};

#[test]
fn straight_down_ray_hits_below_origin() {
    let hit = ray_ground_hit(Vec3::new(4.0, 10.0, -2.0), Vec3::NEG_Y).unwrap();
    assert_eq!(hit, Vec3::new(4.0, 0.0, -2.0));
}

#[test]
fn angled_ray_hits_where_expected() {
    // From (0,10,0) along (1,-1,0): reaches Y=0 after t=10.
    let dir = Vec3::new(1.0, -1.0, 0.0).normalize();
    let hit = ray_ground_hit(Vec3::new(0.0, 10.0, 0.0), dir).unwrap();
    assert!((hit - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn near_parallel_ray_misses() {
    assert!(ray_ground_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::X).is_none());
    assert!(ray_ground_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1e-4, 0.0)).is_none());
}

#[test]
fn ray_pointing_away_from_plane_misses() {
    // Above the plane looking up: intersection lies behind the origin.
    assert!(ray_ground_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::Y).is_none());
}

#[test]
fn ground_slab_bounds_are_inclusive() {
    assert!(within_ground(Vec3::ZERO));
    assert!(within_ground(Vec3::new(GROUND_HALF_EXTENT, 0.0, -GROUND_HALF_EXTENT)));
    assert!(!within_ground(Vec3::new(GROUND_HALF_EXTENT + 0.1, 0.0, 0.0)));
    assert!(!within_ground(Vec3::new(0.0, 0.0, -GROUND_HALF_EXTENT - 0.1)));
}
