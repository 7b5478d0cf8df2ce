use delve_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_add_sub_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));
}

#[test]
fn vec3_length_and_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert!(vec3_approx_eq(v.normalized(), Vec3::new(0.6, 0.8, 0.0), 1e-6));
    assert!(approx_eq(Vec3::new(3.0, 100.0, 4.0).horizontal_length(), 5.0, 1e-6));

    // Zero vector normalization is a no-op rather than NaN
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn vec3_floor_handles_negative() {
    let v = Vec3::new(-0.5, 1.5, -2.0);
    assert_eq!(v.floor(), Vec3::new(-1.0, 1.0, -2.0));
}

#[test]
fn aabb_from_center_size() {
    let a = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 1.0));
    assert!(vec3_approx_eq(a.min, Vec3::new(0.0, 0.0, 2.5), 1e-6));
    assert!(vec3_approx_eq(a.max, Vec3::new(2.0, 4.0, 3.5), 1e-6));
    assert!(vec3_approx_eq(a.center(), Vec3::new(1.0, 2.0, 3.0), 1e-6));
}

#[test]
fn aabb_touching_faces_do_not_intersect() {
    let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let c = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
    assert!(!a.intersects(&b));
    assert!(a.intersects(&c));
    assert!(c.intersects(&a));
}

#[test]
fn aabb_corners_cover_all_combinations() {
    let a = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    let corners = a.corners();
    for (i, c) in corners.iter().enumerate() {
        for (j, d) in corners.iter().enumerate() {
            if i != j {
                assert_ne!(c, d);
            }
        }
    }
    assert_eq!(corners[0], a.min);
    assert_eq!(corners[7], a.max);
}
