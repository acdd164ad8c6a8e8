// tests/motor_tests.rs
//
// Rigid motions: rotation, translation, and screw motors applied to points
// through the sandwich product.

use pga_engine::prelude::*;

const EPS: f32 = 1e-5;

fn assert_close(got: f32, want: f32, ctx: &str) {
    assert!(
        (got - want).abs() <= EPS * (1.0 + want.abs()),
        "{ctx}: got {got}, want {want}"
    );
}

/// Apply `m` to `p` as `m * p * !m` and read back Euclidean coordinates.
/// The sandwich of a motor and a point lands in the odd shape L0|L3; for a
/// true rigid motion the L0 lane is numerically zero.
fn apply(m: Motor, p: Point) -> (f32, f32, f32, f32) {
    let moved = m * p * !m;
    assert_eq!(moved.mask(), 0b1001);
    for v in [moved.e0(), moved.e1(), moved.e2(), moved.e3()] {
        assert_close(v, 0.0, "grade-1 residue");
    }
    (moved.e032(), moved.e013(), moved.e021(), moved.e123())
}

#[test]
fn identity_motor_fixes_every_point() {
    let id = motor(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for (x, y, z) in [(0.0, 0.0, 0.0), (1.0, 2.0, 3.0), (-2.5, 0.5, 4.0)] {
        let (gx, gy, gz, gw) = apply(id, point(x, y, z));
        assert_eq!(gx, x);
        assert_eq!(gy, y);
        assert_eq!(gz, z);
        assert_eq!(gw, 1.0);
    }
}

#[test]
fn rotation_motor_turns_about_the_z_axis() {
    // Quarter turn: cos(45°) + sin(45°) e12.
    let half = std::f32::consts::FRAC_PI_4;
    let m = motor(half.cos(), half.sin(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    let (x, y, z, w) = apply(m, point(1.0, 0.0, 0.0));
    assert_close(x, 0.0, "x");
    assert_close(y, -1.0, "y");
    assert_close(z, 0.0, "z");
    assert_close(w, 1.0, "w");

    // The z axis is fixed.
    let (x, y, z, w) = apply(m, point(0.0, 0.0, 2.0));
    assert_close(x, 0.0, "x");
    assert_close(y, 0.0, "y");
    assert_close(z, 2.0, "z");
    assert_close(w, 1.0, "w");
}

#[test]
fn translation_motor_shifts_points() {
    // 1 - (d/2) e03 translates by d along z; here d = 2.
    let m = motor(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0);
    let (x, y, z, w) = apply(m, point(1.0, 2.0, 3.0));
    assert_close(x, 1.0, "x");
    assert_close(y, 2.0, "y");
    assert_close(z, 5.0, "z");
    assert_close(w, 1.0, "w");
}

#[test]
fn screw_motor_composes_rotation_and_translation() {
    let half = std::f32::consts::FRAC_PI_4;
    let rot = motor(half.cos(), half.sin(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let tr = motor(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0);
    let m = tr * rot;
    assert_eq!(m.mask(), 0b0110);

    // Composition in one motor equals applying the parts in sequence.
    let (x, y, z, w) = apply(m, point(1.0, 2.0, 3.0));
    assert_close(x, 2.0, "x");
    assert_close(y, -1.0, "y");
    assert_close(z, 5.0, "z");
    assert_close(w, 1.0, "w");
}

#[test]
fn unit_motor_times_its_reverse_is_one() {
    let half = 0.3f32;
    let m = motor(half.cos(), 0.0, half.sin(), 0.0, 0.0, 0.0, 0.0, 0.0);
    let n = m * !m;
    assert_close(n.scalar(), 1.0, "scalar");
    assert_close(n.e12(), 0.0, "e12");
    assert_close(n.e31(), 0.0, "e31");
    assert_close(n.e23(), 0.0, "e23");
    assert_close(n.e0123(), 0.0, "e0123");
    assert_close(n.e01(), 0.0, "e01");
    assert_close(n.e02(), 0.0, "e02");
    assert_close(n.e03(), 0.0, "e03");
}

#[test]
fn unit_motor_sandwich_preserves_weight() {
    let half = 0.7f32;
    let rot = motor(half.cos(), 0.0, 0.0, half.sin(), 0.0, 0.0, 0.0, 0.0);
    let tr = motor(1.0, 0.0, 0.0, 0.0, 0.0, 0.5, -1.25, 2.0);
    let m = rot * tr;
    for (x, y, z) in [(1.0, 0.0, 0.0), (0.25, -4.0, 2.0), (-3.0, 1.5, -0.5)] {
        let (_, _, _, w) = apply(m, point(x, y, z));
        assert_close(w, 1.0, "weight");
    }
}
