// tests/gp_tests.rs
//
// The geometric product against a dense blade-table reference, plus the
// algebraic laws the product must satisfy.

use pga_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All 16 blade coefficients of an entity, by named accessor. Blades in an
/// absent lane read as zero.
fn blades<const PM: u8>(e: &Entity<PM>) -> [f32; 16]
where
    Mask<PM>: Partitions,
{
    [
        e.scalar(),
        e.e0(),
        e.e1(),
        e.e2(),
        e.e3(),
        e.e01(),
        e.e02(),
        e.e03(),
        e.e12(),
        e.e31(),
        e.e23(),
        e.e021(),
        e.e013(),
        e.e032(),
        e.e123(),
        e.e0123(),
    ]
}

const NAMES: [&str; 16] = [
    "1", "e0", "e1", "e2", "e3", "e01", "e02", "e03", "e12", "e31", "e23", "e021", "e013",
    "e032", "e123", "e0123",
];

/// Generator bitset and orientation of each named blade relative to the
/// ascending-index product of its generators (e31 = -e13, e021 = -e012,
/// e032 = -e023). Bit k of the bitset is generator ek.
const BLADES: [(u8, f32); 16] = [
    (0b0000, 1.0),
    (0b0001, 1.0),
    (0b0010, 1.0),
    (0b0100, 1.0),
    (0b1000, 1.0),
    (0b0011, 1.0),
    (0b0101, 1.0),
    (0b1001, 1.0),
    (0b0110, 1.0),
    (0b1010, -1.0),
    (0b1100, 1.0),
    (0b0111, -1.0),
    (0b1011, 1.0),
    (0b1101, -1.0),
    (0b1110, 1.0),
    (0b1111, 1.0),
];

/// Sign from sorting the concatenation of two ascending generator lists.
fn reorder_sign(a: u8, b: u8) -> f32 {
    let mut sign = 1.0f32;
    for x in 0..4u8 {
        if b & (1 << x) != 0 {
            let higher = a & !((1u8 << (x + 1)) - 1);
            if higher.count_ones() % 2 == 1 {
                sign = -sign;
            }
        }
    }
    sign
}

/// Dense blade-by-blade geometric product over the named-blade coefficients.
fn reference_gp(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for i in 0..16 {
        for j in 0..16 {
            let (bi, si) = BLADES[i];
            let (bj, sj) = BLADES[j];
            if bi & bj & 1 != 0 {
                continue; // shared factor of e0
            }
            let bits = bi ^ bj;
            let k = BLADES.iter().position(|&(bk, _)| bk == bits).unwrap();
            let sk = BLADES[k].1;
            out[k] += a[i] * b[j] * si * sj * sk * reorder_sign(bi, bj);
        }
    }
    out
}

fn r(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() * 4.0 - 2.0
}

fn rand_entity<const PM: u8>(rng: &mut StdRng) -> Entity<PM>
where
    Mask<PM>: Partitions,
{
    let mut full = [F32x4::zero(); 4];
    for lane in full.iter_mut() {
        *lane = F32x4::new(r(rng), r(rng), r(rng), r(rng));
    }
    Entity::from_lanes(full)
}

fn assert_blades_close(got: &[f32; 16], want: &[f32; 16], tol: f32, ctx: &str) {
    for k in 0..16 {
        let bound = tol * (1.0 + want[k].abs());
        assert!(
            (got[k] - want[k]).abs() <= bound,
            "{ctx}: blade {} mismatch: got {}, want {}",
            NAMES[k],
            got[k],
            want[k]
        );
    }
}

#[test]
fn planes_meet_in_their_intersection_line() {
    let p = plane(1.0, 0.0, 0.0, 0.0); // x = 0
    let q = plane(0.0, 1.0, 0.0, 0.0); // y = 0
    let l = p * q;
    assert_eq!(l.mask(), 0b0110);
    assert_eq!(l.scalar(), 0.0);
    assert_eq!(l.e12(), 1.0); // the z axis
    let b = blades(&l);
    for (k, v) in b.iter().enumerate() {
        if NAMES[k] != "e12" {
            assert_eq!(*v, 0.0, "blade {} should vanish", NAMES[k]);
        }
    }
}

#[test]
fn generator_products_follow_the_multiplication_table() {
    let e1 = Entity::from(E1);
    let e2 = Entity::from(E2);
    let e12 = Entity::from(E12);

    assert_eq!((e1 * e1).scalar(), 1.0);
    assert_eq!((e1 * e2).e12(), 1.0);
    assert_eq!((e2 * e1).e12(), -1.0);
    assert_eq!((e12 * e12).scalar(), -1.0);

    let e0 = Entity::from(E0);
    let ee = e0 * e0;
    assert_eq!(blades(&ee), [0.0; 16]);

    // e0 * e1 = e01
    assert_eq!((e0 * e1).e01(), 1.0);
    // e1 * e2 * e3 = e123
    assert_eq!(((e1 * e2) * Entity::from(E3)).e123(), 1.0);
}

#[test]
fn pseudoscalar_squares_to_zero_with_empty_mask() {
    let i = Entity::from(I);
    let ii = i * i;
    // L2 x L2 has no surviving products; the result stores nothing at all.
    assert_eq!(ii.mask(), 0b0000);
    assert_eq!(blades(&ii), [0.0; 16]);

    let il = ideal_line(1.0, 2.0, 3.0);
    assert_eq!((il * il).mask(), 0b0000);
}

#[test]
fn product_mask_matches_contributing_kernels() {
    // Spot checks of the closed form.
    assert_eq!(product_mask(0b0001, 0b0001), 0b0110); // plane * plane
    assert_eq!(product_mask(0b0001, 0b0010), 0b1001);
    assert_eq!(product_mask(0b0110, 0b1000), 0b1001); // motor * point
    assert_eq!(product_mask(0b1001, 0b0110), 0b1001);
    assert_eq!(product_mask(0b0100, 0b0100), 0b0000); // ideal * ideal
    assert_eq!(product_mask(0b0010, 0b0100), 0b0100);
    assert_eq!(product_mask(0b1111, 0b1111), 0b1111);
    assert_eq!(product_mask(0b0000, 0b1111), 0b0000);
}

// Every non-empty mask pair: the lane-kernel product must agree blade-wise
// with the dense reference, and the output mask with the closed form.
#[test]
fn product_agrees_with_dense_reference_for_all_mask_pairs() {
    let mut rng = StdRng::seed_from_u64(0x9a3e_71c5);
    macro_rules! check_pairs {
        ($rng:ident, $(($m1:literal, $m2:literal)),+ $(,)?) => {$({
            let x = rand_entity::<$m1>(&mut $rng);
            let y = rand_entity::<$m2>(&mut $rng);
            let prod = x * y;
            assert_eq!(prod.mask(), product_mask($m1, $m2));
            let want = reference_gp(&blades(&x), &blades(&y));
            assert_blades_close(
                &blades(&prod),
                &want,
                1e-5,
                &format!("masks {:#06b} * {:#06b}", $m1, $m2),
            );
        })+}
    }
    check_pairs! {
        rng,
        (0b0001, 0b0001), (0b0001, 0b0010), (0b0001, 0b0011), (0b0001, 0b0100), (0b0001, 0b0101),
        (0b0001, 0b0110), (0b0001, 0b0111), (0b0001, 0b1000), (0b0001, 0b1001), (0b0001, 0b1010),
        (0b0001, 0b1011), (0b0001, 0b1100), (0b0001, 0b1101), (0b0001, 0b1110), (0b0001, 0b1111),
        (0b0010, 0b0001), (0b0010, 0b0010), (0b0010, 0b0011), (0b0010, 0b0100), (0b0010, 0b0101),
        (0b0010, 0b0110), (0b0010, 0b0111), (0b0010, 0b1000), (0b0010, 0b1001), (0b0010, 0b1010),
        (0b0010, 0b1011), (0b0010, 0b1100), (0b0010, 0b1101), (0b0010, 0b1110), (0b0010, 0b1111),
        (0b0011, 0b0001), (0b0011, 0b0010), (0b0011, 0b0011), (0b0011, 0b0100), (0b0011, 0b0101),
        (0b0011, 0b0110), (0b0011, 0b0111), (0b0011, 0b1000), (0b0011, 0b1001), (0b0011, 0b1010),
        (0b0011, 0b1011), (0b0011, 0b1100), (0b0011, 0b1101), (0b0011, 0b1110), (0b0011, 0b1111),
        (0b0100, 0b0001), (0b0100, 0b0010), (0b0100, 0b0011), (0b0100, 0b0100), (0b0100, 0b0101),
        (0b0100, 0b0110), (0b0100, 0b0111), (0b0100, 0b1000), (0b0100, 0b1001), (0b0100, 0b1010),
        (0b0100, 0b1011), (0b0100, 0b1100), (0b0100, 0b1101), (0b0100, 0b1110), (0b0100, 0b1111),
        (0b0101, 0b0001), (0b0101, 0b0010), (0b0101, 0b0011), (0b0101, 0b0100), (0b0101, 0b0101),
        (0b0101, 0b0110), (0b0101, 0b0111), (0b0101, 0b1000), (0b0101, 0b1001), (0b0101, 0b1010),
        (0b0101, 0b1011), (0b0101, 0b1100), (0b0101, 0b1101), (0b0101, 0b1110), (0b0101, 0b1111),
        (0b0110, 0b0001), (0b0110, 0b0010), (0b0110, 0b0011), (0b0110, 0b0100), (0b0110, 0b0101),
        (0b0110, 0b0110), (0b0110, 0b0111), (0b0110, 0b1000), (0b0110, 0b1001), (0b0110, 0b1010),
        (0b0110, 0b1011), (0b0110, 0b1100), (0b0110, 0b1101), (0b0110, 0b1110), (0b0110, 0b1111),
        (0b0111, 0b0001), (0b0111, 0b0010), (0b0111, 0b0011), (0b0111, 0b0100), (0b0111, 0b0101),
        (0b0111, 0b0110), (0b0111, 0b0111), (0b0111, 0b1000), (0b0111, 0b1001), (0b0111, 0b1010),
        (0b0111, 0b1011), (0b0111, 0b1100), (0b0111, 0b1101), (0b0111, 0b1110), (0b0111, 0b1111),
        (0b1000, 0b0001), (0b1000, 0b0010), (0b1000, 0b0011), (0b1000, 0b0100), (0b1000, 0b0101),
        (0b1000, 0b0110), (0b1000, 0b0111), (0b1000, 0b1000), (0b1000, 0b1001), (0b1000, 0b1010),
        (0b1000, 0b1011), (0b1000, 0b1100), (0b1000, 0b1101), (0b1000, 0b1110), (0b1000, 0b1111),
        (0b1001, 0b0001), (0b1001, 0b0010), (0b1001, 0b0011), (0b1001, 0b0100), (0b1001, 0b0101),
        (0b1001, 0b0110), (0b1001, 0b0111), (0b1001, 0b1000), (0b1001, 0b1001), (0b1001, 0b1010),
        (0b1001, 0b1011), (0b1001, 0b1100), (0b1001, 0b1101), (0b1001, 0b1110), (0b1001, 0b1111),
        (0b1010, 0b0001), (0b1010, 0b0010), (0b1010, 0b0011), (0b1010, 0b0100), (0b1010, 0b0101),
        (0b1010, 0b0110), (0b1010, 0b0111), (0b1010, 0b1000), (0b1010, 0b1001), (0b1010, 0b1010),
        (0b1010, 0b1011), (0b1010, 0b1100), (0b1010, 0b1101), (0b1010, 0b1110), (0b1010, 0b1111),
        (0b1011, 0b0001), (0b1011, 0b0010), (0b1011, 0b0011), (0b1011, 0b0100), (0b1011, 0b0101),
        (0b1011, 0b0110), (0b1011, 0b0111), (0b1011, 0b1000), (0b1011, 0b1001), (0b1011, 0b1010),
        (0b1011, 0b1011), (0b1011, 0b1100), (0b1011, 0b1101), (0b1011, 0b1110), (0b1011, 0b1111),
        (0b1100, 0b0001), (0b1100, 0b0010), (0b1100, 0b0011), (0b1100, 0b0100), (0b1100, 0b0101),
        (0b1100, 0b0110), (0b1100, 0b0111), (0b1100, 0b1000), (0b1100, 0b1001), (0b1100, 0b1010),
        (0b1100, 0b1011), (0b1100, 0b1100), (0b1100, 0b1101), (0b1100, 0b1110), (0b1100, 0b1111),
        (0b1101, 0b0001), (0b1101, 0b0010), (0b1101, 0b0011), (0b1101, 0b0100), (0b1101, 0b0101),
        (0b1101, 0b0110), (0b1101, 0b0111), (0b1101, 0b1000), (0b1101, 0b1001), (0b1101, 0b1010),
        (0b1101, 0b1011), (0b1101, 0b1100), (0b1101, 0b1101), (0b1101, 0b1110), (0b1101, 0b1111),
        (0b1110, 0b0001), (0b1110, 0b0010), (0b1110, 0b0011), (0b1110, 0b0100), (0b1110, 0b0101),
        (0b1110, 0b0110), (0b1110, 0b0111), (0b1110, 0b1000), (0b1110, 0b1001), (0b1110, 0b1010),
        (0b1110, 0b1011), (0b1110, 0b1100), (0b1110, 0b1101), (0b1110, 0b1110), (0b1110, 0b1111),
        (0b1111, 0b0001), (0b1111, 0b0010), (0b1111, 0b0011), (0b1111, 0b0100), (0b1111, 0b0101),
        (0b1111, 0b0110), (0b1111, 0b0111), (0b1111, 0b1000), (0b1111, 0b1001), (0b1111, 0b1010),
        (0b1111, 0b1011), (0b1111, 0b1100), (0b1111, 0b1101), (0b1111, 0b1110), (0b1111, 0b1111),
    }
}

#[test]
fn product_is_bilinear() {
    let mut rng = StdRng::seed_from_u64(0x51d2_0b1a);
    for _ in 0..32 {
        let x: Plane = rand_entity(&mut rng);
        let y: Plane = rand_entity(&mut rng);
        let z: Motor = rand_entity(&mut rng);

        let lhs = (x + y) * z;
        let rhs = x * z + y * z;
        assert_blades_close(&blades(&lhs), &blades(&rhs), 1e-5, "left distributivity");

        let lhs = z * (x - y);
        let rhs = z * x - z * y;
        assert_blades_close(&blades(&lhs), &blades(&rhs), 1e-5, "right distributivity");
    }
}

#[test]
fn product_is_associative() {
    let mut rng = StdRng::seed_from_u64(0x0ddb_a11);
    for _ in 0..32 {
        let x: Multivector = rand_entity(&mut rng);
        let y: Multivector = rand_entity(&mut rng);
        let z: Multivector = rand_entity(&mut rng);
        let lhs = (x * y) * z;
        let rhs = x * (y * z);
        // Two rounding chains over sums of 16-term dot products.
        assert_blades_close(&blades(&lhs), &blades(&rhs), 1e-3, "associativity");
    }
}

#[test]
fn reverse_is_an_antihomomorphism() {
    let mut rng = StdRng::seed_from_u64(0xfeed_5eed);
    for _ in 0..32 {
        let x: Multivector = rand_entity(&mut rng);
        let y: Multivector = rand_entity(&mut rng);
        let lhs = !(x * y);
        let rhs = !y * !x;
        assert_blades_close(&blades(&lhs), &blades(&rhs), 1e-5, "reverse of product");
    }
}
