use netb_net::{rank_of_rows, BitMatrix, EchelonBasis, Gf2Poly};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rank_never_exceeds_shape(rows in proptest::collection::vec(any::<u64>(), 0..12), cols in 1usize..16) {
        let matrix = BitMatrix::from_rows(cols, rows.clone());
        prop_assert!(matrix.rank() <= rows.len().min(cols));
    }

    #[test]
    fn echelon_basis_agrees_with_rank(rows in proptest::collection::vec(0u64..(1 << 10), 0..12)) {
        let mut basis = EchelonBasis::new();
        for &row in &rows {
            basis.insert(row);
        }
        prop_assert_eq!(basis.len(), rank_of_rows(&rows, 10));
    }

    #[test]
    fn multiplication_mod_primitive_is_commutative(a in 0u64..256, b in 0u64..256) {
        let modulus = Gf2Poly::from_bits(0b1_0001_1101);
        let lhs = Gf2Poly::from_bits(a).mul_mod(Gf2Poly::from_bits(b), modulus);
        let rhs = Gf2Poly::from_bits(b).mul_mod(Gf2Poly::from_bits(a), modulus);
        prop_assert_eq!(lhs, rhs);
        prop_assert!(lhs.degree().map_or(true, |d| d < 8));
    }
}
