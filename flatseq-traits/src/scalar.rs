//! Scalar type bounds for element-wise operations.

/// Shared trait bounds for all element types usable with the arithmetic
/// kernels.
///
/// `Element` does **not** require `PartialOrd`, so complex numbers and
/// custom ring types can flow through `add`/`sub`/`mul`/`div`, the fused
/// operations and the matmul kernels. Comparisons and `min`/`max` add the
/// ordering bound themselves.
pub trait Element: Copy + num_traits::Num {}

impl<T> Element for T where T: Copy + num_traits::Num {}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn assert_element<T: Element>() {}

    #[test]
    fn test_standard_types() {
        assert_element::<f32>();
        assert_element::<f64>();
        assert_element::<i32>();
        assert_element::<i64>();
        assert_element::<u8>();
        assert_element::<num_complex::Complex64>();
    }

    #[test]
    fn test_custom_ring_type() {
        // Integers modulo 7, without any ordering.
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Mod7(u8);

        impl std::ops::Add for Mod7 {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Mod7((self.0 + rhs.0) % 7)
            }
        }
        impl std::ops::Sub for Mod7 {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Mod7((self.0 + 7 - rhs.0) % 7)
            }
        }
        impl std::ops::Mul for Mod7 {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Mod7((self.0 * rhs.0) % 7)
            }
        }
        impl std::ops::Div for Mod7 {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                // multiply by the inverse: b^5 == b^-1 (mod 7)
                let mut inv = Mod7(1);
                for _ in 0..5 {
                    inv = inv * rhs;
                }
                self * inv
            }
        }
        impl std::ops::Rem for Mod7 {
            type Output = Self;
            fn rem(self, _rhs: Self) -> Self {
                Mod7(0)
            }
        }
        impl Zero for Mod7 {
            fn zero() -> Self {
                Mod7(0)
            }
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }
        impl One for Mod7 {
            fn one() -> Self {
                Mod7(1)
            }
        }
        impl num_traits::Num for Mod7 {
            type FromStrRadixErr = std::num::ParseIntError;
            fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
                u8::from_str_radix(s, radix).map(|v| Mod7(v % 7))
            }
        }

        assert_element::<Mod7>();
        assert_eq!(Mod7(5) + Mod7(4), Mod7(2));
        assert_eq!(Mod7(3) * Mod7(5), Mod7(1));
        assert_eq!(Mod7(6) / Mod7(3), Mod7(2));
    }
}
