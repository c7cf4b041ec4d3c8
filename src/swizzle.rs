//! Named component accessors for [`Vector`].
//!
//! `x`, `y`, `z`, `w` read single components and `set_x` .. `set_w` write
//! them. Every same-arity permutation of the component names reads the
//! components in that order (`v.zyx()`) or writes them back (`v.set_zyx(..)`).

use crate::vector::Vector;

macro_rules! components {
    ($n:literal; $($get:ident $set:ident $idx:literal),+ $(,)?) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self[$idx]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self[$idx] = value;
                }
            )+
        }
    };
}

macro_rules! swizzles {
    ($n:literal; $($get:ident $set:ident [$($idx:literal),+]);+ $(;)?) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> Self {
                    Self::from_array([$(self[$idx]),+])
                }

                #[inline]
                pub fn $set(&mut self, value: Self) {
                    for (slot, v) in [$($idx),+].into_iter().zip(value.to_array()) {
                        self[slot] = v;
                    }
                }
            )+
        }
    };
}

components!(2; x set_x 0, y set_y 1);
components!(3; x set_x 0, y set_y 1, z set_z 2);
components!(4; x set_x 0, y set_y 1, z set_z 2, w set_w 3);

swizzles!(2;
    xy set_xy [0, 1];
    yx set_yx [1, 0];
);

swizzles!(3;
    xyz set_xyz [0, 1, 2];
    xzy set_xzy [0, 2, 1];
    yxz set_yxz [1, 0, 2];
    yzx set_yzx [1, 2, 0];
    zxy set_zxy [2, 0, 1];
    zyx set_zyx [2, 1, 0];
);

swizzles!(4;
    xyzw set_xyzw [0, 1, 2, 3];
    xywz set_xywz [0, 1, 3, 2];
    xzyw set_xzyw [0, 2, 1, 3];
    xzwy set_xzwy [0, 2, 3, 1];
    xwyz set_xwyz [0, 3, 1, 2];
    xwzy set_xwzy [0, 3, 2, 1];
    yxzw set_yxzw [1, 0, 2, 3];
    yxwz set_yxwz [1, 0, 3, 2];
    yzxw set_yzxw [1, 2, 0, 3];
    yzwx set_yzwx [1, 2, 3, 0];
    ywxz set_ywxz [1, 3, 0, 2];
    ywzx set_ywzx [1, 3, 2, 0];
    zxyw set_zxyw [2, 0, 1, 3];
    zxwy set_zxwy [2, 0, 3, 1];
    zyxw set_zyxw [2, 1, 0, 3];
    zywx set_zywx [2, 1, 3, 0];
    zwxy set_zwxy [2, 3, 0, 1];
    zwyx set_zwyx [2, 3, 1, 0];
    wxyz set_wxyz [3, 0, 1, 2];
    wxzy set_wxzy [3, 0, 2, 1];
    wyxz set_wyxz [3, 1, 0, 2];
    wyzx set_wyzx [3, 1, 2, 0];
    wzxy set_wzxy [3, 2, 0, 1];
    wzyx set_wzyx [3, 2, 1, 0];
);

#[cfg(test)]
mod tests {
    use crate::{Vector2, Vector3, Vector4};

    #[test]
    fn test_components() {
        let mut v = Vector4::new(1, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        v.set_w(9);
        v.set_x(0);
        assert_eq!(v.to_array(), [0, 2, 3, 9]);
        assert_eq!(Vector2::new(5, 6).y(), 6);
    }

    #[test]
    fn test_swizzle_read() {
        let v = Vector3::new(1, 2, 3);
        assert_eq!(v.zyx().to_array(), [3, 2, 1]);
        assert_eq!(v.yzx().to_array(), [2, 3, 1]);
        assert_eq!(v.xyz(), v);
        assert_eq!(Vector4::new(1, 2, 3, 4).wzyx().to_array(), [4, 3, 2, 1]);
        assert_eq!(Vector2::new(1, 2).yx().to_array(), [2, 1]);
    }

    #[test]
    fn test_swizzle_write() {
        let mut v = Vector3::new(0, 0, 0);
        v.set_zxy(Vector3::new(1, 2, 3));
        // z <- 1, x <- 2, y <- 3
        assert_eq!(v.to_array(), [2, 3, 1]);

        let mut w = Vector4::new(1, 2, 3, 4);
        let reversed = w.wzyx();
        w.set_wzyx(reversed);
        assert_eq!(w.to_array(), [1, 2, 3, 4]);
    }
}
