macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to val-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_val_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_ref_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<&$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to val-ref
                $imp::$method(self.clone(), other)
            }
        }
    };
}

macro_rules! forward_ref_ref_binop_commutative {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<&$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to val-ref, cloning the larger operand
                if self.data.len() >= other.data.len() {
                    $imp::$method(self.clone(), other)
                } else {
                    $imp::$method(other.clone(), self)
                }
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop_commutative {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to val-ref, with the larger buffer on the left
                $imp::$method(other, self)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<&$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_val_assign {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                self.$method(&other);
            }
        }
    };
}

/// Forward everything to val-ref, commutatively.
macro_rules! forward_all_binop_to_val_ref_commutative {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_ref_binop_commutative!(impl $imp for $res, $method);
        forward_ref_val_binop_commutative!(impl $imp for $res, $method);
    };
}

/// Forward everything to ref-ref, for operations that always allocate.
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop_to_ref_ref!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

/// Arithmetic between a big integer and a primitive, by promoting the
/// primitive first.
macro_rules! promote_scalar_binops {
    ($res:ty; $($scalar:ty),* $(,)?) => {$(
        promote_scalar_binop!(impl Add<$scalar> for $res, add, AddAssign, add_assign);
        promote_scalar_binop!(impl Sub<$scalar> for $res, sub, SubAssign, sub_assign);
        promote_scalar_binop!(impl Mul<$scalar> for $res, mul, MulAssign, mul_assign);
        promote_scalar_binop!(impl Div<$scalar> for $res, div, DivAssign, div_assign);
        promote_scalar_binop!(impl Rem<$scalar> for $res, rem, RemAssign, rem_assign);
    )*};
}

macro_rules! promote_scalar_binop {
    (impl $imp:ident<$scalar:ty> for $res:ty, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl core::ops::$imp<$scalar> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $scalar) -> $res {
                core::ops::$imp::$method(self, <$res>::from(other))
            }
        }

        impl core::ops::$imp<$scalar> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $scalar) -> $res {
                core::ops::$imp::$method(self, <$res>::from(other))
            }
        }

        impl core::ops::$imp<$res> for $scalar {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                core::ops::$imp::$method(<$res>::from(self), other)
            }
        }

        impl core::ops::$imp<&$res> for $scalar {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                core::ops::$imp::$method(<$res>::from(self), other)
            }
        }

        impl core::ops::$imp_assign<$scalar> for $res {
            #[inline]
            fn $method_assign(&mut self, other: $scalar) {
                core::ops::$imp_assign::$method_assign(self, <$res>::from(other));
            }
        }
    };
}

macro_rules! impl_sum_iter_type {
    ($res:ty) => {
        impl<T> core::iter::Sum<T> for $res
        where
            $res: core::ops::Add<T, Output = $res>,
        {
            fn sum<I>(iter: I) -> Self
            where
                I: Iterator<Item = T>,
            {
                iter.fold(num_traits::Zero::zero(), |acc, x| acc + x)
            }
        }
    };
}

macro_rules! impl_product_iter_type {
    ($res:ty) => {
        impl<T> core::iter::Product<T> for $res
        where
            $res: core::ops::Mul<T, Output = $res>,
        {
            fn product<I>(iter: I) -> Self
            where
                I: Iterator<Item = T>,
            {
                iter.fold(num_traits::One::one(), |acc, x| acc * x)
            }
        }
    };
}
