//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The body is written once, for two references.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty => $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl_binop!(@forward $op, $method, $tl, $tr => $to);
    };
    (@forward $op:ident, $method:ident, $tl:ty, $tr:ty => $to:ty) => {
        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $t;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $t;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements a compound assignment operator by delegating to the matching
/// binary operator, so both always agree on which components they touch.
macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $binop:ident, $binop_method:ident, $tl:ty, $tr:ty) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                *self = ::std::ops::$binop::$binop_method(&*self, rhs);
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] by comparing
/// the flat component buffers of two values element by element.
macro_rules! impl_approx_eq {
    ($t:ty, |$this:ident| $components:expr) => {
        impl $t {
            #[inline]
            fn approx_components($this: &Self) -> &[f32] {
                $components
            }
        }

        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                Self::approx_components(self)
                    .iter()
                    .zip(Self::approx_components(other))
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f32::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                Self::approx_components(self)
                    .iter()
                    .zip(Self::approx_components(other))
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}
