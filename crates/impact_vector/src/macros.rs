//! Macros implementing operator traits for every supported arity at once.
//!
//! The implementations are generic over a const parameter named `N`, which
//! the type arguments may refer to (e.g. `Vector<N>`).

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, const N: usize> ::std::ops::$op<&'a $tr> for &'a $tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for &$tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, const N: usize> ::std::ops::$op<&'a $tr> for $tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for $tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<const N: usize> ::std::ops::$op for &$t
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op for $t
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<const N: usize> ::std::ops::$op<&$tr> for $tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<const N: usize> ::std::ops::$op<$tr> for $tl
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<const N: usize> ::approx::AbsDiffEq for $t
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<const N: usize> ::approx::RelativeEq for $t
        where
            $crate::arity::Arity<N>: $crate::arity::SupportedArity,
        {
            fn default_max_relative() -> Self::Epsilon {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
