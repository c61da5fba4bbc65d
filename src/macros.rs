// \file src/macros.rs
//! macros for logging and operator forwarding

/// Trace-level log message, compiled out without the "log" feature
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Implement the by-value forms of a binary operator
///
/// `val op val` and `val op ref` reuse the left operand's storage through
/// the `op_assign` method, `ref op val` forwards to the ref-ref form which
/// must be written by hand.
macro_rules! forward_binop_to_assign {
    (impl[$($params:tt)*] $imp:ident::$method:ident, $assign:ident for $res:ty) => {
        impl<$($params)*> $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(mut self, rhs: $res) -> $res {
                self.$assign(&rhs);
                self
            }
        }

        impl<'a, $($params)*> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(mut self, rhs: &'a $res) -> $res {
                self.$assign(rhs);
                self
            }
        }

        impl<'a, $($params)*> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &rhs)
            }
        }
    };
}
