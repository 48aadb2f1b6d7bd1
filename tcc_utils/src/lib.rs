pub use tcc_utils_derive::trace_instrument;

/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// The expression is matched by reference, so it can still be used after the
/// assertion.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $pred:expr)? $(,)?) => {{
        let val = $expr;
        #[allow(unused_variables, reason = "bindings may only be used by the guard")]
        let matched = ::core::matches!(&val, $pat $(if $pred)?);
        if !matched {
            ::core::panic!(
                "Assertion failed: Value {val:?} does not match {}",
                ::core::stringify!($pat $(if $pred)?)
            );
        }
    }};
}
