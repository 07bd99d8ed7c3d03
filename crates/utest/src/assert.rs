// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registration and soft-assertion macros.
//!
//! Every `check*!` macro takes the body's [`RunnerContext`](crate::RunnerContext)
//! first. A failed check increments the case status, prints the expression
//! text with its source location and lets the body carry on.

/// Register a test case in the process-wide registry.
///
/// ```no_run
/// fn open() {}
///
/// utest::test_case!(plain => |ctx| {
///     utest::check_eq!(ctx, 1 + 1, 2);
/// });
/// utest::test_case!(skipped { ignore: true } => |_ctx| {});
/// utest::test_case!(hooked { setup: open, teardown: || {} } => |_ctx| {});
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:ident => |$ctx:ident| $body:block) => {
        $crate::register(
            stringify!($name),
            move |$ctx: &mut $crate::RunnerContext<'_>| $body,
            $crate::TestOptions::new(),
        )
    };
    ($name:ident { $($key:ident : $value:expr),* $(,)? } => |$ctx:ident| $body:block) => {
        $crate::register(
            stringify!($name),
            move |$ctx: &mut $crate::RunnerContext<'_>| $body,
            $crate::TestOptions::new()$(.$key($value))*,
        )
    };
}

/// Source location of the macro call site
#[doc(hidden)]
#[macro_export]
macro_rules! __here {
    () => {
        $crate::SourceLocation::new(file!(), line!())
    };
}

/// Check that a boolean expression holds
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        if !$cond {
            $ctx.record_failure($crate::__here!(), stringify!($cond));
        }
    };
}

/// Check scalar equality: value equality for numbers, content equality for
/// strings
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if !$crate::compare::content_eq(left, right) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " == ", stringify!($right)),
            );
        }
    }};
}

/// Check scalar inequality
#[macro_export]
macro_rules! check_ne {
    ($ctx:expr, $left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if $crate::compare::content_eq(left, right) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " != ", stringify!($right)),
            );
        }
    }};
}

/// Check ordered equality of the first `len` items of two sequences
#[macro_export]
macro_rules! check_eqn {
    ($ctx:expr, $left:expr, $right:expr, $len:expr $(,)?) => {
        if !$crate::compare::array_equal(&$left, &$right, $len) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " == ", stringify!($right)),
            );
        }
    };
}

/// Check that the first `len` items of two sequences differ
#[macro_export]
macro_rules! check_ne_n {
    ($ctx:expr, $left:expr, $right:expr, $len:expr $(,)?) => {
        if $crate::compare::array_equal(&$left, &$right, $len) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " != ", stringify!($right)),
            );
        }
    };
}

/// Check that two sequences hold the same first `len` elements in any order
#[macro_export]
macro_rules! check_unordered {
    ($ctx:expr, $left:expr, $right:expr, $len:expr $(,)?) => {
        if !$crate::compare::set_equal(&$left, &$right, $len) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " ~= ", stringify!($right)),
            );
        }
    };
}

/// Check that one of the first `len` elements of an array equals `target`
#[macro_export]
macro_rules! check_contains {
    ($ctx:expr, $array:expr, $len:expr, $target:expr $(,)?) => {
        if !$crate::compare::contains(&$array, $len, &$target) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($array), " contains ", stringify!($target)),
            );
        }
    };
}

/// Check byte-wise equality of two plain-old-data values
#[macro_export]
macro_rules! check_bytes_eq {
    ($ctx:expr, $left:expr, $right:expr $(,)?) => {
        if !$crate::compare::bytes_equal(&$left, &$right) {
            $ctx.record_failure(
                $crate::__here!(),
                concat!(stringify!($left), " == ", stringify!($right)),
            );
        }
    };
}

/// Check captured output against expected text, printing a diff on mismatch
#[macro_export]
macro_rules! check_output_eq {
    ($ctx:expr, $output:expr, $expected:expr $(,)?) => {
        $ctx.check_output(
            $crate::__here!(),
            &$output,
            $expected,
            concat!(stringify!($output), " == ", stringify!($expected)),
        )
    };
}

/// Capture everything the block writes to stdout into `buf`.
///
/// The block runs exactly once; stdout is restored when it finishes or
/// unwinds. `buf` is a [`CapturedOutput`](crate::CapturedOutput), also kept on
/// the case until the case ends.
///
/// ```no_run
/// utest::test_case!(greeting => |ctx| {
///     utest::record_output!(ctx, out => {
///         print!("hello");
///     });
///     utest::check_output_eq!(ctx, out, "hello");
/// });
/// ```
#[macro_export]
macro_rules! record_output {
    ($ctx:expr, $buf:ident => $body:block) => {
        let $buf = $ctx.record_output(|| $body);
    };
}
