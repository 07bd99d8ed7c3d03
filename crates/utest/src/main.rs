// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-test program: exercises the harness through its public surface.
//!
//! Set `UTEST_SELFTEST_FAILING=1` to also register cases that fail on
//! purpose.

use std::ffi::CString;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use utest::compare::{binary_equal, Opaque};
use utest::{
    check, check_bytes_eq, check_contains, check_eq, check_eqn, check_ne, check_ne_n,
    check_output_eq, check_unordered, record_output, test_case,
};

/// Register deliberately failing cases
const SELFTEST_FAILING: &str = "UTEST_SELFTEST_FAILING";

#[allow(unsafe_code)]
mod fixtures {
    #[derive(Clone, Copy, Debug, Default, bytemuck::NoUninit)]
    #[repr(C)]
    pub struct Inner {
        pub size: u64,
    }

    #[derive(Clone, Copy, Debug, Default, bytemuck::NoUninit)]
    #[repr(C)]
    pub struct Record {
        pub a: i32,
        pub b: f32,
        pub inner: Inner,
    }
}

use fixtures::Record;

static FIXTURE_OPEN: AtomicBool = AtomicBool::new(false);
static TEARDOWNS: AtomicUsize = AtomicUsize::new(0);

fn fac(x: i64) -> i64 {
    if x <= 0 {
        return 1;
    }
    x * fac(x - 1)
}

fn open_fixture() {
    FIXTURE_OPEN.store(true, Ordering::SeqCst);
}

fn close_fixture() {
    FIXTURE_OPEN.store(false, Ordering::SeqCst);
    TEARDOWNS.fetch_add(1, Ordering::SeqCst);
}

fn register_passing() {
    test_case!(eq => |ctx| {
        check_eq!(ctx, 0, 0);
        check_eq!(ctx, None::<i32>, None::<i32>);
        let a = String::from("one");
        check_eq!(ctx, "one", a);
        check_eq!(ctx, a, "one");
    });

    test_case!(bin_compare => |ctx| {
        check!(ctx, !binary_equal(b"one\0", b"ono\0", 4));
        check!(ctx, binary_equal(b"one\0", b"one\0", 4));
        check!(ctx, !binary_equal(&20u64.to_ne_bytes(), &33u64.to_ne_bytes(), 8));

        let boxed = Box::new(10i32);
        check_bytes_eq!(ctx, *boxed, 10i32);

        let left: Vec<i32> = (0..5).collect();
        let right: Vec<i32> = (0..5).rev().collect();
        check_ne_n!(ctx, Opaque::slice(&left), Opaque::slice(&right), 20);
        check!(ctx, !binary_equal(b"one", b"one", 4));
    });

    test_case!(assert_equal => |ctx| {
        check_eq!(ctx, 0, 0);
        for i in 0..5i32 {
            let a = i;
            check_eq!(ctx, i, a);
            check_eqn!(ctx, [i], [a], 1);
        }
        for i in 0..100usize {
            let a = i;
            check_eq!(ctx, i, a);
            check_eqn!(ctx, Opaque::of(&i), Opaque::of(&a), std::mem::size_of::<usize>());
        }
        for c in 'a'..'z' {
            let a = c;
            check_eq!(ctx, c, a);
        }

        check_eq!(ctx, "one", "one");
        check_eqn!(ctx, "one", "one", 4);
        check_ne!(ctx, "one", "two");
        check_ne_n!(ctx, "one", "one-", 4);
        check_eqn!(ctx, "one", "one-", 3);
    });

    test_case!(factorial => |ctx| {
        check_eq!(ctx, fac(1), 1);
        check_eq!(ctx, fac(2), 2);
        check_eq!(ctx, 6, fac(3));
        check_eq!(ctx, fac(4), 6 * 4);
        check_eq!(ctx, 6 * 5 * 4, fac(5));

        check_ne!(ctx, fac(-1), -1);
        check_eq!(ctx, 1, fac(-1));
        check_ne!(ctx, fac(-10), -10);
        check_eq!(ctx, fac(-10), 1);
    });

    test_case!(text_values => |ctx| {
        check_eq!(ctx, "one", "one");
        let a: &str = "what?";
        check_eq!(ctx, a, "what?");
        check_eq!(ctx, 1, 1);
        check_eq!(ctx, 'a', 'a');

        let what = String::from("some text");
        check_eq!(ctx, what, "some text");

        let owned = CString::new("some text").unwrap_or_default();
        check_eq!(ctx, owned.as_c_str(), c"some text");
    });

    test_case!(arr_equals_int => |ctx| {
        let stack_arr = [1, 2, 3, 4, 5, 6];
        let heap: Vec<i32> = stack_arr.to_vec();
        check_eqn!(ctx, heap, heap, 6);

        let a = [1, 2, 3, 4, 5, 6];
        check_eqn!(ctx, a, stack_arr, 6);
        check_ne_n!(ctx, a, [1, 2, 3, 4, 5, 7], 6);
        check_eqn!(ctx, a, [1, 2, 3, 4, 5, 7], 5);
    });

    test_case!(arr_equals_float => |ctx| {
        let stack_arr = [1.2f32, 2.1, 3.6, 4.1, 5.9, 6.0];
        let heap: Vec<f32> = stack_arr.to_vec();
        check_eqn!(ctx, heap, heap, 6);
        check_eqn!(ctx, stack_arr, [1.2f32, 2.1, 3.6, 4.1, 5.9, 6.0], 6);
    });

    test_case!(arr_equals_string => |ctx| {
        let arr = ["one", "two", "three"];
        let arr2 = [String::from("one"), "two".into(), "three".into()];
        let owned: Vec<String> = arr.iter().map(|s| s.to_string()).collect();

        check_eqn!(ctx, arr, ["one", "two", "three"], 3);
        check_eqn!(ctx, owned, arr2.to_vec(), 3);

        let arr3 = ["three", "two", "one"];
        check_ne_n!(ctx, arr, arr3, 3);
        check_unordered!(ctx, arr, arr3, 3);
    });

    test_case!(struct_equals => |ctx| {
        let a = Record { a: 1, ..Record::default() };
        let mut b = Record { a: 1, ..Record::default() };

        check_eq!(ctx, a.a, a.a);
        check_bytes_eq!(ctx, a, b);

        b.inner.size = 200;
        check_ne_n!(ctx, Opaque::of(&a), Opaque::of(&b), std::mem::size_of::<Record>());
    });

    test_case!(set_membership => |ctx| {
        let values = [5, 1, 4, 2, 3];
        check_unordered!(ctx, values, [1, 2, 3, 4, 5], 5);
        check!(ctx, !utest::compare::set_equal(&values, &[1, 2, 3, 4, 6], 5));
        check_contains!(ctx, values, 5, 4);
        check!(ctx, !utest::compare::contains(&values, 2, &4));
    });

    test_case!(capture_single_write => |ctx| {
        record_output!(ctx, out => {
            print!("hello");
        });
        check_eq!(ctx, out.len(), 5);
        check_output_eq!(ctx, out, "hello");
    });

    test_case!(capture_multiple_writes => |ctx| {
        record_output!(ctx, out => {
            println!("a");
            println!("b");
            print!("c");
        });
        check_output_eq!(ctx, out, "a\nb\nc");

        record_output!(ctx, empty => {});
        check!(ctx, empty.is_empty());
        check!(ctx, ctx.captured_output().is_some_and(|o| o.is_empty()));
    });

    test_case!(ignored_case { ignore: true } => |ctx| {
        check!(ctx, false);
    });

    test_case!(lifecycle { setup: open_fixture, teardown: close_fixture } => |ctx| {
        check!(ctx, FIXTURE_OPEN.load(Ordering::SeqCst));
    });

    test_case!(lifecycle_cleaned => |ctx| {
        check!(ctx, !FIXTURE_OPEN.load(Ordering::SeqCst));
        check!(ctx, TEARDOWNS.load(Ordering::SeqCst) <= 1);
    });
}

fn register_failing() {
    test_case!(failing_equality => |ctx| {
        check_eq!(ctx, fac(3), 7);
        check_eqn!(ctx, [1, 2, 3], [1, 2, 4], 3);
        ctx.warning("still running after two failures");
    });

    test_case!(failing_output => |ctx| {
        record_output!(ctx, out => {
            println!("expected");
            println!("actual");
        });
        check_output_eq!(ctx, out, "expected\nwanted\n");
    });
}

fn main() -> ExitCode {
    register_passing();
    if std::env::var_os(SELFTEST_FAILING).is_some_and(|v| v == "1") {
        register_failing();
    }
    utest::cli::run_main()
}
