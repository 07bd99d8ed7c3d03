// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Equality dispatch for assertions.
//!
//! The rule used for a comparison is picked by the static type of the
//! operands:
//!
//! - [`ContentEq`] for scalars: value equality for numbers, content equality
//!   for strings (two separate allocations holding `"one"` are equal).
//! - [`ArrayEq`] for sequences compared over an explicit length: element-wise
//!   for typed slices, bounded content for strings, byte-wise for [`Opaque`].
//! - [`set_equal`] and [`contains`] for unordered membership, built on the
//!   same per-element rule as [`ArrayEq`].

use std::ffi::{CStr, CString};

/// Byte-wise comparison of the first `len` bytes of both buffers.
///
/// A `len` past the end of either buffer never matches.
pub fn binary_equal(left: &[u8], right: &[u8], len: usize) -> bool {
    match (left.get(..len), right.get(..len)) {
        (Some(l), Some(r)) => l.iter().zip(r).all(|(a, b)| a == b),
        _ => false,
    }
}

/// Byte-wise comparison of two plain-old-data values.
pub fn bytes_equal<T: bytemuck::NoUninit>(left: &T, right: &T) -> bool {
    let left = bytemuck::bytes_of(left);
    binary_equal(left, bytemuck::bytes_of(right), left.len())
}

/// Scalar equality as used by `check_eq!`.
pub fn content_eq<L, R>(left: &L, right: &R) -> bool
where
    L: ContentEq<R> + ?Sized,
    R: ?Sized,
{
    left.content_eq(right)
}

/// Ordered sequence equality over the first `len` items, as used by
/// `check_eqn!`.
pub fn array_equal<A: ArrayEq + ?Sized>(left: &A, right: &A, len: usize) -> bool {
    left.array_eq(right, len)
}

/// Unordered equality: every one of the first `len` elements of `a` matches
/// some element among the first `len` of `b`.
///
/// Quadratic in `len`. Either slice being shorter than `len` never matches.
pub fn set_equal<T: Element>(a: &[T], b: &[T], len: usize) -> bool {
    let (Some(a), Some(b)) = (a.get(..len), b.get(..len)) else {
        return false;
    };
    for wanted in a {
        let mut found = false;
        for candidate in b {
            if wanted.element_eq(candidate) {
                found = true;
                break;
            }
        }
        if !found {
            return false;
        }
    }
    true
}

/// Whether any of the first `len` elements of `array` equals `target`.
pub fn contains<T: Element>(array: &[T], len: usize, target: &T) -> bool {
    array.iter().take(len).any(|item| item.element_eq(target))
}

/// Equality between a scalar and a right-hand operand of type `Rhs`.
pub trait ContentEq<Rhs: ?Sized = Self> {
    fn content_eq(&self, other: &Rhs) -> bool;
}

impl<L, R> ContentEq<R> for &L
where
    L: ContentEq<R> + ?Sized,
    R: ?Sized,
{
    fn content_eq(&self, other: &R) -> bool {
        (**self).content_eq(other)
    }
}

impl<L, R> ContentEq<Option<R>> for Option<L>
where
    L: ContentEq<R>,
{
    fn content_eq(&self, other: &Option<R>) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => l.content_eq(r),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! value_eq {
    ($($ty:ty),* $(,)?) => {$(
        impl ContentEq for $ty {
            fn content_eq(&self, other: &$ty) -> bool {
                self == other
            }
        }

        impl<'a> ContentEq<&'a $ty> for $ty {
            fn content_eq(&self, other: &&'a $ty) -> bool {
                self == *other
            }
        }

        impl Element for $ty {
            fn element_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

value_eq!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64, bool, char);

// u8 sequences are untyped memory: compared byte-wise.
impl ContentEq for u8 {
    fn content_eq(&self, other: &u8) -> bool {
        self == other
    }
}

impl<'a> ContentEq<&'a u8> for u8 {
    fn content_eq(&self, other: &&'a u8) -> bool {
        self == *other
    }
}

impl Element for u8 {
    fn element_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn slice_eq(left: &[Self], right: &[Self], len: usize) -> bool {
        binary_equal(left, right, len)
    }
}

macro_rules! text_eq {
    ($view:path; $($lhs:ty => [$($rhs:ty),*]);* $(;)?) => {$($(
        impl ContentEq<$rhs> for $lhs {
            fn content_eq(&self, other: &$rhs) -> bool {
                $view(self) == $view(other)
            }
        }

        impl<'a> ContentEq<&'a $rhs> for $lhs {
            fn content_eq(&self, other: &&'a $rhs) -> bool {
                $view(self) == $view(*other)
            }
        }
    )*)*};
}

fn str_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

fn cstr_bytes(s: &CStr) -> &[u8] {
    s.to_bytes()
}

text_eq!(str_bytes;
    str => [str, String];
    String => [str, String];
);

text_eq!(cstr_bytes;
    CStr => [CStr, CString];
    CString => [CStr, CString];
);

/// Element types that [`ArrayEq`] compares one index at a time.
pub trait Element {
    fn element_eq(&self, other: &Self) -> bool;

    /// Ordered comparison of the first `len` elements.
    fn slice_eq(left: &[Self], right: &[Self], len: usize) -> bool
    where
        Self: Sized,
    {
        match (left.get(..len), right.get(..len)) {
            (Some(l), Some(r)) => l.iter().zip(r).all(|(a, b)| a.element_eq(b)),
            _ => false,
        }
    }
}

impl Element for &str {
    fn element_eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Element for String {
    fn element_eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Element for &CStr {
    fn element_eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Element for CString {
    fn element_eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Sequences compared over an explicit length.
pub trait ArrayEq {
    fn array_eq(&self, other: &Self, len: usize) -> bool;
}

impl<T: Element> ArrayEq for [T] {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        T::slice_eq(self, other, len)
    }
}

impl<T: Element, const N: usize> ArrayEq for [T; N] {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        T::slice_eq(self, other, len)
    }
}

impl<T: Element> ArrayEq for Vec<T> {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        T::slice_eq(self, other, len)
    }
}

impl ArrayEq for str {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        bounded_text_eq(self.as_bytes(), other.as_bytes(), len)
    }
}

impl ArrayEq for String {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        bounded_text_eq(self.as_bytes(), other.as_bytes(), len)
    }
}

impl ArrayEq for CStr {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        bounded_text_eq(self.to_bytes(), other.to_bytes(), len)
    }
}

impl ArrayEq for &str {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        bounded_text_eq(self.as_bytes(), other.as_bytes(), len)
    }
}

/// Compare at most `len` bytes of text, stopping early at a NUL or at the end
/// of either string.
fn bounded_text_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    text_prefix(left, len) == text_prefix(right, len)
}

fn text_prefix(text: &[u8], len: usize) -> &[u8] {
    let text = &text[..len.min(text.len())];
    match text.iter().position(|&b| b == 0) {
        Some(nul) => &text[..nul],
        None => text,
    }
}

/// Untyped view of memory, compared byte-wise.
///
/// The fallback for values with no typed comparison rule: any
/// plain-old-data value or slice can be viewed as raw bytes.
#[derive(Clone, Copy, Debug)]
pub struct Opaque<'a>(&'a [u8]);

impl<'a> Opaque<'a> {
    /// View raw bytes
    pub fn bytes(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// View the bytes of a single value
    pub fn of<T: bytemuck::NoUninit>(value: &'a T) -> Self {
        Self(bytemuck::bytes_of(value))
    }

    /// View the bytes of a slice of values
    pub fn slice<T: bytemuck::NoUninit>(values: &'a [T]) -> Self {
        Self(bytemuck::cast_slice(values))
    }

    /// Number of bytes in view
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the view is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ArrayEq for Opaque<'_> {
    fn array_eq(&self, other: &Self, len: usize) -> bool {
        binary_equal(self.0, other.0, len)
    }
}

impl ContentEq for Opaque<'_> {
    fn content_eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && binary_equal(self.0, other.0, self.0.len())
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
