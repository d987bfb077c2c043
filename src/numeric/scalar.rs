// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::{Float, ToPrimitive};

use std::fmt::Debug;

/// Floating point type the reconstruction kernel is generic over.
///
/// Everything in the crate is written against this trait; `f64` is the
/// canonical instantiation and the default type parameter of the public
/// containers.
pub trait Scalar: Float + ToPrimitive + Debug + Default + Send + Sync + 'static {
    fn from_f64(value: f64) -> Self;

    /// Absolute tolerance used by `approx_eq`.
    fn tolerance() -> Self;

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).abs() <= Self::tolerance()
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    fn tolerance() -> Self {
        1e-10
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn tolerance() -> Self {
        1e-5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(1.0f64.approx_eq(&(1.0 + 1e-12)));
        assert!(!1.0f64.approx_eq(&1.001));
        assert!(1.0f32.approx_eq(&1.000_001));
    }
}
