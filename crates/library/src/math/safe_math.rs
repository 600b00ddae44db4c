use anchor_lang::prelude::*;
use std::panic::Location;

// Copyright 2021 Drift Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/safe_math.rs

use crate::errors::{ErrorCodes, LibraryResult};
use crate::math::ceil_div::CheckedCeilDiv;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_sub(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_mul(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_div(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_div_ceil(self, rhs: Self) -> LibraryResult<Self>;
}

#[track_caller]
#[inline(always)]
fn math_error<T>() -> LibraryResult<T> {
    let caller = Location::caller();
    msg!("Math error thrown at {}:{}", caller.file(), caller.line());
    Err(ErrorCodes::LibraryMathError)
}

macro_rules! checked_op {
    ($name:ident, $checked:ident, $t:ty) => {
        #[track_caller]
        #[inline(always)]
        fn $name(self, v: $t) -> LibraryResult<$t> {
            match self.$checked(v) {
                Some(result) => Ok(result),
                None => math_error(),
            }
        }
    };
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            checked_op!(safe_add, checked_add, $t);
            checked_op!(safe_sub, checked_sub, $t);
            checked_op!(safe_mul, checked_mul, $t);
            checked_op!(safe_div, checked_div, $t);

            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t) -> LibraryResult<$t> {
                match self.checked_ceil_div(v) {
                    Some(result) => Ok(result),
                    None => math_error(),
                }
            }
        }
    };
}

// Signed ceiling rounds toward positive infinity.
macro_rules! signed_checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            checked_op!(safe_add, checked_add, $t);
            checked_op!(safe_sub, checked_sub, $t);
            checked_op!(safe_mul, checked_mul, $t);
            checked_op!(safe_div, checked_div, $t);

            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t) -> LibraryResult<$t> {
                let (quotient, remainder) = match (self.checked_div(v), self.checked_rem(v)) {
                    (Some(quotient), Some(remainder)) => (quotient, remainder),
                    _ => return math_error(),
                };

                if remainder != 0 && ((remainder > 0) == (v > 0)) {
                    quotient.safe_add(1)
                } else {
                    Ok(quotient)
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u16);
checked_impl!(u8);
signed_checked_impl!(i128);
signed_checked_impl!(i64);
