use num_traits::{CheckedAdd, CheckedDiv, CheckedRem, One, Unsigned, Zero};

/// Ceiling division for unsigned integers. `None` on division by zero or overflow.
pub trait CheckedCeilDiv: Sized {
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self>;
}

impl<T> CheckedCeilDiv for T
where
    T: Unsigned + CheckedAdd + CheckedDiv + CheckedRem + Copy + PartialOrd,
{
    #[inline]
    fn checked_ceil_div(&self, rhs: T) -> Option<T> {
        let quotient = self.checked_div(&rhs)?;
        let remainder = self.checked_rem(&rhs)?;

        if remainder > T::zero() {
            quotient.checked_add(&T::one())
        } else {
            Some(quotient)
        }
    }
}
