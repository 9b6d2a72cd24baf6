use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Scalar types usable as vector and matrix elements in the algebraic operations.
///
/// This is implemented for every type with the right set of operators, which covers all primitive
/// floating-point and integer types. Operations that negate (cross products, adjugates and
/// determinants) additionally require [`ops::Neg`], which rules out unsigned integers there.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0.0, 1.0; f32, f64);
zero_one!(0, 1; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_number<T: Number>(_: T) {}

    #[test]
    fn identities() {
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f32::ONE, 1.0);
        assert_eq!(i32::ZERO + i32::ONE, 1);
        assert_eq!(usize::ONE, 1);

        requires_number(1.0f32);
        requires_number(1.0f64);
        requires_number(1i64);
        requires_number(1u8);
    }

    #[test]
    fn sqrt() {
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert_eq!(Sqrt::sqrt(2.25f64), 1.5);
    }
}
