use crate::value::Rational;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
    #[error("Rational {0}/0 has a zero denominator")]
    DivisionByZero(i64),
}

/// Container for safe integers operators
///
/// ```
/// # use tagscope_common::math::Checked;
/// let x = Checked::new(2_u32);
/// let y = Checked::new(3_u32);
///
/// assert_eq!((x + y).unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked<T>(Result<T, MathError>);

impl<T> Checked<T> {
    pub fn new(val: T) -> Self {
        Self(Ok(val))
    }

    pub fn check(self) -> Result<T, MathError> {
        self.0
    }
}

impl<T> From<T> for Checked<T> {
    fn from(val: T) -> Self {
        Self(Ok(val))
    }
}

impl<T> std::ops::Deref for Checked<T> {
    type Target = Result<T, MathError>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[macro_export]
/**
 * Redefines variables as [`Checked`].
 *
 * ```
 * use tagscope_common::math::checked;
 *
 * let x = 5_usize;
 * let y = 2_usize;
 * checked![x, y,];
 *
 * assert_eq!((x * y).unwrap(), 10);
 *
 * let x = usize::MAX;
 * let y = 1;
 * checked![x];
 *
 * assert!((x + y).is_err());
 * ```
 */
macro_rules! checked [
    ($($v:ident$(,)?)*) => {
        $( let $v = $crate::math::Checked::new($v); )*
    };
];

pub use checked;

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }

        impl<R: Into<Self> + Copy> std::ops::$op<R> for Checked<$t>
        {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: R) -> Self::Output {
                let Checked(Ok(x)) = self else { return self };
                let Checked(Ok(y)) = rhs.into() else { return rhs.into() };
                paste::paste! {
                let res = x.[< safe_ $f >](y);
                }
                Checked(res)
            }
        }
    };
}

macro_rules! impl_binary_operators {
    ($t:ty) => {
        impl_operator!(Add, add, $t);
        impl_operator!(Mul, mul, $t);
    };
}

impl_binary_operators!(u32);
impl_binary_operators!(usize);

/// Conversion into an offset or length usable for indexing
pub trait ToUsize: Sized + TryInto<usize> + TryInto<i128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u16 {}
impl ToUsize for u32 {}

/// Same as `checked_add` functions but returns an error
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

/// Value of an Exif rational
///
/// A zero denominator is reported as [`MathError::DivisionByZero`] instead of
/// producing an infinite or NaN value.
///
/// ```
/// # use tagscope_common::math::*;
/// assert_eq!(rational_to_f64(1, 4), Ok(0.25));
/// assert_eq!(rational_to_f64(-3, 2), Ok(-1.5));
/// assert!(rational_to_f64(1, 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn rational_to_f64(num: i64, denom: i64) -> Result<f64, MathError> {
    if denom == 0 {
        return Err(MathError::DivisionByZero(num));
    }

    Ok(num as f64 / denom as f64)
}

/// Angle from degrees, minutes and seconds, each given as a rational
///
/// Computes `d + m/60 + s/3600` without any rounding.
///
/// ```
/// # use tagscope_common::math::*;
/// # use tagscope_common::value::Rational;
/// let deg = dms_to_degrees(
///     Rational::new(40, 1),
///     Rational::new(26, 1),
///     Rational::new(46, 1),
/// )
/// .unwrap();
/// assert!((deg - 40.446111).abs() < 1e-5);
/// ```
pub fn dms_to_degrees(deg: Rational, min: Rational, sec: Rational) -> Result<f64, MathError> {
    let deg = deg.to_f64()?;
    let min = min.to_f64()?;
    let sec = sec.to_f64()?;

    Ok(deg + min / 60. + sec / 3600.)
}
