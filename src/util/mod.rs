#[cfg(not(feature = "std"))]
pub(crate) mod libm;
pub(crate) mod number;
