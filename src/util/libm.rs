/*!
A no-std module for the handful of floating point operations this crate
needs.

Without `std`, `f64` has no `floor`, `round` or `trunc` methods.
The routines here follow the bit-twiddling implementations in the [`libm`]
crate. When `std` is enabled this module isn't compiled at all and the
inherent methods are used instead.

[`libm`]: https://github.com/rust-lang/libm
*/

pub(crate) trait Float {
    fn trunc(self) -> Self;
    fn floor(self) -> Self;
    fn round(self) -> Self;
}

impl Float for f64 {
    fn trunc(self) -> f64 {
        let x = self;
        let x1p120 = f64::from_bits(0x4770000000000000); // 0x1p120f === 2 ^ 120

        let mut i: u64 = x.to_bits();
        let mut e: i64 = (i >> 52 & 0x7ff) as i64 - 0x3ff + 12;
        if e >= 52 + 12 {
            return x;
        }
        if e < 12 {
            e = 1;
        }
        let m = -1i64 as u64 >> e;
        if (i & m) == 0 {
            return x;
        }
        core::hint::black_box(x + x1p120);
        i &= !m;
        f64::from_bits(i)
    }

    fn floor(self) -> f64 {
        let t = self.trunc();
        if t > self {
            t - 1.0
        } else {
            t
        }
    }

    /// Rounds half away from zero, like `f64::round` in `std`.
    fn round(self) -> f64 {
        (self + copysign(0.5 - 0.25 * f64::EPSILON, self)).trunc()
    }
}

fn copysign(x: f64, y: f64) -> f64 {
    let mut ux = x.to_bits();
    let uy = y.to_bits();
    ux &= (!0) >> 1;
    ux |= uy & (1 << 63);
    f64::from_bits(ux)
}

#[cfg(test)]
mod tests {
    use super::Float;

    #[test]
    fn rounding() {
        // (input, floor, round, trunc)
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (0.4, 0.0, 0.0, 0.0),
            (1.5, 1.0, 2.0, 1.0),
            (2.5, 2.0, 3.0, 2.0),
            (7.9, 7.0, 8.0, 7.0),
            (-1.5, -2.0, -2.0, -1.0),
            (1e20, 1e20, 1e20, 1e20),
        ];
        for &(x, floor, round, trunc) in cases.iter() {
            assert_eq!(Float::floor(x), floor, "floor({x})");
            assert_eq!(Float::round(x), round, "round({x})");
            assert_eq!(Float::trunc(x), trunc, "trunc({x})");
        }
    }
}
