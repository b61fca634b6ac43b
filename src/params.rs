//! Parameterized CRC definitions
//!
//! A CRC flavor is fully described by six parameters, the scheme usually
//! attributed to Ross Williams' Rocksoft model: register width, generator
//! polynomial (with the implicit leading x^width coefficient omitted),
//! per-byte input reflection, an input xor mask folded into the leading
//! register bits, whole-register output reflection, and an output xor mask.
//!
//! [`CrcParams`] is immutable once constructed and cheap to copy, so a single
//! definition can back any number of concurrent calculators and generators.

use crate::errors::Error;

/// Largest value representable in `width` bits
pub(crate) fn value_mask(width: u32) -> u64 {
    u64::MAX >> (64 - width)
}

/// An immutable, validated CRC definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcParams {
    width: u32,
    poly: u64,
    reflect_in: bool,
    xor_in: u64,
    reflect_out: bool,
    xor_out: u64,
}

impl CrcParams {
    /// Builds a CRC definition, validating all magnitude constraints
    ///
    /// `width` must lie in `4..=64`, and `poly`, `xor_in` and `xor_out`
    /// must each fit strictly in `width` bits. A polynomial equal to
    /// 2^width would need a bit beyond `width` and is not representable
    /// under the truncated-poly convention.
    ///
    pub fn new(
        width: u32,
        poly: u64,
        reflect_in: bool,
        xor_in: u64,
        reflect_out: bool,
        xor_out: u64,
    ) -> Result<CrcParams, Error> {
        if !(4..=64).contains(&width) {
            return Err(Error::WidthOutOfRange(width));
        }
        let mask = value_mask(width);
        for (what, value) in [("poly", poly), ("xor_in", xor_in), ("xor_out", xor_out)] {
            if value > mask {
                return Err(Error::ValueTooWide { what, value, width });
            }
        }

        Ok(CrcParams {
            width,
            poly,
            reflect_in,
            xor_in,
            reflect_out,
            xor_out,
        })
    }

    /// Register width in bits
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Generator polynomial, leading x^width coefficient omitted
    pub fn poly(&self) -> u64 {
        self.poly
    }

    /// Whether each input byte is bit-reversed before processing
    pub fn reflect_in(&self) -> bool {
        self.reflect_in
    }

    /// Mask xored into the leading `width` bits of the padded message
    pub fn xor_in(&self) -> u64 {
        self.xor_in
    }

    /// Whether the final register is bit-reversed before the output xor
    pub fn reflect_out(&self) -> bool {
        self.reflect_out
    }

    /// Mask xored into the final register value
    pub fn xor_out(&self) -> u64 {
        self.xor_out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn valid() {
        let p = CrcParams::new(16, 0x8005, true, 0xffff, true, 0x0000).unwrap();
        assert_eq!(p.width(), 16);
        assert_eq!(p.poly(), 0x8005);
        assert!(p.reflect_in());
        assert_eq!(p.xor_in(), 0xffff);
        assert!(p.reflect_out());
        assert_eq!(p.xor_out(), 0x0000);
    }

    #[test]
    fn width_bounds() {
        assert_eq!(
            CrcParams::new(3, 0x3, false, 0, false, 0),
            Err(Error::WidthOutOfRange(3))
        );
        assert_eq!(
            CrcParams::new(65, 0x3, false, 0, false, 0),
            Err(Error::WidthOutOfRange(65))
        );
        assert!(CrcParams::new(4, 0x3, true, 0, true, 0).is_ok());
        assert!(CrcParams::new(64, u64::MAX, true, u64::MAX, true, u64::MAX).is_ok());
    }

    #[test]
    fn magnitude_is_strict() {
        // all width bits set is fine, one past is not
        assert!(CrcParams::new(8, 0xff, false, 0xff, false, 0xff).is_ok());
        let err = CrcParams::new(8, 0x100, false, 0, false, 0).unwrap_err();
        assert_eq!(err, Error::ValueTooWide { what: "poly", value: 0x100, width: 8 });
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(
            CrcParams::new(8, 0x07, false, 0x100, false, 0).unwrap_err(),
            Error::ValueTooWide { what: "xor_in", value: 0x100, width: 8 }
        );
        assert_eq!(
            CrcParams::new(8, 0x07, false, 0, false, 0x100).unwrap_err(),
            Error::ValueTooWide { what: "xor_out", value: 0x100, width: 8 }
        );
    }
}
