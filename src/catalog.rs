//! Catalogue of well-known CRC flavors
//!
//! Parameter tuples follow the widely used reveng/Williams tables.

use crate::errors::Error;
use crate::params::CrcParams;

// label, width, poly, reflect_in, xor_in, reflect_out, xor_out
static CATALOG: &[(&str, u32, u64, bool, u64, bool, u64)] = &[
    ("CRC_4_ITU", 4, 0x03, true, 0x00, true, 0x00),
    ("CRC_5_EPC", 5, 0x09, false, 0x09, false, 0x00),
    ("CRC_5_ITU", 5, 0x15, true, 0x00, true, 0x00),
    ("CRC_5_USB", 5, 0x05, true, 0x1f, true, 0x1f),
    ("CRC_6_ITU", 6, 0x03, true, 0x00, true, 0x00),
    ("CRC_7_MMC", 7, 0x09, false, 0x00, false, 0x00),
    ("CRC_8", 8, 0x07, false, 0x00, false, 0x00),
    ("CRC_8_ITU", 8, 0x07, false, 0x00, false, 0x55),
    ("CRC_8_ROHC", 8, 0x07, true, 0xff, true, 0x00),
    ("CRC_8_MAXIM", 8, 0x31, true, 0x00, true, 0x00),
    ("CRC_16_IBM", 16, 0x8005, true, 0x0000, true, 0x0000),
    ("CRC_16_MAXIM", 16, 0x8005, true, 0x0000, true, 0xffff),
    ("CRC_16_USB", 16, 0x8005, true, 0xffff, true, 0xffff),
    ("CRC_16_MODBUS", 16, 0x8005, true, 0xffff, true, 0x0000),
    ("CRC_16_CCITT", 16, 0x1021, true, 0x0000, true, 0x0000),
    ("CRC_16_CCITT_FALSE", 16, 0x1021, false, 0xffff, false, 0x0000),
    ("CRC_16_X25", 16, 0x1021, true, 0xffff, true, 0xffff),
    ("CRC_16_XMODEM", 16, 0x1021, false, 0x0000, false, 0x0000),
    ("CRC_16_DNP", 16, 0x3d65, true, 0x0000, true, 0xffff),
    ("CRC_32", 32, 0x04c11db7, true, 0xffffffff, true, 0xffffffff),
    ("CRC_32_MPEG_2", 32, 0x04c11db7, false, 0xffffffff, false, 0x00000000),
];

/// Looks up a CRC definition by its catalogue label
pub fn lookup(name: &str) -> Result<CrcParams, Error> {
    let &(_, width, poly, reflect_in, xor_in, reflect_out, xor_out) = CATALOG
        .iter()
        .find(|entry| entry.0 == name)
        .ok_or_else(|| Error::UnknownName(name.to_string()))?;
    CrcParams::new(width, poly, reflect_in, xor_in, reflect_out, xor_out)
}

/// All catalogue labels in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.0)
}
