//! Numeric CRC calculation via the companion matrix
//!
//! A CRC is the remainder after dividing the message polynomial, shifted up
//! by the register width, by the generator polynomial. Rather than dividing
//! bit by bit, the calculator treats the padded message as a sequence of
//! width-sized chunks and advances the register through each chunk with a
//! power of the companion matrix: a chunk contributes its bits as a row
//! vector multiplied by T raised to the number of bits that still follow it.
//!
//! The chunk walk is evaluated Horner-style, `acc = acc * T^n + chunk`,
//! which needs only T^n (computed once per calculator) plus one small power
//! for the trailing fragment, and reproduces the per-chunk power sum
//! exactly.
//!
//! Reflection and xor masks are applied around the advancement: input
//! reflection per byte before bit expansion, then the input mask over the
//! leading register-width bits, and symmetrically output reflection and the
//! output mask over the final register.

use tracing::debug;

use crate::bits;
use crate::errors::Error;
use crate::mat::Gf2Mat;
use crate::params::CrcParams;

/// A CRC calculator for one fixed definition
///
/// Construction precomputes the companion matrix and its width'th power;
/// afterwards the calculator is immutable and safe to share across threads.
///
#[derive(Debug, Clone)]
pub struct Crc {
    params: CrcParams,
    t: Gf2Mat,
    t_n: Gf2Mat,
}

impl Crc {
    /// Builds a calculator for the given definition
    pub fn new(params: CrcParams) -> Crc {
        let t = Gf2Mat::companion(params.poly(), params.width());
        let t_n = t.pow(params.width());
        Crc { params, t, t_n }
    }

    /// The definition this calculator computes
    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// CRC of a byte sequence, as an n-bit value
    pub fn checksum(&self, data: &[u8]) -> Result<u64, Error> {
        self.checksum_hex(&bits::hex_of_bytes(data))
    }

    /// CRC of a message given as a hex string
    ///
    /// Whitespace and an optional 0x prefix are tolerated; an odd number of
    /// digits is left-padded with a zero. Empty or non-hex input fails.
    ///
    pub fn checksum_hex(&self, input: &str) -> Result<u64, Error> {
        let n = self.params.width();
        let mut hex = bits::normalize_hex(input)?;
        if self.params.reflect_in() {
            hex = bits::reflect_bytes(&hex)?;
        }

        // big-endian message bits, an n-bit zero tail to flush the register,
        // and the input mask over the leading n bits
        let mut msg = bits::bits_of_hex(&hex);
        msg.resize(msg.len() + n as usize, 0);
        for i in 0..n {
            msg[i as usize] ^= ((self.params.xor_in() >> (n - 1 - i)) & 1) as u8;
        }
        debug!(width = n, bits = msg.len(), "advancing crc state");

        let state = self.advance(&msg);

        // positions are big-endian, bit p of state is bit n-1-p of the value
        let mut value: u64 = 0;
        for p in 0..n {
            if (state >> p) & 1 != 0 {
                value |= 1 << (n - 1 - p);
            }
        }
        if self.params.reflect_out() {
            value = value.reverse_bits() >> (64 - n);
        }
        Ok(value ^ self.params.xor_out())
    }

    /// CRC of a byte sequence, rendered as exactly n characters of 0/1
    pub fn checksum_bits(&self, data: &[u8]) -> Result<String, Error> {
        let value = self.checksum(data)?;
        Ok(format!("{:0width$b}", value, width = self.params.width() as usize))
    }

    /// Advances a zero register through a big-endian bit string
    ///
    /// The state row vector is packed with position p in bit p. Full chunks
    /// fold in Horner-style; the trailing fragment lands in the leading
    /// positions of the accumulator after the final fractional power.
    ///
    fn advance(&self, msg: &[u8]) -> u64 {
        let n = self.params.width() as usize;
        let mut chunks = msg.chunks_exact(n);
        let mut acc = 0u64;
        for chunk in &mut chunks {
            let mut v = 0u64;
            for (p, &bit) in chunk.iter().enumerate() {
                v |= (bit as u64) << p;
            }
            acc = self.t_n.apply(acc) ^ v;
        }

        let rest = chunks.remainder();
        acc = self.t.pow(rest.len() as u32).apply(acc);
        for (p, &bit) in rest.iter().enumerate() {
            acc ^= (bit as u64) << p;
        }
        acc
    }
}
