//! Parametric CRC calculation and parallel CRC equation generation
//!
//! A CRC is the remainder after polynomial division over GF(2), and one
//! clock of the dividing shift register is a linear map: state-vector times
//! companion matrix. This crate leans on that one fact twice. Numerically,
//! any CRC flavor described by the usual six parameters (width, polynomial,
//! reflection flags, xor masks) is computed by advancing chunks of the
//! message through powers of the companion matrix. Symbolically, the same
//! advancement evaluated over indeterminates instead of bits yields, for
//! every bit of the next register state, the exact xor of current-state and
//! input bits that single-cycle parallel hardware needs, emitted as Verilog
//! continuous assignments.
//!
//! ```
//! use crcgen::{catalog, Crc, hdl};
//!
//! let params = catalog::lookup("CRC_16_CCITT_FALSE")?;
//! let crc = Crc::new(params);
//! assert_eq!(crc.checksum(b"123456789")?, 0x29b1);
//!
//! // single-cycle update equations for an 8-bit datapath
//! let verilog = hdl::one_step(&params, 8)?;
//! assert!(verilog.contains("assign crc_calc[0]"));
//! # Ok::<(), crcgen::Error>(())
//! ```

/// Error types
pub mod errors;

/// Parameterized CRC definitions
pub mod params;

/// Catalogue of well-known CRC flavors
pub mod catalog;

/// Hex-string and bit-order utilities
pub mod bits;

/// Bit matrices over GF(2)
pub mod mat;

/// Numeric CRC calculation
pub mod crc;

/// Symbolic parallel CRC equations
pub mod eqn;

/// Verilog emission
pub mod hdl;

pub use crate::crc::Crc;
pub use crate::errors::{Error, ErrorKind};
pub use crate::params::CrcParams;
