//! Symbolic parallel CRC equations
//!
//! Hardware that consumes a whole data word per clock needs, for every bit
//! of the next register state, the xor of exactly the current-state and
//! input bits that influence it. Those sets fall out of the same companion
//! matrix advancement the numeric calculator uses, just evaluated over
//! symbols instead of bits.
//!
//! Arithmetic over GF(2) makes the symbolic representation trivial: an
//! expression is a set of indeterminates, multiplying by a matrix bit keeps
//! or drops the set, and adding two expressions is the symmetric difference
//! of their sets, which cancels duplicated terms the way x + x = 0 does.
//! No computer-algebra dependency is needed.
//!
//! Indeterminates are numbered in hardware bit order, index 0 the least
//! significant, so row-vector position p of an m-wide bus holds symbol
//! m-1-p. Three equation forms are produced:
//!
//! - [`one_step_rows`]: a single-cycle datapath where the incoming word has
//!   already been xor-folded against prior state (din_xor) and the
//!   register-width zero tail is applied by the surrounding logic; the
//!   input is widened to a whole number of bytes before the tail.
//! - [`multi_step_rows`]: one streaming cycle carrying an explicit state
//!   vector forward across full-width words.
//! - [`multi_step_last_rows`]: the closing cycle, where only the leading
//!   `last_width` bits of the word are meaningful and a register-width zero
//!   tail flushes the result out.

use std::collections::BTreeSet;
use std::ops::BitXorAssign;

use crate::errors::Error;
use crate::mat::Gf2Mat;
use crate::params::CrcParams;

/// A single indeterminate: a current-state bit or an input-data bit
///
/// The ordering (state terms first, then data terms, ascending index) fixes
/// the emission order of generated expressions.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Var {
    /// Bit k of the carried CRC state
    State(u32),
    /// Bit k of the input data word
    Data(u32),
}

/// An xor of distinct indeterminates over GF(2)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Xor(BTreeSet<Var>);

impl Xor {
    /// The zero expression
    pub fn empty() -> Xor {
        Xor(BTreeSet::new())
    }

    /// A single-term expression
    pub fn var(v: Var) -> Xor {
        Xor(BTreeSet::from([v]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, v: Var) -> bool {
        self.0.contains(&v)
    }

    /// Terms in canonical order
    pub fn terms(&self) -> impl Iterator<Item = Var> + '_ {
        self.0.iter().copied()
    }
}

impl BitXorAssign<&Xor> for Xor {
    /// GF(2) addition: symmetric difference, duplicate terms cancel
    fn bitxor_assign(&mut self, other: &Xor) {
        for v in other.terms() {
            if !self.0.remove(&v) {
                self.0.insert(v);
            }
        }
    }
}

impl FromIterator<Var> for Xor {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Xor {
        Xor(iter.into_iter().collect())
    }
}

/// Symbolic row vector times matrix: column j collects the xor of the
/// expressions at every row i with a one in entry (i, j)
fn mul_row(row: &[Xor], m: &Gf2Mat) -> Vec<Xor> {
    let n = m.n();
    let mut out = vec![Xor::empty(); n as usize];
    for (i, expr) in row.iter().enumerate() {
        if expr.is_empty() {
            continue;
        }
        let mut cols = m.row(i as u32);
        while cols != 0 {
            let j = cols.trailing_zeros();
            out[j as usize] ^= expr;
            cols &= cols - 1;
        }
    }
    out
}

/// The chunked advancement sum over a symbolic row vector
///
/// The vector is split into full register-width chunks plus a possibly
/// shorter trailing fragment; chunk j is multiplied by T raised to
/// n*(chunks-1-j) + fragment, and the fragment itself lands identically in
/// the leading accumulator positions.
///
fn chunk_sum(row: &[Xor], t: &Gf2Mat) -> Vec<Xor> {
    let n = t.n();
    let total = row.len() as u32;
    let (k, r) = (total / n, total % n);

    let mut acc = vec![Xor::empty(); n as usize];
    for j in 0..k {
        let e = n * (k - 1 - j) + r;
        let chunk = &row[(j * n) as usize..((j + 1) * n) as usize];
        for (p, expr) in mul_row(chunk, &t.pow(e)).iter().enumerate() {
            acc[p] ^= expr;
        }
    }
    for p in 0..r as usize {
        acc[p] ^= &row[(k * n) as usize + p];
    }
    acc
}

/// Single-cycle equations over a pre-folded data word
///
/// The input width is rounded up to a whole number of bytes, the register
/// width is appended for the zero tail, and the trailing min(width, crc
/// width) symbol positions are blanked: the surrounding datapath is assumed
/// to feed the tail in as literal zeros. Row position p of the result is
/// output bit n-1-p.
///
pub fn one_step_rows(params: &CrcParams, din_width: u32) -> Result<Vec<Xor>, Error> {
    if din_width == 0 {
        return Err(Error::ZeroInputWidth);
    }
    let n = params.width();
    let w8 = ((din_width + 7) / 8) * 8;
    let total = w8 + n;

    let mut row: Vec<Xor> = (0..total)
        .map(|p| Xor::var(Var::Data(total - 1 - p)))
        .collect();
    let blank = din_width.min(n);
    for p in (total - blank)..total {
        row[p as usize] = Xor::empty();
    }

    let t = Gf2Mat::companion(params.poly(), n);
    Ok(chunk_sum(&row, &t))
}

/// Streaming-cycle equations carrying an explicit state vector
///
/// One full `din_width`-bit word advances the state as
/// `C * T^w` plus the chunked data sum.
///
pub fn multi_step_rows(params: &CrcParams, din_width: u32) -> Result<Vec<Xor>, Error> {
    let n = params.width();
    if din_width == 0 {
        return Err(Error::ZeroInputWidth);
    }
    if din_width < n {
        return Err(Error::InputWidthTooNarrow { din: din_width, width: n });
    }

    let t = Gf2Mat::companion(params.poly(), n);
    let state: Vec<Xor> = (0..n).map(|p| Xor::var(Var::State(n - 1 - p))).collect();
    let data: Vec<Xor> = (0..din_width)
        .map(|p| Xor::var(Var::Data(din_width - 1 - p)))
        .collect();

    let mut acc = mul_row(&state, &t.pow(din_width));
    for (p, expr) in chunk_sum(&data, &t).iter().enumerate() {
        acc[p] ^= expr;
    }
    Ok(acc)
}

/// Closing-cycle equations for a trailing fragment
///
/// Only the leading `last_width` bits of the data word carry message bits;
/// a register-width zero tail is appended, and every power accounts for the
/// effective length last_width + crc width.
///
pub fn multi_step_last_rows(
    params: &CrcParams,
    din_width: u32,
    last_width: u32,
) -> Result<Vec<Xor>, Error> {
    let n = params.width();
    if din_width == 0 {
        return Err(Error::ZeroInputWidth);
    }
    if din_width < n {
        return Err(Error::InputWidthTooNarrow { din: din_width, width: n });
    }
    if last_width == 0 {
        return Err(Error::ZeroLastWidth);
    }
    if last_width > din_width {
        return Err(Error::LastWidthTooWide { last: last_width, din: din_width });
    }

    let t = Gf2Mat::companion(params.poly(), n);
    let state: Vec<Xor> = (0..n).map(|p| Xor::var(Var::State(n - 1 - p))).collect();
    let data: Vec<Xor> = (0..last_width)
        .map(|p| Xor::var(Var::Data(din_width - 1 - p)))
        .chain((0..n).map(|_| Xor::empty()))
        .collect();

    let mut acc = mul_row(&state, &t.pow(last_width + n));
    for (p, expr) in chunk_sum(&data, &t).iter().enumerate() {
        acc[p] ^= expr;
    }
    Ok(acc)
}
