//! Verilog emission of the parallel CRC equations
//!
//! Each output bit becomes one continuous assignment, `crc_calc[i]` indexed
//! from the least significant bit, with `din_xor[k]` and `crc[k]` operand
//! tokens. The block is framed by marker comments and a small header so
//! generated regions can be located and regenerated in place. Long
//! assignments wrap at an xor operator and continue on indented lines that
//! begin with `^`, keeping every line syntactically valid Verilog.

use tracing::debug;

use crate::eqn::{self, Var, Xor};
use crate::errors::Error;
use crate::params::CrcParams;

const LINE_LIMIT: usize = 100;
const CONT_INDENT: usize = 20;
const BEGIN_MARK: &str = "// generated parallel crc equations -- do not edit -- begin";
const END_MARK: &str = "// generated parallel crc equations -- do not edit -- end";

fn render(expr: &Xor) -> String {
    if expr.is_empty() {
        return "0".to_string();
    }
    let tokens: Vec<String> = expr
        .terms()
        .map(|term| match term {
            Var::State(k) => format!("crc[{}]", k),
            Var::Data(k) => format!("din_xor[{}]", k),
        })
        .collect();
    tokens.join(" ^ ")
}

/// Wraps a line at the last `^` before the limit; continuations are
/// indented and lead with the operator
fn split_line(mut line: String, out: &mut Vec<String>) {
    while line.len() > LINE_LIMIT {
        let Some(at) = line[..LINE_LIMIT].rfind('^') else {
            break;
        };
        out.push(line[..at].trim_end().to_string());
        line = format!("{}{}", " ".repeat(CONT_INDENT), &line[at..]);
    }
    out.push(line);
}

fn push_assigns(out: &mut Vec<String>, lhs: &str, rows: &[Xor]) {
    let n = rows.len();
    for i in 0..n {
        split_line(
            format!("assign {}[{}] = {};", lhs, i, render(&rows[n - 1 - i])),
            out,
        );
    }
}

fn poly_hex(params: &CrcParams) -> String {
    let digits = ((params.width() + 3) / 4) as usize;
    format!("0x{:0width$x}", params.poly(), width = digits)
}

/// Emits the single-cycle equation block for a pre-folded data word
pub fn one_step(params: &CrcParams, din_width: u32) -> Result<String, Error> {
    let rows = eqn::one_step_rows(params, din_width)?;
    debug!(crc_width = params.width(), din_width, "emitting single-step crc block");

    let mut out = vec![
        BEGIN_MARK.to_string(),
        "/*".to_string(),
        "single-step crc".to_string(),
        format!("crc width: {}", params.width()),
        format!("polynomial: {}", poly_hex(params)),
        format!("input width: {}", din_width),
        "*/".to_string(),
    ];
    push_assigns(&mut out, "crc_calc", &rows);
    out.push(END_MARK.to_string());
    Ok(out.join("\n"))
}

/// Emits the streaming equation block: one full-word cycle plus the
/// closing cycle for a trailing fragment of `last_width` bits
pub fn multi_step(
    params: &CrcParams,
    din_width: u32,
    last_width: u32,
) -> Result<String, Error> {
    let stream = eqn::multi_step_rows(params, din_width)?;
    let last = eqn::multi_step_last_rows(params, din_width, last_width)?;
    debug!(
        crc_width = params.width(),
        din_width, last_width, "emitting multi-step crc block"
    );

    let mut out = vec![
        BEGIN_MARK.to_string(),
        "/*".to_string(),
        "multi-step crc".to_string(),
        format!("crc width: {}", params.width()),
        format!("polynomial: {}", poly_hex(params)),
        format!("input width: {}", din_width),
        format!("last fragment width: {}", last_width),
        "*/".to_string(),
    ];
    push_assigns(&mut out, "crc_calc", &stream);
    out.push("// last fragment equations, crc-width zero tail folded in".to_string());
    push_assigns(&mut out, "crc_calc_last", &last);
    out.push(END_MARK.to_string());
    Ok(out.join("\n"))
}
