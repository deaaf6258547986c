//! Interactive, prompt-driven construction of a bit array.
//!
//! Reads whitespace-separated tokens, so answers may come one per line or
//! several on the same line.
//!
//! ```rust
//! use bit_array::input::prompt_bit_array;
//!
//! let mut transcript = Vec::new();
//! let bits = prompt_bit_array("3\n1 0 1\n".as_bytes(), &mut transcript)?;
//!
//! assert_eq!(bits.to_string(), "[ 1010 0000]");
//! assert_eq!(bits.occupancy(), 3);
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::{BitArray, BitArrayError, InitMode};

/// Asks for a positive bit count, then for each bit in turn.
///
/// Non-positive or non-numeric counts and anything other than `0`/`1` for a
/// bit are rejected and asked again.
///
/// # Errors
///
/// `UnexpectedEof` if the input runs dry first, `Io` on read/write failure,
/// and allocation errors from [`BitArray::create`].
pub fn prompt_bit_array<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<BitArray, BitArrayError> {
    let mut tokens = Tokens::new(input);

    let occupied = loop {
        write!(output, "Insert bits to add (must be > 0): ")?;
        output.flush()?;
        match tokens.next_token()?.parse::<usize>() {
            Ok(count) if count > 0 => break count,
            _ => continue,
        }
    };

    let mut array = BitArray::create(occupied, InitMode::Zeroes)?;

    let mut index = 0;
    while index < occupied {
        write!(output, "Insert bit at index {}: ", index)?;
        output.flush()?;
        let token = tokens.next_token()?;
        match token.parse::<i64>() {
            Ok(0) => index += 1,
            Ok(1) => {
                array.set_bit(index, true);
                index += 1;
            }
            _ => writeln!(output, "[ERROR] \"{}\" is not 0 or 1", token)?,
        }
    }

    log::debug!("read {} bits from input", occupied);
    Ok(array)
}

struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, BitArrayError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BitArrayError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
