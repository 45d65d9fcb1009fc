//! The family of adjacent-pair swap techniques under measurement.
//!
//! Every member performs the same forward pass: each index pair (i, i+1)
//! trades places, so one full pass carries the original first element all
//! the way to the last slot (the "elevator" ride the runner checks for).
//! Members differ only in the low-level mechanics of the exchange, which
//! is the whole point of the benchmark.

use std::cell::Cell;

use strum_macros::{Display, EnumCount, EnumIter};

use crate::cursor::IntBuf;

/// One named swap technique. Stateless; enumeration order is fixed and is
/// the order the runner times them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum Swapper {
    /// XOR exchange, no temporary.
    #[strum(serialize = "xor_swap")]
    XorSwap,
    /// Packs both elements into a u64 and splits them back out swapped.
    /// Shows the bit-op overhead over the same loop without it.
    #[strum(serialize = "r64shift")]
    R64Shift,
    /// Add/subtract exchange. Wrapping arithmetic, overflow is harmless.
    #[strum(serialize = "sub_swap")]
    SubSwap,
    /// One temporary.
    #[strum(serialize = "tmp1swap")]
    Tmp1Swap,
    /// Two temporaries, reads reordered.
    #[strum(serialize = "tmp2swap")]
    Tmp2Swap,
    /// XOR exchange on two mutable temporaries, written back after.
    #[strum(serialize = "xor_tmps")]
    XorTmps,
    /// XOR exchange through single-assignment intermediates.
    #[strum(serialize = "xor_vals")]
    XorVals,
    /// Buffer view, absolute-index get/put.
    #[strum(serialize = "buf_racc")]
    BufRacc,
    /// Buffer view, mark/rewind sequencing.
    #[strum(serialize = "buf_mark")]
    BufMark,
    /// Buffer view, explicit position tracking.
    #[strum(serialize = "buf_cpos")]
    BufCpos,
    /// Four forward-only cursors over overlapping views of one backing
    /// store: two readers leading and trailing two writers.
    #[strum(serialize = "buf_4way")]
    Buf4Way,
}

impl Swapper {
    /// Run one full pairwise swap pass over `x`, in place.
    pub fn swap(self, x: &mut [i32]) {
        if x.len() < 2 {
            return;
        }
        match self {
            Swapper::XorSwap => xor_swap(x),
            Swapper::R64Shift => r64shift(x),
            Swapper::SubSwap => sub_swap(x),
            Swapper::Tmp1Swap => tmp1swap(x),
            Swapper::Tmp2Swap => tmp2swap(x),
            Swapper::XorTmps => xor_tmps(x),
            Swapper::XorVals => xor_vals(x),
            Swapper::BufRacc => buf_racc(x),
            Swapper::BufMark => buf_mark(x),
            Swapper::BufCpos => buf_cpos(x),
            Swapper::Buf4Way => buf_4way(x),
        }
    }
}

fn xor_swap(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        x[i] ^= x[j];
        x[j] ^= x[i];
        x[i] ^= x[j];
    }
}

fn r64shift(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        let t = ((x[i] as u32 as u64) << 32) | (x[j] as u32 as u64);
        x[i] = t as u32 as i32;
        x[j] = (t >> 32) as u32 as i32;
    }
}

fn sub_swap(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        x[i] = x[i].wrapping_add(x[j]);
        x[j] = x[i].wrapping_sub(x[j]);
        x[i] = x[i].wrapping_sub(x[j]);
    }
}

fn tmp1swap(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        let t = x[i];
        x[i] = x[j];
        x[j] = t;
    }
}

fn tmp2swap(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        let x1 = x[j];
        let t = x[i];
        x[i] = x1;
        x[j] = t;
    }
}

fn xor_tmps(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        let mut x1 = x[i];
        let mut x2 = x[j];
        x1 ^= x2;
        x2 ^= x1;
        x1 ^= x2;
        x[i] = x1;
        x[j] = x2;
    }
}

fn xor_vals(x: &mut [i32]) {
    for i in 0..x.len() - 1 {
        let j = i + 1;
        let x1 = x[i];
        let x2 = x[j];
        let y1 = x1 ^ x2;
        let y2 = x2 ^ y1;
        let z1 = y1 ^ y2;
        x[i] = z1;
        x[j] = y2;
    }
}

fn buf_racc(x: &mut [i32]) {
    let n = x.len();
    let buf = IntBuf::wrap(x);
    for i in 0..n - 1 {
        let j = i + 1;
        let xi = buf.get_at(i);
        buf.put_at(i, buf.get_at(j));
        buf.put_at(j, xi);
    }
}

fn buf_mark(x: &mut [i32]) {
    let mut buf = IntBuf::wrap(x);
    buf.mark();
    while buf.remaining() > 1 {
        buf.mark();
        let i = buf.get();
        let j = buf.get();
        buf.reset();
        buf.put(j);
        buf.mark().put(i).reset();
    }
}

fn buf_cpos(x: &mut [i32]) {
    let mut buf = IntBuf::wrap(x);
    while buf.remaining() > 1 {
        let mark = buf.position();
        let i = buf.get();
        let j = buf.get();
        buf.set_position(mark);
        buf.put(j);
        buf.put(i);
        buf.set_position(mark + 1);
    }
}

fn buf_4way(x: &mut [i32]) {
    let cells = Cell::from_mut(x).as_slice_of_cells();
    let mut write2 = IntBuf::over(cells);
    let mut write1 = write2.slice();
    let mut lead = write2.slice();
    let mut trail = write2.slice();
    lead.set_position(1);
    write2.set_position(1);

    while write2.has_remaining() {
        let i = lead.get();
        let j = trail.get();
        write1.put(i);
        write2.put(j);
    }
}
