//! This module contains the C foreign function interface for collinear_chains.
//!
//! Points cross the boundary in single precision ([colc_point]), the computation runs in double
//! precision and the chains are rounded back before being handed out through a [colc_output].
//!
//! ## Error Codes
//! * 0 = success.
//! * 1 = a required pointer argument is null.
//! * 2 = index out of range.
//! * 3 = invalid input, the message is available from [colc_last_error_message].
//! * -1 = a panic was caught.
#![allow(non_camel_case_types)]
pub mod error_handling;

use collinear_chains::{
    collinear_chains, collinear_chains_many, core::math::Vector2, Chain, ChainOptions,
    ChainsOutput,
};
use core::slice;
use error_handling::{clear_last_error, set_last_error, with_last_error};
use std::{os::raw::c_char, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct colc_point {
    pub x: f32,
    pub y: f32,
}

impl colc_point {
    pub fn new(x: f32, y: f32) -> Self {
        colc_point { x, y }
    }

    pub fn from_internal(v: Vector2<f32>) -> Self {
        colc_point::new(v.x, v.y)
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y).widen()
    }
}

/// Borrowed array of [colc_point] used to pass a batch of polylines.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct colc_path {
    pub points: *const colc_point,
    pub n_points: u32,
}

/// Opaque type that wraps a [ChainsOutput].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct colc_output(pub ChainsOutput<f32>);

/// Read `n` points, `None` if `points` is null while `n` is not zero.
unsafe fn read_points(points: *const colc_point, n: u32) -> Option<Vec<Vector2<f64>>> {
    if n == 0 {
        return Some(Vec::new());
    }

    if points.is_null() {
        return None;
    }

    let data = slice::from_raw_parts(points, n as usize);
    Some(data.iter().map(|p| p.to_internal()).collect())
}

fn narrow_chains(chains: Vec<Chain<f64>>) -> Vec<Chain<f32>> {
    chains.into_iter().map(Chain::narrow).collect()
}

unsafe fn write_output(result: ChainsOutput<f32>, output: *mut *const colc_output) -> i32 {
    output.write(Box::into_raw(Box::new(colc_output(result))));
    0
}

/// Extract the chains of a polyline running along the edges of a polygon.
///
/// `polyline` is an array of [colc_point] (may be null if `n_polyline` is 0).
/// `polygon` is an array of [colc_point] holding the implicitly closed polygon (may be null if
/// `n_polygon` is 0).
/// `epsilon` is the collinearity and adjacency tolerance (0 for exact matches).
/// `output` is an out parameter to hold the created [colc_output], its kind is `Flat` (1) or
/// `Empty` (0).
///
/// ## Specific Error Codes
/// * 1 = `output` is null, or `polyline`/`polygon` is null with a non zero count.
/// * 3 = invalid input (non-finite coordinate, identical consecutive points, explicitly closed
///   path, or bad `epsilon`).
///
/// # Safety
///
/// `polyline` and `polygon` must be null or point to valid buffers of at least `n_polyline` and
/// `n_polygon` [colc_point] respectively.
/// `output` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_collinear_chains(
    polyline: *const colc_point,
    n_polyline: u32,
    polygon: *const colc_point,
    n_polygon: u32,
    epsilon: f64,
    output: *mut *const colc_output,
) -> i32 {
    ffi_catch_unwind!({
        const FUNCTION: &str = "colc_collinear_chains";
        clear_last_error();
        if output.is_null() {
            return 1;
        }

        let (polyline, polygon) = match (
            read_points(polyline, n_polyline),
            read_points(polygon, n_polygon),
        ) {
            (Some(pl), Some(pg)) => (pl, pg),
            _ => return 1,
        };

        let options = ChainOptions::with_epsilon(epsilon);
        match collinear_chains(&polyline, &polygon, &options) {
            Ok(chains) => write_output(ChainsOutput::flat(narrow_chains(chains)), output),
            Err(e) => {
                set_last_error(FUNCTION, e.to_string());
                3
            }
        }
    })
}

/// Extract the chains of every polyline in a batch against one polygon.
///
/// `polylines` is an array of [colc_path] (may be null if `n_polylines` is 0).
/// `output` is an out parameter to hold the created [colc_output], its kind is `PerPolyline` (2)
/// with one group per input polyline in input order, or `Empty` (0) if `n_polylines` is 0.
///
/// See [colc_collinear_chains] for the other parameters.
///
/// ## Specific Error Codes
/// * 1 = `output` is null, or a point array is null with a non zero count.
/// * 3 = invalid input, the message names the position of the offending polyline.
///
/// # Safety
///
/// `polylines` must be null or point to a valid buffer of at least `n_polylines` [colc_path], each
/// holding a valid point buffer.
/// `polygon` must be null or point to a valid buffer of at least `n_polygon` [colc_point].
/// `output` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_collinear_chains_many(
    polylines: *const colc_path,
    n_polylines: u32,
    polygon: *const colc_point,
    n_polygon: u32,
    epsilon: f64,
    output: *mut *const colc_output,
) -> i32 {
    ffi_catch_unwind!({
        const FUNCTION: &str = "colc_collinear_chains_many";
        clear_last_error();
        if output.is_null() || (polylines.is_null() && n_polylines != 0) {
            return 1;
        }

        let polygon = match read_points(polygon, n_polygon) {
            Some(pg) => pg,
            None => return 1,
        };

        let paths = if n_polylines == 0 {
            &[][..]
        } else {
            slice::from_raw_parts(polylines, n_polylines as usize)
        };

        let mut host_polylines = Vec::with_capacity(paths.len());
        for p in paths {
            match read_points(p.points, p.n_points) {
                Some(pl) => host_polylines.push(pl),
                None => return 1,
            }
        }

        let options = ChainOptions::with_epsilon(epsilon);
        match collinear_chains_many(&host_polylines, &polygon, &options) {
            Ok(results) => {
                let groups = results.into_iter().map(narrow_chains).collect();
                write_output(ChainsOutput::per_polyline(groups), output)
            }
            Err(e) => {
                set_last_error(FUNCTION, e.to_string());
                3
            }
        }
    })
}

/// Free an existing [colc_output] object.
///
/// Nothing happens if `output` is null.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object that was created by this library and has
/// not already been freed.
#[no_mangle]
pub unsafe extern "C" fn colc_output_f(output: *mut colc_output) {
    if !output.is_null() {
        drop(Box::from_raw(output))
    }
}

/// Get the kind of a [colc_output].
///
/// `kind` is an out parameter: 0 = empty, 1 = flat, 2 = per polyline, 3 = per polygon.
///
/// ## Specific Error Codes
/// * 1 = `output` is null.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object.
/// `kind` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_output_get_kind(output: *const colc_output, kind: *mut u8) -> i32 {
    ffi_catch_unwind!({
        if output.is_null() {
            return 1;
        }

        kind.write((*output).0.kind() as u8);
        0
    })
}

/// Get the number of groups in a [colc_output].
///
/// A flat output has exactly one group, an empty output has none.
///
/// ## Specific Error Codes
/// * 1 = `output` is null.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_output_get_group_count(
    output: *const colc_output,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if output.is_null() {
            return 1;
        }

        // using try_from to catch odd case of count greater than u32::MAX to prevent memory
        // corruption/access errors but just panic as internal error if it does occur
        count.write(u32::try_from((*output).0.group_count()).unwrap());
        0
    })
}

/// Get the number of chains in the group at `group_index` of a [colc_output].
///
/// ## Specific Error Codes
/// * 1 = `output` is null.
/// * 2 = `group_index` out of range.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_output_get_chain_count(
    output: *const colc_output,
    group_index: u32,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if output.is_null() {
            return 1;
        }

        match (*output).0.group(group_index as usize) {
            Some(g) => {
                count.write(u32::try_from(g.len()).unwrap());
                0
            }
            None => 2,
        }
    })
}

fn get_chain(output: &colc_output, group_index: u32, chain_index: u32) -> Option<&Chain<f32>> {
    output
        .0
        .group(group_index as usize)
        .and_then(|g| g.get(chain_index as usize))
}

/// Get the number of points of a chain in a [colc_output].
///
/// ## Specific Error Codes
/// * 1 = `output` is null.
/// * 2 = `group_index` or `chain_index` out of range.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_output_get_point_count(
    output: *const colc_output,
    group_index: u32,
    chain_index: u32,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if output.is_null() {
            return 1;
        }

        match get_chain(&*output, group_index, chain_index) {
            Some(c) => {
                count.write(u32::try_from(c.len()).unwrap());
                0
            }
            None => 2,
        }
    })
}

/// Fills the buffer given with the points of a chain in a [colc_output].
///
/// You must use [colc_output_get_point_count] to ensure the buffer given has adequate length
/// to be filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `output` or `points` is null.
/// * 2 = `group_index` or `chain_index` out of range.
///
/// # Safety
///
/// `output` must be null or a valid [colc_output] object.
/// `points` must point to a buffer that is large enough to hold all the chain points or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_output_get_points(
    output: *const colc_output,
    group_index: u32,
    chain_index: u32,
    points: *mut colc_point,
) -> i32 {
    ffi_catch_unwind!({
        if output.is_null() || points.is_null() {
            return 1;
        }

        let chain = match get_chain(&*output, group_index, chain_index) {
            Some(c) => c,
            None => return 2,
        };

        let buffer = slice::from_raw_parts_mut(points, chain.len());
        for (i, &p) in chain.iter().enumerate() {
            buffer[i] = colc_point::from_internal(p);
        }
        0
    })
}

/// Get the length in bytes (including the nul terminator) of the last error message set on the
/// calling thread, 0 if no error is set.
///
/// The last error is cleared at the start of every computing function ([colc_collinear_chains],
/// [colc_collinear_chains_many]) and set when one returns error code 3.
///
/// ## Specific Error Codes
/// * 1 = `len` is null.
///
/// # Safety
///
/// `len` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_last_error_message_len(len: *mut u32) -> i32 {
    ffi_catch_unwind!({
        if len.is_null() {
            return 1;
        }

        let n = with_last_error(|e| e.map_or(0, |e| e.error_msg.as_bytes_with_nul().len()));
        len.write(u32::try_from(n).unwrap());
        0
    })
}

/// Copy the last error message set on the calling thread into `buffer` as a nul terminated
/// string.
///
/// The message is truncated to `buffer_len - 1` bytes if it does not fit, an empty string is
/// written if no error is set. Use [colc_last_error_message_len] for the required length.
///
/// ## Specific Error Codes
/// * 1 = `buffer` is null or `buffer_len` is 0.
///
/// # Safety
///
/// `buffer` must be null or point to a writable buffer of at least `buffer_len` bytes.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn colc_last_error_message(buffer: *mut c_char, buffer_len: u32) -> i32 {
    ffi_catch_unwind!({
        if buffer.is_null() || buffer_len == 0 {
            return 1;
        }

        let out = slice::from_raw_parts_mut(buffer as *mut u8, buffer_len as usize);
        with_last_error(|e| {
            let msg = e.map_or(&[][..], |e| e.error_msg.as_bytes());
            let n = msg.len().min(out.len() - 1);
            out[..n].copy_from_slice(&msg[..n]);
            out[n] = 0;
        });
        0
    })
}
