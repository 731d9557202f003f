//! Fallible string duplication and formatted-string building.
//!
//! Both primitives consult the store's [`Allocator`] first and then
//! reserve exactly the bytes they need with `try_reserve_exact`, so no
//! path here can abort the process on allocation failure.

use std::fmt::{self, Write};

use sprig_core::{AllocKind, AllocRequest, Allocator};

use crate::error::StoreError;

/// Copy `s` into a newly owned buffer of exactly `s.len()` bytes.
pub fn copy_str(alloc: &dyn Allocator, kind: AllocKind, s: &str) -> Result<String, StoreError> {
    let bytes = s.len();
    alloc.allocate(AllocRequest::new(kind, bytes))?;
    let mut out = String::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| StoreError::AllocationFailed { kind, bytes })?;
    out.push_str(s);
    Ok(out)
}

/// Format `args` into a newly owned buffer sized exactly to the result.
///
/// The arguments are rendered twice: once to measure, once to fill.
/// A `Display` impl that fails, or that produces more output on the
/// second pass than on the first, yields [`StoreError::FormatFailed`].
pub fn format_exact(alloc: &dyn Allocator, args: fmt::Arguments<'_>) -> Result<String, StoreError> {
    let mut measure = Measure(0);
    measure
        .write_fmt(args)
        .map_err(|_| StoreError::FormatFailed)?;
    let bytes = measure.0;

    alloc.allocate(AllocRequest::new(AllocKind::Formatted, bytes))?;
    let mut out = String::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| StoreError::AllocationFailed {
            kind: AllocKind::Formatted,
            bytes,
        })?;

    let mut fill = Bounded {
        buf: &mut out,
        limit: bytes,
    };
    fill.write_fmt(args).map_err(|_| StoreError::FormatFailed)?;
    Ok(out)
}

/// Counts formatted bytes without storing them.
struct Measure(usize);

impl Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = self.0.checked_add(s.len()).ok_or(fmt::Error)?;
        Ok(())
    }
}

/// Appends into a pre-reserved buffer, refusing to grow past `limit`.
struct Bounded<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl Write for Bounded<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.limit {
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}
