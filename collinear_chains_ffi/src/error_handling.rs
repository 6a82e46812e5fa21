use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
#[derive(Debug, Clone)]
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the FFI function that reported the error.
    pub function: &'static str,
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information for the calling thread.
///
/// Interior nul bytes are dropped from `error_msg` so it always converts to a C string.
pub fn set_last_error<T: Into<Vec<u8>>>(function: &'static str, error_msg: T) {
    let mut bytes = error_msg.into();
    bytes.retain(|&b| b != 0);
    let error_msg = CString::new(bytes).unwrap_or_default();
    log::debug!("{function}: {}", error_msg.to_string_lossy());

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData {
            error_msg,
            function,
        });
    });
}

/// Clear the last error of the calling thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        last_error.borrow_mut().take();
    });
}

/// Run `f` with the last error of the calling thread (if any).
pub fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(Option<&LastErrorData>) -> R,
{
    LAST_ERROR.with(|last_error| f(last_error.borrow().as_ref()))
}
