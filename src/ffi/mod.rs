//! C ABI over the pure helpers, for the mobile shells that render the
//! wallet screens. Strings returned as `*mut c_char` are owned by the caller
//! and must be released with [`wallet_string_free`].

use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_double, c_int},
    ptr,
    sync::OnceLock,
};

use crate::core::services::ServiceError;
use crate::currency::format_money;
use crate::domain::{classify_category, parse_date};
use crate::errors::WalletError;

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

/// Error categories surfaced across the FFI boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCategory {
    Ok = 0,
    Validation = 1,
    Fixtures = 2,
    Configuration = 3,
}

impl From<FfiErrorCategory> for i32 {
    fn from(value: FfiErrorCategory) -> Self {
        value as i32
    }
}

pub fn classify_error(err: &WalletError) -> FfiErrorCategory {
    match err {
        WalletError::Io(_) | WalletError::Serde(_) => FfiErrorCategory::Fixtures,
        WalletError::Config(_) => FfiErrorCategory::Configuration,
    }
}

pub fn classify_service_error(err: &ServiceError) -> FfiErrorCategory {
    match err {
        ServiceError::Wallet(inner) => classify_error(inner),
        ServiceError::Invalid(_) => FfiErrorCategory::Validation,
    }
}

#[no_mangle]
pub extern "C" fn wallet_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

#[no_mangle]
pub extern "C" fn wallet_ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Signed money text, e.g. `+$1,234.50`.
#[no_mangle]
pub extern "C" fn wallet_format_money(amount: c_double) -> *mut c_char {
    into_c_string(format_money(amount))
}

/// Zero-based month index for a date string such as `"June 28"`, or `-1`.
#[no_mangle]
pub extern "C" fn wallet_parse_month(text: *const c_char) -> c_int {
    let Some(text) = (unsafe { c_string_argument(text) }) else {
        return -1;
    };
    parse_date(&text)
        .map(|date| date.month0() as c_int)
        .unwrap_or(-1)
}

/// Icon name for a category tag; unknown or unreadable tags get the fallback.
#[no_mangle]
pub extern "C" fn wallet_category_icon(tag: *const c_char) -> *mut c_char {
    let tag = unsafe { c_string_argument(tag) };
    into_c_string(classify_category(tag.as_deref()).icon.to_string())
}

#[no_mangle]
pub extern "C" fn wallet_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(value));
    }
}

/// `None` for null pointers and invalid UTF-8.
unsafe fn c_string_argument(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(str::to_string)
}

fn into_c_string(value: String) -> *mut c_char {
    CString::new(value)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}
