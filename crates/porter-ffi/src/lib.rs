// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// porter-ffi: C-compatible FFI layer for the Porter stemmer.
//
// Two levels of API:
// - `porter_stem_buf` stems a caller-owned byte buffer in place and
//   allocates nothing.
// - The handle API (`porter_new` .. `porter_free`) wraps `StemHandle` with
//   case folding, caching and text tokenization.
//
// Memory management rules:
// - Opaque `StemHandle` pointer: created by `porter_new`, freed by `porter_free`.
// - Returned strings: caller must free with `porter_free_str`.
// - Returned string arrays: caller must free with `porter_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use porter_stem::StemError;
use porter_stem::handle::{NonAsciiPolicy, StemHandle};

// ── In-place stemming ───────────────────────────────────────────

/// Stem the lowercase ASCII word in `buf[0..len]` in place.
///
/// Returns the length of the stem, which is never greater than `len`. The
/// bytes after the stem are left in an unspecified state. Returns 0 if
/// `buf` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_stem_buf(buf: *mut u8, len: usize) -> usize {
    if buf.is_null() || len == 0 {
        return 0;
    }
    let word = unsafe { slice::from_raw_parts_mut(buf, len) };
    porter_stem::stem_in_place(word)
}

/// Stem a word with default options.
///
/// Returns a heap-allocated C string. Caller must free with `porter_free_str`.
/// Returns NULL on error (NULL input, invalid UTF-8, non-ASCII word).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_stem(word: *const c_char) -> *mut c_char {
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    result_to_c(porter_stem::stem(word), word)
}

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new stemming handle with default options.
#[unsafe(no_mangle)]
pub extern "C" fn porter_new() -> *mut StemHandle {
    Box::into_raw(Box::new(StemHandle::new()))
}

/// Free a handle created by `porter_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free(handle: *mut StemHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Handle stemming ─────────────────────────────────────────────

/// Stem a word using the handle's options and cache.
///
/// Returns a heap-allocated C string. Caller must free with `porter_free_str`.
/// Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_handle_stem(
    handle: *const StemHandle,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    result_to_c(handle.stem(word), word)
}

/// Tokenize a text and stem each of its words.
///
/// Returns a NULL-terminated array of stems in text order. Caller must free
/// with `porter_free_str_array`. Returns NULL on error. Under the default
/// reject policy a single non-ASCII word fails the whole text; set policy 1
/// (skip) to pass such words through lowercased.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_handle_stem_words(
    handle: *const StemHandle,
    text: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    match handle.stem_text(text) {
        Ok(tokens) => {
            let stems: Vec<String> = tokens.into_iter().map(|t| t.stem).collect();
            strings_to_c_array(&stems)
        }
        Err(e) => {
            tracing::debug!(error = %e, "stemming text failed");
            ptr::null_mut()
        }
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Keep the case pattern of input words in their stems (non-zero = on).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_set_keep_case(handle: *mut StemHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_keep_case(value != 0);
    }
}

/// Set the non-ASCII policy: 0 = reject, 1 = skip, 2 = stem.
///
/// Returns 0 on success, -1 for a NULL handle or an unknown policy.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_set_non_ascii_policy(handle: *mut StemHandle, value: c_int) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let Some(policy) = int_to_policy(value) else {
        return -1;
    };
    handle.set_non_ascii_policy(policy);
    0
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_set_min_word_length(handle: *mut StemHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_min_word_length(value.max(0) as usize);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_set_cache_capacity(handle: *mut StemHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_cache_capacity(value.max(0) as usize);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn porter_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(StemHandle::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by porter functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn porter_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn result_to_c(result: Result<String, StemError>, word: &str) -> *mut c_char {
    match result {
        Ok(stem) => str_to_c(&stem),
        Err(e) => {
            tracing::debug!(word, error = %e, "stemming failed");
            ptr::null_mut()
        }
    }
}

fn int_to_policy(value: c_int) -> Option<NonAsciiPolicy> {
    match value {
        0 => Some(NonAsciiPolicy::Reject),
        1 => Some(NonAsciiPolicy::Skip),
        2 => Some(NonAsciiPolicy::Stem),
        _ => None,
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    // A boxed slice has capacity == len, which the free function relies on.
    Box::into_raw(ptrs.into_boxed_slice()) as *mut *mut c_char
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
