use fltk::text::TextBuffer;

use super::platform::TextStore;

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` calls FLTK's `Fl_Text_Buffer_text()` which
/// returns a `malloc()`'d C string. The Rust wrapper copies this to a String
/// but never frees the original C pointer, so every call would leak the full
/// buffer size. This helper calls the FFI directly and frees the allocation.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a malloc'd, null-terminated copy (or null),
    // which is read once and released with the matching free().
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

impl TextStore for TextBuffer {
    fn replace_all(&mut self, text: &str) {
        self.set_text(text);
    }

    fn contents(&self) -> String {
        buffer_text_no_leak(self)
    }

    fn insert_at(&mut self, pos: usize, text: &str) {
        self.insert(pos as i32, text);
    }
}
