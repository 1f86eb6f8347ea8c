//! Printability rule for decoded code points

/// Whether a decoded code point counts as printable text
///
/// Tab is printable; the remaining C0 controls, DEL and the C1 controls
/// (U+0080..U+009F) are not. Everything else is printable, including format
/// characters and combining marks.
pub fn is_printable(codepoint: u32) -> bool {
    if codepoint == u32::from(b'\t') {
        return true;
    }
    if codepoint < 0x20 {
        return false;
    }
    !(0x7F..0xA0).contains(&codepoint)
}
