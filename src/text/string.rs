/// Appends `value` with `"` and `\` prefixed by a backslash.
///
/// Nothing else is escaped: the parser copies the character after a
/// backslash through unchanged, so this is exactly what re-parsing undoes.
pub fn escape_string_into(out: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, byte) in bytes.iter().enumerate() {
        if !matches!(byte, b'"' | b'\\') {
            continue;
        }
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        out.push('\\');
        out.push(*byte as char);
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}
