//! Byte decoding for data files that are not always saved as UTF-8.

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode file bytes to text.
///
/// Valid UTF-8 is used as is. Anything else goes through encoding detection,
/// with lossy UTF-8 as the last resort, so decoding never fails. A leading
/// byte order mark is removed.
pub fn decode_content(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => match detect_encoding(bytes).as_str() {
            "iso-8859-1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
            "windows-1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
            _ => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
