//! Code page lookup for SYLK files written by pre-Unicode spreadsheets.
//!
//! Multiplan, early Excel and the Macintosh office suites wrote SYLK in the
//! platform's native 8-bit code page. None of them record which one.

use encoding_rs::Encoding;

/// Map a Windows code page identifier to an `encoding_rs` encoding.
///
/// Returns `None` for code pages with no 8-bit SYLK writer behind them.
///
/// # Examples
/// ```
/// use sylk_reader::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(10000).unwrap();
/// assert_eq!(encoding.name(), "macintosh");
/// ```
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // DOS codepages
        437 | 850 => Some(encoding_rs::IBM866), // approximation
        866 => Some(encoding_rs::IBM866),

        // Windows
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),
        10007 => Some(encoding_rs::X_MAC_CYRILLIC),

        // ISO 8859
        28591 => Some(encoding_rs::WINDOWS_1252), // ISO-8859-1 approximation
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28605 => Some(encoding_rs::ISO_8859_15),

        65001 => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepage_to_encoding() {
        assert_eq!(codepage_to_encoding(1252), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(codepage_to_encoding(10000), Some(encoding_rs::MACINTOSH));
        assert_eq!(codepage_to_encoding(65001), Some(encoding_rs::UTF_8));
        assert_eq!(codepage_to_encoding(0), None);
    }

    #[test]
    fn test_mac_roman_bytes() {
        let encoding = codepage_to_encoding(10000).unwrap();
        let (text, had_errors) = encoding.decode_without_bom_handling(b"Caf\x8e");
        assert_eq!(text, "Café");
        assert!(!had_errors);
    }
}
