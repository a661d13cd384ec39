//! 扩展名 → MIME 固定映射
//!
//! 映射表是契约的一部分：不做内容嗅探，未知扩展名一律落到
//! `application/octet-stream`，该类型仍可安全地通过 data URI 往返。

/// 按扩展名（不含点，大小写不敏感）确定 MIME 类型。
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_image_types() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("jpeg"), "image/jpeg");
        assert_eq!(mime_for_extension("gif"), "image/gif");
        assert_eq!(mime_for_extension("webp"), "image/webp");
        assert_eq!(mime_for_extension("svg"), "image/svg+xml");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(mime_for_extension("PNG"), "image/png");
        assert_eq!(mime_for_extension("JpEg"), "image/jpeg");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(mime_for_extension("bmp"), "application/octet-stream");
        assert_eq!(mime_for_extension("tiff"), "application/octet-stream");
        assert_eq!(mime_for_extension(""), "application/octet-stream");
    }
}
