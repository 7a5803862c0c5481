/// Closed set of video container formats the analysis request accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoMimeType {
    Mp4,
    Webm,
    Quicktime,
    Wmv,
    Avi,
    Flv,
    Matroska,
    Mp2t,
}

impl VideoMimeType {
    /// Map a declared content type onto a supported format.
    ///
    /// Unknown or missing types degrade to `Mp4` instead of failing. Bytes are
    /// never inspected; only the declared label matters.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return Self::Mp4;
        };

        match content_type.to_ascii_lowercase().as_str() {
            "video/webm" => Self::Webm,
            "video/quicktime" | "video/mov" => Self::Quicktime,
            "video/x-ms-wmv" | "video/wmv" => Self::Wmv,
            "video/x-msvideo" | "video/avi" => Self::Avi,
            "video/x-flv" | "video/flv" => Self::Flv,
            "video/x-matroska" | "video/mkv" => Self::Matroska,
            // AVCHD streams share the MPEG transport container with MTS.
            "video/mp2t" | "video/mts" | "video/x-avchd" | "video/avchd" => Self::Mp2t,
            _ => Self::Mp4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Webm => "video/webm",
            Self::Quicktime => "video/quicktime",
            Self::Wmv => "video/x-ms-wmv",
            Self::Avi => "video/x-msvideo",
            Self::Flv => "video/x-flv",
            Self::Matroska => "video/x-matroska",
            Self::Mp2t => "video/mp2t",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_types_map_to_themselves() {
        assert_eq!(
            VideoMimeType::from_content_type(Some("video/webm")),
            VideoMimeType::Webm
        );
        assert_eq!(
            VideoMimeType::from_content_type(Some("video/x-matroska")),
            VideoMimeType::Matroska
        );
    }

    #[test]
    fn test_shorthand_aliases_resolve() {
        assert_eq!(
            VideoMimeType::from_content_type(Some("video/mov")),
            VideoMimeType::Quicktime
        );
        assert_eq!(
            VideoMimeType::from_content_type(Some("video/avi")),
            VideoMimeType::Avi
        );
        assert_eq!(
            VideoMimeType::from_content_type(Some("video/avchd")),
            VideoMimeType::Mp2t
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            VideoMimeType::from_content_type(Some("Video/WebM")),
            VideoMimeType::Webm
        );
    }

    #[test]
    fn test_missing_type_falls_back_to_mp4() {
        assert_eq!(VideoMimeType::from_content_type(None), VideoMimeType::Mp4);
    }

    #[test]
    fn test_unknown_type_falls_back_to_mp4() {
        assert_eq!(
            VideoMimeType::from_content_type(Some("application/octet-stream")),
            VideoMimeType::Mp4
        );
    }

    #[test]
    fn test_as_str_round_trip() {
        assert_eq!(VideoMimeType::Wmv.as_str(), "video/x-ms-wmv");
        assert_eq!(VideoMimeType::Mp2t.as_str(), "video/mp2t");
    }
}
