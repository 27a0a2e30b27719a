//! Wire format of the video feed.
//!
//! Decoding happens in two stages: the document shape (`googlevideos` array of
//! categories, each with a `videos` array) first, then each video on its own so
//! that a broken entry can be reported with its category and position.

use serde::Deserialize;
use serde_json::Value;

use super::errors::CatalogError;

#[derive(Debug, Deserialize)]
pub struct Feed {
    #[serde(rename = "googlevideos")]
    pub categories: Vec<FeedCategory>,
}

#[derive(Debug, Deserialize)]
pub struct FeedCategory {
    #[serde(rename = "category")]
    pub name: String,
    pub videos: Vec<Value>,
}

/// Fields read before deciding whether a video is playable at all
#[derive(Debug, Deserialize)]
struct SourcesHeader {
    #[allow(dead_code)]
    description: String,
    sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedVideo {
    pub description: String,
    pub sources: Vec<String>,
    pub title: String,
    pub background: String,
    pub card: String,
    pub studio: String,
}

impl FeedVideo {
    /// First listed source, the one that gets played
    pub fn primary_source(&self) -> Option<&str> {
        self.sources.first().map(String::as_str)
    }
}

impl FeedCategory {
    /// Decode the video at `index`.
    ///
    /// `Ok(None)` means the video has no sources and is filtered out.
    pub fn video(&self, index: usize) -> Result<Option<FeedVideo>, CatalogError> {
        let Some(value) = self.videos.get(index) else {
            return Ok(None);
        };

        let header = SourcesHeader::deserialize(value).map_err(|e| self.decode_error(index, e))?;
        if header.sources.is_none_or(|sources| sources.is_empty()) {
            return Ok(None);
        }

        FeedVideo::deserialize(value)
            .map(Some)
            .map_err(|e| self.decode_error(index, e))
    }

    fn decode_error(&self, index: usize, error: serde_json::Error) -> CatalogError {
        CatalogError::Decode {
            category: self.name.clone(),
            index,
            message: error.to_string(),
        }
    }
}

/// Decode feed bytes as ISO-8859-1 text.
///
/// Every byte becomes the code point of the same value, whatever charset the
/// server declared. Line breaks are dropped because the feed is consumed
/// line by line and re-joined without separators.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|&&byte| byte != b'\n' && byte != b'\r')
        .map(|&byte| char::from(byte))
        .collect()
}

pub fn parse_feed(text: &str) -> Result<Feed, CatalogError> {
    serde_json::from_str(text).map_err(|e| CatalogError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(videos: Value) -> FeedCategory {
        serde_json::from_value(json!({ "category": "Drama", "videos": videos })).unwrap()
    }

    fn full_video() -> Value {
        json!({
            "description": "A film",
            "sources": ["http://media/a.mp4", "http://media/b.mp4"],
            "title": "Film",
            "background": "bg.jpg",
            "card": "card.jpg",
            "studio": "Studio",
            "extra": 1
        })
    }

    #[test]
    fn test_decode_latin1_maps_bytes_to_code_points() {
        assert_eq!(decode_latin1(b"abc"), "abc");
        assert_eq!(decode_latin1(&[0x63, 0x61, 0x66, 0xE9]), "caf\u{e9}");
        // UTF-8 input is not reinterpreted
        assert_eq!(decode_latin1("é".as_bytes()), "\u{c3}\u{a9}");
    }

    #[test]
    fn test_decode_latin1_drops_line_breaks() {
        assert_eq!(decode_latin1(b"{\r\n\"a\":\n1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_feed_shape() {
        let feed = parse_feed(
            &json!({
                "googlevideos": [
                    { "category": "Drama", "videos": [] },
                    { "category": "Comedy", "videos": [full_video()] }
                ]
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(feed.categories.len(), 2);
        assert_eq!(feed.categories[1].name, "Comedy");
        assert_eq!(feed.categories[1].videos.len(), 1);
    }

    #[test]
    fn test_parse_feed_rejects_bad_documents() {
        assert!(matches!(parse_feed("<html>"), Err(CatalogError::Malformed(_))));
        assert!(matches!(parse_feed("{}"), Err(CatalogError::Malformed(_))));
        assert!(matches!(
            parse_feed(r#"{"googlevideos": [{"category": "Drama"}]}"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_video_decodes_all_fields() {
        let video = category(json!([full_video()])).video(0).unwrap().unwrap();
        assert_eq!(video.title, "Film");
        assert_eq!(video.studio, "Studio");
        assert_eq!(video.primary_source(), Some("http://media/a.mp4"));
    }

    #[test]
    fn test_video_without_sources_is_skipped() {
        let mut empty = full_video();
        empty["sources"] = json!([]);
        let mut absent = full_video();
        absent.as_object_mut().unwrap().remove("sources");
        // Unplayable entries are filtered before the other fields are read
        let bare = json!({ "description": "Only a description" });

        let category = category(json!([empty, absent, bare]));
        assert_eq!(category.video(0).unwrap(), None);
        assert_eq!(category.video(1).unwrap(), None);
        assert_eq!(category.video(2).unwrap(), None);
    }

    #[test]
    fn test_video_missing_required_field() {
        let mut video = full_video();
        video.as_object_mut().unwrap().remove("title");

        let error = category(json!([full_video(), video])).video(1).unwrap_err();
        match error {
            CatalogError::Decode {
                category,
                index,
                message,
            } => {
                assert_eq!(category, "Drama");
                assert_eq!(index, 1);
                assert!(message.contains("title"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_video_missing_description_fails_even_without_sources() {
        let category = category(json!([{ "sources": [] }]));
        assert!(category.video(0).unwrap_err().is_decode_error());
    }
}
