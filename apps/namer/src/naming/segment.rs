//! Typed filename segments and their stable display colors.

use serde::{Deserialize, Serialize};

/// Category of one filename component. Declaration order is filename order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentCategory {
    Program,
    Version,
    LangSub,
    FileFormat,
    VideoFormat,
    VideoAspect,
    Resolution,
    Cadence,
    AudioFormat,
    AudioCodec,
    Date,
}

impl SegmentCategory {
    pub const ALL: [SegmentCategory; 11] = [
        SegmentCategory::Program,
        SegmentCategory::Version,
        SegmentCategory::LangSub,
        SegmentCategory::FileFormat,
        SegmentCategory::VideoFormat,
        SegmentCategory::VideoAspect,
        SegmentCategory::Resolution,
        SegmentCategory::Cadence,
        SegmentCategory::AudioFormat,
        SegmentCategory::AudioCodec,
        SegmentCategory::Date,
    ];

    /// Display color for this category. Every category has its own color, so a
    /// segment renders identically wherever it sits in a filename.
    pub fn color(self) -> &'static str {
        match self {
            SegmentCategory::Program => "#1f77b4",
            SegmentCategory::Version => "#ff7f0e",
            SegmentCategory::LangSub => "#2ca02c",
            SegmentCategory::FileFormat => "#d62728",
            SegmentCategory::VideoFormat => "#9467bd",
            SegmentCategory::VideoAspect => "#8c564b",
            SegmentCategory::Resolution => "#e377c2",
            SegmentCategory::Cadence => "#7f7f7f",
            SegmentCategory::AudioFormat => "#bcbd22",
            SegmentCategory::AudioCodec => "#17becf",
            SegmentCategory::Date => "#393b79",
        }
    }

    /// Whether the segment is dropped when its value is empty.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            SegmentCategory::Version
                | SegmentCategory::VideoAspect
                | SegmentCategory::Resolution
                | SegmentCategory::Cadence
                | SegmentCategory::AudioCodec
        )
    }
}

/// One labeled component of a generated filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub category: SegmentCategory,
    pub value: String,
}

impl Segment {
    pub fn new(category: SegmentCategory, value: impl Into<String>) -> Self {
        Segment {
            category,
            value: value.into(),
        }
    }
}

/// A segment paired with its display color, as returned to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredSegment {
    pub category: SegmentCategory,
    pub value: String,
    pub color: &'static str,
}

pub fn colorize(segments: &[Segment]) -> Vec<ColoredSegment> {
    segments
        .iter()
        .map(|s| ColoredSegment {
            category: s.category,
            value: s.value.clone(),
            color: s.category.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_color_table_is_injective() {
        let colors: HashSet<&str> = SegmentCategory::ALL.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), SegmentCategory::ALL.len());
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = SegmentCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, SegmentCategory::ALL);
    }

    #[test]
    fn test_optional_categories() {
        let optional: Vec<SegmentCategory> = SegmentCategory::ALL
            .into_iter()
            .filter(|c| c.is_optional())
            .collect();
        assert_eq!(
            optional,
            vec![
                SegmentCategory::Version,
                SegmentCategory::VideoAspect,
                SegmentCategory::Resolution,
                SegmentCategory::Cadence,
                SegmentCategory::AudioCodec,
            ]
        );
    }

    #[test]
    fn test_colorize_is_position_independent() {
        let a = colorize(&[
            Segment::new(SegmentCategory::Program, "Show"),
            Segment::new(SegmentCategory::Date, "250307"),
        ]);
        let b = colorize(&[Segment::new(SegmentCategory::Date, "260101")]);
        assert_eq!(a[1].color, b[0].color);
        assert_ne!(a[0].color, a[1].color);
    }

    #[test]
    fn test_category_serializes_screaming_snake() {
        let json = serde_json::to_string(&SegmentCategory::LangSub).unwrap();
        assert_eq!(json, "\"LANG_SUB\"");
    }
}
