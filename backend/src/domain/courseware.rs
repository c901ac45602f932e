//! Courseware tree and its mobile projection.
//!
//! The content store hands out a chapter → section → unit → component tree.
//! The renderer turns a section into display items. Mobile clients only need
//! units with their verticals flattened to names, and video details for
//! video components.

use std::collections::BTreeMap;

/// How deep the content store should prefetch children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefetchDepth {
    Limited(u32),
    Unlimited,
}

/// Node of the course content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Last component of the node's usage location (the `url_name`).
    pub location_name: String,
    pub display_name: String,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(location_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            location_name: location_name.into(),
            display_name: display_name.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<ContentNode>) -> Self {
        self.children = children;
        self
    }

    /// First direct child whose location name matches.
    #[must_use]
    pub fn child(&self, location_name: &str) -> Option<&ContentNode> {
        self.children
            .iter()
            .find(|node| node.location_name == location_name)
    }

    /// Whether any descendant exists exactly `depth` levels below this node.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::ContentNode;
    ///
    /// let course = ContentNode::new("course", "Course").with_children(vec![
    ///     ContentNode::new("week1", "Week 1")
    ///         .with_children(vec![ContentNode::new("intro", "Intro")]),
    /// ]);
    /// assert!(course.has_children_at_depth(2));
    /// assert!(!course.has_children_at_depth(3));
    /// ```
    #[must_use]
    pub fn has_children_at_depth(&self, depth: u32) -> bool {
        match depth {
            0 => true,
            _ => self
                .children
                .iter()
                .any(|child| child.has_children_at_depth(depth - 1)),
        }
    }
}

/// Section entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSection {
    pub display_name: String,
    pub url_name: String,
    pub format: String,
    pub due: Option<String>,
    pub active: bool,
    pub graded: bool,
}

/// Chapter entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocChapter {
    pub display_name: String,
    pub url_name: String,
    pub active: bool,
    pub sections: Vec<TocSection>,
}

/// Video-specific fields of a rendered component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoComponent {
    pub html5_sources: Vec<String>,
    /// Language code to transcript file.
    pub transcripts: BTreeMap<String, String>,
    /// Default subtitle track; empty when the video has none.
    pub sub: String,
}

impl VideoComponent {
    /// Transcript map with the default track exposed as English.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::VideoComponent;
    ///
    /// let video = VideoComponent { sub: "OEoXaMPEzfM".into(), ..VideoComponent::default() };
    /// assert_eq!(video.subtitles()["en"], "OEoXaMPEzfM");
    /// ```
    #[must_use]
    pub fn subtitles(&self) -> BTreeMap<String, String> {
        let mut subtitles = self.transcripts.clone();
        if !self.sub.is_empty() {
            subtitles.insert("en".to_owned(), self.sub.clone());
        }
        subtitles
    }
}

/// Kind of a rendered display item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayKind {
    Video(VideoComponent),
    Other,
}

/// Node produced by the rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub display_name: String,
    pub kind: DisplayKind,
    pub children: Vec<DisplayItem>,
}

impl DisplayItem {
    pub fn other(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            kind: DisplayKind::Other,
            children: Vec::new(),
        }
    }

    pub fn video(display_name: impl Into<String>, video: VideoComponent) -> Self {
        Self {
            display_name: display_name.into(),
            kind: DisplayKind::Video(video),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<DisplayItem>) -> Self {
        self.children = children;
        self
    }
}

/// Flattened vertical shown by the mobile client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vertical {
    Video {
        name: String,
        video_sources: Vec<String>,
        subtitles: BTreeMap<String, String>,
    },
    Other {
        name: String,
    },
}

impl From<&DisplayItem> for Vertical {
    fn from(item: &DisplayItem) -> Self {
        match &item.kind {
            DisplayKind::Video(video) => Self::Video {
                name: item.display_name.clone(),
                video_sources: video.html5_sources.clone(),
                subtitles: video.subtitles(),
            },
            DisplayKind::Other => Self::Other {
                name: item.display_name.clone(),
            },
        }
    }
}

/// Unit of a section with its verticals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub verticals: Vec<Vertical>,
}

impl From<&DisplayItem> for Unit {
    fn from(item: &DisplayItem) -> Self {
        Self {
            name: item.display_name.clone(),
            verticals: item.children.iter().map(Vertical::from).collect(),
        }
    }
}
