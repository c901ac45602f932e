//! Course catalogue entities.
//!
//! Courses are owned by the platform catalogue. The adapters only read the
//! display metadata, schedule and marketing ("about") sections.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Errors raised while parsing a course identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseKeyError {
    /// Identifier did not have exactly three `/`-separated parts.
    #[error("course id must look like org/number/run, got {value:?}")]
    Malformed { value: String },
    /// One of the parts was empty.
    #[error("course id {value:?} has an empty {part}")]
    EmptyPart { value: String, part: &'static str },
}

/// Structured course identifier parsed from `org/number/run`.
///
/// # Examples
/// ```
/// use mobile_api::domain::CourseKey;
///
/// let key: CourseKey = "edX/DemoX/Demo_Course".parse().expect("valid key");
/// assert_eq!(key.org(), "edX");
/// assert_eq!(key.to_string(), "edX/DemoX/Demo_Course");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    org: String,
    number: String,
    run: String,
}

impl CourseKey {
    #[must_use]
    pub fn org(&self) -> &str {
        self.org.as_str()
    }

    #[must_use]
    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    #[must_use]
    pub fn run(&self) -> &str {
        self.run.as_str()
    }
}

impl FromStr for CourseKey {
    type Err = CourseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (Some(org), Some(number), Some(run), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CourseKeyError::Malformed {
                value: s.to_owned(),
            });
        };

        for (part, label) in [(org, "org"), (number, "number"), (run, "run")] {
            if part.trim().is_empty() {
                return Err(CourseKeyError::EmptyPart {
                    value: s.to_owned(),
                    part: label,
                });
            }
        }

        Ok(Self {
            org: org.to_owned(),
            number: number.to_owned(),
            run: run.to_owned(),
        })
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.org, self.number, self.run)
    }
}

/// Access level requested from the catalogue's permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    /// The course may be shown to exist (about pages).
    SeeExists,
    /// The course content may be loaded (courseware).
    Load,
}

/// Marketing sections attached to a course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutSections {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub university: Option<String>,
    pub overview: Option<String>,
}

/// Start/end dates for the course and its enrollment window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSchedule {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub enrollment_start: Option<DateTime<Utc>>,
    pub enrollment_end: Option<DateTime<Utc>>,
    /// Free-text start shown instead of the date, e.g. "Spring 2014".
    pub advertised_start: Option<String>,
}

/// Catalogue view of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub key: CourseKey,
    pub display_number: String,
    pub display_name: String,
    pub image_url: String,
    pub schedule: CourseSchedule,
    pub about: AboutSections,
    /// Position assigned by the catalogue's announcement ordering; lower
    /// values are listed first.
    pub announcement_rank: i64,
}

impl Course {
    /// Start building a course with display values defaulted from the key.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::{Course, CourseKey};
    ///
    /// let key: CourseKey = "MITx/6.002x/2013_Spring".parse().unwrap();
    /// let course = Course::builder(key).display_name("Circuits").build();
    /// assert_eq!(course.display_number, "6.002x");
    /// assert_eq!(course.display_name, "Circuits");
    /// ```
    pub fn builder(key: CourseKey) -> CourseBuilder {
        CourseBuilder::new(key)
    }
}

/// Builder for [`Course`].
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    fn new(key: CourseKey) -> Self {
        let display_number = key.number().to_owned();
        let display_name = key.run().replace('_', " ");
        Self {
            course: Course {
                key,
                display_number,
                display_name,
                image_url: String::new(),
                schedule: CourseSchedule::default(),
                about: AboutSections::default(),
                announcement_rank: 0,
            },
        }
    }

    #[must_use]
    pub fn display_number(mut self, value: impl Into<String>) -> Self {
        self.course.display_number = value.into();
        self
    }

    #[must_use]
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.course.display_name = value.into();
        self
    }

    #[must_use]
    pub fn image_url(mut self, value: impl Into<String>) -> Self {
        self.course.image_url = value.into();
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: CourseSchedule) -> Self {
        self.course.schedule = schedule;
        self
    }

    #[must_use]
    pub fn about(mut self, about: AboutSections) -> Self {
        self.course.about = about;
        self
    }

    #[must_use]
    pub fn announcement_rank(mut self, rank: i64) -> Self {
        self.course.announcement_rank = rank;
        self
    }

    #[must_use]
    pub fn build(self) -> Course {
        self.course
    }
}

/// Order courses by announcement rank, keeping catalogue order for ties.
pub fn sort_by_announcement(courses: &mut [Course]) {
    courses.sort_by_key(|course| course.announcement_rank);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("edX/DemoX/Demo_Course", "edX", "DemoX", "Demo_Course")]
    #[case("MITx/6.002x/2013_Spring", "MITx", "6.002x", "2013_Spring")]
    fn parses_slash_separated_keys(
        #[case] raw: &str,
        #[case] org: &str,
        #[case] number: &str,
        #[case] run: &str,
    ) {
        let key: CourseKey = raw.parse().expect("valid key");
        assert_eq!((key.org(), key.number(), key.run()), (org, number, run));
        assert_eq!(key.to_string(), raw);
    }

    #[rstest]
    #[case("edX/DemoX")]
    #[case("edX/DemoX/run/extra")]
    #[case("")]
    fn rejects_wrong_arity(#[case] raw: &str) {
        let err = raw.parse::<CourseKey>().expect_err("malformed");
        assert!(matches!(err, CourseKeyError::Malformed { .. }));
    }

    #[rstest]
    #[case("/DemoX/run", "org")]
    #[case("edX/ /run", "number")]
    #[case("edX/DemoX/", "run")]
    fn rejects_empty_parts(#[case] raw: &str, #[case] expected: &str) {
        match raw.parse::<CourseKey>() {
            Err(CourseKeyError::EmptyPart { part, .. }) => assert_eq!(part, expected),
            other => panic!("expected empty part error, got {other:?}"),
        }
    }

    fn course(id: &str, rank: i64) -> Course {
        Course::builder(id.parse().expect("valid key"))
            .announcement_rank(rank)
            .build()
    }

    #[rstest]
    fn announcement_sort_is_stable() {
        let mut courses = vec![
            course("a/one/r", 2),
            course("a/two/r", 1),
            course("a/three/r", 2),
            course("a/four/r", 0),
        ];
        sort_by_announcement(&mut courses);
        let order: Vec<_> = courses.iter().map(|c| c.key.number().to_owned()).collect();
        assert_eq!(order, ["four", "two", "one", "three"]);
    }
}
