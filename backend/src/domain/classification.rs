//! Closed category and career enumerations plus their free-text parsers.
//!
//! Course documents name their category and career in free text, possibly
//! multilingual and possibly accented. The parsers here are the only place
//! that string matching happens; everything downstream works with
//! [`Category`] and [`Career`].

use std::fmt;

use multilingual::{FieldResolver, Language};
use serde::{Serialize, Serializer};

use super::{Course, LocalizedValue};

/// Top-level grouping of careers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exact sciences: architecture, engineering, mathematics.
    CienciasExactas,
    /// Humanities: psychology, philosophy, social work.
    CienciasHumanas,
}

impl Category {
    /// Both categories, in listing order.
    pub const ALL: [Self; 2] = [Self::CienciasExactas, Self::CienciasHumanas];

    /// Canonical slug used in URLs and responses.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CienciasExactas => "ciencias-exactas",
            Self::CienciasHumanas => "ciencias-humanas",
        }
    }

    /// Match a canonical slug exactly.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    /// The three careers belonging to this category.
    #[must_use]
    pub const fn careers(self) -> [Career; 3] {
        match self {
            Self::CienciasExactas => [Career::Arquitectura, Career::Ingenieria, Career::Matematicas],
            Self::CienciasHumanas => [Career::Psicologia, Career::Filosofia, Career::TrabajoSocial],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// One of the six supported careers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Career {
    /// Architecture.
    Arquitectura,
    /// Engineering.
    Ingenieria,
    /// Mathematics.
    Matematicas,
    /// Psychology.
    Psicologia,
    /// Philosophy.
    Filosofia,
    /// Social work.
    TrabajoSocial,
}

/// Accepted spellings, already lower-cased and trimmed.
const CAREER_ALIASES: [(&str, Career); 12] = [
    ("arquitectura", Career::Arquitectura),
    ("ingeniería", Career::Ingenieria),
    ("ingenieria", Career::Ingenieria),
    ("matemáticas", Career::Matematicas),
    ("matematicas", Career::Matematicas),
    ("psicología", Career::Psicologia),
    ("psicologia", Career::Psicologia),
    ("filosofía", Career::Filosofia),
    ("filosofia", Career::Filosofia),
    ("trabajo social", Career::TrabajoSocial),
    ("trabajo-social", Career::TrabajoSocial),
    ("trabajo_social", Career::TrabajoSocial),
];

impl Career {
    /// All careers, exact sciences first.
    pub const ALL: [Self; 6] = [
        Self::Arquitectura,
        Self::Ingenieria,
        Self::Matematicas,
        Self::Psicologia,
        Self::Filosofia,
        Self::TrabajoSocial,
    ];

    /// Canonical slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Arquitectura => "arquitectura",
            Self::Ingenieria => "ingenieria",
            Self::Matematicas => "matematicas",
            Self::Psicologia => "psicologia",
            Self::Filosofia => "filosofia",
            Self::TrabajoSocial => "trabajo-social",
        }
    }

    /// Match a canonical slug exactly.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|career| career.slug() == slug)
    }

    /// Category the career belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Arquitectura | Self::Ingenieria | Self::Matematicas => Category::CienciasExactas,
            Self::Psicologia | Self::Filosofia | Self::TrabajoSocial => Category::CienciasHumanas,
        }
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Result of parsing a free-text category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedCategory {
    /// One of the two supported categories.
    Known(Category),
    /// Any other text, lower-cased and trimmed.
    Unrecognised(String),
}

impl NormalizedCategory {
    /// The supported category, if any.
    #[must_use]
    pub const fn known(&self) -> Option<Category> {
        match self {
            Self::Known(category) => Some(*category),
            Self::Unrecognised(_) => None,
        }
    }

    /// Normalised text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(category) => category.slug(),
            Self::Unrecognised(text) => text.as_str(),
        }
    }
}

/// Result of parsing a free-text career.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedCareer {
    /// One of the six supported careers.
    Known(Career),
    /// Any other text, lower-cased and trimmed.
    Unrecognised(String),
}

impl NormalizedCareer {
    /// The supported career, if any.
    #[must_use]
    pub const fn known(&self) -> Option<Career> {
        match self {
            Self::Known(career) => Some(*career),
            Self::Unrecognised(_) => None,
        }
    }

    /// Normalised text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(career) => career.slug(),
            Self::Unrecognised(text) => text.as_str(),
        }
    }
}

/// Parse a category from free text.
///
/// Text containing `exactas` maps to exact sciences and text containing
/// `humanas` to humanities; anything else is returned lower-cased.
///
/// # Examples
/// ```
/// use course_catalogue::domain::{Category, NormalizedCategory, normalize_category};
///
/// assert_eq!(
///     normalize_category("  Ciencias EXACTAS "),
///     NormalizedCategory::Known(Category::CienciasExactas)
/// );
/// assert_eq!(
///     normalize_category("Medicina"),
///     NormalizedCategory::Unrecognised("medicina".to_owned())
/// );
/// ```
#[must_use]
pub fn normalize_category(value: &str) -> NormalizedCategory {
    let normalized = value.trim().to_lowercase();
    if normalized.contains("exactas") {
        NormalizedCategory::Known(Category::CienciasExactas)
    } else if normalized.contains("humanas") {
        NormalizedCategory::Known(Category::CienciasHumanas)
    } else {
        NormalizedCategory::Unrecognised(normalized)
    }
}

/// Parse a career from free text, accepting accented and unaccented
/// spellings.
///
/// # Examples
/// ```
/// use course_catalogue::domain::{Career, NormalizedCareer, normalize_career};
///
/// assert_eq!(normalize_career("Ingeniería"), NormalizedCareer::Known(Career::Ingenieria));
/// assert_eq!(normalize_career("Trabajo Social"), NormalizedCareer::Known(Career::TrabajoSocial));
/// ```
#[must_use]
pub fn normalize_career(value: &str) -> NormalizedCareer {
    let normalized = value.trim().to_lowercase();
    CAREER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map_or(NormalizedCareer::Unrecognised(normalized), |(_, career)| {
            NormalizedCareer::Known(*career)
        })
}

/// Category of a canonical career slug.
///
/// # Examples
/// ```
/// use course_catalogue::domain::{Category, career_to_category};
///
/// assert_eq!(career_to_category("trabajo-social"), Some(Category::CienciasHumanas));
/// assert_eq!(career_to_category("medicina"), None);
/// ```
#[must_use]
pub fn career_to_category(career: &str) -> Option<Category> {
    Career::from_slug(career).map(Career::category)
}

/// Classifies stored courses by their category and career fields.
///
/// Fields are read as Spanish text through the resolver; blank text counts
/// as absent.
#[derive(Debug, Clone, Default)]
pub struct CourseClassifier {
    resolver: FieldResolver,
}

impl CourseClassifier {
    /// Build a classifier sharing the service's resolver.
    #[must_use]
    pub const fn new(resolver: FieldResolver) -> Self {
        Self { resolver }
    }

    fn text(&self, value: &LocalizedValue) -> Option<String> {
        self.resolver.resolve_text(value.as_value(), Language::Es)
    }

    /// Normalised category, or `None` when the field is blank.
    #[must_use]
    pub fn category_of(&self, course: &Course) -> Option<NormalizedCategory> {
        self.text(course.category())
            .map(|text| normalize_category(&text))
    }

    /// Normalised career, or `None` when the field is blank.
    #[must_use]
    pub fn career_of(&self, course: &Course) -> Option<NormalizedCareer> {
        self.text(course.career()).map(|text| normalize_career(&text))
    }

    /// Whether `course` is the general course of `category`.
    #[must_use]
    pub fn is_general_course_of(&self, course: &Course, category: Category) -> bool {
        self.career_of(course).is_none()
            && self
                .category_of(course)
                .is_some_and(|found| found.known() == Some(category))
    }

    /// Whether `course` is the course of `career`.
    #[must_use]
    pub fn is_career_course_of(&self, course: &Course, career: Career) -> bool {
        self.career_of(course)
            .is_some_and(|found| found.known() == Some(career))
    }
}

#[cfg(test)]
mod tests {
    //! Parser and classifier coverage.

    use super::*;
    use crate::domain::CourseDraft;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn course(category: Value, career: Value) -> Course {
        Course::try_from(CourseDraft {
            slug: Some("c".to_owned()),
            title: "t".into(),
            category: category.into(),
            career: career.into(),
            difficulty: Some("beginner".to_owned()),
            duration: "1h".into(),
            description: "d".into(),
            thumbnail_url: Some("https://cdn.example.invalid/c.png".to_owned()),
            modules: json!([]).into(),
            ..CourseDraft::default()
        })
        .expect("valid course")
    }

    #[rstest]
    #[case("Ciencias Exactas", Some(Category::CienciasExactas))]
    #[case("ciencias-exactas", Some(Category::CienciasExactas))]
    #[case("Área de Ciencias Humanas", Some(Category::CienciasHumanas))]
    #[case("HUMANAS", Some(Category::CienciasHumanas))]
    #[case("Exact Sciences", None)]
    fn category_partition(#[case] input: &str, #[case] expected: Option<Category>) {
        assert_eq!(normalize_category(input).known(), expected);
    }

    #[rstest]
    #[case("arquitectura", Career::Arquitectura)]
    #[case("Ingeniería", Career::Ingenieria)]
    #[case("ingenieria", Career::Ingenieria)]
    #[case("MATEMÁTICAS", Career::Matematicas)]
    #[case("matematicas", Career::Matematicas)]
    #[case("Psicología", Career::Psicologia)]
    #[case("psicologia", Career::Psicologia)]
    #[case(" Filosofía ", Career::Filosofia)]
    #[case("filosofia", Career::Filosofia)]
    #[case("Trabajo Social", Career::TrabajoSocial)]
    #[case("trabajo-social", Career::TrabajoSocial)]
    fn career_aliases(#[case] input: &str, #[case] expected: Career) {
        assert_eq!(normalize_career(input), NormalizedCareer::Known(expected));
    }

    #[rstest]
    fn unknown_careers_pass_through_lower_cased() {
        assert_eq!(
            normalize_career(" Medicina "),
            NormalizedCareer::Unrecognised("medicina".to_owned())
        );
    }

    #[rstest]
    fn every_career_belongs_to_a_category_listing_it() {
        for career in Career::ALL {
            assert_eq!(career_to_category(career.slug()), Some(career.category()));
            assert!(career.category().careers().contains(&career));
        }
    }

    #[rstest]
    fn multilingual_fields_are_read_in_spanish() {
        let classifier = CourseClassifier::default();
        let engineering = course(
            json!({ "en": "Exact Sciences", "es": "Ciencias Exactas" }),
            json!({ "en": "Engineering", "es": "Ingeniería" }),
        );
        assert!(classifier.is_career_course_of(&engineering, Career::Ingenieria));
        assert!(!classifier.is_general_course_of(&engineering, Category::CienciasExactas));
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(json!(""))]
    #[case(json!("   "))]
    #[case(json!({ "es": "" }))]
    fn blank_career_marks_general_course(#[case] career: Value) {
        let classifier = CourseClassifier::default();
        let general = course(json!("Ciencias Humanas"), career);
        assert!(classifier.is_general_course_of(&general, Category::CienciasHumanas));
        assert!(!classifier.is_general_course_of(&general, Category::CienciasExactas));
    }
}
