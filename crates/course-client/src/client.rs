//! HTTP transport for the course catalogue API.

use std::time::Duration;

use multilingual::{FieldResolver, Language, normalize_locale};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::model::{CareerCourses, CategoryCourses, CategoryEntry, Course};

/// Language sent for a caller locale such as `en-US`; unsupported or missing
/// locales fall back to Spanish.
///
/// # Examples
/// ```
/// use course_client::language_for;
/// use multilingual::Language;
///
/// assert_eq!(language_for(Some("fr_CA")), Language::Fr);
/// assert_eq!(language_for(Some("ja-JP")), Language::Es);
/// assert_eq!(language_for(None), Language::Es);
/// ```
#[must_use]
pub fn language_for(locale: Option<&str>) -> Language {
    locale.and_then(normalize_locale).unwrap_or_default()
}

/// Client for the `/courses` endpoints.
#[derive(Debug, Clone)]
pub struct CourseClient {
    http: Client,
    base_url: Url,
    resolver: FieldResolver,
}

impl CourseClient {
    /// Build a client rooted at `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    /// [`ClientError::InvalidUrl`] when `base_url` is not an absolute
    /// http(s) URL, [`ClientError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let invalid = |message: String| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            message,
        };
        let base_url = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) base URL".to_owned()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            resolver: FieldResolver::default(),
        })
    }

    /// Fetch one course by slug.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] when no course has the slug; see
    /// [`ClientError`] for the rest.
    pub async fn course_by_slug(
        &self,
        slug: &str,
        locale: Option<&str>,
    ) -> Result<Course, ClientError> {
        let language = language_for(locale);
        let url = self.endpoint(&[slug], language, None)?;
        self.fetch(url, language).await
    }

    /// Fetch the category course and career course for a career name.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] when the career is unknown or either course
    /// is missing.
    pub async fn courses_for_career(
        &self,
        career: &str,
        locale: Option<&str>,
    ) -> Result<CareerCourses, ClientError> {
        let language = language_for(locale);
        let url = self.endpoint(&["resolve"], language, Some(("career", career)))?;
        self.fetch(url, language).await
    }

    /// Fetch the general course of a category with its career courses.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] when the category is unknown or has no
    /// general course.
    pub async fn category_courses(
        &self,
        category: &str,
        locale: Option<&str>,
    ) -> Result<CategoryCourses, ClientError> {
        let language = language_for(locale);
        let url = self.endpoint(&["categories", category], language, None)?;
        self.fetch(url, language).await
    }

    /// List each category with its first course.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn categories(&self, locale: Option<&str>) -> Result<Vec<CategoryEntry>, ClientError> {
        let language = language_for(locale);
        let url = self.endpoint(&["categories"], language, None)?;
        self.fetch(url, language).await
    }

    fn endpoint(
        &self,
        segments: &[&str],
        language: Language,
        extra: Option<(&str, &str)>,
    ) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "base URL cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .push("courses")
            .extend(segments);
        {
            let mut query = url.query_pairs_mut();
            if let Some((key, value)) = extra {
                query.append_pair(key, value);
            }
            query.append_pair("lang", language.code());
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        language: Language,
    ) -> Result<T, ClientError> {
        debug!(%url, "requesting course catalogue");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let message = error_message(&body, status);
            return Err(if status == StatusCode::NOT_FOUND {
                ClientError::NotFound { message }
            } else {
                ClientError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }
        let raw: Value = serde_json::from_slice(&body)?;
        let resolved = self.resolver.resolve(&raw, language);
        Ok(serde_json::from_value(resolved)?)
    }
}

/// Prefer the `message` of an error body, then the raw text, then the
/// status reason.
fn error_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_owned))
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_owned();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_owned())
}
