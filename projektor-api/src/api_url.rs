use std::env;

#[derive(Debug, Clone)]
pub struct ApiUrl(String);

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ApiUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Creates a new ApiUrl from the environment variable `PROJEKTOR_API_URL`.
    pub fn from_env() -> Self {
        Self(env::var("PROJEKTOR_API_URL").expect("PROJEKTOR_API_URL must be set in env"))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Append percent-encoded `key=value` pairs, joined with `&`. Uses `?`
    /// or `&` depending on whether the URL already carries a query.
    pub fn with_query(&self, params: &[(&str, &str)]) -> Self {
        if params.is_empty() {
            return self.clone();
        }

        let encoded = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");

        if self.0.contains('?') {
            Self(format!("{}&{}", self.0, encoded))
        } else {
            Self(format!("{}?{}", self.0, encoded))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_trims_slashes() {
        let url = ApiUrl::new("http://localhost:8080/").append_path("/projects/all");
        assert_eq!(url.as_ref(), "http://localhost:8080/projects/all");
    }

    #[test]
    fn with_query_encodes_values() {
        let url = ApiUrl::new("http://localhost:8080")
            .append_path("/projects/all")
            .with_query(&[("endDate", "2024-06-01"), ("name", "a b&c")]);
        assert_eq!(
            url.as_ref(),
            "http://localhost:8080/projects/all?endDate=2024-06-01&name=a%20b%26c"
        );
    }

    #[test]
    fn with_query_appends_to_existing_query() {
        let url = ApiUrl::new("http://localhost:8080/projects/all?page=0")
            .with_query(&[("size", "5")]);
        assert_eq!(url.as_ref(), "http://localhost:8080/projects/all?page=0&size=5");
    }

    #[test]
    fn with_query_without_params_is_unchanged() {
        let url = ApiUrl::new("http://localhost:8080").with_query(&[]);
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }
}
