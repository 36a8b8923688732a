//! Endpoint map: route templates resolved against the configured base URL.
//!
//! A [`Route`] is a static path template such as `/api/admin/categories/{id}`.
//! [`EndpointMap`] turns a route plus its parameters into an absolute URL,
//! keeping any path prefix of the base URL and percent-encoding parameter
//! values as whole path segments.

use url::Url;

use crate::error::ConfigError;

/// A named path template.
///
/// Placeholders are whole segments written as `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    id: &'static str,
    path: &'static str,
}

impl Route {
    /// Creates a route.
    pub const fn new(id: &'static str, path: &'static str) -> Self {
        Self { id, path }
    }

    /// Returns the route identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the path template.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns placeholder names in the order they appear.
    pub fn params(&self) -> Vec<&'static str> {
        self.segments().filter_map(placeholder).collect()
    }

    fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Query string for listing endpoints.
///
/// Parameters are emitted in a fixed order: `page`, `per_page`, `search`,
/// `status`, then any extra filters in insertion order.
///
/// ## Examples
///
/// ```rust
/// use sunshop_lib::ListQuery;
///
/// let query = ListQuery::new().page(2).status("completed");
/// assert_eq!(query.to_query_string(), "page=2&status=completed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Status filter (order, product or transaction status).
    pub status: Option<String>,
    /// Additional filters such as `category_id` or `date_from`.
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the search term.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the status filter.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Appends an extra filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Returns the query parameters in emission order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.as_str(), value.clone()));
        }
        pairs
    }

    /// Renders the query as an `application/x-www-form-urlencoded` string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// Resolves routes against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    base_url: Url,
}

impl EndpointMap {
    /// Creates an endpoint map rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the absolute URL for `route`.
    ///
    /// ## Errors
    ///
    /// Returns an error if a placeholder has no matching entry in `params`
    /// or the base URL cannot carry a path.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use sunshop_lib::{routes, EndpointMap};
    /// use url::Url;
    ///
    /// let map = EndpointMap::new(Url::parse("https://shop.test/v2").unwrap());
    /// let url = map.url(routes::admin::CATEGORY, &[("id", "7")]).unwrap();
    /// assert_eq!(url.as_str(), "https://shop.test/v2/api/admin/categories/7");
    /// ```
    pub fn url(&self, route: Route, params: &[(&str, &str)]) -> Result<Url, ConfigError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::invalid_path("base URL cannot carry a path"))?;
            segments.pop_if_empty();

            for segment in route.segments() {
                match placeholder(segment) {
                    Some(name) => {
                        let value = params
                            .iter()
                            .find(|(key, _)| *key == name)
                            .map(|(_, value)| *value)
                            .ok_or_else(|| {
                                ConfigError::invalid_path(format!(
                                    "missing value for {{{name}}} in {}",
                                    route.path
                                ))
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        Ok(url)
    }

    /// Builds the absolute URL for `route` with `query` appended.
    ///
    /// ## Errors
    ///
    /// Same as [`EndpointMap::url`].
    pub fn url_with_query(
        &self,
        route: Route,
        params: &[(&str, &str)],
        query: &ListQuery,
    ) -> Result<Url, ConfigError> {
        let mut url = self.url(route, params)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }
}
