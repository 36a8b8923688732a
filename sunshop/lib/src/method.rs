//! HTTP verbs used by the SunShop API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods the SunShop backend routes accept.
///
/// The display form is the uppercase verb, which is also the value written
/// into the `_method` override field of multipart updates.
///
/// ## Examples
///
/// ```rust
/// use sunshop_lib::RestMethod;
///
/// assert_eq!(RestMethod::Put.to_string(), "PUT");
/// let parsed: RestMethod = "PATCH".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Patch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource or a filtered listing.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` for verbs that modify an existing resource in place.
    ///
    /// These are the verbs a multipart update may need to tunnel through
    /// `POST` with a `_method` field.
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_reqwest_method() {
        for method in RestMethod::iter() {
            assert_eq!(method.to_string(), method.to_reqwest().as_str());
        }
    }

    #[test]
    fn only_put_and_patch_are_updates() {
        let updates: Vec<_> = RestMethod::iter().filter(RestMethod::is_update).collect();
        assert_eq!(updates, vec![RestMethod::Put, RestMethod::Patch]);
    }

    #[test]
    fn parse_rejects_unknown_verb() {
        assert!("FETCH".parse::<RestMethod>().is_err());
    }
}
