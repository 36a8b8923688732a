//! Typed request forms and the few responses the client inspects.
//!
//! Most calls hand the backend's JSON back to the caller untouched, so only
//! responses the client itself reads (logins) or that have a fixed envelope
//! (transaction listings) are typed here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::body::{FileUpload, FormPayload};

/// Answer to a login or OTP verification call.
///
/// A response carrying `token` (or `access_token`) completes the sign-in. A
/// response with `requires_verification`, `requires_otp` or `otp_required`
/// set (and usually a `user_id`) asks for an OTP to be submitted through
/// `verify`. Backends may send several of these spellings at once, so each
/// one is read on its own rather than folded into a serde alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to persist.
    #[serde(default)]
    pub token: Option<String>,
    /// OAuth-style spelling of the bearer token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// The signed-in user.
    #[serde(default)]
    pub user: Option<Value>,
    /// Whether a second OTP step is required.
    #[serde(default)]
    pub requires_verification: bool,
    /// Identifier to submit alongside the OTP code.
    #[serde(default)]
    pub user_id: Option<Value>,
    /// Human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginResponse {
    /// The bearer token, preferring `token` over `access_token`.
    ///
    /// Empty strings count as absent.
    pub fn bearer_token(&self) -> Option<&str> {
        [&self.token, &self.access_token]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }

    /// Returns `true` if the response completes the sign-in.
    pub fn is_complete(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Returns `true` if the backend asked for an OTP code.
    pub fn needs_verification(&self) -> bool {
        self.requires_verification
            || ["requires_otp", "otp_required"]
                .iter()
                .any(|key| self.extra.get(*key).and_then(Value::as_bool) == Some(true))
    }
}

/// One page of admin transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage<T = Value> {
    /// Transactions on this page.
    #[serde(default = "Vec::new")]
    pub transactions: Vec<T>,
    /// Total number of matching transactions.
    #[serde(default)]
    pub total: u64,
}

/// Fields for creating or replacing a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<u64>,
    pub image: Option<FileUpload>,
}

impl CategoryForm {
    /// Creates a form with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn image(mut self, image: FileUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl From<CategoryForm> for FormPayload {
    fn from(form: CategoryForm) -> Self {
        let payload = FormPayload::new()
            .text("name", form.name)
            .text_opt("description", form.description)
            .text_opt("parent_id", form.parent_id.map(|id| id.to_string()));
        match form.image {
            Some(image) => payload.file("image", image),
            None => payload,
        }
    }
}

/// Fields for creating or replacing a product.
///
/// Prices are kept as decimal strings so they reach the backend exactly as
/// entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub sale_price: Option<String>,
    pub stock: Option<u32>,
    pub category_id: Option<u64>,
    pub brand_id: Option<u64>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub images: Vec<FileUpload>,
}

impl ProductForm {
    /// Creates a form with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn brand(mut self, brand_id: u64) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn image(mut self, image: FileUpload) -> Self {
        self.images.push(image);
        self
    }
}

impl From<ProductForm> for FormPayload {
    fn from(form: ProductForm) -> Self {
        let payload = FormPayload::new()
            .text("name", form.name)
            .text_opt("sku", form.sku)
            .text_opt("price", form.price)
            .text_opt("sale_price", form.sale_price)
            .text_opt("stock", form.stock.map(|s| s.to_string()))
            .text_opt("category_id", form.category_id.map(|id| id.to_string()))
            .text_opt("brand_id", form.brand_id.map(|id| id.to_string()))
            .text_opt("description", form.description)
            .text_opt("status", form.status);
        form.images
            .into_iter()
            .fold(payload, |payload, image| payload.file("images[]", image))
    }
}

/// Fields for creating or replacing a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandForm {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<FileUpload>,
}

impl BrandForm {
    /// Creates a form with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn logo(mut self, logo: FileUpload) -> Self {
        self.logo = Some(logo);
        self
    }
}

impl From<BrandForm> for FormPayload {
    fn from(form: BrandForm) -> Self {
        let payload = FormPayload::new()
            .text("name", form.name)
            .text_opt("description", form.description)
            .text_opt("website", form.website);
        match form.logo {
            Some(logo) => payload.file("logo", logo),
            None => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_with_token() {
        let login: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "user": {"id": 1, "name": "Ada"},
            "expires_in": 3600
        }))
        .unwrap();
        assert!(login.is_complete());
        assert!(!login.needs_verification());
        assert_eq!(login.user.unwrap()["name"], "Ada");
        assert_eq!(login.extra["expires_in"], 3600);
    }

    #[test]
    fn login_response_requiring_otp() {
        let login: LoginResponse = serde_json::from_value(json!({
            "requires_otp": true,
            "user_id": 17,
            "message": "Code sent"
        }))
        .unwrap();
        assert!(!login.is_complete());
        assert!(login.needs_verification());
        assert_eq!(login.user_id, Some(json!(17)));
    }

    #[test]
    fn login_response_reads_every_otp_spelling() {
        let login: LoginResponse = serde_json::from_value(json!({
            "requires_verification": false,
            "requires_otp": false,
            "otp_required": true
        }))
        .unwrap();
        assert!(login.needs_verification());
    }

    #[test]
    fn login_response_accepts_access_token() {
        let login: LoginResponse =
            serde_json::from_value(json!({"access_token": "xyz"})).unwrap();
        assert_eq!(login.bearer_token(), Some("xyz"));
    }

    #[test]
    fn login_response_with_token_and_access_token() {
        let login: LoginResponse = serde_json::from_value(json!({
            "token": "t",
            "access_token": "t",
            "token_type": "Bearer"
        }))
        .unwrap();
        assert_eq!(login.bearer_token(), Some("t"));
        assert_eq!(login.extra["token_type"], "Bearer");
    }

    #[test]
    fn empty_token_falls_back_to_access_token() {
        let login: LoginResponse =
            serde_json::from_value(json!({"token": "", "access_token": "acc"})).unwrap();
        assert_eq!(login.bearer_token(), Some("acc"));
    }

    #[test]
    fn empty_token_is_not_complete() {
        let login: LoginResponse = serde_json::from_value(json!({"token": ""})).unwrap();
        assert!(!login.is_complete());
    }

    #[test]
    fn transaction_page_defaults() {
        let page: TransactionPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.transactions.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn category_form_fields() {
        let payload: FormPayload = CategoryForm::new("Batteries")
            .description("Lithium storage")
            .parent(3)
            .into();
        assert_eq!(payload.text_value("name"), Some("Batteries"));
        assert_eq!(payload.text_value("description"), Some("Lithium storage"));
        assert_eq!(payload.text_value("parent_id"), Some("3"));
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn product_form_repeats_images_field() {
        let payload: FormPayload = ProductForm::new("Panel 400W")
            .price("189.90")
            .stock(12)
            .image(FileUpload::new("front.jpg", vec![1]))
            .image(FileUpload::new("back.jpg", vec![2]))
            .into();
        let image_fields = payload
            .fields()
            .iter()
            .filter(|(name, _)| name == "images[]")
            .count();
        assert_eq!(image_fields, 2);
        assert_eq!(payload.text_value("price"), Some("189.90"));
        assert_eq!(payload.text_value("stock"), Some("12"));
    }

    #[test]
    fn brand_form_with_logo() {
        let payload: FormPayload = BrandForm::new("Acme Solar")
            .logo(FileUpload::new("acme.png", vec![0]))
            .into();
        assert_eq!(payload.len(), 2);
        assert!(matches!(
            payload.fields()[1],
            (ref name, crate::body::FormValue::File(_)) if name == "logo"
        ));
    }
}
