//! Checkout and seller-submission forms with field-level validation.
//!
//! Validation accumulates every problem instead of stopping at the
//! first, so the whole form can be annotated in one round trip.

use catalog::{Category, Extension, PaymentMethod};
use services::NewListing;

/// One invalid form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

/// The checkout form a buyer fills in.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
    pub accept_terms: bool,
}

impl CheckoutForm {
    /// All problems with the form; empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.email.trim().is_empty() {
            errors.push(field_error("email", "Email is required"));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(field_error("email", "Email is invalid"));
        }
        if self.first_name.trim().is_empty() {
            errors.push(field_error("firstName", "First name is required"));
        }
        if self.last_name.trim().is_empty() {
            errors.push(field_error("lastName", "Last name is required"));
        }
        if !self.accept_terms {
            errors.push(field_error("acceptTerms", "You must accept the terms"));
        }

        errors
    }
}

/// Shallow email shape check: something@host.tld, no whitespace.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// What a seller submits to list a domain.
///
/// The name is entered without its extension; the two are joined and
/// lowercased on acceptance.
#[derive(Debug, Clone)]
pub struct SellerSubmission {
    pub name: String,
    pub price: u64,
    pub category: Option<Category>,
    pub extension: Extension,
    pub description: String,
    pub seller_id: String,
    pub ownership_confirmed: bool,
    pub terms_accepted: bool,
}

impl SellerSubmission {
    /// Validate and convert into the create request, or report every
    /// invalid field.
    pub fn into_new_listing(self) -> Result<NewListing, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(field_error("name", "Domain name is required"));
        }
        if self.price == 0 {
            errors.push(field_error("price", "Price must be greater than zero"));
        }
        if self.category.is_none() {
            errors.push(field_error("category", "Category is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(field_error("description", "Description is required"));
        }
        if !self.ownership_confirmed {
            errors.push(field_error("ownershipConfirmed", "You must confirm ownership"));
        }
        if !self.terms_accepted {
            errors.push(field_error("termsAccepted", "You must accept the terms"));
        }

        match (errors.is_empty(), self.category) {
            (true, Some(category)) => Ok(NewListing {
                name: format!(
                    "{}{}",
                    self.name.trim().to_lowercase(),
                    self.extension.as_str()
                ),
                category,
                extension: self.extension,
                price: self.price,
                description: self.description,
                seller_id: self.seller_id,
            }),
            _ => Err(errors),
        }
    }
}
