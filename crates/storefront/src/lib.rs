pub mod error;
pub mod forms;
pub mod storefront;

pub use error::{Result, StorefrontError};
pub use forms::{CheckoutForm, FieldError, SellerSubmission};
pub use storefront::{
    AdminOverview, BuyerDashboard, ReviewDecision, SellerDashboard, Storefront,
};
