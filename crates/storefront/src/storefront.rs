//! # Storefront Orchestrator
//!
//! This module coordinates everything the marketplace UI needs:
//! 1. Browse: fetch the listing snapshot, run the query pipeline
//! 2. Checkout: validate the form, price from the listing, record it
//! 3. Seller portal: validate submissions, queue them for review
//! 4. Admin: approve/reject queue, purchase and revenue overview
//! 5. Dashboards: buyer and seller rollups over the services
//! 6. Suggestions: the deterministic name assistant
//!
//! Independent fetches run concurrently with `tokio::join!`; everything
//! else is a staged pass over the services.

use std::path::Path;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::error::{Result, StorefrontError};
use crate::forms::{CheckoutForm, SellerSubmission};
use catalog::{
    Listing, ListingId, ListingPatch, ListingStatus, MemoryStore, Perk, Purchase, TransferStatus,
    seed,
};
use query::{FilterSpec, PageResult};
use services::{Latency, ListingService, NewPurchase, PerkService, PurchaseService};
use suggest::{Suggestion, SuggestionEngine, SuggestionRequest};

/// Admin decision on a pending listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Buyer-facing rollup: their purchases plus the founder-pass perks.
#[derive(Debug)]
pub struct BuyerDashboard {
    pub purchases: Vec<Purchase>,
    pub perks: Vec<Perk>,
    pub completed_transfers: usize,
    pub in_progress_transfers: usize,
    pub total_spent: u64,
}

/// Seller-facing rollup over their own listings.
#[derive(Debug)]
pub struct SellerDashboard {
    pub listings: Vec<Listing>,
    pub approved: usize,
    pub pending: usize,
    pub total_asking_value: u64,
}

/// Admin-facing rollup: the review queue and purchase totals.
#[derive(Debug)]
pub struct AdminOverview {
    pub pending_listings: Vec<Listing>,
    pub purchases: Vec<Purchase>,
    pub transfers_in_progress: usize,
    pub total_revenue: u64,
}

/// Main orchestrator tying the services, the query pipeline, and the
/// suggestion engine into the storefront's flows.
#[derive(Clone)]
pub struct Storefront {
    listings: ListingService,
    purchases: PurchaseService,
    perks: PerkService,
}

impl Storefront {
    /// Build a storefront over already-constructed services.
    pub fn new(listings: ListingService, purchases: PurchaseService, perks: PerkService) -> Self {
        Self {
            listings,
            purchases,
            perks,
        }
    }

    /// Boot from a seed directory: load and validate the three JSON
    /// files, wrap them in stores, and stand the services up with the
    /// given latency profile.
    pub fn from_seed_dir(dir: &Path, latency: Latency) -> catalog::Result<Self> {
        let data = seed::load(dir)?;
        info!(
            listings = data.listings.len(),
            purchases = data.purchases.len(),
            perks = data.perks.len(),
            "seed data loaded"
        );

        let listings = Arc::new(RwLock::new(MemoryStore::from_records(data.listings)?));
        let purchases = Arc::new(RwLock::new(MemoryStore::from_records(data.purchases)?));
        let perks = Arc::new(RwLock::new(MemoryStore::from_records(data.perks)?));

        Ok(Self::new(
            ListingService::new(listings).with_latency(latency),
            PurchaseService::new(purchases).with_latency(latency),
            PerkService::new(perks).with_latency(latency),
        ))
    }

    /// The listing service, exposed for demo tooling (outage simulation).
    pub fn listing_service(&self) -> &ListingService {
        &self.listings
    }

    /// Browse: one page of the filtered, sorted catalog.
    ///
    /// A changed filter spec or listing set obliges the caller to come
    /// back with page 1; out-of-range pages return empty pages, not
    /// errors. Source outages propagate unchanged.
    #[instrument(skip(self, spec))]
    pub async fn browse(&self, spec: &FilterSpec, page: usize) -> Result<PageResult> {
        let listings = self.listings.fetch_all().await?;
        let result = query::execute(listings, spec, page)?;
        info!(
            total = result.total_matches,
            page = result.page,
            shown = result.items.len(),
            "browse page served"
        );
        Ok(result)
    }

    /// One listing, for the detail view.
    #[instrument(skip(self))]
    pub async fn listing(&self, id: ListingId) -> Result<Listing> {
        Ok(self.listings.fetch(id).await?)
    }

    /// Seller submission: validate, normalize the name, and queue the
    /// listing for approval.
    #[instrument(skip(self, submission))]
    pub async fn submit_listing(&self, submission: SellerSubmission) -> Result<Listing> {
        let new = submission
            .into_new_listing()
            .map_err(StorefrontError::Validation)?;
        let listing = self.listings.create(new).await?;
        info!(id = listing.id, name = %listing.name, "listing queued for review");
        Ok(listing)
    }

    /// Admin review: approve or reject a pending listing.
    #[instrument(skip(self))]
    pub async fn review_listing(&self, id: ListingId, decision: ReviewDecision) -> Result<Listing> {
        let status = match decision {
            ReviewDecision::Approve => ListingStatus::Approved,
            ReviewDecision::Reject => ListingStatus::Rejected,
        };
        let patch = ListingPatch {
            status: Some(status),
            ..Default::default()
        };
        let listing = self.listings.update(id, patch).await?;
        info!(id, status = %listing.status, "listing reviewed");
        Ok(listing)
    }

    /// Checkout: validate the buyer's form and record the purchase at
    /// the listing's current price.
    #[instrument(skip(self, form))]
    pub async fn checkout(&self, listing_id: ListingId, form: CheckoutForm) -> Result<Purchase> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(StorefrontError::Validation(errors));
        }

        let listing = self.listings.fetch(listing_id).await?;
        let purchase = self
            .purchases
            .create(NewPurchase {
                listing_id,
                domain_name: listing.name.clone(),
                buyer_email: form.email.trim().to_string(),
                buyer_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
                company: form.company,
                phone: form.phone,
                amount: listing.price,
                payment_method: form.payment_method,
            })
            .await?;

        info!(
            purchase = purchase.id,
            domain = %purchase.domain_name,
            amount = purchase.amount,
            "checkout complete"
        );
        Ok(purchase)
    }

    /// Name suggestions against the current catalog snapshot.
    #[instrument(skip(self, request))]
    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
        limit: usize,
    ) -> Result<Vec<Suggestion>> {
        let listings = self.listings.fetch_all().await?;
        Ok(SuggestionEngine::new(&listings).suggest(request, limit))
    }

    /// Buyer dashboard: purchases for this email plus the perks, fetched
    /// concurrently.
    #[instrument(skip(self))]
    pub async fn buyer_dashboard(&self, email: &str) -> Result<BuyerDashboard> {
        let (purchases, perks) = tokio::join!(self.purchases.fetch_all(), self.perks.fetch_all());

        let purchases: Vec<Purchase> = purchases?
            .into_iter()
            .filter(|p| p.buyer_email.eq_ignore_ascii_case(email))
            .collect();
        let perks = perks?;

        let completed_transfers = purchases
            .iter()
            .filter(|p| p.transfer_status == TransferStatus::Completed)
            .count();
        let in_progress_transfers = purchases
            .iter()
            .filter(|p| p.transfer_status == TransferStatus::InProgress)
            .count();
        let total_spent = purchases.iter().map(|p| p.amount).sum();

        Ok(BuyerDashboard {
            purchases,
            perks,
            completed_transfers,
            in_progress_transfers,
            total_spent,
        })
    }

    /// Seller dashboard: the seller's own listings with review counters.
    #[instrument(skip(self))]
    pub async fn seller_dashboard(&self, seller_id: &str) -> Result<SellerDashboard> {
        let listings: Vec<Listing> = self
            .listings
            .fetch_all()
            .await?
            .into_iter()
            .filter(|l| l.seller_id == seller_id)
            .collect();

        let approved = listings
            .iter()
            .filter(|l| l.status == ListingStatus::Approved)
            .count();
        let pending = listings
            .iter()
            .filter(|l| l.status == ListingStatus::PendingApproval)
            .count();
        let total_asking_value = listings.iter().map(|l| l.price).sum();

        Ok(SellerDashboard {
            listings,
            approved,
            pending,
            total_asking_value,
        })
    }

    /// Admin overview: the review queue and purchase totals, fetched
    /// concurrently.
    #[instrument(skip(self))]
    pub async fn admin_overview(&self) -> Result<AdminOverview> {
        let (listings, purchases) =
            tokio::join!(self.listings.fetch_all(), self.purchases.fetch_all());

        let pending_listings: Vec<Listing> = listings?
            .into_iter()
            .filter(|l| l.status == ListingStatus::PendingApproval)
            .collect();
        let purchases = purchases?;

        let transfers_in_progress = purchases
            .iter()
            .filter(|p| p.transfer_status == TransferStatus::InProgress)
            .count();
        let total_revenue = purchases.iter().map(|p| p.amount).sum();

        Ok(AdminOverview {
            pending_listings,
            purchases,
            transfers_in_progress,
            total_revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, PaymentMethod, PurchaseStatus};
    use services::ServiceError;

    fn seeded_listing(id: u32, name: &str, price: u64, status: ListingStatus) -> Listing {
        Listing {
            id,
            name: name.to_string(),
            category: Category::Technology,
            extension: Extension::Com,
            price,
            description: "test listing".to_string(),
            status,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000 + id as i64,
            updated_at: None,
        }
    }

    fn build_test_storefront(listings: Vec<Listing>) -> Storefront {
        let listing_store = Arc::new(RwLock::new(MemoryStore::from_records(listings).unwrap()));
        let purchase_store = Arc::new(RwLock::new(MemoryStore::new()));
        let perk_store = Arc::new(RwLock::new(MemoryStore::new()));

        Storefront::new(
            ListingService::new(listing_store).with_latency(Latency::none()),
            PurchaseService::new(purchase_store).with_latency(Latency::none()),
            PerkService::new(perk_store).with_latency(Latency::none()),
        )
    }

    fn checkout_form() -> CheckoutForm {
        CheckoutForm {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: String::new(),
            phone: String::new(),
            payment_method: PaymentMethod::Stripe,
            accept_terms: true,
        }
    }

    #[tokio::test]
    async fn test_browse_serves_a_page() {
        let storefront = build_test_storefront(vec![
            seeded_listing(1, "apple.com", 100, ListingStatus::Approved),
            seeded_listing(2, "banana.io", 50, ListingStatus::Approved),
        ]);

        let spec = FilterSpec {
            min_price: "60".to_string(),
            sort_by: "price-low".to_string(),
            ..Default::default()
        };
        let page = storefront.browse(&spec, 1).await.unwrap();

        assert_eq!(page.total_matches, 1);
        assert_eq!(page.items[0].name, "apple.com");
    }

    #[tokio::test]
    async fn test_browse_propagates_outage_unchanged() {
        let storefront = build_test_storefront(vec![seeded_listing(
            1,
            "apple.com",
            100,
            ListingStatus::Approved,
        )]);
        storefront.listing_service().set_offline(true);

        let err = storefront
            .browse(&FilterSpec::unconstrained(), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Service(ServiceError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_checkout_prices_from_listing() {
        let storefront = build_test_storefront(vec![seeded_listing(
            1,
            "apple.com",
            2500,
            ListingStatus::Approved,
        )]);

        let purchase = storefront.checkout(1, checkout_form()).await.unwrap();
        assert_eq!(purchase.amount, 2500);
        assert_eq!(purchase.domain_name, "apple.com");
        assert_eq!(purchase.buyer_name, "Ada Lovelace");
        assert_eq!(purchase.status, PurchaseStatus::Processing);
        assert_eq!(purchase.transfer_status, TransferStatus::Initiated);
    }

    #[tokio::test]
    async fn test_checkout_rejects_invalid_form() {
        let storefront = build_test_storefront(vec![seeded_listing(
            1,
            "apple.com",
            2500,
            ListingStatus::Approved,
        )]);

        let mut form = checkout_form();
        form.email = "not-an-email".to_string();
        form.accept_terms = false;

        let err = storefront.checkout(1, form).await.unwrap_err();
        match err {
            StorefrontError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["email", "acceptTerms"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_then_review_flow() {
        let storefront = build_test_storefront(vec![seeded_listing(
            7,
            "apple.com",
            2500,
            ListingStatus::Approved,
        )]);

        let submission = SellerSubmission {
            name: "NexusTech".to_string(),
            price: 3200,
            category: Some(Category::Technology),
            extension: Extension::Co,
            description: "Where networks meet".to_string(),
            seller_id: "seller-456".to_string(),
            ownership_confirmed: true,
            terms_accepted: true,
        };

        let created = storefront.submit_listing(submission).await.unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(created.name, "nexustech.co");
        assert_eq!(created.status, ListingStatus::PendingApproval);

        let overview = storefront.admin_overview().await.unwrap();
        assert_eq!(overview.pending_listings.len(), 1);

        let approved = storefront
            .review_listing(created.id, ReviewDecision::Approve)
            .await
            .unwrap();
        assert_eq!(approved.status, ListingStatus::Approved);

        let overview = storefront.admin_overview().await.unwrap();
        assert!(overview.pending_listings.is_empty());
    }

    #[tokio::test]
    async fn test_buyer_dashboard_rollup() {
        let storefront = build_test_storefront(vec![
            seeded_listing(1, "apple.com", 2500, ListingStatus::Approved),
            seeded_listing(2, "banana.io", 1200, ListingStatus::Approved),
        ]);

        storefront.checkout(1, checkout_form()).await.unwrap();
        storefront.checkout(2, checkout_form()).await.unwrap();

        let mut other = checkout_form();
        other.email = "grace@example.com".to_string();
        storefront.checkout(1, other).await.unwrap();

        let dashboard = storefront.buyer_dashboard("ADA@example.com").await.unwrap();
        assert_eq!(dashboard.purchases.len(), 2);
        assert_eq!(dashboard.total_spent, 3700);
        assert_eq!(dashboard.completed_transfers, 0);
        assert_eq!(dashboard.in_progress_transfers, 0);
    }

    #[tokio::test]
    async fn test_seller_dashboard_rollup() {
        let mut other_seller = seeded_listing(3, "other.com", 999, ListingStatus::Approved);
        other_seller.seller_id = "seller-999".to_string();

        let storefront = build_test_storefront(vec![
            seeded_listing(1, "apple.com", 2500, ListingStatus::Approved),
            seeded_listing(2, "banana.io", 1200, ListingStatus::PendingApproval),
            other_seller,
        ]);

        let dashboard = storefront.seller_dashboard("seller-123").await.unwrap();
        assert_eq!(dashboard.listings.len(), 2);
        assert_eq!(dashboard.approved, 1);
        assert_eq!(dashboard.pending, 1);
        assert_eq!(dashboard.total_asking_value, 3700);
    }

    #[tokio::test]
    async fn test_admin_revenue_totals() {
        let storefront = build_test_storefront(vec![
            seeded_listing(1, "apple.com", 2500, ListingStatus::Approved),
            seeded_listing(2, "banana.io", 1200, ListingStatus::Approved),
        ]);
        storefront.checkout(1, checkout_form()).await.unwrap();
        storefront.checkout(2, checkout_form()).await.unwrap();

        let overview = storefront.admin_overview().await.unwrap();
        assert_eq!(overview.purchases.len(), 2);
        assert_eq!(overview.total_revenue, 3700);
        assert_eq!(overview.transfers_in_progress, 0);
    }

    #[tokio::test]
    async fn test_suggestions_flag_listed_names() {
        let storefront = build_test_storefront(vec![seeded_listing(
            1,
            "fasthq.com",
            2500,
            ListingStatus::Approved,
        )]);

        let request = SuggestionRequest {
            keywords: "fast".to_string(),
            extension: Some(Extension::Com),
            ..Default::default()
        };
        let suggestions = storefront.suggest(&request, 30).await.unwrap();

        let collision = suggestions
            .iter()
            .find(|s| s.name == "fasthq.com")
            .expect("expected fasthq.com to be proposed");
        assert!(!collision.available);
    }
}
