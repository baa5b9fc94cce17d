//! Listing submission intake: the multi-step wizard re-expressed as typed
//! steps, validated together at the submission boundary.

pub mod domain;
mod validate;

pub use domain::{
    AuctionWindow, BasicDetails, DocumentDescriptor, ListingIntent, ListingSubmission,
    LocationDetails, MediaAsset, MediaGallery, RentTerms, SaleTerms, SellerProfile,
};
pub use validate::{IntakeError, IntakePolicy, SubmissionGuard};
