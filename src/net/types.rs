#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use uuid::Uuid;

/// Response from `POST /api/login`: the backend echoes the username and sets
/// the auth cookie out of band.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Response from `POST /api/register`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// A sale item as returned by the listing endpoint, including the derived
/// current price and the first image, if any.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SaleItemSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starting_price: i64,
    /// Auction close time as the backend's ISO-8601 string; carried verbatim.
    pub end_date: String,
    pub seller_id: String,
    pub current_price: i64,
    pub img_url: Option<String>,
}

/// A sale item as returned by the detail endpoint.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SaleItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starting_price: i64,
    pub end_date: String,
    pub seller_id: String,
}

/// A bid on a sale item.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Bid {
    pub id: i64,
    pub user_id: String,
    pub price: i64,
    pub created_at: Option<String>,
}

/// Detail view: the item plus its top bids, highest first.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SaleItemDetail {
    pub item: SaleItem,
    pub bids: Vec<Bid>,
}

impl SaleItemDetail {
    /// The highest bid, if any have been placed.
    #[must_use]
    pub fn highest_bid(&self) -> Option<&Bid> {
        self.bids.iter().max_by_key(|bid| bid.price)
    }
}

/// Payload for `POST /api/sale_item`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NewSaleItem {
    pub title: String,
    pub description: String,
    pub starting_price: i64,
    pub end_date: String,
}

/// Response from `POST /api/sale_item`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateItemResponse {
    pub message: String,
    pub item_uuid: Uuid,
}

/// Response from `POST /api/sale_item/{id}/bid`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlaceBidResponse {
    pub message: String,
    pub bid_id: i64,
}

/// Response from `GET /api/sale_item/images/{id}`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemImages {
    pub images: Vec<String>,
}

/// Response from `POST /api/img/upload/{id}`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadImageResponse {
    pub message: String,
}

/// Error body shape the backend uses for non-success responses. Fields are
/// inconsistent across endpoints (`detail` vs `message`), so all are optional.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub detail: Option<String>,
}
