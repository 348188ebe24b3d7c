use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod governorates;

/// Equipment category of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductType {
    Panel,
    Inverter,
    Battery,
    Charger,
    #[serde(rename = "Panel bases")]
    PanelBases,
    Accessory,
    Other,
}

impl ProductType {
    /// Wire name used by the backend in both payloads and query params
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Panel => "Panel",
            ProductType::Inverter => "Inverter",
            ProductType::Battery => "Battery",
            ProductType::Charger => "Charger",
            ProductType::PanelBases => "Panel bases",
            ProductType::Accessory => "Accessory",
            ProductType::Other => "Other",
        }
    }
}

/// Physical condition of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    New,
    Used,
    NeedsRepair,
    Refurbished,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::NeedsRepair => "NeedsRepair",
            Condition::Refurbished => "Refurbished",
        }
    }
}

/// Currencies accepted in the marketplace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    #[serde(rename = "YER")]
    Yer,
    /// Southern rial, traded at a different rate
    #[serde(rename = "YER_SOUTH")]
    YerSouth,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "SAR")]
    Sar,
}

/// Moderation state of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
}

/// A marketplace listing for a piece of solar equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub price: f64,
    pub currency: Currency,
    pub phone: String,
    #[serde(default)]
    pub whatsapp_phone: Option<String>,
    pub governorate: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Free-text location detail ("behind the old market", etc.)
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default = "default_listing_status")]
    pub status: ListingStatus,
    /// Owner user id
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_listing_status() -> ListingStatus {
    ListingStatus::Pending
}

/// Payload for creating a new listing; images are filled in by the
/// submission flow once uploads complete
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub price: f64,
    pub currency: Option<Currency>,
    pub phone: String,
    #[serde(default)]
    pub whatsapp_phone: Option<String>,
    pub governorate: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub negotiable: bool,
}

/// A professional certification held by an engineer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A solar installation/maintenance engineer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub governorate: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub portfolio_images: Vec<String>,
}

/// Opening/closing hours for a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub day: String,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

/// A solar equipment shop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub governorate: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub working_hours: Vec<WorkingHours>,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub product_categories: Vec<String>,
}

/// A promotional banner shown in the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The account record for a registered user; the phone number is the
/// login key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub phone: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response envelope wrapping every non-paginated backend payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// One page of a paginated listing; both the plain-list and search
/// endpoint families return this exact shape, so page handling is
/// endpoint-agnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "one")]
    pub current_page: u32,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

fn one() -> u32 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total: 0,
        }
    }
}
