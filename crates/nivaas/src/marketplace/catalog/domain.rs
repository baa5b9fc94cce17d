use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog listing. Kept as the decimal string form because
/// the recency ordering interprets ids numerically and falls back to zero
/// for imported ids that are not numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment,
    Villa,
    Plot,
    CommercialSpace,
    Office,
    Shop,
    Warehouse,
    Farmhouse,
}

impl PropertyKind {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Apartment,
            Self::Villa,
            Self::Plot,
            Self::CommercialSpace,
            Self::Office,
            Self::Shop,
            Self::Warehouse,
            Self::Farmhouse,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Plot => "Plot",
            Self::CommercialSpace => "Commercial Space",
            Self::Office => "Office",
            Self::Shop => "Shop",
            Self::Warehouse => "Warehouse",
            Self::Farmhouse => "Farmhouse",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Bedroom/hall/kitchen configuration offered on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BhkConfiguration {
    OneRk,
    OneBhk,
    TwoBhk,
    ThreeBhk,
    FourBhk,
    FivePlusBhk,
}

impl BhkConfiguration {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneRk => "1 RK",
            Self::OneBhk => "1 BHK",
            Self::TwoBhk => "2 BHK",
            Self::ThreeBhk => "3 BHK",
            Self::FourBhk => "4 BHK",
            Self::FivePlusBhk => "5+ BHK",
        }
    }

    /// Bedroom count used by the exact-equality bedroom filter. A 1 RK has
    /// a single multipurpose room and counts as one bedroom.
    pub const fn bedroom_count(self) -> u8 {
        match self {
            Self::OneRk | Self::OneBhk => 1,
            Self::TwoBhk => 2,
            Self::ThreeBhk => 3,
            Self::FourBhk => 4,
            Self::FivePlusBhk => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnishingState {
    Unfurnished,
    SemiFurnished,
    FullyFurnished,
}

impl FurnishingState {
    pub const fn ordered() -> [Self; 3] {
        [Self::Unfurnished, Self::SemiFurnished, Self::FullyFurnished]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::FullyFurnished => "Fully Furnished",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|state| state.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Facing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::NorthEast => "North-East",
            Self::NorthWest => "North-West",
            Self::SouthEast => "South-East",
            Self::SouthWest => "South-West",
        }
    }
}

/// Coarse construction-age bands shown on listing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    UnderConstruction,
    UpToOneYear,
    OneToFiveYears,
    FiveToTenYears,
    OverTenYears,
}

impl AgeBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderConstruction => "Under Construction",
            Self::UpToOneYear => "0-1 years",
            Self::OneToFiveYears => "1-5 years",
            Self::FiveToTenYears => "5-10 years",
            Self::OverTenYears => "10+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    Pending,
    Sold,
}

impl ListingStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Available, Self::Pending, Self::Sold]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Pending => "Pending",
            Self::Sold => "Sold",
        }
    }
}

/// Verification grade assigned by the trust-and-safety review. New
/// submissions carry no grade until reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    C,
}

impl TrustGrade {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::APlus,
            Self::A,
            Self::AMinus,
            Self::BPlus,
            Self::B,
            Self::C,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|grade| grade.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerKind {
    Owner,
    Agent,
    Builder,
}

impl SellerKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Owner, Self::Agent, Self::Builder]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Agent => "Agent",
            Self::Builder => "Builder",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Paperwork buckets a seller can attach documents under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    OwnershipDocuments,
    GovernmentApprovals,
    TaxReceipts,
    NocCertificates,
    FloorPlans,
    OtherDocuments,
}

impl DocumentCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::OwnershipDocuments,
            Self::GovernmentApprovals,
            Self::TaxReceipts,
            Self::NocCertificates,
            Self::FloorPlans,
            Self::OtherDocuments,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OwnershipDocuments => "Ownership Documents",
            Self::GovernmentApprovals => "Government Approvals",
            Self::TaxReceipts => "Tax Receipts",
            Self::NocCertificates => "NOC Certificates",
            Self::FloorPlans => "Floor Plans",
            Self::OtherDocuments => "Other Documents",
        }
    }
}

/// Public slice of the seller shown on a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerCard {
    pub name: String,
    pub kind: SellerKind,
}

/// One catalog listing. `price` and `area` are display strings as rendered
/// on listing cards; the search pipeline derives comparable values from
/// them rather than storing parallel numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: ListingId,
    pub title: String,
    pub price: String,
    pub location: String,
    pub beds: u8,
    pub baths: u8,
    pub area: String,
    pub kind: PropertyKind,
    pub furnishing: FurnishingState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBand>,
    pub status: ListingStatus,
    pub verified: bool,
    pub urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_grade: Option<TrustGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rera_id: Option<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub seller: SellerCard,
    pub listed_on: NaiveDate,
}
