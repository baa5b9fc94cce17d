use super::super::price::{CRORE_RUPEES, LAKH_RUPEES};

/// Filter and ordering choices for one catalog search, as they arrive from
/// the listing page's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub city: CityFilter,
    pub bedrooms: BedroomFilter,
    pub price_band: PriceBandFilter,
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn from_params(
        search: &str,
        city: &str,
        bedrooms: &str,
        price_band: &str,
        sort: &str,
    ) -> Self {
        Self {
            search: search.to_string(),
            city: CityFilter::from_param(city),
            bedrooms: BedroomFilter::from_param(bedrooms),
            price_band: PriceBandFilter::from_param(price_band),
            sort: SortOrder::from_param(sort),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    Named(String),
}

impl CityFilter {
    /// Only the literal `all` disables the filter. Any other value is kept
    /// verbatim, including casing, and matched case-insensitively later.
    pub fn from_param(value: &str) -> Self {
        if value == "all" {
            CityFilter::All
        } else {
            CityFilter::Named(value.to_string())
        }
    }

    /// Matches anywhere in the location line, not just the city segment, so
    /// a locality name like `Whitefield` works as a city choice too.
    pub(crate) fn admits(&self, location: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Named(city) => location.to_lowercase().contains(&city.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(String),
}

impl BedroomFilter {
    pub fn from_param(value: &str) -> Self {
        if value == "all" {
            BedroomFilter::Any
        } else {
            BedroomFilter::Exactly(value.to_string())
        }
    }

    /// Compares the rendered bedroom count, so `3` admits three-bedroom
    /// listings while `30` admits only thirty-bedroom ones.
    pub(crate) fn admits(&self, beds: u8) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(wanted) => beds.to_string() == *wanted,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBandFilter {
    #[default]
    Any,
    Band(PriceBand),
}

impl PriceBandFilter {
    /// Unknown band keys disable the filter rather than rejecting every
    /// listing.
    pub fn from_param(value: &str) -> Self {
        match PriceBand::from_key(value) {
            Some(band) => PriceBandFilter::Band(band),
            None => PriceBandFilter::Any,
        }
    }

    pub(crate) fn admits(&self, rupees: u64) -> bool {
        match self {
            PriceBandFilter::Any => true,
            PriceBandFilter::Band(band) => band.contains(rupees),
        }
    }
}

/// Half-open budget brackets used by the listing page's price dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    UnderFiftyLakh,
    FiftyLakhToOneCrore,
    OneToTwoCrore,
    AboveTwoCrore,
}

impl PriceBand {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::UnderFiftyLakh,
            Self::FiftyLakhToOneCrore,
            Self::OneToTwoCrore,
            Self::AboveTwoCrore,
        ]
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value {
            "under-50l" => Some(Self::UnderFiftyLakh),
            "50l-1cr" => Some(Self::FiftyLakhToOneCrore),
            "1cr-2cr" => Some(Self::OneToTwoCrore),
            "above-2cr" => Some(Self::AboveTwoCrore),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::UnderFiftyLakh => "under-50l",
            Self::FiftyLakhToOneCrore => "50l-1cr",
            Self::OneToTwoCrore => "1cr-2cr",
            Self::AboveTwoCrore => "above-2cr",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderFiftyLakh => "Under ₹50 L",
            Self::FiftyLakhToOneCrore => "₹50 L – ₹1 Cr",
            Self::OneToTwoCrore => "₹1 Cr – ₹2 Cr",
            Self::AboveTwoCrore => "Above ₹2 Cr",
        }
    }

    pub const fn contains(self, rupees: u64) -> bool {
        match self {
            Self::UnderFiftyLakh => rupees < 50 * LAKH_RUPEES,
            Self::FiftyLakhToOneCrore => rupees >= 50 * LAKH_RUPEES && rupees < CRORE_RUPEES,
            Self::OneToTwoCrore => rupees >= CRORE_RUPEES && rupees < 2 * CRORE_RUPEES,
            Self::AboveTwoCrore => rupees >= 2 * CRORE_RUPEES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    Newest,
}

impl SortOrder {
    /// Unrecognized keys fall back to relevance, which leaves catalog order
    /// untouched.
    pub fn from_param(value: &str) -> Self {
        match value {
            "price-low" => SortOrder::PriceLowToHigh,
            "price-high" => SortOrder::PriceHighToLow,
            "newest" => SortOrder::Newest,
            _ => SortOrder::Relevance,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
            SortOrder::Newest => "newest",
        }
    }
}
