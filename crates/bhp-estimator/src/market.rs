//! Market datasets and chart shaping
//!
//! Static snapshots of the Bangalore market that the dashboard charts
//! render, plus the functions that shape them into comparison series.

use crate::types::PropertyType;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Average price per square foot in a locality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaPrice {
    /// Locality name
    pub area: &'static str,
    /// Price per sq.ft (₹)
    pub price: u32,
}

/// Average price per square foot in a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyPrice {
    /// Month abbreviation
    pub month: &'static str,
    /// Price per sq.ft (₹)
    pub price: u32,
}

/// Locality popularity and year-on-year growth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationTrend {
    /// Locality name
    pub location: &'static str,
    /// Popularity score (0-100)
    pub popularity: u8,
    /// Growth (%)
    pub growth: f64,
}

/// Listing count per property type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyTypeCount {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Number of listings
    pub count: u32,
}

/// Named share of a whole, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Share {
    /// Slice label
    pub name: &'static str,
    /// Percentage
    pub value: u8,
}

/// Demand and supply indices for a locality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandSupply {
    /// Locality name
    pub name: &'static str,
    /// Demand index (0-100)
    pub demand: u8,
    /// Supply index (0-100)
    pub supply: u8,
}

/// Price-per-sq.ft range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    /// Low end (₹)
    pub low: u32,
    /// High end (₹)
    pub high: u32,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            group_thousands(u64::from(self.low)),
            group_thousands(u64::from(self.high))
        )
    }
}

/// Locality profile used for side-by-side comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationProfile {
    /// Locality name
    pub name: &'static str,
    /// Average price per sq.ft (₹)
    pub avg_price: u32,
    /// Typical price range
    pub price_range: PriceRange,
    /// Growth (%)
    pub growth: f64,
    /// Connectivity score
    pub connectivity: u8,
    /// Amenities score
    pub amenities: u8,
    /// Schools score
    pub schools: u8,
    /// Hospitals score
    pub hospitals: u8,
    /// Retail score
    pub retail: u8,
}

/// Upkeep level of a property type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Maintenance {
    /// Low upkeep
    Low,
    /// Medium upkeep
    Medium,
    /// High upkeep
    High,
}

/// Property-type profile used for side-by-side comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyTypeProfile {
    /// Property type
    pub property_type: PropertyType,
    /// Average price per sq.ft (₹)
    pub avg_price: u32,
    /// Typical price range
    pub price_range: PriceRange,
    /// Growth (%)
    pub growth: f64,
    /// Demand index
    pub demand: u8,
    /// Supply index
    pub supply: u8,
    /// Rental yield (%)
    pub roi: f64,
    /// Upkeep level
    pub maintenance: Maintenance,
}

/// Trend window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// Last three months
    ThreeMonths,
    /// Last six months
    SixMonths,
    /// Last twelve months
    #[default]
    OneYear,
}

impl Timeframe {
    /// Number of months covered
    #[inline]
    #[must_use]
    pub fn months(self) -> usize {
        match self {
            Timeframe::ThreeMonths => 3,
            Timeframe::SixMonths => 6,
            Timeframe::OneYear => 12,
        }
    }

    /// Short label ("3m", "6m", "1y")
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::ThreeMonths => "3m",
            Timeframe::SixMonths => "6m",
            Timeframe::OneYear => "1y",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3m" => Ok(Timeframe::ThreeMonths),
            "6m" => Ok(Timeframe::SixMonths),
            "1y" | "12m" => Ok(Timeframe::OneYear),
            other => Err(format!("unknown timeframe: {other} (expected 3m, 6m or 1y)")),
        }
    }
}

/// Average price per sq.ft by locality
pub static AREA_PRICES: [AreaPrice; 6] = [
    AreaPrice { area: "Whitefield", price: 6800 },
    AreaPrice { area: "Electronic City", price: 5500 },
    AreaPrice { area: "HSR Layout", price: 10500 },
    AreaPrice { area: "Koramangala", price: 13200 },
    AreaPrice { area: "Indiranagar", price: 12500 },
    AreaPrice { area: "Jayanagar", price: 9800 },
];

/// City-wide price per sq.ft over the last twelve months, oldest first
pub static MONTHLY_PRICES: [MonthlyPrice; 12] = [
    MonthlyPrice { month: "Apr", price: 5700 },
    MonthlyPrice { month: "May", price: 5750 },
    MonthlyPrice { month: "Jun", price: 5800 },
    MonthlyPrice { month: "Jul", price: 5850 },
    MonthlyPrice { month: "Aug", price: 5900 },
    MonthlyPrice { month: "Sep", price: 5950 },
    MonthlyPrice { month: "Oct", price: 5950 },
    MonthlyPrice { month: "Nov", price: 6000 },
    MonthlyPrice { month: "Dec", price: 6050 },
    MonthlyPrice { month: "Jan", price: 6150 },
    MonthlyPrice { month: "Feb", price: 6200 },
    MonthlyPrice { month: "Mar", price: 6245 },
];

/// Popularity and growth by locality
pub static LOCATION_TRENDS: [LocationTrend; 5] = [
    LocationTrend { location: "Whitefield", popularity: 85, growth: 12.5 },
    LocationTrend { location: "Electronic City", popularity: 75, growth: 8.2 },
    LocationTrend { location: "HSR Layout", popularity: 90, growth: 11.5 },
    LocationTrend { location: "Koramangala", popularity: 95, growth: 10.2 },
    LocationTrend { location: "Indiranagar", popularity: 90, growth: 9.8 },
];

/// Listing counts by property type
pub static PROPERTY_TYPE_COUNTS: [PropertyTypeCount; 5] = [
    PropertyTypeCount { property_type: PropertyType::Apartment, count: 5842 },
    PropertyTypeCount { property_type: PropertyType::Villa, count: 1254 },
    PropertyTypeCount { property_type: PropertyType::IndependentHouse, count: 3516 },
    PropertyTypeCount { property_type: PropertyType::Plot, count: 2134 },
    PropertyTypeCount { property_type: PropertyType::BuilderFloor, count: 1875 },
];

/// Share of listings by locality
pub static AREA_DISTRIBUTION: [Share; 6] = [
    Share { name: "Whitefield", value: 18 },
    Share { name: "Electronic City", value: 15 },
    Share { name: "HSR Layout", value: 12 },
    Share { name: "Koramangala", value: 11 },
    Share { name: "Indiranagar", value: 10 },
    Share { name: "Others", value: 34 },
];

/// Share of listings by property type
pub static PROPERTY_TYPE_SHARES: [Share; 5] = [
    Share { name: "Apartment", value: 65 },
    Share { name: "Villa", value: 8 },
    Share { name: "Independent House", value: 15 },
    Share { name: "Builder Floor", value: 7 },
    Share { name: "Plot", value: 5 },
];

/// Share of listings by BHK
pub static BHK_DISTRIBUTION: [Share; 4] = [
    Share { name: "1 BHK", value: 15 },
    Share { name: "2 BHK", value: 45 },
    Share { name: "3 BHK", value: 30 },
    Share { name: "4+ BHK", value: 10 },
];

/// Price per sq.ft by BHK
pub static BEDROOM_PRICES: [AreaPrice; 5] = [
    AreaPrice { area: "1 BHK", price: 4200 },
    AreaPrice { area: "2 BHK", price: 5500 },
    AreaPrice { area: "3 BHK", price: 6800 },
    AreaPrice { area: "4 BHK", price: 8500 },
    AreaPrice { area: "5+ BHK", price: 10200 },
];

/// Demand against supply by locality
pub static DEMAND_SUPPLY: [DemandSupply; 5] = [
    DemandSupply { name: "Whitefield", demand: 85, supply: 80 },
    DemandSupply { name: "Electronic City", demand: 75, supply: 85 },
    DemandSupply { name: "HSR Layout", demand: 90, supply: 70 },
    DemandSupply { name: "Koramangala", demand: 95, supply: 65 },
    DemandSupply { name: "Indiranagar", demand: 90, supply: 60 },
];

const fn range(low: u32, high: u32) -> PriceRange {
    PriceRange { low, high }
}

/// Comparison profiles by locality
pub static LOCATION_PROFILES: [LocationProfile; 7] = [
    LocationProfile {
        name: "Whitefield",
        avg_price: 6800,
        price_range: range(6500, 7200),
        growth: 12.5,
        connectivity: 75,
        amenities: 80,
        schools: 70,
        hospitals: 65,
        retail: 80,
    },
    LocationProfile {
        name: "Electronic City",
        avg_price: 5500,
        price_range: range(5200, 5900),
        growth: 8.2,
        connectivity: 70,
        amenities: 75,
        schools: 65,
        hospitals: 60,
        retail: 75,
    },
    LocationProfile {
        name: "Indiranagar",
        avg_price: 12500,
        price_range: range(11_800, 13_500),
        growth: 9.8,
        connectivity: 95,
        amenities: 95,
        schools: 85,
        hospitals: 90,
        retail: 95,
    },
    LocationProfile {
        name: "Koramangala",
        avg_price: 13200,
        price_range: range(12_500, 14_000),
        growth: 10.2,
        connectivity: 90,
        amenities: 95,
        schools: 90,
        hospitals: 85,
        retail: 95,
    },
    LocationProfile {
        name: "HSR Layout",
        avg_price: 10500,
        price_range: range(9800, 11_200),
        growth: 11.5,
        connectivity: 85,
        amenities: 90,
        schools: 85,
        hospitals: 80,
        retail: 90,
    },
    LocationProfile {
        name: "Jayanagar",
        avg_price: 9800,
        price_range: range(9200, 10_500),
        growth: 7.5,
        connectivity: 80,
        amenities: 85,
        schools: 90,
        hospitals: 85,
        retail: 85,
    },
    LocationProfile {
        name: "Marathahalli",
        avg_price: 7200,
        price_range: range(6800, 7600),
        growth: 9.0,
        connectivity: 75,
        amenities: 70,
        schools: 65,
        hospitals: 60,
        retail: 75,
    },
];

/// Comparison profiles by property type
pub static PROPERTY_TYPE_PROFILES: [PropertyTypeProfile; 5] = [
    PropertyTypeProfile {
        property_type: PropertyType::Apartment,
        avg_price: 6800,
        price_range: range(5500, 8200),
        growth: 8.5,
        demand: 85,
        supply: 80,
        roi: 5.2,
        maintenance: Maintenance::Medium,
    },
    PropertyTypeProfile {
        property_type: PropertyType::Villa,
        avg_price: 9500,
        price_range: range(8200, 12_500),
        growth: 7.2,
        demand: 65,
        supply: 40,
        roi: 4.5,
        maintenance: Maintenance::High,
    },
    PropertyTypeProfile {
        property_type: PropertyType::IndependentHouse,
        avg_price: 8200,
        price_range: range(7000, 9500),
        growth: 6.8,
        demand: 70,
        supply: 50,
        roi: 4.8,
        maintenance: Maintenance::High,
    },
    PropertyTypeProfile {
        property_type: PropertyType::BuilderFloor,
        avg_price: 7500,
        price_range: range(6800, 8200),
        growth: 7.5,
        demand: 75,
        supply: 60,
        roi: 5.0,
        maintenance: Maintenance::Medium,
    },
    PropertyTypeProfile {
        property_type: PropertyType::Plot,
        avg_price: 5500,
        price_range: range(4500, 7000),
        growth: 12.5,
        demand: 60,
        supply: 45,
        roi: 8.5,
        maintenance: Maintenance::Low,
    },
];

/// Monthly price series for a timeframe, oldest first
#[must_use]
pub fn price_trend(timeframe: Timeframe) -> &'static [MonthlyPrice] {
    let skip = MONTHLY_PRICES.len().saturating_sub(timeframe.months());
    &MONTHLY_PRICES[skip..]
}

/// Look up a locality profile by exact name
#[must_use]
pub fn location_profile(name: &str) -> Option<&'static LocationProfile> {
    LOCATION_PROFILES.iter().find(|p| p.name == name)
}

/// Look up a property-type profile
#[must_use]
pub fn property_type_profile(property_type: PropertyType) -> &'static PropertyTypeProfile {
    let index = PropertyType::ALL
        .iter()
        .position(|ty| *ty == property_type)
        .unwrap_or(0);
    &PROPERTY_TYPE_PROFILES[index]
}

/// Labelled pair of values for a two-bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pair<T> {
    /// First item
    pub first: NamedValue<T>,
    /// Second item
    pub second: NamedValue<T>,
}

/// One labelled value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue<T> {
    /// Item name
    pub name: &'static str,
    /// Value
    pub value: T,
}

impl<T> Pair<T> {
    fn new(first: (&'static str, T), second: (&'static str, T)) -> Self {
        Self {
            first: NamedValue {
                name: first.0,
                value: first.1,
            },
            second: NamedValue {
                name: second.0,
                value: second.1,
            },
        }
    }
}

/// One axis of a radar chart with both items' scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarRow {
    /// Axis label
    pub subject: &'static str,
    /// First item's score
    pub first: u8,
    /// Second item's score
    pub second: u8,
}

/// Chart series comparing two localities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationComparison {
    /// Average price per sq.ft
    pub price: Pair<u32>,
    /// Growth (%)
    pub growth: Pair<f64>,
    /// Neighbourhood scores
    pub radar: Vec<RadarRow>,
}

/// Compare two localities
///
/// Returns `None` if either name has no profile.
#[must_use]
pub fn compare_locations(first: &str, second: &str) -> Option<LocationComparison> {
    let a = location_profile(first)?;
    let b = location_profile(second)?;

    let radar = [
        ("Connectivity", a.connectivity, b.connectivity),
        ("Amenities", a.amenities, b.amenities),
        ("Schools", a.schools, b.schools),
        ("Hospitals", a.hospitals, b.hospitals),
        ("Retail", a.retail, b.retail),
    ]
    .into_iter()
    .map(|(subject, first, second)| RadarRow {
        subject,
        first,
        second,
    })
    .collect();

    Some(LocationComparison {
        price: Pair::new((a.name, a.avg_price), (b.name, b.avg_price)),
        growth: Pair::new((a.name, a.growth), (b.name, b.growth)),
        radar,
    })
}

/// Chart series comparing two property types
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyTypeComparison {
    /// Average price per sq.ft
    pub price: Pair<u32>,
    /// Growth (%)
    pub growth: Pair<f64>,
    /// Demand index
    pub demand: Pair<u8>,
    /// Supply index
    pub supply: Pair<u8>,
    /// Rental yield (%)
    pub roi: Pair<f64>,
}

/// Compare two property types
#[must_use]
pub fn compare_property_types(first: PropertyType, second: PropertyType) -> PropertyTypeComparison {
    let a = property_type_profile(first);
    let b = property_type_profile(second);
    let (an, bn) = (a.property_type.as_str(), b.property_type.as_str());

    PropertyTypeComparison {
        price: Pair::new((an, a.avg_price), (bn, b.avg_price)),
        growth: Pair::new((an, a.growth), (bn, b.growth)),
        demand: Pair::new((an, a.demand), (bn, b.demand)),
        supply: Pair::new((an, a.supply), (bn, b.supply)),
        roi: Pair::new((an, a.roi), (bn, b.roi)),
    }
}

/// Format an integer with comma thousands separators
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
