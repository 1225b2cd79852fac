//! Assessment intake sections

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sector the organisation works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Industry {
    Education,
    Healthcare,
    Legal,
    Finance,
    Government,
    Manufacturing,
    Retail,
    Hospitality,
    ProfessionalServices,
    Other,
}

impl Industry {
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Education => "Education",
            Industry::Healthcare => "Healthcare",
            Industry::Legal => "Legal",
            Industry::Finance => "Finance",
            Industry::Government => "Government",
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
            Industry::Hospitality => "Hospitality",
            Industry::ProfessionalServices => "Professional services",
            Industry::Other => "Other",
        }
    }
}

/// Headcount bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganisationSize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "500+")]
    Enterprise,
}

impl OrganisationSize {
    pub fn label(&self) -> &'static str {
        match self {
            OrganisationSize::Micro => "1-10 employees",
            OrganisationSize::Small => "11-50 employees",
            OrganisationSize::Medium => "51-200 employees",
            OrganisationSize::Large => "201-500 employees",
            OrganisationSize::Enterprise => "500+ employees",
        }
    }
}

/// Who the organisation is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub company_name: Option<String>,
    pub industry: Industry,
    pub organisation_size: OrganisationSize,
    #[serde(default = "default_locations")]
    pub locations: u32,
    #[serde(default)]
    pub additional_context: Option<String>,
}

fn default_locations() -> u32 {
    1
}

/// Average age of the installed fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentAge {
    #[serde(rename = "under-2")]
    UnderTwoYears,
    #[serde(rename = "2-5")]
    TwoToFiveYears,
    #[serde(rename = "5+")]
    OverFiveYears,
    #[serde(rename = "unknown")]
    Unknown,
}

impl EquipmentAge {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentAge::UnderTwoYears => "under 2 years",
            EquipmentAge::TwoToFiveYears => "2-5 years",
            EquipmentAge::OverFiveYears => "over 5 years",
            EquipmentAge::Unknown => "unknown",
        }
    }
}

/// How the current fleet is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ownership {
    Owned,
    Leased,
    Managed,
    Mixed,
}

impl Ownership {
    pub fn label(&self) -> &'static str {
        match self {
            Ownership::Owned => "owned outright",
            Ownership::Leased => "leased",
            Ownership::Managed => "managed print service",
            Ownership::Mixed => "mixed",
        }
    }
}

/// Problems with the current setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PainPoint {
    HighCosts,
    FrequentBreakdowns,
    SlowOutput,
    PoorQuality,
    SecurityConcerns,
    SupplyManagement,
    NoVisibility,
}

impl PainPoint {
    pub fn label(&self) -> &'static str {
        match self {
            PainPoint::HighCosts => "high running costs",
            PainPoint::FrequentBreakdowns => "frequent breakdowns",
            PainPoint::SlowOutput => "slow output",
            PainPoint::PoorQuality => "poor print quality",
            PainPoint::SecurityConcerns => "security concerns",
            PainPoint::SupplyManagement => "toner and supply management",
            PainPoint::NoVisibility => "no visibility of usage",
        }
    }
}

/// Existing equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSetup {
    pub printer_count: u32,
    pub equipment_age: EquipmentAge,
    #[serde(default)]
    pub ownership: Option<Ownership>,
    #[serde(default)]
    pub current_brands: Vec<String>,
    #[serde(default)]
    pub pain_points: BTreeSet<PainPoint>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Monthly page volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintVolume {
    /// Monthly mono pages
    pub mono: u64,
    /// Monthly colour pages
    pub colour: u64,
    /// Overall monthly pages, when the customer knows it
    #[serde(default)]
    pub total: Option<u64>,
    /// Share of output printed on A3, percent
    #[serde(default)]
    pub a3_percentage: Option<u8>,
}

impl PrintVolume {
    /// Stated total, or mono plus colour
    pub fn effective_total(&self) -> u64 {
        self.total
            .unwrap_or_else(|| self.mono.saturating_add(self.colour))
    }
}

/// A capability the new fleet must offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    Scanning,
    SecurePrinting,
    MobilePrinting,
    CloudIntegration,
    Finishing,
    Fax,
    LargeFormat,
    Duplex,
}

impl Capability {
    /// Human-readable name, lowercase so it reads naturally mid-sentence
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Scanning => "scanning",
            Capability::SecurePrinting => "secure printing",
            Capability::MobilePrinting => "mobile printing",
            Capability::CloudIntegration => "cloud integration",
            Capability::Finishing => "finishing (stapling, hole punching, booklets)",
            Capability::Fax => "fax",
            Capability::LargeFormat => "A3 / large format output",
            Capability::Duplex => "double-sided printing",
        }
    }
}

/// Required capabilities. Duplicates collapse and iteration order is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowNeeds(pub BTreeSet<Capability>);

impl WorkflowNeeds {
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for WorkflowNeeds {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Budget bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-5k")]
    Under5k,
    #[serde(rename = "5k-15k")]
    From5kTo15k,
    #[serde(rename = "15k-50k")]
    From15kTo50k,
    #[serde(rename = "50k-plus")]
    Over50k,
    #[serde(rename = "undecided")]
    Undecided,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under5k => "under £5,000",
            BudgetRange::From5kTo15k => "£5,000 - £15,000",
            BudgetRange::From15kTo50k => "£15,000 - £50,000",
            BudgetRange::Over50k => "over £50,000",
            BudgetRange::Undecided => "not yet decided",
        }
    }
}

/// When the customer wants to acquire equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "exploring")]
    Exploring,
}

impl Timeline {
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediately",
            Timeline::OneToThreeMonths => "within 1-3 months",
            Timeline::ThreeToSixMonths => "within 3-6 months",
            Timeline::SixToTwelveMonths => "within 6-12 months",
            Timeline::Exploring => "just exploring options",
        }
    }
}

/// Preferred way to pay for equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcquisitionPreference {
    Purchase,
    Lease,
    ManagedService,
    Undecided,
}

impl AcquisitionPreference {
    pub fn label(&self) -> &'static str {
        match self {
            AcquisitionPreference::Purchase => "outright purchase",
            AcquisitionPreference::Lease => "lease",
            AcquisitionPreference::ManagedService => "managed print service",
            AcquisitionPreference::Undecided => "undecided",
        }
    }
}

/// Budget and timing constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTimeline {
    pub budget: BudgetRange,
    pub timeline: Timeline,
    #[serde(default)]
    pub acquisition: Option<AcquisitionPreference>,
}

/// The five wizard sections for one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub business_profile: BusinessProfile,
    pub current_setup: CurrentSetup,
    pub print_volume: PrintVolume,
    pub workflow_needs: WorkflowNeeds,
    pub budget_timeline: BudgetTimeline,
}
