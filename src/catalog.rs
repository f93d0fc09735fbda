mod abstracts;
mod treatments;
mod trials;

use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::{anyhow, Error};
use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::record::{Abstract, Attributes, Record, Treatment, Trial};

static TRIALS: LazyLock<Vec<Trial>> = LazyLock::new(trials::fixtures);
static ABSTRACTS: LazyLock<Vec<Abstract>> = LazyLock::new(abstracts::fixtures);
static TREATMENTS: LazyLock<Vec<Treatment>> = LazyLock::new(treatments::fixtures);
static RECORDS: LazyLock<Vec<Record>> = LazyLock::new(|| {
    trials()
        .iter()
        .cloned()
        .map(Record::from)
        .chain(abstracts().iter().cloned().map(Record::from))
        .chain(treatments().iter().cloned().map(Record::from))
        .collect()
});

/// The mock trial catalog.
pub(crate) fn trials() -> &'static [Trial] {
    &TRIALS
}

/// The mock conference-abstract catalog.
pub(crate) fn abstracts() -> &'static [Abstract] {
    &ABSTRACTS
}

/// The mock treatment catalog.
pub(crate) fn treatments() -> &'static [Treatment] {
    &TREATMENTS
}

/// Every record of every catalog, trials first.
pub(crate) fn records() -> &'static [Record] {
    &RECORDS
}

/// Looks up a record by identifier across all catalogs.
pub(crate) fn find_record(id: &str) -> Option<Record> {
    records().iter().find(|record| record.id() == id).cloned()
}

/// A filterable record attribute.
///
/// Each field carries a fixed domain of legal values; filter panels only
/// offer values from that domain.
#[derive(
    Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub(crate) enum FilterField {
    Indication,
    Phase,
    Status,
    Company,
    Conference,
    Drugs,
    Targets,
    Modalities,
    Endpoints,
    LineOfTherapy,
    Biomarkers,
    PresentationType,
}

impl FilterField {
    pub(crate) const ALL: [FilterField; 12] = [
        FilterField::Indication,
        FilterField::Phase,
        FilterField::Status,
        FilterField::Company,
        FilterField::Conference,
        FilterField::Drugs,
        FilterField::Targets,
        FilterField::Modalities,
        FilterField::Endpoints,
        FilterField::LineOfTherapy,
        FilterField::Biomarkers,
        FilterField::PresentationType,
    ];

    /// The key used for this field in filter criteria.
    pub(crate) fn name(self) -> &'static str {
        match self {
            FilterField::Indication => "indication",
            FilterField::Phase => "phase",
            FilterField::Status => "status",
            FilterField::Company => "company",
            FilterField::Conference => "conference",
            FilterField::Drugs => "drugs",
            FilterField::Targets => "targets",
            FilterField::Modalities => "modalities",
            FilterField::Endpoints => "endpoints",
            FilterField::LineOfTherapy => "lineOfTherapy",
            FilterField::Biomarkers => "biomarkers",
            FilterField::PresentationType => "presentationType",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            FilterField::Indication => "Indication",
            FilterField::Phase => "Phase",
            FilterField::Status => "Status",
            FilterField::Company => "Company",
            FilterField::Conference => "Conference",
            FilterField::Drugs => "Drugs",
            FilterField::Targets => "Targets",
            FilterField::Modalities => "Modalities",
            FilterField::Endpoints => "Endpoints",
            FilterField::LineOfTherapy => "Line of Therapy",
            FilterField::Biomarkers => "Biomarkers",
            FilterField::PresentationType => "Presentation Type",
        }
    }

    /// Whether records hold a list of values for this field.
    pub(crate) fn is_multi_valued(self) -> bool {
        matches!(
            self,
            FilterField::Drugs
                | FilterField::Targets
                | FilterField::Modalities
                | FilterField::Endpoints
                | FilterField::Biomarkers
        )
    }

    pub(crate) fn domain(self) -> &'static [&'static str] {
        match self {
            FilterField::Indication => INDICATIONS,
            FilterField::Phase => PHASES,
            FilterField::Status => STATUSES,
            FilterField::Company => COMPANIES,
            FilterField::Conference => CONFERENCES,
            FilterField::Drugs => DRUGS,
            FilterField::Targets => TARGETS,
            FilterField::Modalities => MODALITIES,
            FilterField::Endpoints => ENDPOINTS,
            FilterField::LineOfTherapy => LINES_OF_THERAPY,
            FilterField::Biomarkers => BIOMARKERS,
            FilterField::PresentationType => PRESENTATION_TYPES,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| anyhow!("unknown filter field: {s}"))
    }
}

pub(crate) const PHASES: &[&str] = &[
    "Phase 1",
    "Phase 1/2",
    "Phase 2",
    "Phase 2/3",
    "Phase 3",
    "Phase 4",
];

const STATUSES: &[&str] = &[
    "Active",
    "Recruiting",
    "Completed",
    "Terminated",
    "Suspended",
    "Withdrawn",
];

const INDICATIONS: &[&str] = &[
    "NSCLC",
    "SCLC",
    "Breast Cancer",
    "Colorectal Cancer",
    "Melanoma",
    "Prostate Cancer",
    "Gastric Cancer",
    "Hepatocellular Carcinoma",
    "Ovarian Cancer",
    "Renal Cell Carcinoma",
    "Urothelial Carcinoma",
    "Head and Neck Cancer",
    "Multiple Myeloma",
    "DLBCL",
];

const COMPANIES: &[&str] = &[
    "Merck",
    "Bristol Myers Squibb",
    "AstraZeneca",
    "Roche",
    "Pfizer",
    "Novartis",
    "Amgen",
    "Daiichi Sankyo",
    "Gilead",
    "Johnson & Johnson",
    "Regeneron",
    "BeiGene",
];

const CONFERENCES: &[&str] = &["ASCO", "ESMO", "AACR", "SABCS", "ASH", "WCLC", "ASCO GI"];

const DRUGS: &[&str] = &[
    "Pembrolizumab",
    "Nivolumab",
    "Ipilimumab",
    "Durvalumab",
    "Atezolizumab",
    "Osimertinib",
    "Trastuzumab Deruxtecan",
    "Sacituzumab Govitecan",
    "Sotorasib",
    "Adagrasib",
    "Olaparib",
    "Lenvatinib",
    "Enfortumab Vedotin",
    "Tislelizumab",
    "Teclistamab",
    "Chemotherapy",
];

const TARGETS: &[&str] = &[
    "PD-1",
    "PD-L1",
    "CTLA-4",
    "EGFR",
    "HER2",
    "TROP2",
    "KRAS G12C",
    "PARP",
    "VEGFR",
    "Nectin-4",
    "BCMA",
    "CD19",
];

const MODALITIES: &[&str] = &[
    "Monoclonal Antibody",
    "Antibody-Drug Conjugate",
    "Small Molecule",
    "Bispecific Antibody",
    "Cell Therapy",
    "Chemotherapy",
];

const ENDPOINTS: &[&str] = &["ORR", "PFS", "OS", "DoR", "DCR", "pCR", "EFS", "Safety"];

const LINES_OF_THERAPY: &[&str] = &[
    "1L",
    "2L",
    "3L+",
    "Adjuvant",
    "Neoadjuvant",
    "Maintenance",
];

const BIOMARKERS: &[&str] = &[
    "PD-L1 TPS >=50%",
    "PD-L1 CPS >=10",
    "EGFR Mutation",
    "HER2-Positive",
    "HER2-Low",
    "KRAS G12C",
    "BRCA1/2",
    "MSI-H/dMMR",
    "TMB-High",
    "None",
];

const PRESENTATION_TYPES: &[&str] = &[
    "Oral",
    "Rapid Oral",
    "Poster",
    "Late-Breaking",
    "Publication Only",
];

/// Copies a slice of string literals into owned strings.
fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
