use std::fmt;

use async_graphql::{SimpleObject, Union};
use serde::{Deserialize, Serialize};

use crate::{catalog::FilterField, comparison::ComparisonField};

/// Read access shared by every record shape.
///
/// Matching and comparison rendering go through this trait only, so the
/// three catalogs never need their own copies of that logic.
pub(crate) trait Attributes {
    fn id(&self) -> &str;

    /// The record's values for a filterable field. Scalar fields yield at
    /// most one value; list fields yield all of them.
    fn values(&self, field: FilterField) -> Vec<&str>;

    /// The display string for a comparison row, if the record has one.
    fn display(&self, field: ComparisonField) -> Option<String>;

    /// Text searched by the free-text search box.
    fn haystack(&self) -> Vec<&str>;

    /// Identifiers matched by the identifier search box.
    fn identifiers(&self) -> Vec<&str> {
        vec![self.id()]
    }
}

/// A registered clinical trial.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Trial {
    /// The registry (NCT) identifier.
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) sponsor: String,
    pub(crate) indication: String,
    pub(crate) phase: String,
    pub(crate) status: String,
    pub(crate) line_of_therapy: String,
    pub(crate) population: String,
    pub(crate) drugs: Vec<String>,
    pub(crate) targets: Vec<String>,
    pub(crate) modalities: Vec<String>,
    pub(crate) endpoints: Vec<String>,
    pub(crate) biomarkers: Vec<String>,
    pub(crate) enrollment: u32,
    /// Objective response rate, e.g. `45.2%`.
    pub(crate) orr: String,
    /// Median progression-free survival, e.g. `8.2m`.
    pub(crate) pfs: String,
    /// Median overall survival, e.g. `22.0m`.
    pub(crate) os: String,
    pub(crate) conference: Option<String>,
    pub(crate) start_date: String,
    pub(crate) location: String,
}

/// A conference abstract reporting trial results.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Abstract {
    pub(crate) id: String,
    pub(crate) abstract_number: String,
    pub(crate) conference: String,
    pub(crate) presentation_type: String,
    pub(crate) trial_id: Option<String>,
    pub(crate) title: String,
    pub(crate) sponsor: String,
    pub(crate) treatment: String,
    pub(crate) drugs: Vec<String>,
    pub(crate) targets: Vec<String>,
    pub(crate) modality: String,
    pub(crate) endpoints: Vec<String>,
    pub(crate) indication: String,
    pub(crate) phase: String,
    pub(crate) line_of_therapy: String,
    pub(crate) population: String,
    pub(crate) biomarker: String,
    /// Evaluable over enrolled patients, e.g. `112/120`.
    pub(crate) patients: String,
    pub(crate) orr: String,
    pub(crate) pfs: String,
    pub(crate) os: String,
    pub(crate) status: String,
    pub(crate) date: String,
    pub(crate) location: String,
}

/// A marketed or investigational treatment.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Treatment {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) sponsor: String,
    pub(crate) drugs: Vec<String>,
    pub(crate) target: String,
    pub(crate) modality: String,
    pub(crate) indication: String,
    pub(crate) phase: String,
    pub(crate) line_of_therapy: String,
    pub(crate) biomarker: String,
    pub(crate) status: String,
    pub(crate) approval_status: String,
    pub(crate) pivotal_trial: Option<String>,
    pub(crate) orr: String,
    pub(crate) pfs: String,
    pub(crate) os: String,
    pub(crate) date: String,
    pub(crate) location: String,
}

/// Any catalog record.
#[derive(Union, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum Record {
    Trial(Trial),
    Abstract(Abstract),
    Treatment(Treatment),
}

impl Record {
    fn inner(&self) -> &dyn Attributes {
        match self {
            Record::Trial(trial) => trial,
            Record::Abstract(abs) => abs,
            Record::Treatment(treatment) => treatment,
        }
    }
}

impl Attributes for Record {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn values(&self, field: FilterField) -> Vec<&str> {
        self.inner().values(field)
    }

    fn display(&self, field: ComparisonField) -> Option<String> {
        self.inner().display(field)
    }

    fn haystack(&self) -> Vec<&str> {
        self.inner().haystack()
    }

    fn identifiers(&self) -> Vec<&str> {
        self.inner().identifiers()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Display for Abstract {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

impl Attributes for Trial {
    fn id(&self) -> &str {
        &self.id
    }

    fn values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Indication => vec![self.indication.as_str()],
            FilterField::Phase => vec![self.phase.as_str()],
            FilterField::Status => vec![self.status.as_str()],
            FilterField::Company => vec![self.sponsor.as_str()],
            FilterField::Conference => self.conference.as_deref().into_iter().collect(),
            FilterField::Drugs => as_strs(&self.drugs),
            FilterField::Targets => as_strs(&self.targets),
            FilterField::Modalities => as_strs(&self.modalities),
            FilterField::Endpoints => as_strs(&self.endpoints),
            FilterField::LineOfTherapy => vec![self.line_of_therapy.as_str()],
            FilterField::Biomarkers => as_strs(&self.biomarkers),
            FilterField::PresentationType => Vec::new(),
        }
    }

    fn display(&self, field: ComparisonField) -> Option<String> {
        match field {
            ComparisonField::Title => Some(self.title.clone()),
            ComparisonField::TrialId => Some(self.id.clone()),
            ComparisonField::Sponsor => Some(self.sponsor.clone()),
            ComparisonField::Treatment => Some(self.drugs.join(" + ")),
            ComparisonField::Indication => Some(self.indication.clone()),
            ComparisonField::Phase => Some(self.phase.clone()),
            ComparisonField::LineOfTherapy => Some(self.line_of_therapy.clone()),
            ComparisonField::Population => Some(self.population.clone()),
            ComparisonField::TargetModality => Some(format!(
                "{} / {}",
                self.targets.join(", "),
                self.modalities.join(", ")
            )),
            ComparisonField::Biomarker => Some(self.biomarkers.join(", ")),
            ComparisonField::Patients => Some(self.enrollment.to_string()),
            ComparisonField::Orr => Some(self.orr.clone()),
            ComparisonField::Pfs => Some(self.pfs.clone()),
            ComparisonField::Os => Some(self.os.clone()),
            ComparisonField::Conference => self.conference.clone(),
            ComparisonField::AbstractNumber | ComparisonField::PresentationType => None,
            ComparisonField::Status => Some(self.status.clone()),
            ComparisonField::Date => Some(self.start_date.clone()),
            ComparisonField::Location => Some(self.location.clone()),
        }
    }

    fn haystack(&self) -> Vec<&str> {
        let mut text = vec![
            self.id.as_str(),
            self.title.as_str(),
            self.sponsor.as_str(),
            self.indication.as_str(),
        ];
        text.extend(as_strs(&self.drugs));
        text
    }
}

impl Attributes for Abstract {
    fn id(&self) -> &str {
        &self.id
    }

    fn values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Indication => vec![self.indication.as_str()],
            FilterField::Phase => vec![self.phase.as_str()],
            FilterField::Status => vec![self.status.as_str()],
            FilterField::Company => vec![self.sponsor.as_str()],
            FilterField::Conference => vec![self.conference.as_str()],
            FilterField::Drugs => as_strs(&self.drugs),
            FilterField::Targets => as_strs(&self.targets),
            FilterField::Modalities => vec![self.modality.as_str()],
            FilterField::Endpoints => as_strs(&self.endpoints),
            FilterField::LineOfTherapy => vec![self.line_of_therapy.as_str()],
            FilterField::Biomarkers => vec![self.biomarker.as_str()],
            FilterField::PresentationType => vec![self.presentation_type.as_str()],
        }
    }

    fn display(&self, field: ComparisonField) -> Option<String> {
        match field {
            ComparisonField::Title => Some(self.title.clone()),
            ComparisonField::TrialId => self.trial_id.clone(),
            ComparisonField::Sponsor => Some(self.sponsor.clone()),
            ComparisonField::Treatment => Some(self.treatment.clone()),
            ComparisonField::Indication => Some(self.indication.clone()),
            ComparisonField::Phase => Some(self.phase.clone()),
            ComparisonField::LineOfTherapy => Some(self.line_of_therapy.clone()),
            ComparisonField::Population => Some(self.population.clone()),
            ComparisonField::TargetModality => Some(format!(
                "{} / {}",
                self.targets.join(", "),
                self.modality
            )),
            ComparisonField::Biomarker => Some(self.biomarker.clone()),
            ComparisonField::Patients => Some(self.patients.clone()),
            ComparisonField::Orr => Some(self.orr.clone()),
            ComparisonField::Pfs => Some(self.pfs.clone()),
            ComparisonField::Os => Some(self.os.clone()),
            ComparisonField::Conference => Some(self.conference.clone()),
            ComparisonField::AbstractNumber => Some(self.abstract_number.clone()),
            ComparisonField::PresentationType => Some(self.presentation_type.clone()),
            ComparisonField::Status => Some(self.status.clone()),
            ComparisonField::Date => Some(self.date.clone()),
            ComparisonField::Location => Some(self.location.clone()),
        }
    }

    fn haystack(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.title.as_str(),
            self.sponsor.as_str(),
            self.indication.as_str(),
            self.treatment.as_str(),
            self.abstract_number.as_str(),
        ]
    }

    fn identifiers(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str(), self.abstract_number.as_str()];
        ids.extend(self.trial_id.as_deref());
        ids
    }
}

impl Attributes for Treatment {
    fn id(&self) -> &str {
        &self.id
    }

    fn values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Indication => vec![self.indication.as_str()],
            FilterField::Phase => vec![self.phase.as_str()],
            FilterField::Status => vec![self.status.as_str()],
            FilterField::Company => vec![self.sponsor.as_str()],
            FilterField::Conference | FilterField::Endpoints | FilterField::PresentationType => {
                Vec::new()
            }
            FilterField::Drugs => as_strs(&self.drugs),
            FilterField::Targets => vec![self.target.as_str()],
            FilterField::Modalities => vec![self.modality.as_str()],
            FilterField::LineOfTherapy => vec![self.line_of_therapy.as_str()],
            FilterField::Biomarkers => vec![self.biomarker.as_str()],
        }
    }

    fn display(&self, field: ComparisonField) -> Option<String> {
        match field {
            ComparisonField::Title => Some(self.name.clone()),
            ComparisonField::TrialId => self.pivotal_trial.clone(),
            ComparisonField::Sponsor => Some(self.sponsor.clone()),
            ComparisonField::Treatment => Some(self.drugs.join(" + ")),
            ComparisonField::Indication => Some(self.indication.clone()),
            ComparisonField::Phase => Some(self.phase.clone()),
            ComparisonField::LineOfTherapy => Some(self.line_of_therapy.clone()),
            ComparisonField::TargetModality => {
                Some(format!("{} / {}", self.target, self.modality))
            }
            ComparisonField::Biomarker => Some(self.biomarker.clone()),
            ComparisonField::Orr => Some(self.orr.clone()),
            ComparisonField::Pfs => Some(self.pfs.clone()),
            ComparisonField::Os => Some(self.os.clone()),
            ComparisonField::Status => Some(format!("{} ({})", self.status, self.approval_status)),
            ComparisonField::Date => Some(self.date.clone()),
            ComparisonField::Location => Some(self.location.clone()),
            ComparisonField::Population
            | ComparisonField::Patients
            | ComparisonField::Conference
            | ComparisonField::AbstractNumber
            | ComparisonField::PresentationType => None,
        }
    }

    fn haystack(&self) -> Vec<&str> {
        let mut text = vec![
            self.id.as_str(),
            self.name.as_str(),
            self.sponsor.as_str(),
            self.indication.as_str(),
        ];
        text.extend(as_strs(&self.drugs));
        text
    }

    fn identifiers(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        ids.extend(self.pivotal_trial.as_deref());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn record_delegates_to_variant() {
        let trial = catalog::trials()[0].clone();
        let record = Record::from(trial.clone());
        assert_eq!(record.id(), trial.id);
        assert_eq!(
            record.values(FilterField::Phase),
            trial.values(FilterField::Phase)
        );
        assert_eq!(record.to_string(), "NCT03539536");
    }

    #[test]
    fn payload_json_is_tagged_by_kind() {
        let record = Record::from(catalog::treatments()[0].clone());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "treatment");
        assert_eq!(json["approvalStatus"], "Approved");
        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn abstract_identifiers_include_linked_trial() {
        let abs = catalog::abstracts()
            .iter()
            .find(|a| a.trial_id.is_some())
            .unwrap();
        let ids = abs.identifiers();
        assert!(ids.contains(&abs.trial_id.as_deref().unwrap()));
        assert!(ids.contains(&abs.abstract_number.as_str()));
    }

    #[test]
    fn scalar_conference_is_absent_for_unpresented_trials() {
        let trial = catalog::trials()
            .iter()
            .find(|t| t.conference.is_none())
            .unwrap();
        assert!(trial.values(FilterField::Conference).is_empty());
        assert_eq!(trial.display(ComparisonField::Conference), None);
    }
}
