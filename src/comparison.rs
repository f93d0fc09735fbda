use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::record::{Attributes, Record};

/// Rendered when a record has no value for a comparison row.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// One row of the side-by-side comparison table.
#[derive(Enum, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ComparisonField {
    Title,
    TrialId,
    Sponsor,
    Treatment,
    Indication,
    Phase,
    LineOfTherapy,
    Population,
    TargetModality,
    Biomarker,
    Patients,
    Orr,
    Pfs,
    Os,
    Conference,
    AbstractNumber,
    PresentationType,
    Status,
    Date,
    Location,
}

impl ComparisonField {
    /// Rows in display order.
    pub(crate) const ROWS: [ComparisonField; 20] = [
        ComparisonField::Title,
        ComparisonField::TrialId,
        ComparisonField::Sponsor,
        ComparisonField::Treatment,
        ComparisonField::Indication,
        ComparisonField::Phase,
        ComparisonField::LineOfTherapy,
        ComparisonField::Population,
        ComparisonField::TargetModality,
        ComparisonField::Biomarker,
        ComparisonField::Patients,
        ComparisonField::Orr,
        ComparisonField::Pfs,
        ComparisonField::Os,
        ComparisonField::Conference,
        ComparisonField::AbstractNumber,
        ComparisonField::PresentationType,
        ComparisonField::Status,
        ComparisonField::Date,
        ComparisonField::Location,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ComparisonField::Title => "Title",
            ComparisonField::TrialId => "Trial ID",
            ComparisonField::Sponsor => "Sponsor",
            ComparisonField::Treatment => "Treatment",
            ComparisonField::Indication => "Indication",
            ComparisonField::Phase => "Phase",
            ComparisonField::LineOfTherapy => "Line of Therapy",
            ComparisonField::Population => "Population",
            ComparisonField::TargetModality => "Target / Modality",
            ComparisonField::Biomarker => "Biomarker",
            ComparisonField::Patients => "Patients",
            ComparisonField::Orr => "ORR",
            ComparisonField::Pfs => "PFS",
            ComparisonField::Os => "OS",
            ComparisonField::Conference => "Conference",
            ComparisonField::AbstractNumber => "Abstract #",
            ComparisonField::PresentationType => "Presentation Type",
            ComparisonField::Status => "Status",
            ComparisonField::Date => "Date",
            ComparisonField::Location => "Location",
        }
    }
}

#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct ComparisonRow {
    pub(crate) field: ComparisonField,
    pub(crate) label: String,
    /// One cell per compared record, in selection order.
    pub(crate) values: Vec<String>,
}

/// Records laid out one column each, one row per comparison field.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct ComparisonTable {
    /// Record identifiers heading each column.
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<ComparisonRow>,
    pub(crate) records: Vec<Record>,
}

impl ComparisonTable {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        let columns = records.iter().map(|r| r.id().to_string()).collect();
        let rows = ComparisonField::ROWS
            .into_iter()
            .map(|field| ComparisonRow {
                field,
                label: field.label().to_string(),
                values: records
                    .iter()
                    .map(|record| {
                        record
                            .display(field)
                            .filter(|value| !value.is_empty())
                            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                    })
                    .collect(),
            })
            .collect();
        Self {
            columns,
            rows,
            records,
        }
    }

    #[cfg(test)]
    pub(crate) fn row(&self, field: ComparisonField) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn one_column_per_record_in_order() {
        let records = vec![
            Record::from(catalog::trials()[1].clone()),
            Record::from(catalog::trials()[0].clone()),
        ];
        let table = ComparisonTable::new(records);
        assert_eq!(table.columns, ["NCT03539537", "NCT03539536"]);
        assert_eq!(table.rows.len(), ComparisonField::ROWS.len());
        assert!(table.rows.iter().all(|row| row.values.len() == 2));
        assert_eq!(
            table.row(ComparisonField::TrialId).unwrap().values,
            ["NCT03539537", "NCT03539536"]
        );
    }

    #[test]
    fn rows_follow_display_order() {
        let table = ComparisonTable::new(vec![Record::from(catalog::trials()[0].clone())]);
        let labels: Vec<_> = table.rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels[0], "Title");
        assert_eq!(labels[1], "Trial ID");
        assert_eq!(&labels[11..14], ["ORR", "PFS", "OS"]);
        assert_eq!(labels[19], "Location");
    }

    #[test]
    fn missing_values_render_as_not_available() {
        let table = ComparisonTable::new(vec![
            Record::from(catalog::trials()[0].clone()),
            Record::from(catalog::treatments()[0].clone()),
        ]);
        let abstract_number = table.row(ComparisonField::AbstractNumber).unwrap();
        assert_eq!(abstract_number.values, [NOT_AVAILABLE, NOT_AVAILABLE]);
        let sponsor = table.row(ComparisonField::Sponsor).unwrap();
        assert_eq!(sponsor.values, ["Merck", "Merck"]);
    }

    #[test]
    fn mixed_record_kinds_share_rows() {
        let table = ComparisonTable::new(vec![
            Record::from(catalog::abstracts()[0].clone()),
            Record::from(catalog::trials()[0].clone()),
        ]);
        let trial_ids = &table.row(ComparisonField::TrialId).unwrap().values;
        assert_eq!(trial_ids, &["NCT03539536", "NCT03539536"]);
        let numbers = &table.row(ComparisonField::AbstractNumber).unwrap().values;
        assert_eq!(numbers, &["LBA9000", NOT_AVAILABLE]);
    }
}
