use super::strings;
use crate::record::Treatment;

#[allow(clippy::too_many_lines)]
pub(super) fn fixtures() -> Vec<Treatment> {
    vec![
        Treatment {
            id: "TX-PEMBRO".to_string(),
            name: "Pembrolizumab".to_string(),
            sponsor: "Merck".to_string(),
            drugs: strings(&["Pembrolizumab"]),
            target: "PD-1".to_string(),
            modality: "Monoclonal Antibody".to_string(),
            indication: "NSCLC".to_string(),
            phase: "Phase 4".to_string(),
            line_of_therapy: "1L".to_string(),
            biomarker: "PD-L1 TPS >=50%".to_string(),
            status: "Active".to_string(),
            approval_status: "Approved".to_string(),
            pivotal_trial: Some("NCT03539536".to_string()),
            orr: "47.6%".to_string(),
            pfs: "8.8m".to_string(),
            os: "22.0m".to_string(),
            date: "2014-09-04".to_string(),
            location: "Global".to_string(),
        },
        Treatment {
            id: "TX-TDXD".to_string(),
            name: "Trastuzumab Deruxtecan".to_string(),
            sponsor: "Daiichi Sankyo".to_string(),
            drugs: strings(&["Trastuzumab Deruxtecan"]),
            target: "HER2".to_string(),
            modality: "Antibody-Drug Conjugate".to_string(),
            indication: "Breast Cancer".to_string(),
            phase: "Phase 4".to_string(),
            line_of_therapy: "2L".to_string(),
            biomarker: "HER2-Low".to_string(),
            status: "Active".to_string(),
            approval_status: "Approved".to_string(),
            pivotal_trial: Some("NCT04294810".to_string()),
            orr: "52.3%".to_string(),
            pfs: "9.9m".to_string(),
            os: "23.4m".to_string(),
            date: "2022-08-05".to_string(),
            location: "Global".to_string(),
        },
        Treatment {
            id: "TX-SOTORASIB".to_string(),
            name: "Sotorasib".to_string(),
            sponsor: "Amgen".to_string(),
            drugs: strings(&["Sotorasib"]),
            target: "KRAS G12C".to_string(),
            modality: "Small Molecule".to_string(),
            indication: "NSCLC".to_string(),
            phase: "Phase 3".to_string(),
            line_of_therapy: "2L".to_string(),
            biomarker: "KRAS G12C".to_string(),
            status: "Active".to_string(),
            approval_status: "Accelerated Approval".to_string(),
            pivotal_trial: Some("NCT03600883".to_string()),
            orr: "37.1%".to_string(),
            pfs: "6.8m".to_string(),
            os: "12.5m".to_string(),
            date: "2021-05-28".to_string(),
            location: "United States".to_string(),
        },
        Treatment {
            id: "TX-OLAPARIB".to_string(),
            name: "Olaparib".to_string(),
            sponsor: "AstraZeneca".to_string(),
            drugs: strings(&["Olaparib"]),
            target: "PARP".to_string(),
            modality: "Small Molecule".to_string(),
            indication: "Ovarian Cancer".to_string(),
            phase: "Phase 4".to_string(),
            line_of_therapy: "Maintenance".to_string(),
            biomarker: "BRCA1/2".to_string(),
            status: "Completed".to_string(),
            approval_status: "Approved".to_string(),
            pivotal_trial: None,
            orr: "N/A".to_string(),
            pfs: "56.0m".to_string(),
            os: "N/R".to_string(),
            date: "2014-12-19".to_string(),
            location: "Global".to_string(),
        },
        Treatment {
            id: "TX-TISLELIZUMAB".to_string(),
            name: "Tislelizumab".to_string(),
            sponsor: "BeiGene".to_string(),
            drugs: strings(&["Tislelizumab", "Chemotherapy"]),
            target: "PD-1".to_string(),
            modality: "Monoclonal Antibody".to_string(),
            indication: "Gastric Cancer".to_string(),
            phase: "Phase 3".to_string(),
            line_of_therapy: "1L".to_string(),
            biomarker: "PD-L1 CPS >=10".to_string(),
            status: "Recruiting".to_string(),
            approval_status: "Under Review".to_string(),
            pivotal_trial: None,
            orr: "47.3%".to_string(),
            pfs: "6.9m".to_string(),
            os: "15.0m".to_string(),
            date: "2023-11-30".to_string(),
            location: "China".to_string(),
        },
    ]
}
