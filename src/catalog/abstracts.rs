use super::strings;
use crate::record::Abstract;

#[allow(clippy::too_many_lines)]
pub(super) fn fixtures() -> Vec<Abstract> {
    vec![
        Abstract {
            id: "ASCO-2024-LBA9000".to_string(),
            abstract_number: "LBA9000".to_string(),
            conference: "ASCO".to_string(),
            presentation_type: "Late-Breaking".to_string(),
            trial_id: Some("NCT03539536".to_string()),
            title: "Five-Year Outcomes of First-Line Pembrolizumab Plus Chemotherapy in NSCLC"
                .to_string(),
            sponsor: "Merck".to_string(),
            treatment: "Pembrolizumab + Pemetrexed + Platinum".to_string(),
            drugs: strings(&["Pembrolizumab", "Chemotherapy"]),
            targets: strings(&["PD-1"]),
            modality: "Monoclonal Antibody".to_string(),
            endpoints: strings(&["OS", "PFS"]),
            indication: "NSCLC".to_string(),
            phase: "Phase 3".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Metastatic non-squamous NSCLC without EGFR/ALK alterations".to_string(),
            biomarker: "PD-L1 TPS >=50%".to_string(),
            patients: "410/616".to_string(),
            orr: "48.3%".to_string(),
            pfs: "9.0m".to_string(),
            os: "22.0m".to_string(),
            status: "Completed".to_string(),
            date: "2024-06-02".to_string(),
            location: "Chicago, IL".to_string(),
        },
        Abstract {
            id: "ESMO-2023-LBA6".to_string(),
            abstract_number: "LBA6".to_string(),
            conference: "ESMO".to_string(),
            presentation_type: "Oral".to_string(),
            trial_id: Some("NCT04223856".to_string()),
            title: "Enfortumab Vedotin and Pembrolizumab in Untreated Advanced Urothelial Cancer"
                .to_string(),
            sponsor: "Pfizer".to_string(),
            treatment: "Enfortumab Vedotin + Pembrolizumab".to_string(),
            drugs: strings(&["Enfortumab Vedotin", "Pembrolizumab"]),
            targets: strings(&["Nectin-4", "PD-1"]),
            modality: "Antibody-Drug Conjugate".to_string(),
            endpoints: strings(&["PFS", "OS"]),
            indication: "Urothelial Carcinoma".to_string(),
            phase: "Phase 3".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Locally advanced or metastatic urothelial carcinoma".to_string(),
            biomarker: "None".to_string(),
            patients: "442/886".to_string(),
            orr: "67.7%".to_string(),
            pfs: "12.5m".to_string(),
            os: "31.5m".to_string(),
            status: "Active".to_string(),
            date: "2023-10-22".to_string(),
            location: "Madrid, Spain".to_string(),
        },
        Abstract {
            id: "SABCS-2023-GS01-01".to_string(),
            abstract_number: "GS01-01".to_string(),
            conference: "SABCS".to_string(),
            presentation_type: "Oral".to_string(),
            trial_id: Some("NCT04294810".to_string()),
            title: "Updated Survival With Trastuzumab Deruxtecan in HER2-Low Breast Cancer"
                .to_string(),
            sponsor: "Daiichi Sankyo".to_string(),
            treatment: "Trastuzumab Deruxtecan".to_string(),
            drugs: strings(&["Trastuzumab Deruxtecan"]),
            targets: strings(&["HER2"]),
            modality: "Antibody-Drug Conjugate".to_string(),
            endpoints: strings(&["OS", "PFS"]),
            indication: "Breast Cancer".to_string(),
            phase: "Phase 3".to_string(),
            line_of_therapy: "2L".to_string(),
            population: "HER2-low metastatic breast cancer after one or two lines of chemotherapy"
                .to_string(),
            biomarker: "HER2-Low".to_string(),
            patients: "373/557".to_string(),
            orr: "52.6%".to_string(),
            pfs: "10.1m".to_string(),
            os: "23.9m".to_string(),
            status: "Completed".to_string(),
            date: "2023-12-06".to_string(),
            location: "San Antonio, TX".to_string(),
        },
        Abstract {
            id: "WCLC-2023-OA03.03".to_string(),
            abstract_number: "OA03.03".to_string(),
            conference: "WCLC".to_string(),
            presentation_type: "Rapid Oral".to_string(),
            trial_id: Some("NCT03600883".to_string()),
            title: "Two-Year Follow-Up of Sotorasib in KRAS G12C-Mutated NSCLC".to_string(),
            sponsor: "Amgen".to_string(),
            treatment: "Sotorasib".to_string(),
            drugs: strings(&["Sotorasib"]),
            targets: strings(&["KRAS G12C"]),
            modality: "Small Molecule".to_string(),
            endpoints: strings(&["ORR", "DoR"]),
            indication: "NSCLC".to_string(),
            phase: "Phase 2".to_string(),
            line_of_therapy: "2L".to_string(),
            population: "Pretreated KRAS G12C-mutated advanced NSCLC".to_string(),
            biomarker: "KRAS G12C".to_string(),
            patients: "124/126".to_string(),
            orr: "40.7%".to_string(),
            pfs: "6.3m".to_string(),
            os: "12.5m".to_string(),
            status: "Active".to_string(),
            date: "2023-09-10".to_string(),
            location: "Singapore".to_string(),
        },
        Abstract {
            id: "AACR-2024-CT021".to_string(),
            abstract_number: "CT021".to_string(),
            conference: "AACR".to_string(),
            presentation_type: "Poster".to_string(),
            trial_id: None,
            title: "Adagrasib Plus Cetuximab in KRAS G12C-Mutated Colorectal Cancer".to_string(),
            sponsor: "Bristol Myers Squibb".to_string(),
            treatment: "Adagrasib + Cetuximab".to_string(),
            drugs: strings(&["Adagrasib"]),
            targets: strings(&["KRAS G12C", "EGFR"]),
            modality: "Small Molecule".to_string(),
            endpoints: strings(&["ORR", "Safety"]),
            indication: "Colorectal Cancer".to_string(),
            phase: "Phase 1/2".to_string(),
            line_of_therapy: "3L+".to_string(),
            population: "Heavily pretreated KRAS G12C-mutated colorectal cancer".to_string(),
            biomarker: "KRAS G12C".to_string(),
            patients: "94/94".to_string(),
            orr: "34.0%".to_string(),
            pfs: "6.9m".to_string(),
            os: "15.9m".to_string(),
            status: "Recruiting".to_string(),
            date: "2024-04-07".to_string(),
            location: "San Diego, CA".to_string(),
        },
        Abstract {
            id: "ASH-2023-1012".to_string(),
            abstract_number: "1012".to_string(),
            conference: "ASH".to_string(),
            presentation_type: "Publication Only".to_string(),
            trial_id: Some("NCT04083599".to_string()),
            title: "Long-Term Safety of Teclistamab in Relapsed Multiple Myeloma".to_string(),
            sponsor: "Johnson & Johnson".to_string(),
            treatment: "Teclistamab".to_string(),
            drugs: strings(&["Teclistamab"]),
            targets: strings(&["BCMA"]),
            modality: "Bispecific Antibody".to_string(),
            endpoints: strings(&["Safety", "DoR"]),
            indication: "Multiple Myeloma".to_string(),
            phase: "Phase 1/2".to_string(),
            line_of_therapy: "3L+".to_string(),
            population: "Triple-class exposed multiple myeloma".to_string(),
            biomarker: "None".to_string(),
            patients: "165/165".to_string(),
            orr: "63.0%".to_string(),
            pfs: "11.4m".to_string(),
            os: "22.2m".to_string(),
            status: "Suspended".to_string(),
            date: "2023-12-09".to_string(),
            location: "San Diego, CA".to_string(),
        },
    ]
}
