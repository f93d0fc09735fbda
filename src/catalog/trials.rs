use super::strings;
use crate::record::Trial;

#[allow(clippy::too_many_lines)]
pub(super) fn fixtures() -> Vec<Trial> {
    vec![
        Trial {
            id: "NCT03539536".to_string(),
            title: "Pembrolizumab Plus Platinum Chemotherapy in Metastatic Non-Squamous NSCLC"
                .to_string(),
            sponsor: "Merck".to_string(),
            indication: "NSCLC".to_string(),
            phase: "Phase 3".to_string(),
            status: "Active".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Untreated metastatic non-squamous NSCLC".to_string(),
            drugs: strings(&["Pembrolizumab", "Chemotherapy"]),
            targets: strings(&["PD-1"]),
            modalities: strings(&["Monoclonal Antibody", "Chemotherapy"]),
            endpoints: strings(&["PFS", "OS"]),
            biomarkers: strings(&["PD-L1 TPS >=50%"]),
            enrollment: 616,
            orr: "47.6%".to_string(),
            pfs: "8.8m".to_string(),
            os: "22.0m".to_string(),
            conference: Some("ASCO".to_string()),
            start_date: "2018-06-15".to_string(),
            location: "United States".to_string(),
        },
        Trial {
            id: "NCT03539537".to_string(),
            title: "Nivolumab Plus Ipilimumab Versus Nivolumab in Advanced Melanoma".to_string(),
            sponsor: "Bristol Myers Squibb".to_string(),
            indication: "Melanoma".to_string(),
            phase: "Phase 3".to_string(),
            status: "Completed".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Unresectable stage III/IV melanoma".to_string(),
            drugs: strings(&["Nivolumab", "Ipilimumab"]),
            targets: strings(&["PD-1", "CTLA-4"]),
            modalities: strings(&["Monoclonal Antibody"]),
            endpoints: strings(&["PFS", "OS", "ORR"]),
            biomarkers: strings(&["None"]),
            enrollment: 945,
            orr: "58.3%".to_string(),
            pfs: "11.5m".to_string(),
            os: "72.1m".to_string(),
            conference: Some("ESMO".to_string()),
            start_date: "2018-07-02".to_string(),
            location: "Multinational".to_string(),
        },
        Trial {
            id: "NCT04294810".to_string(),
            title: "Trastuzumab Deruxtecan in HER2-Low Metastatic Breast Cancer".to_string(),
            sponsor: "Daiichi Sankyo".to_string(),
            indication: "Breast Cancer".to_string(),
            phase: "Phase 3".to_string(),
            status: "Completed".to_string(),
            line_of_therapy: "2L".to_string(),
            population: "HER2-low unresectable or metastatic breast cancer".to_string(),
            drugs: strings(&["Trastuzumab Deruxtecan"]),
            targets: strings(&["HER2"]),
            modalities: strings(&["Antibody-Drug Conjugate"]),
            endpoints: strings(&["PFS", "OS"]),
            biomarkers: strings(&["HER2-Low"]),
            enrollment: 557,
            orr: "52.3%".to_string(),
            pfs: "9.9m".to_string(),
            os: "23.4m".to_string(),
            conference: Some("ASCO".to_string()),
            start_date: "2020-03-11".to_string(),
            location: "Japan".to_string(),
        },
        Trial {
            id: "NCT03600883".to_string(),
            title: "Sotorasib in KRAS G12C-Mutated Advanced Solid Tumors".to_string(),
            sponsor: "Amgen".to_string(),
            indication: "NSCLC".to_string(),
            phase: "Phase 2".to_string(),
            status: "Active".to_string(),
            line_of_therapy: "2L".to_string(),
            population: "Previously treated KRAS G12C-mutated NSCLC".to_string(),
            drugs: strings(&["Sotorasib"]),
            targets: strings(&["KRAS G12C"]),
            modalities: strings(&["Small Molecule"]),
            endpoints: strings(&["ORR", "DoR"]),
            biomarkers: strings(&["KRAS G12C"]),
            enrollment: 126,
            orr: "37.1%".to_string(),
            pfs: "6.8m".to_string(),
            os: "12.5m".to_string(),
            conference: Some("WCLC".to_string()),
            start_date: "2018-08-27".to_string(),
            location: "United States".to_string(),
        },
        Trial {
            id: "NCT02477826".to_string(),
            title: "Adjuvant Osimertinib in Resected EGFR-Mutated NSCLC".to_string(),
            sponsor: "AstraZeneca".to_string(),
            indication: "NSCLC".to_string(),
            phase: "Phase 3".to_string(),
            status: "Completed".to_string(),
            line_of_therapy: "Adjuvant".to_string(),
            population: "Completely resected stage IB-IIIA EGFR-mutated NSCLC".to_string(),
            drugs: strings(&["Osimertinib"]),
            targets: strings(&["EGFR"]),
            modalities: strings(&["Small Molecule"]),
            endpoints: strings(&["EFS", "OS"]),
            biomarkers: strings(&["EGFR Mutation"]),
            enrollment: 682,
            orr: "N/R".to_string(),
            pfs: "65.8m".to_string(),
            os: "N/R".to_string(),
            conference: None,
            start_date: "2015-11-04".to_string(),
            location: "Multinational".to_string(),
        },
        Trial {
            id: "NCT03834506".to_string(),
            title: "Pembrolizumab Plus Lenvatinib in Advanced Renal Cell Carcinoma".to_string(),
            sponsor: "Merck".to_string(),
            indication: "Renal Cell Carcinoma".to_string(),
            phase: "Phase 3".to_string(),
            status: "Recruiting".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Advanced clear-cell renal cell carcinoma".to_string(),
            drugs: strings(&["Pembrolizumab", "Lenvatinib"]),
            targets: strings(&["PD-1", "VEGFR"]),
            modalities: strings(&["Monoclonal Antibody", "Small Molecule"]),
            endpoints: strings(&["PFS", "OS", "ORR"]),
            biomarkers: strings(&["None"]),
            enrollment: 1069,
            orr: "71.0%".to_string(),
            pfs: "23.9m".to_string(),
            os: "53.7m".to_string(),
            conference: Some("ASCO GI".to_string()),
            start_date: "2019-03-20".to_string(),
            location: "Multinational".to_string(),
        },
        Trial {
            id: "NCT04223856".to_string(),
            title: "Enfortumab Vedotin Plus Pembrolizumab in Untreated Urothelial Carcinoma"
                .to_string(),
            sponsor: "Pfizer".to_string(),
            indication: "Urothelial Carcinoma".to_string(),
            phase: "Phase 3".to_string(),
            status: "Active".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "Previously untreated locally advanced or metastatic urothelial cancer"
                .to_string(),
            drugs: strings(&["Enfortumab Vedotin", "Pembrolizumab"]),
            targets: strings(&["Nectin-4", "PD-1"]),
            modalities: strings(&["Antibody-Drug Conjugate", "Monoclonal Antibody"]),
            endpoints: strings(&["PFS", "OS"]),
            biomarkers: strings(&["None"]),
            enrollment: 886,
            orr: "67.7%".to_string(),
            pfs: "12.5m".to_string(),
            os: "31.5m".to_string(),
            conference: Some("ESMO".to_string()),
            start_date: "2020-03-30".to_string(),
            location: "Multinational".to_string(),
        },
        Trial {
            id: "NCT03901339".to_string(),
            title: "Sacituzumab Govitecan in HR+/HER2- Metastatic Breast Cancer".to_string(),
            sponsor: "Gilead".to_string(),
            indication: "Breast Cancer".to_string(),
            phase: "Phase 2/3".to_string(),
            status: "Completed".to_string(),
            line_of_therapy: "3L+".to_string(),
            population: "Endocrine-resistant HR+/HER2- metastatic breast cancer".to_string(),
            drugs: strings(&["Sacituzumab Govitecan"]),
            targets: strings(&["TROP2"]),
            modalities: strings(&["Antibody-Drug Conjugate"]),
            endpoints: strings(&["PFS", "OS"]),
            biomarkers: strings(&["HER2-Low"]),
            enrollment: 543,
            orr: "21.0%".to_string(),
            pfs: "5.5m".to_string(),
            os: "14.4m".to_string(),
            conference: Some("SABCS".to_string()),
            start_date: "2019-05-15".to_string(),
            location: "United States".to_string(),
        },
        Trial {
            id: "NCT04380636".to_string(),
            title: "Pembrolizumab in MSI-H/dMMR Metastatic Colorectal Cancer".to_string(),
            sponsor: "Merck".to_string(),
            indication: "Colorectal Cancer".to_string(),
            phase: "Phase 2".to_string(),
            status: "Recruiting".to_string(),
            line_of_therapy: "1L".to_string(),
            population: "MSI-H/dMMR stage IV colorectal cancer".to_string(),
            drugs: strings(&["Pembrolizumab"]),
            targets: strings(&["PD-1"]),
            modalities: strings(&["Monoclonal Antibody"]),
            endpoints: strings(&["ORR", "DCR"]),
            biomarkers: strings(&["MSI-H/dMMR"]),
            enrollment: 124,
            orr: "43.8%".to_string(),
            pfs: "16.5m".to_string(),
            os: "N/R".to_string(),
            conference: Some("ASCO GI".to_string()),
            start_date: "2020-06-01".to_string(),
            location: "Europe".to_string(),
        },
        Trial {
            id: "NCT04083599".to_string(),
            title: "Teclistamab in Relapsed or Refractory Multiple Myeloma".to_string(),
            sponsor: "Johnson & Johnson".to_string(),
            indication: "Multiple Myeloma".to_string(),
            phase: "Phase 1/2".to_string(),
            status: "Suspended".to_string(),
            line_of_therapy: "3L+".to_string(),
            population: "Triple-class exposed relapsed or refractory multiple myeloma".to_string(),
            drugs: strings(&["Teclistamab"]),
            targets: strings(&["BCMA"]),
            modalities: strings(&["Bispecific Antibody"]),
            endpoints: strings(&["ORR", "DoR", "Safety"]),
            biomarkers: strings(&["None"]),
            enrollment: 165,
            orr: "63.0%".to_string(),
            pfs: "11.3m".to_string(),
            os: "18.3m".to_string(),
            conference: Some("ASH".to_string()),
            start_date: "2020-01-16".to_string(),
            location: "United States".to_string(),
        },
    ]
}
