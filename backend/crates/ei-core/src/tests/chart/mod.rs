mod csv_export;
mod derive;
mod year_range;

use crate::{FinalStatus, StatusYearEntry};

pub(crate) fn change(eip: &str, status: &str, title: &str, category: &str) -> FinalStatus {
    FinalStatus {
        eip: eip.to_string(),
        last_status: status.to_string(),
        eip_title: title.to_string(),
        eip_category: category.to_string(),
    }
}

/// Three years of mixed categories
pub(crate) fn sample_dataset() -> Vec<StatusYearEntry> {
    vec![
        StatusYearEntry {
            year: 2021,
            status_changes: vec![
                change("1559", "Final", "Fee market change", "Core"),
                change("721", "Final", "Non-Fungible Token Standard", "ERC"),
            ],
        },
        StatusYearEntry {
            year: 2022,
            status_changes: vec![
                change("4844", "Review", "Shard Blob Transactions", "Standards Track"),
                change("4337", "Draft", "Account Abstraction", "ERC"),
                change("7000", "Living", "Some meta process", "Meta"),
            ],
        },
        StatusYearEntry {
            year: 2023,
            status_changes: vec![
                change("6780", "Last Call", "SELFDESTRUCT only in same transaction", "core"),
                change("9999", "Brand New Status", "Mystery", "Unheard Of Category"),
            ],
        },
    ]
}
