use crate::types::DatasetConfig;

/// Summary table inside an Elementor text-editor widget, the layout both
/// known pages share.
pub const STATE_TABLE_SELECTOR: &str = ".elementor-widget-text-editor table";

pub fn tax_lien_certificate_states() -> DatasetConfig {
    DatasetConfig {
        name: "Tax lien certificate states".into(),
        url: "https://tedthomas.com/faqs/tax-lien-certificate-states/".into(),
        table_selector: STATE_TABLE_SELECTOR.into(),
        fields: vec![
            "State".into(),
            "Interest rate / penalty".into(),
            "Redemption period".into(),
        ],
    }
}

pub fn tax_deed_states() -> DatasetConfig {
    DatasetConfig {
        name: "Tax deed states".into(),
        url: "https://tedthomas.com/faqs/tax-deed-states/".into(),
        table_selector: STATE_TABLE_SELECTOR.into(),
        fields: vec!["State".into(), "Type".into()],
    }
}

/// Every known list, in build order.
pub fn all() -> Vec<DatasetConfig> {
    vec![tax_lien_certificate_states(), tax_deed_states()]
}
