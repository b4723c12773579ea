#![allow(dead_code)]

use cellphonedb_core::model::interaction;
use cellphonedb_core::model::multidata::{self, Multidata};
use cellphonedb_core::{Interaction, MemorySource, TableName};

/// Reference entities: two proteins, one complex
pub fn multidata_entries() -> Vec<(Multidata, Option<&'static str>)> {
    vec![
        (Multidata::protein(1, "EGFR").receptor(), Some("EGFR_HUMAN")),
        (Multidata::protein(2, "EGF").secreted(), Some("EGF_HUMAN")),
        (Multidata::complex(3, "IL6_receptor").receptor(), None),
        (Multidata::protein(4, "IL6").secreted(), Some("IL6_HUMAN")),
    ]
}

/// Interactions including one that points at a missing multidata id (99)
pub fn interactions() -> Vec<Interaction> {
    vec![
        Interaction::new(1, "CPI-SS0001", 2, 1)
            .with_scores(0.9, 0.8)
            .with_source("curated")
            .with_comments("EGF binds EGFR"),
        Interaction::new(2, "CPI-SC0002", 4, 3)
            .with_scores(0.7, 0.6)
            .with_source("curated"),
        Interaction::new(3, "CPI-SS0003", 1, 99).with_source("uniprot"),
    ]
}

pub fn source_with(interactions: &[Interaction]) -> MemorySource {
    let entries = multidata_entries();
    MemorySource::new()
        .with_table(TableName::Interaction, interaction::to_table(interactions))
        .with_table(
            TableName::MultidataExpanded,
            multidata::to_expanded_table(&entries),
        )
}

pub fn source() -> MemorySource {
    source_with(&interactions())
}
