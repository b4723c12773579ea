#![allow(dead_code)]

use cellphonedb_core::model::{Complex, Interaction, Multidata, Protein};
use cellphonedb_store::repo::ReferenceData;
use cellphonedb_store::SqliteRepo;
use rusqlite::Connection;

/// Two proteins and a complex on each side of two interactions, plus an
/// interaction whose second participant (99) does not exist
pub fn reference_data() -> ReferenceData {
    ReferenceData {
        multidata: vec![
            Multidata::protein(1, "EGFR").receptor(),
            Multidata::protein(2, "EGF").secreted(),
            Multidata::complex(3, "IL6_receptor").receptor(),
            Multidata::protein(4, "IL6").secreted(),
        ],
        proteins: vec![
            Protein::new(10, "EGFR_HUMAN", 1),
            Protein::new(20, "EGF_HUMAN", 2),
            Protein::new(40, "IL6_HUMAN", 4),
        ],
        complexes: vec![Complex::new(30, 3)],
        interactions: vec![
            Interaction::new(1, "CPI-SS0001", 2, 1)
                .with_scores(0.9, 0.8)
                .with_source("curated")
                .with_comments("EGF binds EGFR"),
            Interaction::new(2, "CPI-SC0002", 4, 3)
                .with_scores(0.7, 0.6)
                .with_source("curated"),
            Interaction::new(3, "CPI-SS0003", 1, 99).with_source("uniprot"),
        ],
    }
}

/// In-memory database with migrations applied and reference data loaded
///
/// Foreign keys are left off so the dangling interaction can be stored.
pub fn seeded_db() -> Connection {
    let mut conn = cellphonedb_store::db::open_in_memory().expect("open in-memory db");
    cellphonedb_store::migrations::apply_migrations(&mut conn).expect("apply migrations");
    SqliteRepo::persist_reference_data(&mut conn, &reference_data()).expect("seed data");
    conn
}
