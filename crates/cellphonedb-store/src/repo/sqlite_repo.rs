//! SQLite repository implementation
//!
//! Persists multidata, proteins, complexes and interactions. Reads go
//! through `SqliteSource` and the core repositories.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use cellphonedb_core::model::{Complex, Interaction, Multidata, Protein};
use rusqlite::Connection;

/// A full set of rows to load in one transaction
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub multidata: Vec<Multidata>,
    pub proteins: Vec<Protein>,
    pub complexes: Vec<Complex>,
    pub interactions: Vec<Interaction>,
}

/// SQLite repository for reference data
pub struct SqliteRepo;

impl SqliteRepo {
    /// Persist a multidata row, replacing flags on conflict
    pub fn persist_multidata(conn: &Connection, multidata: &Multidata) -> Result<()> {
        conn.execute(
            "INSERT INTO multidata (id_multidata, name, receptor, secreted, is_complex)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id_multidata) DO UPDATE SET
                name = excluded.name,
                receptor = excluded.receptor,
                secreted = excluded.secreted,
                is_complex = excluded.is_complex",
            rusqlite::params![
                multidata.id_multidata,
                multidata.name,
                multidata.receptor,
                multidata.secreted,
                multidata.is_complex,
            ],
        )
        .map_err(|e| from_rusqlite(e).with_table("multidata"))?;

        Ok(())
    }

    /// Persist a protein row
    pub fn persist_protein(conn: &Connection, protein: &Protein) -> Result<()> {
        conn.execute(
            "INSERT INTO protein (id_protein, entry_name, protein_name, protein_multidata_id)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id_protein) DO UPDATE SET
                entry_name = excluded.entry_name,
                protein_name = excluded.protein_name,
                protein_multidata_id = excluded.protein_multidata_id",
            rusqlite::params![
                protein.id_protein,
                protein.entry_name,
                protein.protein_name,
                protein.protein_multidata_id,
            ],
        )
        .map_err(|e| from_rusqlite(e).with_table("protein"))?;

        Ok(())
    }

    /// Persist a complex row
    pub fn persist_complex(conn: &Connection, complex: &Complex) -> Result<()> {
        conn.execute(
            "INSERT INTO complex (id_complex, complex_multidata_id, pdb_structure)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id_complex) DO UPDATE SET
                complex_multidata_id = excluded.complex_multidata_id,
                pdb_structure = excluded.pdb_structure",
            rusqlite::params![
                complex.id_complex,
                complex.complex_multidata_id,
                complex.pdb_structure,
            ],
        )
        .map_err(|e| from_rusqlite(e).with_table("complex"))?;

        Ok(())
    }

    /// Persist an interaction row
    ///
    /// Interactions are immutable once stored; a second write with the same
    /// id is ignored.
    pub fn persist_interaction(conn: &Connection, interaction: &Interaction) -> Result<()> {
        conn.execute(
            "INSERT INTO interaction (id_interaction, id_cp_interaction, multidata_1_id, multidata_2_id, score_1, score_2, source, comments)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id_interaction) DO NOTHING",
            rusqlite::params![
                interaction.id_interaction,
                interaction.id_cp_interaction,
                interaction.multidata_1_id,
                interaction.multidata_2_id,
                interaction.score_1,
                interaction.score_2,
                interaction.source,
                interaction.comments,
            ],
        )
        .map_err(|e| from_rusqlite(e).with_table("interaction"))?;

        Ok(())
    }

    /// Persist a full reference data set atomically
    pub fn persist_reference_data(conn: &mut Connection, data: &ReferenceData) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        for multidata in &data.multidata {
            Self::persist_multidata(&tx, multidata)?;
        }
        for protein in &data.proteins {
            Self::persist_protein(&tx, protein)?;
        }
        for complex in &data.complexes {
            Self::persist_complex(&tx, complex)?;
        }
        for interaction in &data.interactions {
            Self::persist_interaction(&tx, interaction)?;
        }

        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(
            multidata = data.multidata.len(),
            interactions = data.interactions.len(),
            "persisted reference data"
        );

        Ok(())
    }
}
