//! Interaction expansion
//!
//! Attaches the expanded multidata annotation to both participants of each
//! interaction. Column names shared by the two legs are suffixed `_1` and
//! `_2`.

use crate::errors::Result;
use crate::model::interaction::{MULTIDATA_1_ID, MULTIDATA_2_ID};
use crate::model::multidata::ID_MULTIDATA;
use crate::table::Table;

pub const SIDE_1_SUFFIX: &str = "_1";
pub const SIDE_2_SUFFIX: &str = "_2";

/// Suffixes applied when the first join meets overlapping column names
const FIRST_JOIN_SUFFIXES: (&str, &str) = ("_x", "_y");

/// Join every interaction to its two multidata rows
///
/// Both joins are inner joins: an interaction whose participant id has no
/// multidata row is dropped without notice. The duplicated key columns
/// `id_multidata_1` / `id_multidata_2` are removed from the result.
pub fn expand_interactions_multidatas(
    interactions: &Table,
    multidatas_expanded: &Table,
) -> Result<Table> {
    let first_leg = interactions.inner_join(
        multidatas_expanded,
        MULTIDATA_1_ID,
        ID_MULTIDATA,
        FIRST_JOIN_SUFFIXES,
    )?;

    let mut expanded = first_leg.inner_join(
        multidatas_expanded,
        MULTIDATA_2_ID,
        ID_MULTIDATA,
        (SIDE_1_SUFFIX, SIDE_2_SUFFIX),
    )?;

    let key_1 = format!("{}{}", ID_MULTIDATA, SIDE_1_SUFFIX);
    let key_2 = format!("{}{}", ID_MULTIDATA, SIDE_2_SUFFIX);
    expanded.drop_columns(&[key_1.as_str(), key_2.as_str()]);

    let dropped = interactions.len().saturating_sub(expanded.len());
    if dropped > 0 {
        tracing::debug!(
            dropped,
            "interactions without a matching multidata row were left out"
        );
    }

    Ok(expanded)
}
