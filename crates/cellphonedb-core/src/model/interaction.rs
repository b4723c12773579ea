use crate::table::{Table, Value};
use serde::{Deserialize, Serialize};

pub const ID_INTERACTION: &str = "id_interaction";
pub const ID_CP_INTERACTION: &str = "id_cp_interaction";
pub const MULTIDATA_1_ID: &str = "multidata_1_id";
pub const MULTIDATA_2_ID: &str = "multidata_2_id";
pub const SCORE_1: &str = "score_1";
pub const SCORE_2: &str = "score_2";
pub const SOURCE: &str = "source";
pub const COMMENTS: &str = "comments";

/// Both participant foreign keys
pub const PARTICIPANT_COLUMNS: [&str; 2] = [MULTIDATA_1_ID, MULTIDATA_2_ID];

/// Column order of the `interaction` table
pub const COLUMNS: [&str; 8] = [
    ID_INTERACTION,
    ID_CP_INTERACTION,
    MULTIDATA_1_ID,
    MULTIDATA_2_ID,
    SCORE_1,
    SCORE_2,
    SOURCE,
    COMMENTS,
];

/// A stored interaction between two multidata entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id_interaction: i64,
    pub id_cp_interaction: String,
    pub multidata_1_id: i64,
    pub multidata_2_id: i64,
    pub score_1: Option<f64>,
    pub score_2: Option<f64>,
    pub source: Option<String>,
    pub comments: Option<String>,
}

impl Interaction {
    pub fn new(
        id_interaction: i64,
        id_cp_interaction: impl Into<String>,
        multidata_1_id: i64,
        multidata_2_id: i64,
    ) -> Self {
        Self {
            id_interaction,
            id_cp_interaction: id_cp_interaction.into(),
            multidata_1_id,
            multidata_2_id,
            score_1: None,
            score_2: None,
            source: None,
            comments: None,
        }
    }

    pub fn with_scores(mut self, score_1: f64, score_2: f64) -> Self {
        self.score_1 = Some(score_1);
        self.score_2 = Some(score_2);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Whether either participant is `id`
    pub fn references(&self, id: i64) -> bool {
        self.multidata_1_id == id || self.multidata_2_id == id
    }

    /// Cells in `COLUMNS` order
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            self.id_interaction.into(),
            self.id_cp_interaction.clone().into(),
            self.multidata_1_id.into(),
            self.multidata_2_id.into(),
            self.score_1.into(),
            self.score_2.into(),
            self.source.clone().into(),
            self.comments.clone().into(),
        ]
    }
}

/// Build an `interaction` table from records
pub fn to_table(interactions: &[Interaction]) -> Table {
    Table::from_parts(
        COLUMNS.iter().map(|c| c.to_string()).collect(),
        interactions.iter().map(Interaction::to_row).collect(),
    )
}
