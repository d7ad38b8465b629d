use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Euclidean,
    Dtw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustMethod {
    Bonferroni,
    Holm,
    Hochberg,
    FdrBh,
    FdrBy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub rows: u64,
    pub time_points: u64,
    pub replicates: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    pub algorithm: Algorithm,
    pub monte_carlo: u64,
    pub adj_method: AdjustMethod,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlottedCandidate {
    pub id: String,
    pub log2_fc: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results {
    pub significant: u64,
    pub plotted: Vec<PlottedCandidate>,
    pub grid_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransientV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub analysis: AnalysisParams,
    pub results: Results,
}

impl TransientV1 {
    pub fn empty(tool_version: &str, algorithm: Algorithm, adj_method: AdjustMethod) -> Self {
        Self {
            tool: "kira-transient".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                rows: 0,
                time_points: 0,
                replicates: 0,
            },
            analysis: AnalysisParams {
                algorithm,
                monte_carlo: 0,
                adj_method,
                seed: 0,
            },
            results: Results {
                significant: 0,
                plotted: Vec::new(),
                grid_path: None,
            },
        }
    }
}
