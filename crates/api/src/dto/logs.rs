use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct LogsQuery {
    pub limit: Option<usize>,
}
