use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CreateListRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub items: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
pub struct AppendRequest {
    pub url: Option<String>,
    pub items: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
pub struct ReplaceRequest {
    pub url: String,
}

#[derive(Deserialize, Debug)]
pub struct RemoveDomainRequest {
    pub domain: String,
}

#[derive(Deserialize, Debug)]
pub struct ItemsQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub q: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ItemsResponse {
    pub total: usize,
    pub items: Vec<String>,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Deserialize, Debug)]
pub struct ValidateRequest {
    pub url: String,
}

#[derive(Serialize, Debug)]
pub struct ValidateResponse {
    pub count: usize,
    pub sample: Vec<String>,
}
