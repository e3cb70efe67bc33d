#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use warden_dns_application::ports::DevicePolicyRepository;
use warden_dns_domain::CoreError;

/// Fixed device → lists mapping for end-to-end tests.
pub struct StaticPolicyRepository {
    policies: HashMap<String, Vec<String>>,
}

impl StaticPolicyRepository {
    pub fn new(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let policies = entries
            .into_iter()
            .map(|(device, lists)| {
                (
                    device.to_string(),
                    lists.into_iter().map(String::from).collect(),
                )
            })
            .collect();
        Self { policies }
    }
}

#[async_trait]
impl DevicePolicyRepository for StaticPolicyRepository {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, CoreError> {
        Ok(self.policies.get(device_id).cloned().unwrap_or_default())
    }
}
