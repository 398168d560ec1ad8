use crate::domain::model::FlashPlan;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn message(&self) -> Option<&str>;
    fn message_file(&self) -> Option<&str>;
    fn dot_length(&self) -> Result<Duration>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Additional or overriding code table entries, keyed by a single character.
    fn extra_codes(&self) -> Option<&BTreeMap<String, String>> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, message: String) -> Result<FlashPlan>;
    async fn load(&self, plan: &FlashPlan) -> Result<Vec<String>>;
}
