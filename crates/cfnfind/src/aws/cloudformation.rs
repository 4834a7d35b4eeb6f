//! CloudFormation implementation of the listing traits

use crate::aws::context::AwsContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use cfnfind_common::{ClientFactory, CredentialLoader, ListedStack, StackLister, StackPage};
use std::sync::Arc;
use tracing::debug;

/// `DescribeStacks` lister bound to one region
pub struct CloudFormationLister {
    client: Client,
    region: String,
}

impl CloudFormationLister {
    /// Create a lister for `region` from a pre-loaded AWS context
    pub fn from_context(ctx: &AwsContext, region: &str) -> Self {
        Self {
            client: ctx.cloudformation_client(region),
            region: region.to_string(),
        }
    }
}

#[async_trait]
impl StackLister for CloudFormationLister {
    async fn list_stacks(&self, next_token: Option<String>) -> Result<StackPage> {
        let output = self
            .client
            .describe_stacks()
            .set_next_token(next_token)
            .send()
            .await
            .context("Failed to describe stacks")?;

        let mut stacks = Vec::with_capacity(output.stacks().len());
        for stack in output.stacks() {
            let Some(name) = stack.stack_name() else {
                debug!(region = %self.region, stack_id = ?stack.stack_id(), "Skipping stack without a name");
                continue;
            };
            let status = stack
                .stack_status()
                .map(|s| s.as_str())
                .unwrap_or_default();
            stacks.push(ListedStack::new(name, status));
        }

        Ok(StackPage {
            stacks,
            next_token: output.next_token().map(|t| t.to_string()),
        })
    }
}

/// Binds CloudFormation listers to regions using one shared context
#[derive(Debug, Clone)]
pub struct CloudFormationFactory {
    ctx: AwsContext,
}

impl CloudFormationFactory {
    pub fn new(ctx: AwsContext) -> Self {
        Self { ctx }
    }
}

impl ClientFactory for CloudFormationFactory {
    fn bind_region(&self, region: &str) -> Box<dyn StackLister> {
        Box::new(CloudFormationLister::from_context(&self.ctx, region))
    }
}

/// Loads profile credentials through the AWS SDK's default chain
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsCredentialLoader;

#[async_trait]
impl CredentialLoader for AwsCredentialLoader {
    async fn load(&self, profile: &str) -> Result<Arc<dyn ClientFactory>> {
        let ctx = AwsContext::with_profile(profile).await?;
        Ok(Arc::new(CloudFormationFactory::new(ctx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_list_first_page() {
        let profile = cfnfind_test_utils::aws::get_test_profile();
        let factory = AwsCredentialLoader.load(&profile).await.unwrap();
        let lister = factory.bind_region("us-east-1");

        let page = lister.list_stacks(None).await.unwrap();
        for stack in &page.stacks {
            assert!(!stack.name.is_empty());
        }
    }
}
