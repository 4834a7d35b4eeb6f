//! Scripted doubles for the listing traits
//!
//! A [`ScriptedFactory`] maps each region to a list of [`Step`]s. Every call
//! to `list_stacks` on a lister bound to that region consumes the next step.
//! Listers are rebuilt from the script on every bind, so repeated searches
//! see identical data.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use cfnfind_common::{ClientFactory, CredentialLoader, ListedStack, StackLister, StackPage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted response to a `list_stacks` call
#[derive(Debug, Clone)]
pub enum Step {
    /// Return this page
    Page(StackPage),
    /// Fail with this message
    Fail(String),
    /// Sleep, then return this page
    Slow(Duration, StackPage),
}

/// Shorthand for a listed stack
pub fn listed(name: &str, status: &str) -> ListedStack {
    ListedStack::new(name, status)
}

/// Shorthand for a page of `(name, status)` pairs
pub fn page(stacks: &[(&str, &str)], next_token: Option<&str>) -> StackPage {
    StackPage {
        stacks: stacks.iter().map(|(n, s)| listed(n, s)).collect(),
        next_token: next_token.map(str::to_string),
    }
}

type CallLog = Arc<Mutex<HashMap<String, Vec<Option<String>>>>>;

/// Client factory whose regions replay fixed scripts.
///
/// Regions without a script return a single empty page.
#[derive(Clone, Default)]
pub struct ScriptedFactory {
    scripts: HashMap<String, Vec<Step>>,
    calls: CallLog,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `region` with an arbitrary step sequence
    pub fn region(mut self, region: &str, steps: Vec<Step>) -> Self {
        self.scripts.insert(region.to_string(), steps);
        self
    }

    /// Script `region` with one final page of `(name, status)` pairs
    pub fn single_page(self, region: &str, stacks: &[(&str, &str)]) -> Self {
        self.region(region, vec![Step::Page(page(stacks, None))])
    }

    /// Script `region` to fail on its first call
    pub fn failing(self, region: &str, message: &str) -> Self {
        self.region(region, vec![Step::Fail(message.to_string())])
    }

    /// Continuation tokens passed to `region`, one entry per call
    pub fn calls(&self, region: &str) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .get(region)
            .cloned()
            .unwrap_or_default()
    }

    /// Total `list_stacks` calls across all regions
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().map(Vec::len).sum()
    }
}

impl ClientFactory for ScriptedFactory {
    fn bind_region(&self, region: &str) -> Box<dyn StackLister> {
        let steps = self
            .scripts
            .get(region)
            .cloned()
            .unwrap_or_else(|| vec![Step::Page(StackPage::default())]);

        Box::new(ScriptedLister {
            region: region.to_string(),
            steps,
            position: Mutex::new(0),
            calls: Arc::clone(&self.calls),
        })
    }
}

struct ScriptedLister {
    region: String,
    steps: Vec<Step>,
    position: Mutex<usize>,
    calls: CallLog,
}

#[async_trait]
impl StackLister for ScriptedLister {
    async fn list_stacks(&self, next_token: Option<String>) -> Result<StackPage> {
        self.calls
            .lock()
            .unwrap()
            .entry(self.region.clone())
            .or_default()
            .push(next_token);

        let step = {
            let mut position = self.position.lock().unwrap();
            let step = self.steps.get(*position).cloned();
            *position += 1;
            step
        };

        match step {
            Some(Step::Page(page)) => Ok(page),
            Some(Step::Fail(message)) => Err(anyhow!(message)),
            Some(Step::Slow(delay, page)) => {
                tokio::time::sleep(delay).await;
                Ok(page)
            }
            None => Err(anyhow!("script for {} exhausted", self.region)),
        }
    }
}

/// Credential loader that always hands out the same factory
pub struct StaticCredentials {
    factory: Arc<dyn ClientFactory>,
    profiles: Mutex<Vec<String>>,
}

impl StaticCredentials {
    pub fn new(factory: impl ClientFactory + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            profiles: Mutex::new(Vec::new()),
        }
    }

    /// Profiles passed to `load`, in call order
    pub fn loaded_profiles(&self) -> Vec<String> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialLoader for StaticCredentials {
    async fn load(&self, profile: &str) -> Result<Arc<dyn ClientFactory>> {
        self.profiles.lock().unwrap().push(profile.to_string());
        Ok(Arc::clone(&self.factory))
    }
}

/// Credential loader that always fails
pub struct FailingCredentials {
    message: String,
}

impl FailingCredentials {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CredentialLoader for FailingCredentials {
    async fn load(&self, profile: &str) -> Result<Arc<dyn ClientFactory>> {
        Err(anyhow!("{} (profile '{}')", self.message, profile))
    }
}
