//! Multi-provider fan-out and fan-in. One dispatch issues every provider
//! call concurrently, waits for all of them to settle (never first-wins),
//! and always comes back with displayable text: a synthesized composite when
//! anything succeeded, canned local knowledge otherwise.

use crate::config::ApiKeys;
use crate::context::QueryContext;
use crate::knowledge;
use crate::prompts;
use crate::providers::{
    DeepseekProvider, GoogleProvider, OpenAiProvider, ProviderResult, TextProvider,
    DEEPSEEK_BASE_URL, GOOGLE_BASE_URL, OPENAI_BASE_URL,
};
use crate::synthesis::{self, Solution};
use futures_util::future::join_all;
use std::time::Duration;
use tracing::{debug, info, warn};

const BATCH_TIMEOUT: Duration = Duration::from_secs(45);

/// Owns the provider handles and the configured/unconfigured verdict for
/// the session. Built once per process and shared by reference.
pub struct AiBridge {
    providers: Vec<Box<dyn TextProvider>>,
    configured: bool,
    batch_timeout: Duration,
}

impl AiBridge {
    pub fn new(keys: &ApiKeys) -> Self {
        let providers: Vec<Box<dyn TextProvider>> = vec![
            Box::new(DeepseekProvider::new(DEEPSEEK_BASE_URL, &keys.deepseek)),
            Box::new(OpenAiProvider::new(OPENAI_BASE_URL, &keys.openai)),
            Box::new(GoogleProvider::new(GOOGLE_BASE_URL, &keys.google)),
        ];
        Self {
            providers,
            configured: keys.is_configured(),
            batch_timeout: BATCH_TIMEOUT,
        }
    }

    /// Custom provider set, mainly for wiring gateways at non-default
    /// endpoints (and for tests).
    pub fn with_providers(providers: Vec<Box<dyn TextProvider>>, configured: bool) -> Self {
        Self {
            providers,
            configured,
            batch_timeout: BATCH_TIMEOUT,
        }
    }

    pub fn batch_timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = timeout;
        self
    }

    /// Issue every provider call concurrently and collect one result per
    /// provider, in provider order. A failing call is downgraded to a
    /// `Failure` result; it never aborts its siblings.
    pub async fn fan_out(&self, system: &str, user: &str) -> Vec<ProviderResult> {
        let calls = self.providers.iter().map(|p| async move {
            match p.generate(system, user).await {
                Ok(content) => ProviderResult::Success {
                    provider: p.id(),
                    content,
                },
                Err(e) => {
                    warn!("{} call failed: {e}", p.id());
                    ProviderResult::Failure {
                        provider: p.id(),
                        error: e.to_string(),
                    }
                }
            }
        });
        join_all(calls).await
    }

    /// The one public entry point: always returns displayable text, never
    /// an error. Unconfigured credentials short-circuit before any network
    /// traffic; zero successes (or a batch timeout) fall back to the local
    /// knowledge base.
    pub async fn dispatch(&self, query: &str, ctx: &QueryContext) -> String {
        if !self.configured {
            info!("credentials not configured, returning setup help");
            return knowledge::configuration_help(&ctx.lang).to_string();
        }

        let system = prompts::master_prompt(ctx);
        let user = prompts::farmer_query(query, ctx);

        debug!("dispatching to {} providers", self.providers.len());
        let results = match tokio::time::timeout(self.batch_timeout, self.fan_out(&system, &user))
            .await
        {
            Ok(results) => results,
            Err(_) => {
                warn!("provider batch timed out after {:?}", self.batch_timeout);
                return knowledge::local_solution(query, &ctx.lang);
            }
        };

        let total = results.len();
        let successes: Vec<Solution> = results
            .into_iter()
            .filter_map(|r| match r {
                ProviderResult::Success { provider, content } => {
                    Some(Solution { provider, content })
                }
                ProviderResult::Failure { .. } => None,
            })
            .collect();
        info!("{}/{} providers responded", successes.len(), total);

        if successes.is_empty() {
            return knowledge::local_solution(query, &ctx.lang);
        }
        synthesis::synthesize(&successes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ProviderError, ProviderId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted provider: returns a fixed outcome and counts invocations.
    struct StubProvider {
        id: ProviderId,
        reply: Result<String, u16>,
        delay: Duration,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn ok(id: ProviderId, content: &str) -> Self {
            Self {
                id,
                reply: Ok(content.to_string()),
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(id: ProviderId, status: u16) -> Self {
            Self {
                id,
                reply: Err(status),
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn slow(id: ProviderId, delay: Duration) -> Self {
            Self {
                id,
                reply: Ok("too late".to_string()),
                delay,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl TextProvider for StubProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.delay > Duration::ZERO {
                tokio::time::sleep(self.delay).await;
            }
            match &self.reply {
                Ok(content) => Ok(content.clone()),
                Err(status) => Err(ProviderError::Status(*status)),
            }
        }
    }

    fn ctx(lang: &str) -> QueryContext {
        QueryContext::new(lang, "rainy")
    }

    #[tokio::test]
    async fn unconfigured_bridge_makes_no_calls() {
        let stub = StubProvider::ok(ProviderId::Deepseek, "hello");
        let calls = stub.calls.clone();
        let bridge = AiBridge::with_providers(vec![Box::new(stub)], false);

        let reply = bridge.dispatch("anything", &ctx("en")).await;

        assert_eq!(reply, knowledge::configuration_help("en"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unconfigured_help_respects_language() {
        let bridge = AiBridge::with_providers(vec![], false);
        let reply = bridge.dispatch("anything", &ctx("sn")).await;
        assert_eq!(reply, knowledge::configuration_help("sn"));
    }

    #[tokio::test]
    async fn failure_is_isolated_from_siblings() {
        let bridge = AiBridge::with_providers(
            vec![
                Box::new(StubProvider::ok(ProviderId::Deepseek, "reply a")),
                Box::new(StubProvider::failing(ProviderId::Openai, 500)),
                Box::new(StubProvider::ok(ProviderId::Google, "reply c")),
            ],
            true,
        );

        let results = bridge.fan_out("s", "u").await;
        assert_eq!(results.len(), 3);

        assert!(results[0].is_success());
        match &results[1] {
            ProviderResult::Failure { provider, error } => {
                assert_eq!(*provider, ProviderId::Openai);
                assert_eq!(error, "HTTP 500");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(results[2].is_success());
    }

    #[tokio::test]
    async fn all_failures_fall_back_to_local_knowledge() {
        let bridge = AiBridge::with_providers(
            vec![
                Box::new(StubProvider::failing(ProviderId::Deepseek, 500)),
                Box::new(StubProvider::failing(ProviderId::Openai, 502)),
                Box::new(StubProvider::failing(ProviderId::Google, 403)),
            ],
            true,
        );

        let reply = bridge.dispatch("my maize leaves are yellow", &ctx("en")).await;
        assert_eq!(reply, knowledge::local_solution("my maize leaves are yellow", "en"));
        assert!(reply.contains("Maize Yellow Leaves"));
    }

    #[tokio::test]
    async fn all_failures_use_shona_fallback_for_sn() {
        let bridge = AiBridge::with_providers(
            vec![Box::new(StubProvider::failing(ProviderId::Deepseek, 500))],
            true,
        );

        let reply = bridge.dispatch("fall armyworm treatment", &ctx("sn")).await;
        assert_eq!(reply, knowledge::local_solution("fall armyworm treatment", "sn"));
        assert!(reply.contains("Kupedza Fall Armyworm"));
    }

    #[tokio::test]
    async fn batch_timeout_is_treated_as_total_failure() {
        let bridge = AiBridge::with_providers(
            vec![Box::new(StubProvider::slow(
                ProviderId::Deepseek,
                Duration::from_secs(30),
            ))],
            true,
        )
        .batch_timeout(Duration::from_millis(50));

        let reply = bridge.dispatch("fall armyworm treatment", &ctx("en")).await;
        assert_eq!(reply, knowledge::local_solution("fall armyworm treatment", "en"));
    }

    #[tokio::test]
    async fn partial_success_synthesizes_composite() {
        let bridge = AiBridge::with_providers(
            vec![
                Box::new(StubProvider::failing(ProviderId::Deepseek, 500)),
                Box::new(StubProvider::ok(
                    ProviderId::Openai,
                    "**🎯 Problem Analysis**\nNitrogen deficiency.\n\n**🚀 Immediate Solutions**\n• Top dress now\n",
                )),
            ],
            true,
        );

        let reply = bridge.dispatch("my maize leaves are yellow", &ctx("en")).await;
        assert!(reply.contains("Nitrogen deficiency."));
        assert!(reply.contains("• OPENAI AI\n"));
        assert!(!reply.contains("• DEEPSEEK AI\n"));
    }

    #[tokio::test]
    async fn dispatch_waits_for_every_provider() {
        // The slow-but-in-budget provider still contributes.
        let bridge = AiBridge::with_providers(
            vec![
                Box::new(StubProvider::ok(ProviderId::Deepseek, "fast reply")),
                Box::new(StubProvider {
                    id: ProviderId::Google,
                    reply: Ok("slow reply".to_string()),
                    delay: Duration::from_millis(100),
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            ],
            true,
        );

        let reply = bridge.dispatch("anything", &ctx("en")).await;
        assert!(reply.contains("• DEEPSEEK AI\n"));
        assert!(reply.contains("• GOOGLE AI\n"));
    }
}
